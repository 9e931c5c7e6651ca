//! IPv4 protocol.
//!
//! Netmask arithmetic, masked address formatting and the in-place rewrite of
//! the IPv4 header fields a switch is allowed to modify.

use alloc::string::{String, ToString};
use core::fmt;

pub use core::net::Ipv4Addr;

use crate::checksum_utils::{recalc16, recalc32, udp_finalize};
use crate::tcp::TcpHeader;
use crate::udp::UdpHeader;
use crate::PktBuf;

enum_sim! {
    /// An enum-like type for representing different protocols in IPv4/v6.
    pub struct IpProtocol (u8) {
        /// IP packet payload is ICMP protocol.
        ICMP = 1,

        /// IP packet payload is TCP protocol.
        TCP = 6,

        /// IP packet payload is UDP protocol.
        UDP =  17,

        /// IP packet payload is ICMPv6 protocol.
        ICMPV6 = 58,
    }
}

mod header;
pub use header::{Ipv4Header, IPV4_HEADER_LEN};

/// Whether `mask` is a run of 1-bits from the most significant bit followed
/// only by 0-bits.
#[inline]
pub fn ipv4_is_cidr(mask: Ipv4Addr) -> bool {
    let x = !u32::from(mask);
    x & x.wrapping_add(1) == 0
}

/// The prefix length of a CIDR netmask.
///
/// # Panics
/// Panics if `mask` is not a CIDR netmask.
#[inline]
pub fn ipv4_cidr_bit_count(mask: Ipv4Addr) -> u32 {
    assert!(ipv4_is_cidr(mask), "{} is not a cidr netmask", mask);
    32 - u32::from(mask).trailing_zeros()
}

/// The netmask with the `n` leading bits set.
///
/// # Panics
/// Panics if `n` exceeds 32.
#[inline]
pub fn ipv4_create_mask(n: u32) -> Ipv4Addr {
    assert!(n <= 32);
    Ipv4Addr::from(u32::MAX.checked_shl(32 - n).unwrap_or(0))
}

/// Displays an address followed by its netmask.
///
/// An all-ones mask is omitted, a CIDR mask is written as `/<prefix length>`
/// and any other mask in dotted-quad form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Masked {
    /// The address.
    pub addr: Ipv4Addr,
    /// The netmask.
    pub mask: Ipv4Addr,
}

impl fmt::Display for Ipv4Masked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addr)?;
        if self.mask != Ipv4Addr::BROADCAST {
            if ipv4_is_cidr(self.mask) {
                write!(f, "/{}", ipv4_cidr_bit_count(self.mask))?;
            } else {
                write!(f, "/{}", self.mask)?;
            }
        }
        Ok(())
    }
}

/// Format `addr` with `mask`, see [`Ipv4Masked`].
pub fn format_ipv4_masked(addr: Ipv4Addr, mask: Ipv4Addr) -> String {
    Ipv4Masked { addr, mask }.to_string()
}

/// Rewrite the source and destination addresses, the ToS and the TTL of the
/// IPv4 header at `l3`.
///
/// Only fields that change are written. Each change is folded into the IPv4
/// header checksum. Address changes are also folded into the TCP or UDP
/// checksum at `l4` when `l7` is set, since the transport pseudo-header
/// covers the addresses. A zero UDP checksum stays zero.
///
/// # Panics
/// Panics if `l3` is unset. The markers must locate a complete IPv4 header,
/// and a complete TCP or UDP header when `l7` is set.
pub fn set_ipv4<B: PktBuf>(pkt: &mut B, src: Ipv4Addr, dst: Ipv4Addr, tos: u8, ttl: u8) {
    let layers = *pkt.layers();
    let l3 = match layers.l3 {
        Some(l3) => l3,
        None => panic!("rewriting ipv4 fields without a network layer marker"),
    };

    let (ip_buf, mut l4_buf) = match (layers.l4, layers.l7) {
        (Some(l4), Some(_)) => {
            let (front, back) = pkt.data_mut().split_at_mut(l4);
            (&mut front[l3..], Some(back))
        }
        _ => (&mut pkt.data_mut()[l3..], None),
    };

    let mut ip = Ipv4Header::parse_unchecked(ip_buf);
    let proto = ip.protocol();

    let old_src = ip.src_addr();
    if old_src != src {
        if let Some(l4) = l4_buf.as_deref_mut() {
            update_l4_checksum(proto, l4, old_src, src);
        }
        ip.set_checksum(recalc32(ip.checksum(), u32::from(old_src), u32::from(src)));
        ip.set_src_addr(src);
    }

    let old_dst = ip.dst_addr();
    if old_dst != dst {
        if let Some(l4) = l4_buf.as_deref_mut() {
            update_l4_checksum(proto, l4, old_dst, dst);
        }
        ip.set_checksum(recalc32(ip.checksum(), u32::from(old_dst), u32::from(dst)));
        ip.set_dst_addr(dst);
    }

    // tos is the low byte of the first header word, ttl the high byte of the
    // fifth
    let old_tos = ip.tos();
    if old_tos != tos {
        ip.set_checksum(recalc16(ip.checksum(), old_tos as u16, tos as u16));
        ip.set_tos(tos);
    }

    let old_ttl = ip.ttl();
    if old_ttl != ttl {
        ip.set_checksum(recalc16(
            ip.checksum(),
            (old_ttl as u16) << 8,
            (ttl as u16) << 8,
        ));
        ip.set_ttl(ttl);
    }
}

fn update_l4_checksum(proto: IpProtocol, l4: &mut [u8], old: Ipv4Addr, new: Ipv4Addr) {
    let (old, new) = (u32::from(old), u32::from(new));
    match proto {
        IpProtocol::TCP => {
            let mut tcp = TcpHeader::parse_unchecked(l4);
            tcp.set_checksum(recalc32(tcp.checksum(), old, new));
        }
        IpProtocol::UDP => {
            let mut udp = UdpHeader::parse_unchecked(l4);
            if udp.checksum() != 0 {
                udp.set_checksum(udp_finalize(recalc32(udp.checksum(), old, new)));
            }
        }
        _ => {}
    }
}
