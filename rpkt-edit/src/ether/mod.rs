//! Ethernet II frames.
//!
//! This module holds the Ethernet address and type definitions, the
//! [`EtherHeader`] view, and the operations that create Ethernet frames:
//! [`compose_ethernet`] builds a fresh frame into a buffer and
//! [`parse_hex_frame`] decodes one from a hex dump.

use core::fmt;

use crate::error::ParseError;
use crate::vlan::VLAN_HEADER_LEN;
use crate::{Pbuf, PktBuf};

enum_sim! {
    /// An enum-like type for representing Ethertype in Ethernet frame.
    pub struct EtherType (u16) {
        /// Frame payload is Arp protocol.
        ARP =  0x0806,
        /// Frame payload is Ipv4 protocol.
        IPV4 = 0x0800,
        /// Frame payload is Ipv6 protocol.
        IPV6 = 0x86DD,
        /// Frame carries an 802.1Q tag.
        VLAN = 0x8100,
    }
}

/// Type field values below this are 802.3 payload lengths, not Ethertypes.
pub const ETH_TYPE_MIN: u16 = 0x600;

impl EtherType {
    /// Whether the value is an 802.3 length rather than an Ethertype.
    #[inline]
    pub const fn is_length(&self) -> bool {
        self.0 < ETH_TYPE_MIN
    }
}

/// A six-octet Ethernet II address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; 6]);

    /// The all-zero address.
    pub const ZERO: EtherAddr = EtherAddr([0; 6]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> EtherAddr {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        EtherAddr(bytes)
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_broadcast() || self.is_multicast())
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the 'multicast' bit in the OUI is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether the 'locally administered' bit in the OUI is set.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Query whether all the octets are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Parse the text form of an Ethernet address.
    ///
    /// Accepts six hex pairs separated by ':' (`Aa:0b:Cc:11:02:33`), by '-'
    /// (`Aa-0b-Cc-11-02-33`), or not separated at all (`Aa0bCc110233`). Mixed
    /// separators are rejected.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let s = s.as_ref().as_bytes();
        let sep = match s.len() {
            12 => None,
            17 if s[2] == b':' || s[2] == b'-' => Some(s[2]),
            _ => return None,
        };

        let mut result = [0; 6];
        let mut pos = 0;
        for (i, octet) in result.iter_mut().enumerate() {
            if i > 0 {
                if let Some(sep) = sep {
                    if s[pos] != sep {
                        return None;
                    }
                    pos += 1;
                }
            }
            *octet = (hex_digit(s[pos])? << 4) | hex_digit(s[pos + 1])?;
            pos += 2;
        }
        Some(Self(result))
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}

/// Parse the text form of an Ethernet address, see [`EtherAddr::parse_from`].
///
/// Callers that need an address regardless should fall back to
/// [`EtherAddr::ZERO`] on `None`.
#[inline]
pub fn parse_mac<T: AsRef<str>>(s: T) -> Option<EtherAddr> {
    EtherAddr::parse_from(s)
}

mod header;
pub use header::{EtherHeader, ETHER_HEADER_LEN};

/// Compose an Ethernet II frame with a `size`-byte payload into `b`.
///
/// `b` is cleared first. The frame is placed behind `VLAN_HEADER_LEN` bytes of
/// headroom so that a later [`push_vlan`](crate::vlan::push_vlan) does not
/// need to move any data. `l2` is set to the Ethernet header and `l3` to the
/// payload. The returned payload slice is exactly `size` bytes long and its
/// content is unspecified.
pub fn compose_ethernet<'a, B: PktBuf>(
    b: &'a mut B,
    dst: EtherAddr,
    src: EtherAddr,
    ethertype: EtherType,
    size: usize,
) -> &'a mut [u8] {
    b.clear();
    b.reserve(ETHER_HEADER_LEN + VLAN_HEADER_LEN + size);
    b.reserve_front(VLAN_HEADER_LEN);

    let mut eth = EtherHeader::parse_unchecked(b.extend(ETHER_HEADER_LEN));
    eth.set_dst_addr(dst);
    eth.set_src_addr(src);
    eth.set_ethertype(ethertype);

    let layers = b.layers_mut();
    layers.l2 = Some(0);
    layers.l3 = Some(ETHER_HEADER_LEN);

    tracing::trace!(%dst, %src, ethertype = ethertype.raw(), size, "composed ethernet frame");
    b.extend(size)
}

/// Decode a hex dump into an Ethernet frame.
///
/// Each byte is written as two hex digits. Whitespace between bytes is
/// skipped. The returned buffer has `VLAN_HEADER_LEN` bytes of headroom and
/// no layer markers set.
pub fn parse_hex_frame<T: AsRef<str>>(hex: T) -> Result<Pbuf, ParseError> {
    let mut s = hex.as_ref().as_bytes();
    let mut pbuf = Pbuf::with_capacity(VLAN_HEADER_LEN, s.len() / 2);

    loop {
        let skip = s
            .iter()
            .take_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
            .count();
        s = &s[skip..];

        match (s.first().copied().and_then(hex_digit), s.get(1).copied().and_then(hex_digit)) {
            (Some(hi), Some(lo)) => {
                pbuf.extend(1)[0] = (hi << 4) | lo;
                s = &s[2..];
            }
            _ => break,
        }
    }

    if !s.is_empty() {
        tracing::debug!(decoded = pbuf.len(), left = s.len(), "trailing garbage in hex frame");
        return Err(ParseError::TrailingGarbage);
    }
    if pbuf.len() < ETHER_HEADER_LEN {
        tracing::debug!(decoded = pbuf.len(), "hex frame too short for ethernet");
        return Err(ParseError::TooShortForEthernet);
    }
    Ok(pbuf)
}

#[inline]
fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}
