//! TCP port rewriting and control flags.

use alloc::string::{String, ToString};
use core::fmt;

use crate::checksum_utils::recalc16;
use crate::ether::EtherType;
use crate::ipv4::IpProtocol;
use crate::PktBuf;

mod header;
pub use header::{TcpHeader, TCP_HEADER_LEN};

/// No more data from sender.
pub const TCP_FIN: u8 = 0x01;
/// Synchronize sequence numbers.
pub const TCP_SYN: u8 = 0x02;
/// Reset the connection.
pub const TCP_RST: u8 = 0x04;
/// Push function.
pub const TCP_PSH: u8 = 0x08;
/// Acknowledgment field significant.
pub const TCP_ACK: u8 = 0x10;
/// Urgent pointer field significant.
pub const TCP_URG: u8 = 0x20;
/// ECN echo.
pub const TCP_ECE: u8 = 0x40;
/// Congestion window reduced.
pub const TCP_CWR: u8 = 0x80;

/// Displays TCP control flags the way tcpdump does.
///
/// Each set flag is written as one character, in the order SYN `S`, FIN `F`,
/// PSH `P`, RST `R`, URG `U`, ACK `.`, followed by `[40]` and `[80]` for ECE
/// and CWR. No flag at all is written as `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpFlags(pub u8);

impl fmt::Display for TcpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("none");
        }

        const NAMES: [(u8, &str); 8] = [
            (TCP_SYN, "S"),
            (TCP_FIN, "F"),
            (TCP_PSH, "P"),
            (TCP_RST, "R"),
            (TCP_URG, "U"),
            (TCP_ACK, "."),
            (TCP_ECE, "[40]"),
            (TCP_CWR, "[80]"),
        ];
        for (flag, name) in NAMES {
            if self.0 & flag != 0 {
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

/// Format `flags`, see [`TcpFlags`].
pub fn format_tcp_flags(flags: u8) -> String {
    TcpFlags(flags).to_string()
}

/// The control flags of the TCP header at `l4`.
///
/// `dl_type` and `nw_proto` describe the packet as classified by the caller.
/// Returns 0 unless the packet is IPv4 or IPv6 carrying TCP and `l7` is set.
///
/// # Panics
/// Panics if `l7` is set but `l4` is not.
pub fn tcp_flags<B: PktBuf>(pkt: &B, dl_type: EtherType, nw_proto: IpProtocol) -> u8 {
    let layers = pkt.layers();
    if !matches!(dl_type, EtherType::IPV4 | EtherType::IPV6)
        || nw_proto != IpProtocol::TCP
        || layers.l7.is_none()
    {
        return 0;
    }

    match layers.l4 {
        Some(l4) => TcpHeader::parse_unchecked(&pkt.data()[l4..]).flags(),
        None => panic!("reading tcp flags without a transport layer marker"),
    }
}

/// Rewrite the ports of the TCP header at `l4`, folding each change into the
/// TCP checksum.
///
/// # Panics
/// Panics if `l4` is unset. `l4` must locate a complete TCP header.
pub fn set_tcp_ports<B: PktBuf>(pkt: &mut B, src: u16, dst: u16) {
    let l4 = match pkt.layers().l4 {
        Some(l4) => l4,
        None => panic!("rewriting tcp ports without a transport layer marker"),
    };
    let mut tcp = TcpHeader::parse_unchecked(&mut pkt.data_mut()[l4..]);

    let old_src = tcp.src_port();
    if old_src != src {
        tcp.set_checksum(recalc16(tcp.checksum(), old_src, src));
        tcp.set_src_port(src);
    }

    let old_dst = tcp.dst_port();
    if old_dst != dst {
        tcp.set_checksum(recalc16(tcp.checksum(), old_dst, dst));
        tcp.set_dst_port(dst);
    }
}
