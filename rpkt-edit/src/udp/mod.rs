//! UDP port rewriting.

use crate::checksum_utils::{recalc16, udp_finalize};
use crate::PktBuf;

mod header;
pub use header::{UdpHeader, UDP_HEADER_LEN};

/// Rewrite the ports of the UDP header at `l4`.
///
/// If the datagram carries a checksum, each port change is folded into it and
/// a result of zero is stored as 0xffff. A zero checksum is left at zero and
/// the ports are written directly.
///
/// # Panics
/// Panics if `l4` is unset. `l4` must locate a complete UDP header.
pub fn set_udp_ports<B: PktBuf>(pkt: &mut B, src: u16, dst: u16) {
    let l4 = match pkt.layers().l4 {
        Some(l4) => l4,
        None => panic!("rewriting udp ports without a transport layer marker"),
    };
    let mut udp = UdpHeader::parse_unchecked(&mut pkt.data_mut()[l4..]);

    if udp.checksum() == 0 {
        udp.set_src_port(src);
        udp.set_dst_port(dst);
        return;
    }

    let mut csum = udp.checksum();
    let old_src = udp.src_port();
    if old_src != src {
        csum = recalc16(csum, old_src, src);
        udp.set_src_port(src);
    }
    let old_dst = udp.dst_port();
    if old_dst != dst {
        csum = recalc16(csum, old_dst, dst);
        udp.set_dst_port(dst);
    }
    udp.set_checksum(udp_finalize(csum));
}
