use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smoltcp::wire;

// The same rewrite as `set_ipv4` in the rewrite bench, but recomputing both
// checksums over the whole packet.
fn smol_rewrite(buf: &mut [u8], src: wire::Ipv4Address) {
    let mut ipv4_pkt = wire::Ipv4Packet::new_unchecked(&mut buf[14..]);
    ipv4_pkt.set_src_addr(src);
    ipv4_pkt.fill_checksum();
    let src = wire::IpAddress::from(ipv4_pkt.src_addr());
    let dst = wire::IpAddress::from(ipv4_pkt.dst_addr());

    let mut udp_pkt = wire::UdpPacket::new_unchecked(ipv4_pkt.payload_mut());
    udp_pkt.fill_checksum(&src, &dst);
}

pub fn b(c: &mut Criterion) {
    c.bench_function("smol_rewrite", |b| {
        let mut buf = [0u8; 58];
        buf[12..14].copy_from_slice(&[0x08, 0x00]);
        buf[14..34].copy_from_slice(&[
            0x45, 0x00, 0x00, 0x2c, 0x00, 0x00, 0x40, 0x00, 0xff, 0x11, 0xd9, 0x12, 0xc0, 0xa8,
            0x01, 0x0a, 0xe0, 0x00, 0x00, 0xfb,
        ]);
        buf[34..42].copy_from_slice(&[0x14, 0xe9, 0x14, 0xe9, 0x00, 0x18, 0xf9, 0xfc]);

        let addrs = [
            wire::Ipv4Address([192, 168, 1, 10]),
            wire::Ipv4Address([10, 0, 0, 1]),
        ];
        let mut i = 0;
        b.iter(|| {
            i ^= 1;
            smol_rewrite(black_box(&mut buf[..]), addrs[i]);
        })
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
