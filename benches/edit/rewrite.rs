use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rpkt_edit::ether::parse_hex_frame;
use rpkt_edit::ipv4::*;
use rpkt_edit::udp::*;
use rpkt_edit::{Layers, Pbuf, PktBuf};

// UDP/IPv4 192.168.1.10:5353 -> 224.0.0.251:5353 with valid checksums.
const FRAME: &str = "000b86648ba0005056ae76f508004500002c00004000ff11d912c0a8010a\
                     e00000fb14e914e90018f9fc202122232425262728292a2b2c2d2e2f";

fn udp_frame() -> Pbuf {
    let mut pbuf = parse_hex_frame(FRAME).unwrap();
    *pbuf.layers_mut() = Layers {
        l2: Some(0),
        l3: Some(14),
        l4: Some(34),
        l7: Some(42),
    };
    pbuf
}

pub fn b(c: &mut Criterion) {
    c.bench_function("set_ipv4", |b| {
        let mut pbuf = udp_frame();
        let addrs = [Ipv4Addr::new(192, 168, 1, 10), Ipv4Addr::new(10, 0, 0, 1)];
        let mut i = 0;
        b.iter(|| {
            i ^= 1;
            set_ipv4(
                black_box(&mut pbuf),
                addrs[i],
                Ipv4Addr::new(224, 0, 0, 251),
                0,
                255,
            );
        })
    });

    c.bench_function("set_udp_ports", |b| {
        let mut pbuf = udp_frame();
        let ports = [5353, 40000];
        let mut i = 0;
        b.iter(|| {
            i ^= 1;
            set_udp_ports(black_box(&mut pbuf), ports[i], 5353);
        })
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
