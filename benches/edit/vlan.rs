use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rpkt_edit::ether::*;
use rpkt_edit::vlan::*;
use rpkt_edit::Pbuf;

pub fn b(c: &mut Criterion) {
    c.bench_function("push_pop_vlan", |b| {
        let mut pbuf = Pbuf::new();
        compose_ethernet(
            &mut pbuf,
            EtherAddr([0x00, 0x0b, 0x86, 0x64, 0x8b, 0xa0]),
            EtherAddr([0x00, 0x50, 0x56, 0xae, 0x76, 0xf5]),
            EtherType::IPV4,
            46,
        )
        .fill(0);

        b.iter(|| {
            push_vlan(black_box(&mut pbuf), VlanTci::new(0, 100));
            pop_vlan(black_box(&mut pbuf));
        })
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
