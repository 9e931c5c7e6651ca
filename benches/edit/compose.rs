use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rpkt_edit::ether::*;
use rpkt_edit::llc::*;
use rpkt_edit::Pbuf;

const DST: EtherAddr = EtherAddr([0x00, 0x0b, 0x86, 0x64, 0x8b, 0xa0]);
const SRC: EtherAddr = EtherAddr([0x00, 0x50, 0x56, 0xae, 0x76, 0xf5]);

pub fn b(c: &mut Criterion) {
    c.bench_function("compose_ethernet", |b| {
        let mut pbuf = Pbuf::new();
        b.iter(|| {
            let payload = compose_ethernet(
                black_box(&mut pbuf),
                DST,
                SRC,
                EtherType::IPV4,
                black_box(66),
            );
            payload[0] = 0x45;
        })
    });

    c.bench_function("compose_benign_tagged_frame", |b| {
        let mut pbuf = Pbuf::new();
        b.iter(|| {
            compose_benign_tagged_frame(black_box(&mut pbuf), black_box("probe"), 0x0001, SRC);
        })
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
