//! Benchmarks for the design codec

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wardrobe_core::{AppearanceSnapshot, ApplyMask, CustomizeIndex, EquipItem, EquipSlot};
use wardrobe_wire::{Codec, WireVersion};

fn sample() -> (AppearanceSnapshot, ApplyMask) {
    let mut snapshot = AppearanceSnapshot::default();
    for slot in EquipSlot::ALL {
        snapshot.set_item(slot, EquipItem::new(10_000 + slot.index() as u32, 3));
    }
    for index in CustomizeIndex::ALL {
        snapshot.set_customize(index, index.index() as u8);
    }
    (snapshot, ApplyMask::all())
}

fn bench_encode(c: &mut Criterion) {
    let (snapshot, mask) = sample();

    c.bench_function("encode_current", |b| {
        b.iter(|| Codec::encode(black_box(&snapshot), black_box(&mask), WireVersion::CURRENT))
    });
    c.bench_function("encode_v1", |b| {
        b.iter(|| Codec::encode(black_box(&snapshot), black_box(&mask), WireVersion::V1))
    });
}

fn bench_decode(c: &mut Criterion) {
    let (snapshot, mask) = sample();
    let codec = Codec::default();
    let current = Codec::encode(&snapshot, &mask, WireVersion::CURRENT);
    let legacy = Codec::encode(&snapshot, &mask, WireVersion::V2);

    c.bench_function("decode_current", |b| {
        b.iter(|| codec.decode(black_box(&current)))
    });
    c.bench_function("decode_v2", |b| b.iter(|| codec.decode(black_box(&legacy))));
}

fn bench_text_roundtrip(c: &mut Criterion) {
    let (snapshot, mask) = sample();
    let codec = Codec::default();
    let text = Codec::to_text(&snapshot, &mask, WireVersion::CURRENT);

    c.bench_function("text_roundtrip", |b| {
        b.iter(|| {
            let decoded = codec.from_text(black_box(&text)).unwrap();
            black_box(Codec::to_text(&decoded.snapshot, &decoded.mask, decoded.version))
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_text_roundtrip);
criterion_main!(benches);
