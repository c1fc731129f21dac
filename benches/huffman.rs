use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use huffman_coding::HuffmanCodec;
use lipsum::lipsum;

fn huffman_encode(c: &mut Criterion) {
    let input = lipsum(2048);
    let input = input.as_bytes();
    let codec = HuffmanCodec::from_data(input).unwrap();

    c.bench_function("huffman encode", |b| {
        b.iter(|| codec.encode(black_box(input)).unwrap())
    });
}

fn huffman_decode(c: &mut Criterion) {
    let input = lipsum(2048);
    let input = input.as_bytes();
    let codec = HuffmanCodec::from_data(input).unwrap();
    let stream = codec.encode(input).unwrap();

    c.bench_function("huffman decode", |b| {
        b.iter(|| codec.decode(black_box(&stream)).unwrap())
    });
}

fn huffman_build(c: &mut Criterion) {
    let input = lipsum(2048);
    let input = input.as_bytes();

    c.bench_function("huffman build", |b| {
        b.iter(|| HuffmanCodec::from_data(black_box(input)).unwrap())
    });
}

criterion_group!(benches, huffman_build, huffman_encode, huffman_decode);
criterion_main!(benches);
