/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use codings::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const VALUES: usize = 100_000;

/// Small values with a heavy-ish tail, the typical input of a universal
/// coding.
fn gen_data(n: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..n)
        .map(|_| {
            let magnitude = rng.gen_range(0..16);
            rng.gen_range(0..2u64 << magnitude)
        })
        .collect()
}

fn bench_universal(c: &mut Criterion) {
    let data = gen_data(VALUES);
    for kind in [
        CodeKind::EliasDelta,
        CodeKind::EliasOmega,
        CodeKind::Fibonacci,
        CodeKind::Golomb { divisor: 5 },
        CodeKind::Rice { log2_divisor: 4 },
    ] {
        c.bench_function(&format!("{:?}: write", kind), |b| {
            b.iter(|| {
                let mut writer = MemBitWriter::with_capacity(VALUES * 4);
                for &value in &data {
                    black_box(kind.encode_u64(&mut writer, value).unwrap());
                }
            })
        });

        let mut writer = MemBitWriter::new();
        for &value in &data {
            kind.encode_u64(&mut writer, value).unwrap();
        }
        let bytes = writer.into_bytes().unwrap();

        c.bench_function(&format!("{:?}: read", kind), |b| {
            b.iter(|| {
                let mut reader = MemBitReader::new(&bytes);
                for _ in &data {
                    black_box(kind.decode_u64(&mut reader).unwrap());
                }
            })
        });
    }
}

fn bench_huffman(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let data: Vec<u32> = (0..VALUES).map(|_| rng.gen_range(0..256)).collect();
    // start from one so every symbol has a code word
    let mut table = [1u64; 256];
    for &symbol in &data {
        table[symbol as usize] += 1;
    }
    let huffman = HuffmanCoding::from_unordered(&table).unwrap();

    c.bench_function("Huffman: write", |b| {
        b.iter(|| {
            let mut writer = MemBitWriter::with_capacity(VALUES * 2);
            for &symbol in &data {
                black_box(huffman.encode_u32(&mut writer, symbol).unwrap());
            }
        })
    });

    let mut writer = MemBitWriter::new();
    for &symbol in &data {
        huffman.encode_u32(&mut writer, symbol).unwrap();
    }
    let bytes = writer.into_bytes().unwrap();

    c.bench_function("Huffman: read", |b| {
        b.iter(|| {
            let mut reader = MemBitReader::new(&bytes);
            for _ in &data {
                black_box(huffman.decode_u32(&mut reader).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_universal, bench_huffman);
criterion_main!(benches);
