/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use codings::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Clears the exponent of non-finite bit patterns so random doubles stay
/// encodable.
fn finite_f64(bits: u64) -> f64 {
    let value = f64::from_bits(bits);
    if value.is_finite() {
        value
    } else {
        f64::from_bits(bits & !(0x7ff << 52))
    }
}

/// Writes an interleaved stream of code words chosen by a seeded rng,
/// then re-seeds and decodes, checking values and total length.
#[test]
fn test_codes() {
    const N: usize = 50_000;
    let mut r = SmallRng::seed_from_u64(0);
    let mut v = SmallRng::seed_from_u64(1);
    let mut writer = MemBitWriter::new();
    let extended = ExtendedCoding::new(EliasDeltaCoding);

    let mut written_bits: u64 = 0;
    for _ in 0..N {
        match r.gen_range(0..9) {
            0 => {
                for _ in 0..r.gen_range(1..10) {
                    written_bits += UnaryCoding::ZERO_TERMINATED
                        .encode_u32(&mut writer, v.gen_range(0..100))
                        .unwrap() as u64;
                }
            }
            1 => {
                for _ in 0..r.gen_range(1..10) {
                    written_bits += EliasDeltaCoding
                        .encode_u64(&mut writer, v.gen_range(0..u64::MAX))
                        .unwrap() as u64;
                }
            }
            2 => {
                for _ in 0..r.gen_range(1..10) {
                    written_bits += EliasOmegaCoding
                        .encode_u64(&mut writer, v.gen_range(0..u64::MAX))
                        .unwrap() as u64;
                }
            }
            3 => {
                for _ in 0..r.gen_range(1..10) {
                    written_bits += FibonacciCoding
                        .encode_u64(&mut writer, v.gen_range(0..u64::MAX))
                        .unwrap() as u64;
                }
            }
            4 => {
                let max = r.gen_range(1..17);
                for _ in 0..r.gen_range(1..10) {
                    written_bits += TruncatedBinaryCoding::new(max)
                        .encode_u64(&mut writer, v.gen_range(0..max))
                        .unwrap() as u64;
                }
            }
            5 => {
                let divisor = r.gen_range(1..10);
                for _ in 0..r.gen_range(1..10) {
                    written_bits += GolombCoding::new(divisor)
                        .encode_u64(&mut writer, v.gen_range(0..1000))
                        .unwrap() as u64;
                }
            }
            6 => {
                let log2_divisor = r.gen_range(0..4);
                for _ in 0..r.gen_range(1..10) {
                    written_bits += RiceCoding::new(log2_divisor)
                        .encode_u64(&mut writer, v.gen_range(0..1000))
                        .unwrap() as u64;
                }
            }
            7 => {
                for _ in 0..r.gen_range(1..10) {
                    written_bits += extended
                        .encode_i64(&mut writer, v.gen_range(i64::MIN + 1..i64::MAX))
                        .unwrap() as u64;
                }
            }
            8 => {
                for _ in 0..r.gen_range(1..10) {
                    written_bits += extended
                        .encode_f64(&mut writer, finite_f64(v.gen::<u64>()))
                        .unwrap() as u64;
                }
            }
            _ => unreachable!(),
        }
    }
    assert_eq!(written_bits, writer.bit_len());

    let bytes = writer.into_bytes().unwrap();
    let mut reader = MemBitReader::new(&bytes);
    let mut r = SmallRng::seed_from_u64(0);
    let mut v = SmallRng::seed_from_u64(1);

    for _ in 0..N {
        match r.gen_range(0..9) {
            0 => {
                for _ in 0..r.gen_range(1..10) {
                    assert_eq!(
                        v.gen_range(0..100),
                        UnaryCoding::ZERO_TERMINATED
                            .decode_u32(&mut reader)
                            .unwrap()
                    );
                }
            }
            1 => {
                for _ in 0..r.gen_range(1..10) {
                    assert_eq!(
                        v.gen_range(0..u64::MAX),
                        EliasDeltaCoding.decode_u64(&mut reader).unwrap()
                    );
                }
            }
            2 => {
                for _ in 0..r.gen_range(1..10) {
                    assert_eq!(
                        v.gen_range(0..u64::MAX),
                        EliasOmegaCoding.decode_u64(&mut reader).unwrap()
                    );
                }
            }
            3 => {
                for _ in 0..r.gen_range(1..10) {
                    assert_eq!(
                        v.gen_range(0..u64::MAX),
                        FibonacciCoding.decode_u64(&mut reader).unwrap()
                    );
                }
            }
            4 => {
                let max = r.gen_range(1..17);
                for _ in 0..r.gen_range(1..10) {
                    assert_eq!(
                        v.gen_range(0..max),
                        TruncatedBinaryCoding::new(max)
                            .decode_u64(&mut reader)
                            .unwrap()
                    );
                }
            }
            5 => {
                let divisor = r.gen_range(1..10);
                for _ in 0..r.gen_range(1..10) {
                    assert_eq!(
                        v.gen_range(0..1000),
                        GolombCoding::new(divisor).decode_u64(&mut reader).unwrap()
                    );
                }
            }
            6 => {
                let log2_divisor = r.gen_range(0..4);
                for _ in 0..r.gen_range(1..10) {
                    assert_eq!(
                        v.gen_range(0..1000),
                        RiceCoding::new(log2_divisor).decode_u64(&mut reader).unwrap()
                    );
                }
            }
            7 => {
                for _ in 0..r.gen_range(1..10) {
                    assert_eq!(
                        v.gen_range(i64::MIN + 1..i64::MAX),
                        extended.decode_i64(&mut reader).unwrap()
                    );
                }
            }
            8 => {
                for _ in 0..r.gen_range(1..10) {
                    let expected = finite_f64(v.gen::<u64>());
                    assert_eq!(
                        expected.to_bits(),
                        extended.decode_f64(&mut reader).unwrap().to_bits()
                    );
                }
            }
            _ => unreachable!(),
        }
    }
}

/// Length is non-decreasing in the value for the monotone codings.
#[test]
fn test_monotone_code_lengths() {
    fn lengths(encode: impl Fn(&mut NullBitWriter, u64) -> usize) -> Vec<usize> {
        let mut writer = NullBitWriter::new();
        (0..2000).map(|value| encode(&mut writer, value)).collect()
    }

    for lengths in [
        lengths(|w, value| EliasDeltaCoding.encode_u64(w, value).unwrap()),
        lengths(|w, value| EliasOmegaCoding.encode_u64(w, value).unwrap()),
        lengths(|w, value| FibonacciCoding.encode_u64(w, value).unwrap()),
        lengths(|w, value| UnaryCoding::ZERO_TERMINATED.encode_u64(w, value).unwrap()),
    ] {
        assert!(lengths.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

/// All three widths of a universal coding emit the same code words.
#[test]
fn test_widths_agree() {
    use num_bigint::BigUint;

    let values = [0u32, 1, 2, 3, 100, 1000];
    for kind in [
        CodeKind::EliasDelta,
        CodeKind::EliasOmega,
        CodeKind::Fibonacci,
        CodeKind::Unary {
            one_terminated: false,
        },
        CodeKind::Golomb { divisor: 3 },
        CodeKind::Rice { log2_divisor: 2 },
    ] {
        let mut fixed = MemBitWriter::new();
        let mut wide = MemBitWriter::new();
        let mut unbounded = MemBitWriter::new();
        for &value in &values {
            kind.encode_u32(&mut fixed, value).unwrap();
            kind.encode_u64(&mut wide, value as u64).unwrap();
            kind.encode_biguint(&mut unbounded, &BigUint::from(value))
                .unwrap();
        }
        let fixed = fixed.into_bytes().unwrap();
        assert_eq!(fixed, wide.into_bytes().unwrap(), "for {:?}", kind);
        assert_eq!(fixed, unbounded.into_bytes().unwrap(), "for {:?}", kind);

        let mut reader = MemBitReader::new(&fixed);
        for &value in &values {
            assert_eq!(
                kind.decode_biguint(&mut reader).unwrap(),
                BigUint::from(value)
            );
        }
    }
}

/// Unbounded round-trip far beyond the 64-bit range.
#[test]
fn test_unbounded_round_trip() {
    use num_bigint::BigUint;

    let mut v = SmallRng::seed_from_u64(2);
    let values: Vec<BigUint> = (0..50)
        .map(|_| {
            let bits = v.gen_range(1..300);
            let mut value = BigUint::from(0u32);
            for _ in 0..bits {
                value = (value << 1) | BigUint::from(v.gen_range(0..2u32));
            }
            value
        })
        .collect();

    for kind in [
        CodeKind::EliasDelta,
        CodeKind::EliasOmega,
        CodeKind::Fibonacci,
    ] {
        let mut writer = MemBitWriter::new();
        for value in &values {
            kind.encode_biguint(&mut writer, value).unwrap();
        }
        let bytes = writer.into_bytes().unwrap();
        let mut reader = MemBitReader::new(&bytes);
        for value in &values {
            assert_eq!(
                &kind.decode_biguint(&mut reader).unwrap(),
                value,
                "for {:?}",
                kind
            );
        }
    }
}
