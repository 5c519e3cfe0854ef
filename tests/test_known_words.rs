/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Exact code words for the first few values of every coding, and the
//! concatenation properties that follow from prefix-freedom.

use codings::prelude::*;

fn encoded_bits<C: Coding>(coding: &C, values: &[u32]) -> (Vec<u8>, usize) {
    let mut writer = MemBitWriter::new();
    let mut written = 0;
    for &value in values {
        written += coding.encode_u32(&mut writer, value).unwrap();
    }
    (writer.into_bytes().unwrap(), written)
}

fn bit_string(bytes: &[u8], len: usize) -> String {
    (0..len)
        .map(|i| {
            if (bytes[i / 8] >> (7 - i % 8)) & 1 != 0 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

#[test]
fn test_elias_delta_sequence() {
    let (bytes, len) = encoded_bits(&EliasDeltaCoding, &[0, 1, 2, 3, 4]);
    assert_eq!(bit_string(&bytes, len), "1010001010110001101");
}

#[test]
fn test_elias_omega_sequence() {
    let (bytes, len) = encoded_bits(&EliasOmegaCoding, &[0, 1, 2, 3, 4]);
    assert_eq!(bit_string(&bytes, len), "0100110101000101010");
}

#[test]
fn test_fibonacci_sequence() {
    let (bytes, len) = encoded_bits(&FibonacciCoding, &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(bit_string(&bytes, len), "1101100111011000111001101011000011");
}

#[test]
fn test_unary_sequence() {
    let (bytes, len) = encoded_bits(&UnaryCoding::ZERO_TERMINATED, &[0, 1, 2, 3, 4]);
    assert_eq!(bit_string(&bytes, len), "010110111011110");
}

#[test]
fn test_truncated_binary_alphabet_5() {
    let (bytes, len) = encoded_bits(&TruncatedBinaryCoding::new(5), &[0, 1, 2, 3, 4]);
    assert_eq!(bit_string(&bytes, len), "000110110111");
}

#[test]
fn test_golomb_known_words() {
    for (value, divisor, expected) in [
        (10, 5, "11000"),
        (4, 5, "0111"),
        (4, 4, "1000"),
        (4, 3, "1010"),
        (4, 2, "1100"),
        (4, 1, "11110"),
    ] {
        let (bytes, len) = encoded_bits(&GolombCoding::new(divisor), &[value]);
        assert_eq!(
            bit_string(&bytes, len),
            expected,
            "for value {} divisor {}",
            value,
            divisor
        );
    }
}

#[test]
fn test_signed_interleaving_bits() {
    // signed 0, 1, -1, 2, -2 produce the bits of positive 0, 1, 2, 3, 4
    let coding = ExtendedCoding::new(EliasDeltaCoding);
    let mut writer = MemBitWriter::new();
    for value in [0, 1, -1, 2, -2] {
        coding.encode_i32(&mut writer, value).unwrap();
    }
    let bytes = writer.into_bytes().unwrap();
    assert_eq!(bit_string(&bytes, 19), "1010001010110001101");
}

/// A concatenation of code words from different codings decodes
/// deterministically with no framing between values.
#[test]
fn test_mixed_concatenation() {
    let golomb = GolombCoding::new(4);
    let mut writer = MemBitWriter::new();
    EliasDeltaCoding.encode_u32(&mut writer, 17).unwrap();
    FibonacciCoding.encode_u32(&mut writer, 99).unwrap();
    golomb.encode_u32(&mut writer, 5).unwrap();
    EliasOmegaCoding.encode_u32(&mut writer, 0).unwrap();
    UnaryCoding::ONE_TERMINATED.encode_u32(&mut writer, 3).unwrap();
    let bytes = writer.into_bytes().unwrap();

    let mut reader = MemBitReader::new(&bytes);
    assert_eq!(EliasDeltaCoding.decode_u32(&mut reader).unwrap(), 17);
    assert_eq!(FibonacciCoding.decode_u32(&mut reader).unwrap(), 99);
    assert_eq!(golomb.decode_u32(&mut reader).unwrap(), 5);
    assert_eq!(EliasOmegaCoding.decode_u32(&mut reader).unwrap(), 0);
    assert_eq!(UnaryCoding::ONE_TERMINATED.decode_u32(&mut reader).unwrap(), 3);
}

/// The bit count reported by every encoder matches the cursor movement it
/// caused.
#[test]
fn test_reported_lengths_match_cursor() {
    let codings: Vec<CodeKind> = vec![
        CodeKind::EliasDelta,
        CodeKind::EliasOmega,
        CodeKind::Fibonacci,
        CodeKind::Unary {
            one_terminated: true,
        },
        CodeKind::Golomb { divisor: 7 },
        CodeKind::Rice { log2_divisor: 3 },
    ];
    for kind in codings {
        let mut writer = MemBitWriter::new();
        let mut reported = 0;
        for value in 0..500u32 {
            let before = writer.bit_len();
            let written = kind.encode_u32(&mut writer, value).unwrap();
            assert_eq!(writer.bit_len() - before, written as u64, "for {:?}", kind);
            reported += written as u64;
        }
        assert_eq!(writer.bit_len(), reported);
    }
}
