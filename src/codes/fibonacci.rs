/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fibonacci coding.
//!
//! The Fibonacci code of `n` is derived from the Zeckendorf representation
//! of `x = n + 1` over the sequence F₁ = 1, F₂ = 2, F₃ = 3, F₄ = 5, …: the
//! code word has one bit per Fibonacci number up to the largest one used,
//! set if that number participates in the sum, followed by a final `1`
//! bit. Since the Zeckendorf representation never uses two consecutive
//! Fibonacci numbers, the appended `1` forms a unique `11` terminator.
//!
//! In contrast to most presentations of Fibonacci coding, the mapping from
//! integers to code words begins at zero, so that 0 → `11`, 1 → `011`,
//! and so on.
//!
//! The unbounded decoders grow a table of arbitrary-precision Fibonacci
//! numbers one term at a time. To keep coding values free of interior
//! mutability, the table is a separate [`FibonacciTable`] value: the
//! [`Coding`] methods build a fresh one per call, and callers that decode
//! many values can pass a reusable table to
//! [`encode_biguint_with`](FibonacciCoding::encode_biguint_with) and
//! [`decode_biguint_with`](FibonacciCoding::decode_biguint_with). Tables
//! only ever grow.

use num_bigint::BigUint;

use crate::codes::{Coding, UniversalCoding};
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

/// `FIB[i]` is the `i + 1`-th term of the sequence 1, 2, 3, 5, 8, …;
/// `FIB[91]` = 12200160415121876738 is the largest term fitting in a `u64`.
const FIB: [u64; 92] = fib_table();

const fn fib_table() -> [u64; 92] {
    let mut table = [0; 92];
    table[0] = 1;
    table[1] = 2;
    let mut i = 2;
    while i < table.len() {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
}

/// Fibonacci coding. See the [module documentation](self).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FibonacciCoding;

/// A grow-only table of arbitrary-precision Fibonacci numbers, used as
/// scratch state by the unbounded Fibonacci codecs.
#[derive(Debug, Clone)]
pub struct FibonacciTable {
    fibs: Vec<BigUint>,
}

impl Default for FibonacciTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciTable {
    pub fn new() -> Self {
        Self {
            fibs: vec![BigUint::from(1u8), BigUint::from(2u8)],
        }
    }

    /// Index of the largest table entry not exceeding `x`, extending the
    /// table as necessary. `x` must be at least one.
    fn floor_index(&mut self, x: &BigUint) -> usize {
        debug_assert!(*x >= BigUint::from(1u8));
        while self.fibs.last().unwrap() <= x {
            self.grow();
        }
        self.fibs.partition_point(|f| f <= x) - 1
    }

    fn grow(&mut self) {
        let next = &self.fibs[self.fibs.len() - 1] + &self.fibs[self.fibs.len() - 2];
        self.fibs.push(next);
    }

    fn get(&mut self, i: usize) -> &BigUint {
        while i >= self.fibs.len() {
            self.grow();
        }
        &self.fibs[i]
    }
}

/// Zeckendorf encoding shared by the `u32` and `u64` paths; `x` is the
/// value plus one. The code word is at most 93 bits, so it is assembled in
/// a `u128` and written in at most two blocks.
fn encode_offset<W: BitWrite + ?Sized>(writer: &mut W, x: u64) -> Result<usize> {
    debug_assert!(x > 0);
    let fi = FIB.partition_point(|f| *f <= x) - 1;
    let len = fi + 2;

    let mut word: u128 = 1; // terminator
    let mut remainder = x;
    for i in (0..=fi).rev() {
        if remainder >= FIB[i] {
            remainder -= FIB[i];
            word |= 1 << (len - 1 - i);
        }
    }

    if len > 64 {
        writer.write_bits((word >> 64) as u64, len - 64)?;
        writer.write_bits(word as u64, 64)?;
    } else {
        writer.write_bits(word as u64, len)?;
    }
    Ok(len)
}

/// Reads Zeckendorf bits until the `11` terminator, accumulating the sum
/// of the selected Fibonacci numbers. A selected index above `max_index`
/// reports the value as too large for the caller's width.
fn decode_terminated<R: BitRead + ?Sized>(
    reader: &mut R,
    max_index: usize,
    width: &'static str,
) -> Result<u128> {
    let mut last = false;
    let mut x: u128 = 0;
    let mut i = 0;
    loop {
        let bit = reader.read_bit()?;
        if bit {
            if last {
                return Ok(x);
            }
            if i > max_index {
                return Err(Error::ValueTooLarge(width));
            }
            x += FIB[i] as u128;
        }
        last = bit;
        i += 1;
    }
}

impl FibonacciCoding {
    /// Encode with an explicit scratch table; see the
    /// [module documentation](self).
    pub fn encode_biguint_with<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
        table: &mut FibonacciTable,
    ) -> Result<usize> {
        let x = value + 1u32;
        let fi = table.floor_index(&x);
        let len = fi + 2;

        let mut used = vec![false; fi + 1];
        let mut remainder = x;
        for i in (0..=fi).rev() {
            if &remainder >= table.get(i) {
                remainder -= table.get(i);
                used[i] = true;
            }
        }

        for bit in used {
            writer.write_bit(bit)?;
        }
        writer.write_bit(true)?;
        Ok(len)
    }

    /// Decode with an explicit scratch table; see the
    /// [module documentation](self).
    pub fn decode_biguint_with<R: BitRead + ?Sized>(
        &self,
        reader: &mut R,
        table: &mut FibonacciTable,
    ) -> Result<BigUint> {
        let mut last = false;
        let mut x = BigUint::ZERO;
        let mut i = 0;
        loop {
            let bit = reader.read_bit()?;
            if bit {
                if last {
                    return Ok(x - 1u32);
                }
                x += table.get(i);
            }
            last = bit;
            i += 1;
        }
    }
}

impl Coding for FibonacciCoding {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        encode_offset(writer, value as u64 + 1)
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        // x = value + 1 would not fit u64
        if value == u64::MAX {
            return self.encode_biguint(writer, &BigUint::from(value));
        }
        encode_offset(writer, value + 1)
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        self.encode_biguint_with(writer, value, &mut FibonacciTable::new())
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        // FIB[46] is the smallest term beyond x = 2^32
        let x = decode_terminated(reader, 45, "u32")?;
        u32::try_from(x - 1).map_err(|_| Error::ValueTooLarge("u32"))
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        let x = decode_terminated(reader, 91, "u64")?;
        u64::try_from(x - 1).map_err(|_| Error::ValueTooLarge("u64"))
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        self.decode_biguint_with(reader, &mut FibonacciTable::new())
    }
}

impl UniversalCoding for FibonacciCoding {}
