/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Elias δ coding.
//!
//! The δ code of a natural number `n` is built from `x = n + 1`: let `L`
//! be the number of binary digits of `x`; the code is the unary-prefixed
//! binary representation of `L` (that is, its digit count minus one in
//! zeros, then `L` itself) followed by the binary representation of `x`
//! with the most significant bit removed.
//!
//! In contrast to most presentations of Elias δ coding, the mapping from
//! integers to code words begins at zero, so that 0 → `1`, 1 → `0100`,
//! and so on.

use num_bigint::BigUint;

use crate::codes::{Coding, UniversalCoding};
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

/// Elias δ coding. See the [module documentation](self).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliasDeltaCoding;

/// Shared by the `u32` and `u64` encoders; `x` is the value plus one.
#[inline(always)]
fn encode_offset<W: BitWrite + ?Sized>(writer: &mut W, x: u64) -> Result<usize> {
    debug_assert!(x > 0);
    let size = x.ilog2() + 1;
    let size_len = size.ilog2() + 1;
    Ok(writer.write_repeated(false, (size_len - 1) as u64)?
        + writer.write_bits(size as u64, size_len as usize)?
        + writer.write_bits(x, (size - 1) as usize)?)
}

impl Coding for EliasDeltaCoding {
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
        let x = value + 1u32;
        let size = x.bits();
        let size_len = size.ilog2() + 1;
        Ok(writer.write_repeated(false, (size_len - 1) as u64)?
            + writer.write_bits(size, size_len as usize)?
            + writer.write_big(&x, size - 1)?)
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        let size_len = reader.read_until(true)?;
        if size_len == 0 {
            return Ok(0);
        }
        if size_len > 5 {
            return Err(Error::ValueTooLarge("u32"));
        }
        let size = (1 << size_len) | reader.read_bits(size_len as usize)?;
        match size {
            1..=32 => {
                let x = (1 << (size - 1)) | reader.read_bits(size as usize - 1)?;
                Ok((x - 1) as u32)
            }
            // x = 2^32 is the only 33-digit value in range
            33 => {
                if reader.read_bits(32)? != 0 {
                    return Err(Error::ValueTooLarge("u32"));
                }
                Ok(u32::MAX)
            }
            _ => Err(Error::ValueTooLarge("u32")),
        }
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        let size_len = reader.read_until(true)?;
        if size_len == 0 {
            return Ok(0);
        }
        if size_len > 6 {
            return Err(Error::ValueTooLarge("u64"));
        }
        let size = (1 << size_len) | reader.read_bits(size_len as usize)?;
        match size {
            1..=64 => {
                let x = (1u128 << (size - 1)) | reader.read_bits(size as usize - 1)? as u128;
                Ok((x - 1) as u64)
            }
            // x = 2^64 is the only 65-digit value in range
            65 => {
                if reader.read_bits(64)? != 0 {
                    return Err(Error::ValueTooLarge("u64"));
                }
                Ok(u64::MAX)
            }
            _ => Err(Error::ValueTooLarge("u64")),
        }
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        let size_len = reader.read_until(true)?;
        if size_len == 0 {
            return Ok(BigUint::ZERO);
        }
        if size_len > 63 {
            return Err(Error::InvalidInput("absurd Elias δ length of length"));
        }
        let size = (1 << size_len) | reader.read_bits(size_len as usize)?;
        let mut x = reader.read_big(size - 1)?;
        x.set_bit(size - 1, true);
        Ok(x - 1u32)
    }
}

impl UniversalCoding for EliasDeltaCoding {}
