/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Elias ω coding.
//!
//! The ω code pushes the recursion in the representation of the length to
//! its limit. A code word is a concatenation of blocks *b*₀ *b*₁ … *b*ₖ
//! `0`, where each block is a binary string starting with `1`; the value
//! represented by each block, incremented by one, is the number of digits
//! of the following block, and the value of the code word is the value of
//! the last block. Encoding `x = n + 1` thus recursively encodes the digit
//! count of `x` minus one, then writes `x` itself, and the outermost call
//! appends the terminating `0`.
//!
//! In contrast to most presentations of Elias ω coding, the mapping from
//! integers to code words begins at zero, so that 0 → `0`, 1 → `100`, and
//! so on.
//!
//! # References
//!
//! Peter Elias. “Universal codeword sets and representations of the
//! integers”, IEEE Transactions on Information Theory, vol. 21, no. 2,
//! pp. 194-203, March 1975, doi:
//! <https://doi.org/10.1109/TIT.1975.1055349>.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::codes::{Coding, UniversalCoding};
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

/// Elias ω coding. See the [module documentation](self).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliasOmegaCoding;

fn recursive_write<W: BitWrite + ?Sized>(writer: &mut W, x: u64) -> Result<usize> {
    if x <= 1 {
        return Ok(0);
    }
    let size = x.ilog2() + 1;
    Ok(recursive_write(writer, size as u64 - 1)? + writer.write_bits(x, size as usize)?)
}

fn recursive_write_big<W: BitWrite + ?Sized>(writer: &mut W, x: &BigUint) -> Result<usize> {
    if let Some(x) = x.to_u64() {
        return recursive_write(writer, x);
    }
    let size = x.bits();
    Ok(recursive_write(writer, size - 1)? + writer.write_big(x, size)?)
}

impl Coding for EliasOmegaCoding {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        Ok(recursive_write(writer, value as u64 + 1)? + writer.write_bit(false)?)
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        // x = value + 1 would not fit u64
        if value == u64::MAX {
            return self.encode_biguint(writer, &BigUint::from(value));
        }
        Ok(recursive_write(writer, value + 1)? + writer.write_bit(false)?)
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        let x = value + 1u32;
        Ok(recursive_write_big(writer, &x)? + writer.write_bit(false)?)
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        let mut x: u64 = 1;
        loop {
            if !reader.read_bit()? {
                return u32::try_from(x - 1).map_err(|_| Error::ValueTooLarge("u32"));
            }
            if x > 32 {
                return Err(Error::ValueTooLarge("u32"));
            }
            x = (1 << x) | reader.read_bits(x as usize)?;
        }
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        let mut x: u128 = 1;
        loop {
            if !reader.read_bit()? {
                return u64::try_from(x - 1).map_err(|_| Error::ValueTooLarge("u64"));
            }
            if x > 64 {
                return Err(Error::ValueTooLarge("u64"));
            }
            x = (1 << x) | reader.read_bits(x as usize)? as u128;
        }
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        let mut x = BigUint::from(1u32);
        loop {
            if !reader.read_bit()? {
                return Ok(x - 1u32);
            }
            let size = x
                .to_u64()
                .ok_or(Error::InvalidInput("absurd Elias ω block length"))?;
            x = reader.read_big(size)?;
            x.set_bit(size, true);
        }
    }
}

impl UniversalCoding for EliasOmegaCoding {}
