/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Truncated binary coding.
//!
//! Truncated binary coding (AKA minimal binary coding) with alphabet size
//! *N* > 0 is an optimal prefix-free code for the first *N* natural
//! numbers with uniform distribution. Let *b* = ⌊log₂ *N*⌋ and *cutoff* =
//! 2*ᵇ*⁺¹ − *N*; then a value *x* < *cutoff* is coded as the binary
//! representation of *x* in *b* bits, and any other value as the binary
//! representation of *x* + *cutoff* in *b* + 1 bits. The code is
//! prefix-free because the *b*-bit and (*b* + 1)-bit regions live in
//! disjoint prefixes.
//!
//! When *N* is a power of two the code degenerates to plain *b*-bit
//! binary, and when *N* = 1 the (only) code word is empty.
//!
//! This coding accepts only values in `[0, N)`; it is the one coding of
//! this crate that is not [universal](crate::codes::UniversalCoding). It
//! is also used for the remainder part of [Golomb
//! codes](crate::codes::GolombCoding).

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::codes::Coding;
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

/// Truncated binary coding over the alphabet `[0, N)`. See the
/// [module documentation](self).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedBinaryCoding {
    size: BigUint,
    /// ⌊log₂ size⌋, the length of the short code words.
    bits: u64,
    /// The alphabet size, or 0 when it does not fit a `u64`.
    size_u64: u64,
    cutoff_u64: u64,
    cutoff_big: BigUint,
}

impl TruncatedBinaryCoding {
    /// Creates a truncated binary coding for the first `size` natural
    /// numbers.
    ///
    /// # Panics
    ///
    /// If `size` is zero.
    pub fn new(size: u64) -> Self {
        Self::with_big(BigUint::from(size))
    }

    /// Creates a truncated binary coding for the first `size` natural
    /// numbers, with an arbitrary-precision alphabet size.
    ///
    /// # Panics
    ///
    /// If `size` is zero.
    pub fn with_big(size: BigUint) -> Self {
        assert!(size >= BigUint::one(), "non-positive alphabet size");
        let bits = size.bits() - 1;
        let cutoff_big = (BigUint::one() << size.bits()) - &size;
        let size_u64 = size.to_u64().unwrap_or(0);
        let cutoff_u64 = if size_u64 > 0 {
            cutoff_big.to_u64().expect("cutoff is at most the size")
        } else {
            0
        };
        Self {
            size,
            bits,
            size_u64,
            cutoff_u64,
            cutoff_big,
        }
    }

    /// The alphabet size.
    pub fn size(&self) -> &BigUint {
        &self.size
    }

    /// Encodes without range checking; used for Golomb remainders, which
    /// are below the divisor by construction. Requires an alphabet fitting
    /// a `u64`.
    #[inline]
    pub(crate) fn encode_raw_u64<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: u64,
    ) -> Result<usize> {
        debug_assert!(self.size_u64 > 0 && value < self.size_u64);
        if value < self.cutoff_u64 {
            writer.write_bits(value, self.bits as usize)
        } else {
            writer.write_bits(value + self.cutoff_u64, self.bits as usize + 1)
        }
    }

    #[inline]
    pub(crate) fn decode_raw_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        debug_assert!(self.size_u64 > 0);
        let value = reader.read_bits(self.bits as usize)?;
        if value < self.cutoff_u64 {
            Ok(value)
        } else {
            Ok(((value << 1) | reader.read_bit()? as u64) - self.cutoff_u64)
        }
    }

    fn encode_raw_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        if *value < self.cutoff_big {
            writer.write_big(value, self.bits)
        } else {
            writer.write_big(&(value + &self.cutoff_big), self.bits + 1)
        }
    }

    fn decode_raw_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        let mut value = reader.read_big(self.bits)?;
        if value < self.cutoff_big {
            return Ok(value);
        }
        value <<= 1;
        if reader.read_bit()? {
            value += 1u32;
        }
        Ok(value - &self.cutoff_big)
    }

    fn check_in_alphabet_u64(&self, value: u64) -> Result<()> {
        if self.size_u64 > 0 && value >= self.size_u64 {
            return Err(Error::ValueOutOfRange("value not below the alphabet size"));
        }
        Ok(())
    }
}

impl Coding for TruncatedBinaryCoding {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        self.encode_u64(writer, value as u64)
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        self.check_in_alphabet_u64(value)?;
        if self.size_u64 > 0 {
            self.encode_raw_u64(writer, value)
        } else {
            self.encode_raw_biguint(writer, &BigUint::from(value))
        }
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        if *value >= self.size {
            return Err(Error::ValueOutOfRange("value not below the alphabet size"));
        }
        if self.size_u64 > 0 {
            self.encode_raw_u64(writer, value.to_u64().expect("value below a u64 size"))
        } else {
            self.encode_raw_biguint(writer, value)
        }
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        u32::try_from(self.decode_u64(reader)?).map_err(|_| Error::ValueTooLarge("u32"))
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        if self.size_u64 > 0 {
            self.decode_raw_u64(reader)
        } else {
            self.decode_raw_biguint(reader)?
                .to_u64()
                .ok_or(Error::ValueTooLarge("u64"))
        }
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        if self.size_u64 > 0 {
            Ok(BigUint::from(self.decode_raw_u64(reader)?))
        } else {
            self.decode_raw_biguint(reader)
        }
    }
}
