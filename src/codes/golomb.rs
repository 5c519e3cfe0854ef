/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Golomb coding.
//!
//! Given a divisor `m`, the Golomb code of `x` is given by `⌊x / m⌋` in
//! [zero-terminated unary](crate::codes::UnaryCoding) followed by the
//! [truncated binary code](crate::codes::TruncatedBinaryCoding) of
//! `x mod m` over the alphabet `[0, m)`.
//!
//! For natural numbers distributed geometrically with base `p`, the
//! optimal code is a Golomb code with [`m = ⌈-log(2 − p) / log(1 −
//! p)⌉`](optimal_divisor).
//!
//! For divisors that are a power of two, better performance can be
//! expected from a [Rice coding](crate::codes::RiceCoding), which produces
//! bit-identical output.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::codes::{Coding, TruncatedBinaryCoding, UnaryCoding, UniversalCoding};
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

/// Returns the optimal divisor for a geometric distribution of base `p`.
pub fn optimal_divisor(p: f64) -> u64 {
    (-(2.0 - p).ln() / (1.0 - p).ln()).ceil() as u64
}

/// Golomb coding with an arbitrary divisor. See the
/// [module documentation](self).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GolombCoding {
    divisor: u64,
    remainder: TruncatedBinaryCoding,
}

impl GolombCoding {
    /// Creates a Golomb coding with the given divisor.
    ///
    /// # Panics
    ///
    /// If `divisor` is zero.
    pub fn new(divisor: u64) -> Self {
        assert!(divisor >= 1, "non-positive divisor");
        Self {
            divisor,
            remainder: TruncatedBinaryCoding::new(divisor),
        }
    }

    /// The divisor of this coding.
    pub fn divisor(&self) -> u64 {
        self.divisor
    }
}

impl Coding for GolombCoding {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        self.encode_u64(writer, value as u64)
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        let quotient = value / self.divisor;
        let remainder = value % self.divisor;
        Ok(UnaryCoding::ZERO_TERMINATED.encode_u64(writer, quotient)?
            + self.remainder.encode_raw_u64(writer, remainder)?)
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        let quotient = value / self.divisor;
        let remainder = (value % self.divisor)
            .to_u64()
            .expect("remainder below a u64 divisor");
        Ok(UnaryCoding::ZERO_TERMINATED.encode_biguint(writer, &quotient)?
            + self.remainder.encode_raw_u64(writer, remainder)?)
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        u32::try_from(self.decode_u64(reader)?).map_err(|_| Error::ValueTooLarge("u32"))
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        let quotient = reader.read_until(false)?;
        let remainder = self.remainder.decode_raw_u64(reader)?;
        quotient
            .checked_mul(self.divisor)
            .and_then(|q| q.checked_add(remainder))
            .ok_or(Error::ValueTooLarge("u64"))
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        let quotient = reader.read_until(false)?;
        let remainder = self.remainder.decode_raw_u64(reader)?;
        Ok(BigUint::from(quotient) * self.divisor + remainder)
    }
}

impl UniversalCoding for GolombCoding {}
