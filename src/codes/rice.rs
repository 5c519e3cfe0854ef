/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Rice coding.
//!
//! Rice codes (AKA Golomb−Rice codes) are [Golomb
//! codes](crate::codes::GolombCoding) whose divisor is a power of two
//! 2*ᵏ*. The restriction makes the code less precise in modeling data with
//! a geometric distribution, but the truncated binary remainder collapses
//! to a plain *k*-bit field, so encoding and decoding need no integer
//! division. The output is bit-identical to that of a Golomb coding with
//! the same divisor.
//!
//! For natural numbers distributed geometrically with base *p*, the
//! optimal *k* is [⌈log₂(ln((√5 + 1)/2) / ln(1 −
//! *p*))⌉](optimal_log2_divisor).
//!
//! # References
//!
//! Robert F. Rice, “[Some practical universal noiseless coding
//! techniques](https://ntrs.nasa.gov/api/citations/19790014634/downloads/19790014634.pdf)”.
//! Jet Propulsion Laboratory, Pasadena, CA, Tech. Rep. JPL-79-22, March
//! 1979.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::codes::{Coding, UnaryCoding, UniversalCoding};
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

/// Returns the optimal value of log₂ of the divisor for a geometric
/// distribution of base `p`.
pub fn optimal_log2_divisor(p: f64) -> u32 {
    ((-((5f64.sqrt() + 1.0) / 2.0).ln() / (-p).ln_1p()).log2()).ceil() as u32
}

/// Rice coding with divisor 2^`log2_divisor`. See the
/// [module documentation](self).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiceCoding {
    log2_divisor: u32,
}

impl RiceCoding {
    /// Creates a Rice coding with divisor `2^log2_divisor`.
    ///
    /// # Panics
    ///
    /// If `log2_divisor` is 64 or greater.
    pub fn new(log2_divisor: u32) -> Self {
        assert!(log2_divisor < 64, "divisor exceeds 64 bits");
        Self { log2_divisor }
    }

    /// Log₂ of the divisor of this coding.
    pub fn log2_divisor(&self) -> u32 {
        self.log2_divisor
    }
}

impl Coding for RiceCoding {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        self.encode_u64(writer, value as u64)
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        let k = self.log2_divisor;
        Ok(UnaryCoding::ZERO_TERMINATED.encode_u64(writer, value >> k)?
            + writer.write_bits(value, k as usize)?)
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        let k = self.log2_divisor;
        let quotient = value >> k;
        let remainder = (value - (&quotient << k))
            .to_u64()
            .expect("remainder below 2^63");
        Ok(UnaryCoding::ZERO_TERMINATED.encode_biguint(writer, &quotient)?
            + writer.write_bits(remainder, k as usize)?)
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        u32::try_from(self.decode_u64(reader)?).map_err(|_| Error::ValueTooLarge("u32"))
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        let k = self.log2_divisor;
        let quotient = reader.read_until(false)?;
        let remainder = reader.read_bits(k as usize)?;
        if k > 0 && quotient > (u64::MAX >> k) {
            return Err(Error::ValueTooLarge("u64"));
        }
        Ok((quotient << k) | remainder)
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        let k = self.log2_divisor;
        let quotient = reader.read_until(false)?;
        let remainder = reader.read_bits(k as usize)?;
        Ok((BigUint::from(quotient) << k) + remainder)
    }
}

impl UniversalCoding for RiceCoding {}
