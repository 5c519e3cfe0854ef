/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Unary coding.
//!
//! The unary code of `n` is a run of `n` copies of one bit value followed
//! by a single terminator bit of the opposite value. Which bit terminates
//! the code is a parameter: the [zero-terminated](UnaryCoding::ZERO_TERMINATED)
//! coding writes runs of ones, the
//! [one-terminated](UnaryCoding::ONE_TERMINATED) coding runs of zeros.
//!
//! Unary coding is extremely inefficient for even moderately sized
//! numbers; writing large values could consume huge resources. This
//! implementation refuses values above
//! [`MAX_ENCODABLE`](UnaryCoding::MAX_ENCODABLE), in violation of the
//! [`UniversalCoding`] contract but as a necessary practical limitation.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::codes::{Coding, UniversalCoding};
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

/// Unary coding with a choice of terminator bit. See the
/// [module documentation](self).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnaryCoding {
    terminator: bool,
}

impl UnaryCoding {
    /// The greatest value that may be written by this coding.
    pub const MAX_ENCODABLE: u64 = i32::MAX as u64 - 1;

    /// Code words consist of one bits terminated by a zero.
    pub const ZERO_TERMINATED: UnaryCoding = UnaryCoding { terminator: false };

    /// Code words consist of zero bits terminated by a one.
    pub const ONE_TERMINATED: UnaryCoding = UnaryCoding { terminator: true };

    /// Whether code words are terminated by a one bit.
    pub fn is_terminated_by_one(&self) -> bool {
        self.terminator
    }

    #[inline]
    fn encode_run<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        if value > Self::MAX_ENCODABLE {
            return Err(Error::UnsupportedValue(
                "value exceeds the maximum unary-encodable value",
            ));
        }
        Ok(writer.write_repeated(!self.terminator, value)? + writer.write_bit(self.terminator)?)
    }
}

impl Coding for UnaryCoding {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        self.encode_run(writer, value as u64)
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        self.encode_run(writer, value)
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        let value = value.to_u64().ok_or(Error::UnsupportedValue(
            "value exceeds the maximum unary-encodable value",
        ))?;
        self.encode_run(writer, value)
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        u32::try_from(reader.read_until(self.terminator)?).map_err(|_| Error::ValueTooLarge("u32"))
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        reader.read_until(self.terminator)
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        Ok(BigUint::from(reader.read_until(self.terminator)?))
    }
}

impl UniversalCoding for UnaryCoding {}
