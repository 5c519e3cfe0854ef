/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Arbitrary numeric values over a universal coding.
//!
//! An [`ExtendedCoding`] wraps a [`UniversalCoding`] and adds support for
//! encoding signed integers, floating-point values, and
//! arbitrary-precision decimals.
//!
//! Signed values are mapped onto non-negative ones by interleaving: 0, 1,
//! −1, 2, −2, … become 0, 1, 2, 3, 4, …, that is, `2n − 1` if `n` is
//! greater than zero and `−2n` otherwise. A finite floating-point value is
//! split into its mantissa, written first with the sign folded into its
//! lowest bit (the two lowest mantissa values are reserved for ±0), and
//! its unbiased exponent, written as a signed integer. NaN and infinite
//! values are rejected; every other bit pattern round-trips exactly,
//! including signed zeros and subnormals. A decimal is written as its
//! signed scale followed by its signed unscaled value, so that `value =
//! unscaled · 10^(−scale)`.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};

use crate::codes::{Coding, UniversalCoding};
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

const F64_SIGN_MASK: u64 = 1 << 63;
const F64_MANTISSA_MASK: u64 = (1 << 52) - 1;
const F64_EXPONENT_BIAS: i32 = 1023;
const F32_SIGN_MASK: u32 = 1 << 31;
const F32_MANTISSA_MASK: u32 = (1 << 23) - 1;
const F32_EXPONENT_BIAS: i32 = 127;

/// Adds signed-integer, floating-point, and decimal codecs on top of a
/// [`UniversalCoding`]. See the [module documentation](self).
///
/// The positive encoding and decoding methods of the wrapped coding are
/// forwarded, so an `ExtendedCoding` can be used anywhere a [`Coding`]
/// can.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtendedCoding<C> {
    coding: C,
}

impl<C: UniversalCoding> ExtendedCoding<C> {
    /// Wraps a universal coding.
    pub const fn new(coding: C) -> Self {
        Self { coding }
    }

    /// The coding that has been extended.
    pub fn universal(&self) -> &C {
        &self.coding
    }

    /// Writes an integer of any sign.
    pub fn encode_i32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: i32) -> Result<usize> {
        // interleave in 64 bits so that i32::MIN needs no special case
        let value = value as i64;
        let interleaved = if value > 0 {
            (value as u64) * 2 - 1
        } else {
            (-value) as u64 * 2
        };
        self.coding.encode_u64(writer, interleaved)
    }

    /// Reads an integer of any sign.
    pub fn decode_i32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<i32> {
        let interleaved = self.coding.decode_u64(reader)?;
        if interleaved & 1 == 1 {
            i32::try_from(interleaved / 2 + 1).map_err(|_| Error::ValueTooLarge("i32"))
        } else {
            i32::try_from(-((interleaved / 2) as i128)).map_err(|_| Error::ValueTooLarge("i32"))
        }
    }

    /// Writes a long integer of any sign.
    ///
    /// The interleaved image of `i64::MIN` is 2⁶⁴, which is routed through
    /// the unbounded width: it can be read back with
    /// [`decode_bigint`](ExtendedCoding::decode_bigint), while
    /// [`decode_i64`](ExtendedCoding::decode_i64) reports it as too large.
    pub fn encode_i64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: i64) -> Result<usize> {
        if value == i64::MIN {
            return self
                .coding
                .encode_biguint(writer, &(BigUint::from(1u8) << 64));
        }
        let interleaved = if value > 0 {
            (value as u64) * 2 - 1
        } else {
            (-value) as u64 * 2
        };
        self.coding.encode_u64(writer, interleaved)
    }

    /// Reads a long integer of any sign.
    pub fn decode_i64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<i64> {
        let interleaved = self.coding.decode_u64(reader)?;
        if interleaved & 1 == 1 {
            i64::try_from(interleaved / 2 + 1).map_err(|_| Error::ValueTooLarge("i64"))
        } else {
            Ok(-((interleaved / 2) as i64))
        }
    }

    /// Writes an arbitrary-precision integer of any sign.
    pub fn encode_bigint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigInt,
    ) -> Result<usize> {
        let interleaved = match value.sign() {
            Sign::Plus => (value.magnitude() << 1u8) - 1u8,
            _ => value.magnitude() << 1u8,
        };
        self.coding.encode_biguint(writer, &interleaved)
    }

    /// Reads an arbitrary-precision integer of any sign.
    pub fn decode_bigint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigInt> {
        let interleaved = self.coding.decode_biguint(reader)?;
        if interleaved.bit(0) {
            Ok(BigInt::from_biguint(Sign::Plus, (interleaved + 1u8) >> 1))
        } else {
            Ok(BigInt::from_biguint(Sign::Minus, interleaved >> 1))
        }
    }

    /// Writes a double. NaN and infinite values are not supported.
    pub fn encode_f64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: f64) -> Result<usize> {
        if !value.is_finite() {
            return Err(Error::UnsupportedValue("NaN or infinite double"));
        }
        let bits = value.to_bits();
        let sign = bits & F64_SIGN_MASK;
        if bits == sign {
            // ±0 sentinels
            return self.coding.encode_u32(writer, (sign != 0) as u32);
        }
        let mantissa = (bits & F64_MANTISSA_MASK) << 1 | ((sign != 0) as u64);
        let exponent = ((bits >> 52) & 0x7ff) as i32 - F64_EXPONENT_BIAS;
        Ok(self.coding.encode_u64(writer, mantissa + 2)? + self.encode_i32(writer, exponent)?)
    }

    /// Reads a double.
    pub fn decode_f64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<f64> {
        let mantissa = self.coding.decode_u64(reader)?;
        match mantissa {
            0 => return Ok(0.0),
            1 => return Ok(-0.0),
            _ => {}
        }
        let exponent = self.decode_i32(reader)?;
        if !(-F64_EXPONENT_BIAS..=F64_EXPONENT_BIAS).contains(&exponent) {
            return Err(Error::InvalidInput("double exponent out of range"));
        }
        let mantissa = mantissa - 2;
        let sign = (mantissa & 1) << 63;
        let mantissa = mantissa >> 1;
        if mantissa > F64_MANTISSA_MASK {
            return Err(Error::InvalidInput("double mantissa out of range"));
        }
        let bits = sign | (((exponent + F64_EXPONENT_BIAS) as u64) << 52) | mantissa;
        Ok(f64::from_bits(bits))
    }

    /// Writes a float. NaN and infinite values are not supported.
    pub fn encode_f32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: f32) -> Result<usize> {
        if !value.is_finite() {
            return Err(Error::UnsupportedValue("NaN or infinite float"));
        }
        let bits = value.to_bits();
        let sign = bits & F32_SIGN_MASK;
        if bits == sign {
            // ±0 sentinels
            return self.coding.encode_u32(writer, (sign != 0) as u32);
        }
        let mantissa = (bits & F32_MANTISSA_MASK) << 1 | ((sign != 0) as u32);
        let exponent = ((bits >> 23) & 0xff) as i32 - F32_EXPONENT_BIAS;
        Ok(self.coding.encode_u32(writer, mantissa + 2)? + self.encode_i32(writer, exponent)?)
    }

    /// Reads a float.
    pub fn decode_f32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<f32> {
        let mantissa = self.coding.decode_u32(reader)?;
        match mantissa {
            0 => return Ok(0.0),
            1 => return Ok(-0.0),
            _ => {}
        }
        let exponent = self.decode_i32(reader)?;
        if !(-F32_EXPONENT_BIAS..=F32_EXPONENT_BIAS).contains(&exponent) {
            return Err(Error::InvalidInput("float exponent out of range"));
        }
        let mantissa = mantissa - 2;
        let sign = (mantissa & 1) << 31;
        let mantissa = mantissa >> 1;
        if mantissa > F32_MANTISSA_MASK {
            return Err(Error::InvalidInput("float mantissa out of range"));
        }
        let bits = sign | (((exponent + F32_EXPONENT_BIAS) as u32) << 23) | mantissa;
        Ok(f32::from_bits(bits))
    }

    /// Writes an arbitrary-precision decimal as its scale followed by its
    /// unscaled value.
    pub fn encode_decimal<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigDecimal,
    ) -> Result<usize> {
        let (unscaled, scale) = value.as_bigint_and_exponent();
        Ok(self.encode_i64(writer, scale)? + self.encode_bigint(writer, &unscaled)?)
    }

    /// Reads an arbitrary-precision decimal.
    pub fn decode_decimal<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigDecimal> {
        let scale = self.decode_i64(reader)?;
        let unscaled = self.decode_bigint(reader)?;
        Ok(BigDecimal::new(unscaled, scale))
    }
}

impl<C: UniversalCoding> Coding for ExtendedCoding<C> {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        self.coding.encode_u32(writer, value)
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        self.coding.encode_u64(writer, value)
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        self.coding.encode_biguint(writer, value)
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        self.coding.decode_u32(reader)
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        self.coding.decode_u64(reader)
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        self.coding.decode_biguint(reader)
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;
    use crate::codes::{EliasDeltaCoding, EliasOmegaCoding, FibonacciCoding};
    use crate::impls::{MemBitReader, MemBitWriter};

    #[test]
    fn test_interleaving_matches_positive_coding() {
        // 0, 1, -1, 2, -2 must produce the bits of 0, 1, 2, 3, 4
        let coding = ExtendedCoding::new(EliasDeltaCoding);
        let mut signed = MemBitWriter::new();
        for value in [0, 1, -1, 2, -2] {
            coding.encode_i32(&mut signed, value).unwrap();
        }
        let mut positive = MemBitWriter::new();
        for value in 0..5u32 {
            EliasDeltaCoding.encode_u32(&mut positive, value).unwrap();
        }
        assert_eq!(
            signed.into_bytes().unwrap(),
            positive.into_bytes().unwrap()
        );
    }

    #[test]
    fn test_signed_round_trip() {
        let coding = ExtendedCoding::new(EliasOmegaCoding);
        let values = [
            0,
            1,
            -1,
            42,
            -42,
            i32::MAX,
            i32::MIN,
            i32::MIN + 1,
        ];
        let mut writer = MemBitWriter::new();
        for value in values {
            coding.encode_i32(&mut writer, value).unwrap();
        }
        let bytes = writer.into_bytes().unwrap();
        let mut reader = MemBitReader::new(&bytes);
        for value in values {
            assert_eq!(coding.decode_i32(&mut reader).unwrap(), value);
        }
    }

    #[test]
    fn test_long_round_trip() {
        let coding = ExtendedCoding::new(EliasDeltaCoding);
        let values = [0, 1, -1, i64::MAX, i64::MIN + 1, -(1 << 40)];
        let mut writer = MemBitWriter::new();
        for value in values {
            coding.encode_i64(&mut writer, value).unwrap();
        }
        let bytes = writer.into_bytes().unwrap();
        let mut reader = MemBitReader::new(&bytes);
        for value in values {
            assert_eq!(coding.decode_i64(&mut reader).unwrap(), value);
        }
    }

    #[test]
    fn test_long_min_is_readable_as_bigint() {
        let coding = ExtendedCoding::new(EliasDeltaCoding);
        let mut writer = MemBitWriter::new();
        coding.encode_i64(&mut writer, i64::MIN).unwrap();
        let bytes = writer.into_bytes().unwrap();

        let mut reader = MemBitReader::new(&bytes);
        assert!(matches!(
            coding.decode_i64(&mut reader),
            Err(Error::ValueTooLarge("i64"))
        ));
        let mut reader = MemBitReader::new(&bytes);
        assert_eq!(
            coding.decode_bigint(&mut reader).unwrap(),
            BigInt::from(i64::MIN)
        );
    }

    #[test]
    fn test_bigint_round_trip() {
        let coding = ExtendedCoding::new(FibonacciCoding);
        let values = [
            BigInt::ZERO,
            BigInt::from(1),
            BigInt::from(-1),
            BigInt::from(i64::MIN),
            BigInt::from_str("-123456789012345678901234567890").unwrap(),
            BigInt::from_str("987654321098765432109876543210").unwrap(),
        ];
        let mut writer = MemBitWriter::new();
        for value in &values {
            coding.encode_bigint(&mut writer, value).unwrap();
        }
        let bytes = writer.into_bytes().unwrap();
        let mut reader = MemBitReader::new(&bytes);
        for value in &values {
            assert_eq!(&coding.decode_bigint(&mut reader).unwrap(), value);
        }
    }

    #[test]
    fn test_double_round_trip() {
        let coding = ExtendedCoding::new(EliasDeltaCoding);
        let values = [
            0.0,
            -0.0,
            1.0,
            -1.0,
            0.5,
            std::f64::consts::PI,
            f64::MAX,
            f64::MIN_POSITIVE,
            // subnormals
            f64::from_bits(1),
            f64::from_bits(F64_MANTISSA_MASK),
            -f64::from_bits(1),
        ];
        let mut writer = MemBitWriter::new();
        for value in values {
            coding.encode_f64(&mut writer, value).unwrap();
        }
        let bytes = writer.into_bytes().unwrap();
        let mut reader = MemBitReader::new(&bytes);
        for value in values {
            let decoded = coding.decode_f64(&mut reader).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits(), "for value {:e}", value);
        }
    }

    #[test]
    fn test_float_round_trip() {
        let coding = ExtendedCoding::new(EliasDeltaCoding);
        let values = [
            0.0f32,
            -0.0,
            1.0,
            -1.5,
            f32::MAX,
            f32::MIN_POSITIVE,
            f32::from_bits(1),
            -f32::from_bits(0x7fffff),
        ];
        let mut writer = MemBitWriter::new();
        for value in values {
            coding.encode_f32(&mut writer, value).unwrap();
        }
        let bytes = writer.into_bytes().unwrap();
        let mut reader = MemBitReader::new(&bytes);
        for value in values {
            let decoded = coding.decode_f32(&mut reader).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits(), "for value {:e}", value);
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let coding = ExtendedCoding::new(EliasDeltaCoding);
        let mut writer = MemBitWriter::new();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                coding.encode_f64(&mut writer, value),
                Err(Error::UnsupportedValue(_))
            ));
        }
        assert!(matches!(
            coding.encode_f32(&mut writer, f32::NAN),
            Err(Error::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_decimal_round_trip() {
        let coding = ExtendedCoding::new(EliasDeltaCoding);
        let values = [
            BigDecimal::from_str("0").unwrap(),
            BigDecimal::from_str("1.5").unwrap(),
            BigDecimal::from_str("-12.25").unwrap(),
            BigDecimal::from_str("0.00000000000000000001").unwrap(),
            BigDecimal::from_str("-98765432109876543210.123456789").unwrap(),
            BigDecimal::new(BigInt::from(5), -3),
        ];
        let mut writer = MemBitWriter::new();
        for value in &values {
            coding.encode_decimal(&mut writer, value).unwrap();
        }
        let bytes = writer.into_bytes().unwrap();
        let mut reader = MemBitReader::new(&bytes);
        for value in &values {
            let decoded = coding.decode_decimal(&mut reader).unwrap();
            // compare scale and unscaled value, not just numeric equality
            assert_eq!(
                decoded.as_bigint_and_exponent(),
                value.as_bigint_and_exponent()
            );
        }
    }
}
