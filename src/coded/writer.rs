/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};

use crate::codes::{Coding, ExtendedCoding, UniversalCoding};
use crate::error::Result;
use crate::traits::BitWrite;

/// Pairs a [`BitWrite`] with an [`ExtendedCoding`] to provide a convenient
/// way of writing coded data.
///
/// All writing methods return the number of bits written.
#[derive(Debug)]
pub struct CodedWriter<C: UniversalCoding, W: BitWrite> {
    coding: ExtendedCoding<C>,
    writer: W,
}

impl<C: UniversalCoding, W: BitWrite> CodedWriter<C, W> {
    /// Creates a coded writer over a bit writer.
    pub fn new(coding: ExtendedCoding<C>, writer: W) -> Self {
        Self { coding, writer }
    }

    /// The coding that encodes the values.
    pub fn coding(&self) -> &ExtendedCoding<C> {
        &self.coding
    }

    /// The writer that receives the bits of the encoding.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Returns the underlying bit writer. Note that it is not flushed.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes a non-negative 32-bit value.
    pub fn write_u32(&mut self, value: u32) -> Result<usize> {
        self.coding.encode_u32(&mut self.writer, value)
    }

    /// Writes a non-negative 64-bit value.
    pub fn write_u64(&mut self, value: u64) -> Result<usize> {
        self.coding.encode_u64(&mut self.writer, value)
    }

    /// Writes a non-negative arbitrary-precision value.
    pub fn write_biguint(&mut self, value: &BigUint) -> Result<usize> {
        self.coding.encode_biguint(&mut self.writer, value)
    }

    /// Writes an integer of any sign.
    pub fn write_i32(&mut self, value: i32) -> Result<usize> {
        self.coding.encode_i32(&mut self.writer, value)
    }

    /// Writes a long integer of any sign.
    pub fn write_i64(&mut self, value: i64) -> Result<usize> {
        self.coding.encode_i64(&mut self.writer, value)
    }

    /// Writes an arbitrary-precision integer of any sign.
    pub fn write_bigint(&mut self, value: &BigInt) -> Result<usize> {
        self.coding.encode_bigint(&mut self.writer, value)
    }

    /// Writes a float. NaN and infinite values are not supported.
    pub fn write_f32(&mut self, value: f32) -> Result<usize> {
        self.coding.encode_f32(&mut self.writer, value)
    }

    /// Writes a double. NaN and infinite values are not supported.
    pub fn write_f64(&mut self, value: f64) -> Result<usize> {
        self.coding.encode_f64(&mut self.writer, value)
    }

    /// Writes an arbitrary-precision decimal.
    pub fn write_decimal(&mut self, value: &BigDecimal) -> Result<usize> {
        self.coding.encode_decimal(&mut self.writer, value)
    }
}
