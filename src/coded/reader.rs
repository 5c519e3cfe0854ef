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
use crate::traits::BitRead;

/// Pairs a [`BitRead`] with an [`ExtendedCoding`] to provide a convenient
/// way of reading coded data.
#[derive(Debug)]
pub struct CodedReader<C: UniversalCoding, R: BitRead> {
    coding: ExtendedCoding<C>,
    reader: R,
}

impl<C: UniversalCoding, R: BitRead> CodedReader<C, R> {
    /// Creates a coded reader over a bit reader.
    pub fn new(coding: ExtendedCoding<C>, reader: R) -> Self {
        Self { coding, reader }
    }

    /// The coding that decodes the bits.
    pub fn coding(&self) -> &ExtendedCoding<C> {
        &self.coding
    }

    /// The reader that supplies the bits for the coding.
    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Returns the underlying bit reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads a non-negative 32-bit value.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.coding.decode_u32(&mut self.reader)
    }

    /// Reads a non-negative 64-bit value.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.coding.decode_u64(&mut self.reader)
    }

    /// Reads a non-negative arbitrary-precision value.
    pub fn read_biguint(&mut self) -> Result<BigUint> {
        self.coding.decode_biguint(&mut self.reader)
    }

    /// Reads an integer of any sign.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.coding.decode_i32(&mut self.reader)
    }

    /// Reads a long integer of any sign.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.coding.decode_i64(&mut self.reader)
    }

    /// Reads an arbitrary-precision integer of any sign.
    pub fn read_bigint(&mut self) -> Result<BigInt> {
        self.coding.decode_bigint(&mut self.reader)
    }

    /// Reads a float.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.coding.decode_f32(&mut self.reader)
    }

    /// Reads a double.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.coding.decode_f64(&mut self.reader)
    }

    /// Reads an arbitrary-precision decimal.
    pub fn read_decimal(&mut self) -> Result<BigDecimal> {
        self.coding.decode_decimal(&mut self.reader)
    }
}
