/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Selecting a universal coding at runtime.
//!
//! [`CodeKind`] is an enum over the universal codings of this crate, with
//! their parameters. It implements [`Coding`] and [`UniversalCoding`]
//! itself, so it can be stored in configuration, compared, and used to
//! drive generic encoding loops where the coding is chosen dynamically
//! (e.g. per column of a table, or negotiated on a wire).
//!
//! Dispatch rebuilds the parameterized codings on each call; if you
//! encode many values with the same [`CodeKind::Golomb`] parameters,
//! building a [`GolombCoding`] once is faster.

use num_bigint::BigUint;

use crate::codes::{
    Coding, EliasDeltaCoding, EliasOmegaCoding, FibonacciCoding, GolombCoding, RiceCoding,
    UnaryCoding, UniversalCoding,
};
use crate::error::Result;
use crate::traits::{BitRead, BitWrite};

/// An enum of the universal codings of this crate, with their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodeKind {
    EliasDelta,
    EliasOmega,
    Fibonacci,
    Unary { one_terminated: bool },
    Golomb { divisor: u64 },
    Rice { log2_divisor: u32 },
}

impl CodeKind {
    fn unary(one_terminated: bool) -> UnaryCoding {
        if one_terminated {
            UnaryCoding::ONE_TERMINATED
        } else {
            UnaryCoding::ZERO_TERMINATED
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $coding:ident => $call:expr) => {
        match *$self {
            CodeKind::EliasDelta => {
                let $coding = EliasDeltaCoding;
                $call
            }
            CodeKind::EliasOmega => {
                let $coding = EliasOmegaCoding;
                $call
            }
            CodeKind::Fibonacci => {
                let $coding = FibonacciCoding;
                $call
            }
            CodeKind::Unary { one_terminated } => {
                let $coding = CodeKind::unary(one_terminated);
                $call
            }
            CodeKind::Golomb { divisor } => {
                let $coding = GolombCoding::new(divisor);
                $call
            }
            CodeKind::Rice { log2_divisor } => {
                let $coding = RiceCoding::new(log2_divisor);
                $call
            }
        }
    };
}

impl Coding for CodeKind {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        dispatch!(self, coding => coding.encode_u32(writer, value))
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        dispatch!(self, coding => coding.encode_u64(writer, value))
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        dispatch!(self, coding => coding.encode_biguint(writer, value))
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        dispatch!(self, coding => coding.decode_u32(reader))
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        dispatch!(self, coding => coding.decode_u64(reader))
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        dispatch!(self, coding => coding.decode_biguint(reader))
    }
}

impl UniversalCoding for CodeKind {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::MemBitWriter;

    #[test]
    fn test_dispatch_matches_concrete() {
        for value in [0u64, 1, 2, 100, 12345] {
            let mut direct = MemBitWriter::new();
            FibonacciCoding.encode_u64(&mut direct, value).unwrap();
            let mut dispatched = MemBitWriter::new();
            CodeKind::Fibonacci
                .encode_u64(&mut dispatched, value)
                .unwrap();
            assert_eq!(
                direct.into_bytes().unwrap(),
                dispatched.into_bytes().unwrap()
            );

            let mut direct = MemBitWriter::new();
            GolombCoding::new(7).encode_u64(&mut direct, value).unwrap();
            let mut dispatched = MemBitWriter::new();
            CodeKind::Golomb { divisor: 7 }
                .encode_u64(&mut dispatched, value)
                .unwrap();
            assert_eq!(
                direct.into_bytes().unwrap(),
                dispatched.into_bytes().unwrap()
            );
        }
    }
}
