/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The codings.
//!
//! A [`Coding`] encodes non-negative integers onto a [`BitWrite`] and
//! decodes them back from a [`BitRead`], in three widths: `u32`, `u64`,
//! and arbitrary precision ([`BigUint`]). Code words are uniformly indexed
//! from 0 for all codings. For example, the first few code words of the
//! [unary](UnaryCoding), [δ](EliasDeltaCoding), [ω](EliasOmegaCoding), and
//! [Fibonacci](FibonacciCoding) codings are:
//!
//! | Arg | unary (0-term.) |    δ    |    ω    | Fibonacci |
//! |-----|----------------:|--------:|--------:|----------:|
//! | 0   |               0 |       1 |       0 |        11 |
//! | 1   |              10 |    0100 |     100 |       011 |
//! | 2   |             110 |    0101 |     110 |      0011 |
//! | 3   |            1110 |   01100 |  101000 |      1011 |
//! | 4   |           11110 |   01101 |  101010 |     00011 |
//! | 5   |          111110 |   01110 |  101100 |     10011 |
//!
//! All codings are prefix-free, so concatenated code words decode
//! left-to-right without framing, and every coding value is immutable
//! after construction and safe to share across threads. Ordering is
//! determined entirely by the cursor passed in; use one cursor per thread.
//!
//! [`UniversalCoding`] marks the codings that accept every non-negative
//! integer; [`TruncatedBinaryCoding`] and [`HuffmanCoding`] work on finite
//! alphabets and only implement [`Coding`]. If you need to encode signed
//! integers, floating-point values, or arbitrary-precision decimals, wrap
//! a universal coding in an [`ExtendedCoding`].

use num_bigint::BigUint;

use crate::error::Result;
use crate::traits::{BitRead, BitWrite};

pub mod dispatch;
pub use dispatch::CodeKind;

pub mod elias_delta;
pub use elias_delta::EliasDeltaCoding;

pub mod elias_omega;
pub use elias_omega::EliasOmegaCoding;

pub mod extended;
pub use extended::ExtendedCoding;

pub mod fibonacci;
pub use fibonacci::{FibonacciCoding, FibonacciTable};

pub mod golomb;
pub use golomb::GolombCoding;

pub mod huffman;
pub use huffman::{Dictionary, HuffmanCoding};

pub mod rice;
pub use rice::RiceCoding;

pub mod truncated_binary;
pub use truncated_binary::TruncatedBinaryCoding;

pub mod unary;
pub use unary::UnaryCoding;

/// Encoding and decoding of non-negative integers as prefix-free bit
/// strings.
///
/// Encoders return the number of bits written, so the length of a sequence
/// of encodings can be measured without a second pass (see
/// [`NullBitWriter`](crate::impls::NullBitWriter)). Decoders return
/// [`ValueTooLarge`](crate::error::Error::ValueTooLarge) when the decoded
/// value does not fit the requested width; the wider decoding methods
/// accept every code word the narrower ones do.
pub trait Coding {
    /// Write a non-negative 32-bit value and return the number of bits
    /// written.
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize>;

    /// Write a non-negative 64-bit value and return the number of bits
    /// written.
    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize>;

    /// Write a non-negative arbitrary-precision value and return the
    /// number of bits written.
    fn encode_biguint<W: BitWrite + ?Sized>(&self, writer: &mut W, value: &BigUint)
        -> Result<usize>;

    /// Read a non-negative 32-bit value.
    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32>;

    /// Read a non-negative 64-bit value.
    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64>;

    /// Read a non-negative arbitrary-precision value.
    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint>;
}

/// Marker for codings capable of encoding any non-negative integer, no
/// matter how large.
///
/// Naturally, resource limitations may impede the coding of extremely
/// large numbers; [`UnaryCoding`] additionally caps encodable values at
/// [`UnaryCoding::MAX_ENCODABLE`] as a practical necessity.
pub trait UniversalCoding: Coding {}
