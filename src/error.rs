/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error types shared by all codings and bit streams.

use thiserror::Error;

/// Error variants for coding and bit stream operations.
///
/// Three families of failure exist: caller-side violations
/// ([`UnsupportedValue`](Error::UnsupportedValue),
/// [`ValueOutOfRange`](Error::ValueOutOfRange)), stream-side failures
/// ([`Io`](Error::Io), [`UnexpectedEof`](Error::UnexpectedEof),
/// [`ValueTooLarge`](Error::ValueTooLarge)), and structurally invalid input
/// ([`InvalidInput`](Error::InvalidInput)). No variant is recoverable by the
/// library itself; after a failed decode the position of the cursor inside
/// the offending code word is unspecified, so callers that want to resume
/// must checkpoint the cursor beforehand.
#[derive(Debug, Error)]
pub enum Error {
    /// The value cannot be encoded by this coding (e.g. a non-finite float,
    /// or a unary value above [`MAX_ENCODABLE`](crate::codes::UnaryCoding::MAX_ENCODABLE)).
    #[error("unsupported value: {0}")]
    UnsupportedValue(&'static str),

    /// The value lies outside the coding's alphabet.
    #[error("value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// The decoded value does not fit the requested width.
    #[error("value too large for {0}")]
    ValueTooLarge(&'static str),

    /// The bit stream contains structurally invalid data.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The bit stream ended in the middle of a code word.
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// An I/O error occurred in the underlying byte stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for coding operations.
pub type Result<T> = std::result::Result<T, Error>;
