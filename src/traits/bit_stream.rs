/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use num_bigint::BigUint;

use crate::error::Result;

/// Sequential, streaming bit-by-bit reads.
///
/// This trait specifies the basic operations over which codings are
/// implemented. Only [`read_bit`](BitRead::read_bit) and
/// [`read_bits`](BitRead::read_bits) must be provided; the remaining
/// methods have default implementations built on them, which
/// implementations may override with faster versions.
pub trait BitRead {
    /// Read a single bit from the stream.
    fn read_bit(&mut self) -> Result<bool>;

    /// Read `n` ≤ 64 bits and return them in the lowest bits.
    ///
    /// Implementors should check the value of `n` when in test mode
    /// and panic if it is greater than 64.
    fn read_bits(&mut self, n: usize) -> Result<u64>;

    /// Read `n` bits into an arbitrary-precision integer.
    fn read_big(&mut self, n: u64) -> Result<BigUint> {
        let mut result = BigUint::ZERO;
        let mut remaining = n;
        while remaining > 0 {
            let take = remaining.min(32) as usize;
            let chunk = self.read_bits(take)?;
            result = (result << take) | BigUint::from(chunk);
            remaining -= take as u64;
        }
        Ok(result)
    }

    /// Read bits until a bit equal to `terminator` is found, consuming it,
    /// and return the number of bits preceding it.
    fn read_until(&mut self, terminator: bool) -> Result<u64> {
        let mut count = 0;
        while self.read_bit()? != terminator {
            count += 1;
        }
        Ok(count)
    }
}

/// Sequential, streaming bit-by-bit writes.
///
/// Only [`write_bits`](BitWrite::write_bits) and
/// [`flush`](BitWrite::flush) must be provided. All methods return the
/// number of bits written, so that the total length of a sequence of
/// encodings can be measured without a second pass.
pub trait BitWrite {
    /// Write the lowest `n` ≤ 64 bits of `value` to the stream and return
    /// the number of bits written, that is, `n`.
    ///
    /// Bits of `value` above the lowest `n` are ignored. Implementors
    /// should check the value of `n` in test mode and panic if it is
    /// greater than 64.
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize>;

    /// Write a single bit to the stream.
    fn write_bit(&mut self, bit: bool) -> Result<usize> {
        self.write_bits(bit as u64, 1)
    }

    /// Write the lowest `n` bits of an arbitrary-precision integer,
    /// most-significant bit first.
    fn write_big(&mut self, value: &BigUint, n: u64) -> Result<usize> {
        let digits = value.to_u64_digits();
        let bit_at = |pos: u64| -> u64 {
            let digit = (pos / 64) as usize;
            if digit >= digits.len() {
                0
            } else {
                (digits[digit] >> (pos % 64)) & 1
            }
        };
        let mut remaining = n;
        while remaining > 0 {
            let take = remaining.min(32);
            let mut chunk = 0;
            for i in 0..take {
                chunk = (chunk << 1) | bit_at(remaining - 1 - i);
            }
            self.write_bits(chunk, take as usize)?;
            remaining -= take;
        }
        Ok(n as usize)
    }

    /// Write `count` copies of `bit` and return `count`.
    fn write_repeated(&mut self, bit: bool, count: u64) -> Result<usize> {
        let pattern = if bit { u64::MAX } else { 0 };
        let mut remaining = count;
        while remaining > 0 {
            let take = remaining.min(32) as usize;
            self.write_bits(pattern, take)?;
            remaining -= take as u64;
        }
        Ok(count as usize)
    }

    /// Flush any bits held in the internal buffer, padding the last byte
    /// of the backing storage with zeros.
    fn flush(&mut self) -> Result<()>;
}

/// Seekability for [`BitRead`] and [`BitWrite`] streams.
pub trait BitSeek {
    /// Get the current position in bits from the start of the stream.
    fn bit_pos(&self) -> u64;

    /// Set the current position in bits from the start of the stream.
    fn set_bit_pos(&mut self, bit_pos: u64) -> Result<()>;
}
