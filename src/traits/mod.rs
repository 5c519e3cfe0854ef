/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for operating on streams of bits.

We provide three bit-based traits, [`BitRead`], [`BitWrite`], and
[`BitSeek`], analogous to [`std::io::Read`], [`std::io::Write`], and
[`std::io::Seek`], respectively. They provide read/write operations on
single bits, fixed-width blocks of bits, and arbitrary-precision blocks of
bits. The codings in [`codes`](crate::codes) are built on these traits and
make no assumptions about the backing storage.

All streams are most-significant-bit first: the first bit written is the
highest bit of the first byte of the underlying medium. The implementations
we provide (e.g., [`MemBitWriter`](crate::impls::MemBitWriter)) buffer bits
into a word and move whole bytes to and from the backing storage.

*/

mod bit_stream;
pub use bit_stream::*;
