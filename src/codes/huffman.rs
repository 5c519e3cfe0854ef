/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Canonical Huffman coding.
//!
//! A Huffman coding is a data-dependent prefix code: given the frequency
//! of each symbol of a finite alphabet, it assigns shorter code words to
//! more frequent symbols, minimizing the expected code length. This
//! implementation builds *canonical* codes: the tree only determines a
//! code length per symbol, and code words are then assigned in order of
//! (length, frequency rank), each length boundary shifting the running
//! value left. Canonical codes have two properties this module relies on:
//!
//! - encoding is a per-symbol table lookup of (length, word);
//! - decoding needs only the histogram of code lengths and the mapping
//!   from frequency ranks back to symbols, not the tree.
//!
//! That mapping, together with the lengths, forms the [`Dictionary`]: a
//! compact, serializable record from which the coding can be rebuilt
//! without re-running tree construction. Sending the dictionary ahead of
//! the payload is the intended usage for streams whose frequencies the
//! receiver does not know; see [`Dictionary::write_to`] for the wire
//! format.
//!
//! Symbols are the caller's ordinals into the frequency slice handed to
//! [`HuffmanCoding::from_unordered`], which requires every frequency to
//! be non-zero (the shape produced by
//! [`CodingFrequencies::compact`]); the correspondence is thus always a
//! permutation of the symbols, which [`Dictionary::new`] validates, so a
//! corrupt or malicious dictionary read from a stream is rejected instead
//! of driving table sizes. Encoding a symbol outside the alphabet fails
//! with [`ValueOutOfRange`](crate::error::Error::ValueOutOfRange).
//!
//! Construction from frequencies sorted in descending order is linear
//! time, using the classical two-queue merge; unordered frequencies cost
//! an additional sort.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::collections::VecDeque;

use crate::coded::{CodedReader, CodedWriter};
use crate::codes::{Coding, UniversalCoding};
use crate::error::{Error, Result};
use crate::frequencies::CodingFrequencies;
use crate::traits::{BitRead, BitWrite};

/// A serializable record sufficient to rebuild a [`HuffmanCoding`].
///
/// Holds one canonical code length per frequency rank (rank 0 is the most
/// frequent symbol) and the correspondence mapping each rank back to the
/// caller's symbol ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Code length per rank, non-decreasing.
    lengths: Vec<u8>,
    /// Symbol ordinal per rank.
    correspondence: Vec<u32>,
}

impl Dictionary {
    /// Creates a dictionary from code lengths and a rank-to-symbol
    /// correspondence, validating that the lengths describe a canonical
    /// complete code.
    pub fn new(lengths: Vec<u8>, correspondence: Vec<u32>) -> Result<Self> {
        if lengths.is_empty() {
            return Err(Error::InvalidInput("empty Huffman dictionary"));
        }
        if lengths.len() != correspondence.len() {
            return Err(Error::InvalidInput(
                "dictionary lengths and correspondence differ in size",
            ));
        }
        if lengths.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidInput("code lengths not in canonical order"));
        }
        if lengths.iter().any(|&len| len == 0 || len > 64) {
            return Err(Error::InvalidInput("code length out of range"));
        }
        // The correspondence must be a permutation of the ranks; in
        // particular no entry may reach past the symbol count, so nothing
        // downstream ever sizes a table off a raw wire value.
        let mut seen = vec![false; lengths.len()];
        for &symbol in &correspondence {
            if symbol as usize >= lengths.len() || seen[symbol as usize] {
                return Err(Error::InvalidInput(
                    "correspondence is not a permutation of the symbols",
                ));
            }
            seen[symbol as usize] = true;
        }
        // Kraft equality, checked in integers: Σ 2^(max - len) = 2^max.
        // A single-symbol alphabet has exactly one 1-bit code word.
        if lengths.len() == 1 {
            if lengths[0] != 1 {
                return Err(Error::InvalidInput("singleton code length must be 1"));
            }
        } else {
            let max_len = *lengths.last().expect("lengths not empty") as u32;
            let kraft: u128 = lengths.iter().map(|&len| 1u128 << (max_len - len as u32)).sum();
            if kraft != 1 << max_len {
                return Err(Error::InvalidInput("code lengths violate Kraft equality"));
            }
        }
        Ok(Self {
            lengths,
            correspondence,
        })
    }

    /// The number of symbols with a code word.
    pub fn symbol_count(&self) -> usize {
        self.lengths.len()
    }

    /// The canonical code length of each rank.
    pub fn lengths(&self) -> &[u8] {
        &self.lengths
    }

    /// The symbol ordinal of each rank.
    pub fn correspondence(&self) -> &[u32] {
        &self.correspondence
    }

    /// Writes this dictionary with the coded writer's own coding.
    ///
    /// The wire format is the symbol count, then the code length of each
    /// rank, then the symbol ordinal of each rank, all as positive 32-bit
    /// values of the underlying coding.
    pub fn write_to<C: UniversalCoding, W: BitWrite>(
        &self,
        writer: &mut CodedWriter<C, W>,
    ) -> Result<usize> {
        let mut count = writer.write_u32(self.lengths.len() as u32)?;
        for &len in &self.lengths {
            count += writer.write_u32(len as u32)?;
        }
        for &symbol in &self.correspondence {
            count += writer.write_u32(symbol)?;
        }
        Ok(count)
    }

    /// Reads a dictionary written by [`write_to`](Dictionary::write_to),
    /// validating it as in [`new`](Dictionary::new).
    pub fn read_from<C: UniversalCoding, R: BitRead>(
        reader: &mut CodedReader<C, R>,
    ) -> Result<Self> {
        let count = reader.read_u32()? as usize;
        let mut lengths = Vec::new();
        for _ in 0..count {
            let len = reader.read_u32()?;
            lengths.push(u8::try_from(len).map_err(|_| Error::InvalidInput("code length out of range"))?);
        }
        let mut correspondence = Vec::new();
        for _ in 0..count {
            correspondence.push(reader.read_u32()?);
        }
        Self::new(lengths, correspondence)
    }
}

/// A code word of at most 64 bits.
#[derive(Debug, Clone, Copy, Default)]
struct CodeWord {
    bits: u64,
    len: u8,
}

/// Canonical Huffman coding over a finite alphabet. See the
/// [module documentation](self).
#[derive(Debug, Clone)]
pub struct HuffmanCoding {
    dictionary: Dictionary,
    /// Code word per rank.
    codes: Vec<CodeWord>,
    /// Rank per symbol ordinal.
    ranks: Vec<u32>,
    max_len: u8,
    /// Per length 1..=max_len: number of code words of that length.
    counts: Vec<u32>,
    /// Per length: the canonical first code word of that length.
    first_codes: Vec<u64>,
    /// Per length: the rank of the first code word of that length.
    first_ranks: Vec<u32>,
}

impl HuffmanCoding {
    /// Builds a coding from arbitrary per-symbol frequencies.
    ///
    /// Symbol `s` has frequency `frequencies[s]`. Every frequency must be
    /// non-zero, so that symbol ordinals and code words stay in
    /// one-to-one correspondence; pass data with value gaps through
    /// [`CodingFrequencies::compact`] first. Fails with
    /// [`InvalidInput`](crate::error::Error::InvalidInput) on an empty
    /// slice or a zero frequency.
    pub fn from_unordered(frequencies: &[u64]) -> Result<Self> {
        if frequencies.iter().any(|&frequency| frequency == 0) {
            return Err(Error::InvalidInput(
                "zero frequency; compact the frequencies first",
            ));
        }
        let mut symbols: Vec<u32> = (0..frequencies.len() as u32).collect();
        symbols.sort_by_key(|&s| (std::cmp::Reverse(frequencies[s as usize]), s));
        let descending: Vec<u64> = symbols.iter().map(|&s| frequencies[s as usize]).collect();
        Self::build(&descending, symbols)
    }

    /// Builds a coding from frequencies already sorted in descending
    /// order; rank and symbol ordinal coincide. A zero tail is pruned:
    /// those symbols get no code word and encoding one fails with
    /// [`ValueOutOfRange`](crate::error::Error::ValueOutOfRange).
    pub fn from_descending(frequencies: &[u64]) -> Result<Self> {
        if frequencies.windows(2).any(|w| w[0] < w[1]) {
            return Err(Error::InvalidInput("frequencies not in descending order"));
        }
        let nonzero = frequencies.iter().take_while(|&&f| f > 0).count();
        Self::build(
            &frequencies[..nonzero],
            (0..nonzero as u32).collect(),
        )
    }

    /// Builds a coding for the compact frequency list of a
    /// [`CodingFrequencies`]; symbols are positions in
    /// [`frequencies()`](CodingFrequencies::frequencies).
    pub fn from_frequencies(frequencies: &CodingFrequencies) -> Result<Self> {
        Self::from_unordered(&frequencies.frequencies())
    }

    /// Rebuilds a coding from a previously transmitted dictionary without
    /// re-running tree construction.
    pub fn from_dictionary(dictionary: Dictionary) -> Result<Self> {
        Self::assemble(dictionary)
    }

    /// The dictionary of this coding.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn build(descending: &[u64], symbols: Vec<u32>) -> Result<Self> {
        if descending.is_empty() {
            return Err(Error::InvalidInput("no symbols with non-zero frequency"));
        }
        let depths = code_lengths(descending);

        // The two-queue merge yields non-decreasing lengths per rank, but
        // the canonical invariant is enforced rather than assumed.
        let mut order: Vec<u32> = (0..depths.len() as u32).collect();
        order.sort_by_key(|&rank| (depths[rank as usize], rank));
        let lengths = order
            .iter()
            .map(|&rank| {
                u8::try_from(depths[rank as usize])
                    .ok()
                    .filter(|&len| len <= 64)
                    .ok_or(Error::InvalidInput("code length exceeds 64 bits"))
            })
            .collect::<Result<Vec<u8>>>()?;
        let correspondence = order.iter().map(|&rank| symbols[rank as usize]).collect();

        Self::assemble(Dictionary::new(lengths, correspondence)?)
    }

    fn assemble(dictionary: Dictionary) -> Result<Self> {
        let lengths = &dictionary.lengths;
        let max_len = *lengths.last().expect("dictionary not empty");

        let mut counts = vec![0u32; max_len as usize + 1];
        for &len in lengths {
            counts[len as usize] += 1;
        }

        // canonical base code and first rank per length
        let mut first_codes = vec![0u64; max_len as usize + 1];
        let mut first_ranks = vec![0u32; max_len as usize + 1];
        for len in 1..=max_len as usize {
            first_codes[len] = (first_codes[len - 1] + counts[len - 1] as u64) << 1;
            first_ranks[len] = first_ranks[len - 1] + counts[len - 1];
        }

        let mut codes = Vec::with_capacity(lengths.len());
        for (rank, &len) in lengths.iter().enumerate() {
            let offset = rank as u64 - first_ranks[len as usize] as u64;
            codes.push(CodeWord {
                bits: first_codes[len as usize] + offset,
                len,
            });
        }

        // the correspondence is a validated permutation, so this fills
        // every slot
        let mut ranks = vec![0; dictionary.lengths.len()];
        for (rank, &symbol) in dictionary.correspondence.iter().enumerate() {
            ranks[symbol as usize] = rank as u32;
        }

        Ok(Self {
            dictionary,
            codes,
            ranks,
            max_len,
            counts,
            first_codes,
            first_ranks,
        })
    }

    fn encode_symbol<W: BitWrite + ?Sized>(&self, writer: &mut W, symbol: u64) -> Result<usize> {
        let rank = usize::try_from(symbol)
            .ok()
            .and_then(|symbol| self.ranks.get(symbol))
            .copied()
            .ok_or(Error::ValueOutOfRange("symbol has no code word"))?;
        let code = self.codes[rank as usize];
        writer.write_bits(code.bits, code.len as usize)
    }

    fn decode_symbol<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        let mut word = 0u64;
        for len in 1..=self.max_len as usize {
            word = (word << 1) | reader.read_bit()? as u64;
            if word >= self.first_codes[len] {
                let offset = word - self.first_codes[len];
                if offset < self.counts[len] as u64 {
                    let rank = self.first_ranks[len] + offset as u32;
                    return Ok(self.dictionary.correspondence[rank as usize]);
                }
            }
        }
        Err(Error::InvalidInput("invalid Huffman code word"))
    }
}

/// Canonical code lengths for frequencies sorted in descending order,
/// computed with the two-queue linear-time merge: one queue of leaves,
/// drained strictly from the smallest frequency up, and one FIFO of
/// merged internal nodes, whose weights are produced in ascending order.
fn code_lengths(descending: &[u64]) -> Vec<u32> {
    let n = descending.len();
    if n == 1 {
        // a zero-bit code word cannot be read back
        return vec![1];
    }

    // node arena: leaves are 0..n (rank order), internal nodes appended;
    // parents always have a higher index than their children
    let mut weights: Vec<u128> = descending.iter().map(|&f| f as u128).collect();
    let mut parents = vec![usize::MAX; 2 * n - 1];
    let mut internal: VecDeque<usize> = VecDeque::new();
    // index of the next (smallest) unmerged leaf, walking ranks backwards
    let mut leaf = n;

    for _ in 0..n - 1 {
        let mut pop_smallest = |weights: &[u128]| match internal.front() {
            Some(&node) if leaf == 0 || weights[node] < weights[leaf - 1] => {
                internal.pop_front().expect("front exists")
            }
            _ => {
                leaf -= 1;
                leaf
            }
        };
        let first = pop_smallest(&weights);
        let second = pop_smallest(&weights);
        let merged = weights.len();
        weights.push(weights[first] + weights[second]);
        parents[first] = merged;
        parents[second] = merged;
        internal.push_back(merged);
    }

    let root = 2 * n - 2;
    let mut depths = vec![0u32; 2 * n - 1];
    for node in (0..root).rev() {
        depths[node] = depths[parents[node]] + 1;
    }
    depths.truncate(n);
    depths
}

impl Coding for HuffmanCoding {
    fn encode_u32<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u32) -> Result<usize> {
        self.encode_symbol(writer, value as u64)
    }

    fn encode_u64<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        self.encode_symbol(writer, value)
    }

    fn encode_biguint<W: BitWrite + ?Sized>(
        &self,
        writer: &mut W,
        value: &BigUint,
    ) -> Result<usize> {
        let symbol = value
            .to_u64()
            .ok_or(Error::ValueOutOfRange("symbol has no code word"))?;
        self.encode_symbol(writer, symbol)
    }

    fn decode_u32<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u32> {
        self.decode_symbol(reader)
    }

    fn decode_u64<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        Ok(self.decode_symbol(reader)? as u64)
    }

    fn decode_biguint<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<BigUint> {
        Ok(BigUint::from(self.decode_symbol(reader)?))
    }
}
