/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Helpers for reading and writing composite data through coded streams.
//!
//! Every helper writes a positive length first, then the elements, so the
//! reader needs no external framing. The layouts are:
//!
//! - strings: the number of UTF-16 code units, then each unit as a
//!   positive 32-bit value (the granularity is the UTF-16 unit, not the
//!   scalar value, so lengths match what a UTF-16 consumer would expect);
//! - `bool` slices: the length, then one raw bit per element;
//! - `i8`/`i16`/`i32` slices: the length, then each element as a signed
//!   32-bit value; `i64` slices use the signed 64-bit codec and
//!   `f32`/`f64` slices the floating-point codecs;
//! - `char` slices: the length, then each scalar value as a positive
//!   32-bit value;
//! - enum-like values: the zero-based ordinal as a positive 32-bit value.
//!   Readers take the table of variants and reject ordinals beyond it.
//!   Reader and writer are symmetric; no off-by-one adjustment is
//!   applied on either side.
//!
//! [`write_to_file`] and [`read_from_file`] run a caller-supplied task
//! against a coded stream over a buffered file, flushing on success and
//! releasing the file on every exit path.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::coded::{CodedReader, CodedWriter};
use crate::codes::{ExtendedCoding, UniversalCoding};
use crate::error::{Error, Result};
use crate::impls::{ByteBitReader, ByteBitWriter};
use crate::traits::{BitRead, BitWrite};

/// Writes a string as a length followed by its UTF-16 code units.
pub fn write_string<C: UniversalCoding, W: BitWrite>(
    writer: &mut CodedWriter<C, W>,
    value: &str,
) -> Result<usize> {
    let units: Vec<u16> = value.encode_utf16().collect();
    let mut count = writer.write_u32(units.len() as u32)?;
    for unit in units {
        count += writer.write_u32(unit as u32)?;
    }
    Ok(count)
}

/// Reads a string written by [`write_string`].
pub fn read_string<C: UniversalCoding, R: BitRead>(
    reader: &mut CodedReader<C, R>,
) -> Result<String> {
    let len = reader.read_u32()?;
    let mut units = Vec::new();
    for _ in 0..len {
        let unit = reader.read_u32()?;
        units.push(u16::try_from(unit).map_err(|_| Error::ValueTooLarge("UTF-16 code unit"))?);
    }
    String::from_utf16(&units).map_err(|_| Error::InvalidInput("ill-formed UTF-16"))
}

/// Writes a slice of strings, as a length followed by each string.
pub fn write_string_array<C: UniversalCoding, W: BitWrite, S: AsRef<str>>(
    writer: &mut CodedWriter<C, W>,
    values: &[S],
) -> Result<usize> {
    let mut count = writer.write_u32(values.len() as u32)?;
    for value in values {
        count += write_string(writer, value.as_ref())?;
    }
    Ok(count)
}

/// Reads a slice of strings written by [`write_string_array`].
pub fn read_string_array<C: UniversalCoding, R: BitRead>(
    reader: &mut CodedReader<C, R>,
) -> Result<Vec<String>> {
    let len = reader.read_u32()?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(read_string(reader)?);
    }
    Ok(values)
}

/// Writes a slice of booleans, as a length followed by one bit each.
pub fn write_bool_array<C: UniversalCoding, W: BitWrite>(
    writer: &mut CodedWriter<C, W>,
    values: &[bool],
) -> Result<usize> {
    let mut count = writer.write_u32(values.len() as u32)?;
    for &value in values {
        count += writer.writer_mut().write_bit(value)?;
    }
    Ok(count)
}

/// Reads a slice of booleans written by [`write_bool_array`].
pub fn read_bool_array<C: UniversalCoding, R: BitRead>(
    reader: &mut CodedReader<C, R>,
) -> Result<Vec<bool>> {
    let len = reader.read_u32()?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.reader_mut().read_bit()?);
    }
    Ok(values)
}

macro_rules! signed_array_helpers {
    ($write_name:ident, $read_name:ident, $element:ty, $write:ident, $read:ident, $write_doc:literal, $read_doc:literal) => {
        #[doc = $write_doc]
        pub fn $write_name<C: UniversalCoding, W: BitWrite>(
            writer: &mut CodedWriter<C, W>,
            values: &[$element],
        ) -> Result<usize> {
            let mut count = writer.write_u32(values.len() as u32)?;
            for &value in values {
                count += writer.$write(value.into())?;
            }
            Ok(count)
        }

        #[doc = $read_doc]
        pub fn $read_name<C: UniversalCoding, R: BitRead>(
            reader: &mut CodedReader<C, R>,
        ) -> Result<Vec<$element>> {
            let len = reader.read_u32()?;
            let mut values = Vec::new();
            for _ in 0..len {
                let value = reader.$read()?;
                values.push(
                    value
                        .try_into()
                        .map_err(|_| Error::ValueTooLarge(stringify!($element)))?,
                );
            }
            Ok(values)
        }
    };
}

signed_array_helpers!(
    write_i8_array,
    read_i8_array,
    i8,
    write_i32,
    read_i32,
    "Writes a slice of bytes, as a length followed by each element as a signed value.",
    "Reads a slice of bytes written by [`write_i8_array`]."
);
signed_array_helpers!(
    write_i16_array,
    read_i16_array,
    i16,
    write_i32,
    read_i32,
    "Writes a slice of shorts, as a length followed by each element as a signed value.",
    "Reads a slice of shorts written by [`write_i16_array`]."
);
signed_array_helpers!(
    write_i32_array,
    read_i32_array,
    i32,
    write_i32,
    read_i32,
    "Writes a slice of ints, as a length followed by each element as a signed value.",
    "Reads a slice of ints written by [`write_i32_array`]."
);
signed_array_helpers!(
    write_i64_array,
    read_i64_array,
    i64,
    write_i64,
    read_i64,
    "Writes a slice of longs, as a length followed by each element as a signed value.",
    "Reads a slice of longs written by [`write_i64_array`]."
);

/// Writes a slice of floats, as a length followed by each element.
pub fn write_f32_array<C: UniversalCoding, W: BitWrite>(
    writer: &mut CodedWriter<C, W>,
    values: &[f32],
) -> Result<usize> {
    let mut count = writer.write_u32(values.len() as u32)?;
    for &value in values {
        count += writer.write_f32(value)?;
    }
    Ok(count)
}

/// Reads a slice of floats written by [`write_f32_array`].
pub fn read_f32_array<C: UniversalCoding, R: BitRead>(
    reader: &mut CodedReader<C, R>,
) -> Result<Vec<f32>> {
    let len = reader.read_u32()?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.read_f32()?);
    }
    Ok(values)
}

/// Writes a slice of doubles, as a length followed by each element.
pub fn write_f64_array<C: UniversalCoding, W: BitWrite>(
    writer: &mut CodedWriter<C, W>,
    values: &[f64],
) -> Result<usize> {
    let mut count = writer.write_u32(values.len() as u32)?;
    for &value in values {
        count += writer.write_f64(value)?;
    }
    Ok(count)
}

/// Reads a slice of doubles written by [`write_f64_array`].
pub fn read_f64_array<C: UniversalCoding, R: BitRead>(
    reader: &mut CodedReader<C, R>,
) -> Result<Vec<f64>> {
    let len = reader.read_u32()?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.read_f64()?);
    }
    Ok(values)
}

/// Writes a slice of characters, as a length followed by each scalar
/// value as a positive value.
pub fn write_char_array<C: UniversalCoding, W: BitWrite>(
    writer: &mut CodedWriter<C, W>,
    values: &[char],
) -> Result<usize> {
    let mut count = writer.write_u32(values.len() as u32)?;
    for &value in values {
        count += writer.write_u32(value as u32)?;
    }
    Ok(count)
}

/// Reads a slice of characters written by [`write_char_array`].
pub fn read_char_array<C: UniversalCoding, R: BitRead>(
    reader: &mut CodedReader<C, R>,
) -> Result<Vec<char>> {
    let len = reader.read_u32()?;
    let mut values = Vec::new();
    for _ in 0..len {
        let value = reader.read_u32()?;
        values.push(char::from_u32(value).ok_or(Error::InvalidInput("invalid scalar value"))?);
    }
    Ok(values)
}

/// Writes an enum-like value as its zero-based ordinal in `variants`.
///
/// Fails with [`ValueOutOfRange`](Error::ValueOutOfRange) when the value
/// is not among the variants.
pub fn write_enum<C: UniversalCoding, W: BitWrite, E: PartialEq>(
    writer: &mut CodedWriter<C, W>,
    variants: &[E],
    value: &E,
) -> Result<usize> {
    let ordinal = variants
        .iter()
        .position(|variant| variant == value)
        .ok_or(Error::ValueOutOfRange("value is not a variant"))?;
    writer.write_u32(ordinal as u32)
}

/// Reads an enum-like value written by [`write_enum`], resolving the
/// ordinal against a caller-supplied variant table.
pub fn read_enum<C: UniversalCoding, R: BitRead, E: Clone>(
    reader: &mut CodedReader<C, R>,
    variants: &[E],
) -> Result<E> {
    let ordinal = reader.read_u32()? as usize;
    variants
        .get(ordinal)
        .cloned()
        .ok_or(Error::ValueOutOfRange("ordinal beyond the variant table"))
}

/// Writes a list of enum-like values, as a length followed by the ordinal
/// of each element.
pub fn write_enum_list<C: UniversalCoding, W: BitWrite, E: PartialEq>(
    writer: &mut CodedWriter<C, W>,
    variants: &[E],
    values: &[E],
) -> Result<usize> {
    let mut count = writer.write_u32(values.len() as u32)?;
    for value in values {
        count += write_enum(writer, variants, value)?;
    }
    Ok(count)
}

/// Reads a list of enum-like values written by [`write_enum_list`].
pub fn read_enum_list<C: UniversalCoding, R: BitRead, E: Clone>(
    reader: &mut CodedReader<C, R>,
    variants: &[E],
) -> Result<Vec<E>> {
    let len = reader.read_u32()?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(read_enum(reader, variants)?);
    }
    Ok(values)
}

/// Runs `task` against a coded writer over a buffered file.
///
/// The bit stream is flushed after the task completes successfully; the
/// file is released on every exit path. I/O failures surface as
/// [`Error::Io`].
pub fn write_to_file<C, P, T, F>(path: P, coding: ExtendedCoding<C>, task: F) -> Result<T>
where
    C: UniversalCoding,
    P: AsRef<Path>,
    F: FnOnce(&mut CodedWriter<C, ByteBitWriter<BufWriter<File>>>) -> Result<T>,
{
    let file = File::create(path)?;
    let mut writer = CodedWriter::new(coding, ByteBitWriter::new(BufWriter::new(file)));
    let result = task(&mut writer)?;
    writer.writer_mut().flush()?;
    Ok(result)
}

/// Runs `task` against a coded reader over a buffered file.
///
/// The file is released on every exit path. I/O failures surface as
/// [`Error::Io`].
pub fn read_from_file<C, P, T, F>(path: P, coding: ExtendedCoding<C>, task: F) -> Result<T>
where
    C: UniversalCoding,
    P: AsRef<Path>,
    F: FnOnce(&mut CodedReader<C, ByteBitReader<BufReader<File>>>) -> Result<T>,
{
    let file = File::open(path)?;
    let mut reader = CodedReader::new(coding, ByteBitReader::new(BufReader::new(file)));
    task(&mut reader)
}
