/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of bit streams.

If you want to read or write bits directly from memory, use
[`MemBitReader`] and [`MemBitWriter`], which read from a byte slice and
write to a byte vector. If instead you have a standard
[`Read`](std::io::Read) or [`Write`](std::io::Write) byte stream, you can
wrap it in a [`ByteBitReader`] or [`ByteBitWriter`].

[`NullBitWriter`] discards the bits it receives and just keeps track of
their number, which is useful to measure the length of an encoding
without allocating storage for it.

## Examples

### Writing to and reading from a vector

```rust
use codings::prelude::*;

let mut writer = MemBitWriter::new();
writer.write_bits(0b1011, 4).unwrap();
let bytes = writer.into_bytes().unwrap();

let mut reader = MemBitReader::new(&bytes);
assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
```

### Reading from a file

```rust,no_run
use codings::prelude::*;
use std::io::BufReader;

let file = std::fs::File::open("data.bin").unwrap();
let mut reader = ByteBitReader::new(BufReader::new(file));
let value = reader.read_bits(16).unwrap();
```

*/

mod byte_adapter;
pub use byte_adapter::*;

mod mem;
pub use mem::*;

mod null;
pub use null::*;
