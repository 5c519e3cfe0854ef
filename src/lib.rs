/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]

pub mod coded;
pub mod codes;
pub mod error;
pub mod frequencies;
pub mod impls;
pub mod traits;

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::coded::*;
    pub use crate::codes::*;
    pub use crate::error::*;
    pub use crate::frequencies::*;
    pub use crate::impls::*;
    pub use crate::traits::*;
}
