// SPDX-License-Identifier: MIT
//
// Parse failures for the hex color codec.

use thiserror::Error;

/// Why a string could not be read as a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing to parse (empty, or just `#`).
    #[error("empty color string")]
    Empty,

    /// Wrong number of digits. Shorthand (`#fff`), alpha (`#ffffff80`) and
    /// named colors all land here.
    #[error("invalid hex color {input:?}: expected 6 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    /// Six characters, but one of them is not a hex digit.
    #[error("invalid hex color {input:?}: {found:?} at digit {position} is not hexadecimal")]
    InvalidDigit {
        input: String,
        position: usize,
        found: char,
    },
}
