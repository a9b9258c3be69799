// SPDX-License-Identifier: MIT
//
// dg-color color type — an 8-bit sRGB triple with a strict hex codec.
//
// The design system only ever deals in opaque sRGB colors written as
// `#RRGGBB`. There is no alpha channel and no wider gamut: the contrast
// engine follows WCAG 2.1, which is defined on sRGB, and the palette
// generator offsets raw channel values.
//
// Single-character variable names (r, g, b, c) are the standard convention
// in color code.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// Colors are plain values: `Copy`, compared channel by channel, no identity
/// beyond `(r, g, b)`.
///
/// # Examples
///
/// ```
/// use dg_color::Color;
///
/// let blue = Color::parse("#3B82F6").unwrap();
/// assert_eq!(blue, Color::rgb(59, 130, 246));
/// assert_eq!(blue.to_hex(), "#3b82f6");
/// assert_eq!(blue.to_css_rgb(), "rgb(59, 130, 246)");
///
/// // Channel offsets clamp instead of wrapping.
/// assert_eq!(blue.offset(-100), Color::rgb(0, 30, 146));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string, case-insensitive.
    ///
    /// Nothing else is accepted: no `#RGB` shorthand, no alpha digits, no
    /// named colors, no surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_hex(s)
    }

    /// The channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Whether this is exactly `#000000`.
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Add `delta` to every channel, clamping each to `0..=255`.
    ///
    /// This is the primitive behind palette ramps and interaction-state
    /// variants: positive deltas lighten, negative deltas darken.
    #[must_use]
    pub fn offset(self, delta: i16) -> Self {
        Self {
            r: shift_channel(self.r, delta),
            g: shift_channel(self.g, delta),
            b: shift_channel(self.b, delta),
        }
    }

    /// Channels normalized to `0.0..=1.0`.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// CSS functional notation, `rgb(r, g, b)`.
    #[must_use]
    pub fn to_css_rgb(self) -> String {
        let Self { r, g, b } = self;
        format!("rgb({r}, {g}, {b})")
    }

    /// CSS functional notation with alpha, `rgba(r, g, b, a)`.
    ///
    /// `alpha` is clamped to `0.0..=1.0`; NaN is treated as fully opaque.
    #[must_use]
    pub fn to_css_rgba(self, alpha: f64) -> String {
        let Self { r, g, b } = self;
        let a = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        format!("rgba({r}, {g}, {b}, {a})")
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

// ─── sRGB Transfer Function ──────────────────────────────────────────────────
//
// WCAG 2.1 specifies the linearization threshold as 0.03928 (taken from an
// early sRGB draft) rather than the IEC 61966-2-1 value of 0.04045. No 8-bit
// channel value falls between the two, so the results are identical for
// every Color.

/// Convert a single normalized sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(input: &str) -> Result<Color, ParseError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    let len = digits.chars().count();
    if len != 6 {
        return Err(ParseError::InvalidLength {
            input: input.to_owned(),
            len,
        });
    }

    let mut nibbles = [0u8; 6];
    for (position, (slot, found)) in nibbles.iter_mut().zip(digits.chars()).enumerate() {
        *slot = hex_digit(found).ok_or_else(|| ParseError::InvalidDigit {
            input: input.to_owned(),
            position,
            found,
        })?;
    }

    Ok(Color::rgb(
        nibbles[0] << 4 | nibbles[1],
        nibbles[2] << 4 | nibbles[3],
        nibbles[4] << 4 | nibbles[5],
    ))
}

#[inline]
const fn hex_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shift_channel(value: u8, delta: i16) -> u8 {
    // Safe: clamp guarantees 0 <= sum <= 255 before the cast.
    (i16::from(value) + delta).clamp(0, 255) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
