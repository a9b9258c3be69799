// SPDX-License-Identifier: MIT
//
// dg-color — the color codec for the dashgo design system.
//
// Everything downstream (contrast math, palette ramps, lint passes) works on
// the 8-bit sRGB triple defined here. The external form is a six-digit hex
// string; the codec is deliberately strict about it so that a typo in a
// design token fails loudly at parse time instead of producing a silently
// wrong ramp later.
//
//   "#3B82F6" → parse → Color { r: 59, g: 130, b: 246 } → to_css_rgb → "rgb(59, 130, 246)"

pub mod color;
pub mod css;
pub mod error;

pub use color::Color;
pub use error::ParseError;
