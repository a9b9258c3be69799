//! # dg-theme — color accessibility engine for the dashgo design system
//!
//! Turns single base colors into complete, lint-checked color systems and
//! answers the WCAG questions the dashboard asks about them.
//!
//! # Architecture
//!
//! ```text
//! "#3B82F6"
//!     │  dg_color::Color::parse
//!     ▼
//! contrast.rs:  relative luminance, contrast ratio, AA/AAA predicates
//!     │
//!     ├──▶ palette.rs:   11-step ramp (50..950) by fixed channel offsets
//!     ├──▶ variants.rs:  hover / active / disabled interaction states
//!     │
//!     ▼
//! system.rs:    seven color families × eleven shades, total lookup
//!     │
//!     ▼
//! validate.rs:  pure-black / dark-area / low-contrast lint issues
//! ```
//!
//! `builtin.rs` ships the dashboard's own color systems and `mode.rs` holds
//! the light/dark/auto theme preference.
//!
//! # Color model
//!
//! Everything here works on 8-bit sRGB and WCAG 2.1 relative luminance.
//! Palette ramps are linear channel offsets, not perceptual lightness
//! steps; that is what the dashboard's visual baselines were built with.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod builtin;
pub mod contrast;
pub mod error;
pub mod mode;
pub mod palette;
pub mod system;
pub mod validate;
pub mod variants;

pub use contrast::{TextTone, WcagReport, contrast_ratio, relative_luminance};
pub use error::ThemeError;
pub use mode::{
    Appearance, FileStore, MemoryStore, PreferenceStore, ThemeChange, ThemeMode, ThemePreference,
    ThemeState,
};
pub use palette::{Palette, Shade, generate_palette};
pub use system::{Checks, ColorBases, ColorFamily, ColorSystem, LintPolicy};
pub use validate::{IssueKind, ValidationIssue};
pub use variants::{SemanticVariants, semantic_variants};
