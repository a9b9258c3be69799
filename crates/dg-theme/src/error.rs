//! Error type for palette, variant, and theme-state operations.

use dg_color::ParseError;
use thiserror::Error;

use crate::palette::Shade;

/// Failures surfaced by `dg-theme`.
///
/// The fail-open helpers ([`contrast_ratio_str`], [`is_too_dark_for_large_areas`])
/// never produce one of these.
///
/// [`contrast_ratio_str`]: crate::contrast::contrast_ratio_str
/// [`is_too_dark_for_large_areas`]: crate::validate::is_too_dark_for_large_areas
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The anchor color for a palette or variant set did not parse. Nothing
    /// derived from it is usable, so generation stops here.
    #[error("invalid base color {input:?}")]
    InvalidBaseColor {
        input: String,
        #[source]
        source: ParseError,
    },

    /// One entry of an explicit token table did not parse.
    #[error("invalid color token for shade {shade}")]
    InvalidToken {
        shade: Shade,
        #[source]
        source: ParseError,
    },

    /// A shade number outside 50, 100, 200, ..., 900, 950.
    #[error("unknown shade {0}: expected one of 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950")]
    UnknownShade(u16),

    /// A color family name that is not one of the seven families.
    #[error("unknown color family {0:?}")]
    UnknownFamily(String),

    /// A theme mode other than `light`, `dark`, or `auto`.
    #[error("unknown theme mode {0:?}: expected light, dark, or auto")]
    UnknownThemeMode(String),

    /// An exported theme preference could not be read back.
    #[error("malformed theme preference")]
    Preference(#[from] serde_json::Error),
}
