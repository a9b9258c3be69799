//! Palette ramps — eleven shades from one anchor color.
//!
//! A generated palette offsets every channel of the base color by a fixed
//! amount per shade and clamps to 0..=255. Shade 500 is the base itself.
//!
//! | shade  | 50   | 100  | 200  | 300 | 400 | 500 | 600 | 700 | 800  | 900  | 950  |
//! |--------|------|------|------|-----|-----|-----|-----|-----|------|------|------|
//! | offset | +200 | +150 | +100 | +50 | +25 | 0   | −25 | −50 | −100 | −150 | −200 |
//!
//! Because every channel moves in the same direction, luminance never
//! increases from shade 50 to shade 950. The steps are not perceptually
//! even, and near the clamps several shades can collapse onto white or
//! black; the table is kept as is because the dashboard's visual baselines
//! depend on it.

use std::fmt;
use std::ops::Index;

use dg_color::Color;

use crate::error::ThemeError;

// ---------------------------------------------------------------------------
// Shade
// ---------------------------------------------------------------------------

/// One of the eleven steps of a palette, lightest (`S50`) to darkest (`S950`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All shades, lightest first.
    pub const ALL: [Self; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// The conventional number, e.g. `500`.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Channel offset applied to the base color for this shade.
    #[must_use]
    pub const fn offset(self) -> i16 {
        match self {
            Self::S50 => 200,
            Self::S100 => 150,
            Self::S200 => 100,
            Self::S300 => 50,
            Self::S400 => 25,
            Self::S500 => 0,
            Self::S600 => -25,
            Self::S700 => -50,
            Self::S800 => -100,
            Self::S900 => -150,
            Self::S950 => -200,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u16> for Shade {
    type Error = ThemeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .ok_or(ThemeError::UnknownShade(value))
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Where a palette's colors came from. Decides how they render as CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    /// Offset ramp. Keeps the caller's spelling of the base for shade 500.
    Generated { base_input: String },
    /// Hand-written token table.
    Tokens,
}

/// A complete mapping from [`Shade`] to [`Color`].
///
/// Every shade is always present; indexing cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 11],
    origin: Origin,
}

impl Palette {
    /// Generate the offset ramp for `base`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidBaseColor`] if `base` is not a `#RRGGBB` color.
    /// No palette is produced in that case.
    pub fn generate(base: &str) -> Result<Self, ThemeError> {
        let anchor = Color::parse(base).map_err(|source| ThemeError::InvalidBaseColor {
            input: base.to_owned(),
            source,
        })?;

        Ok(Self {
            colors: Shade::ALL.map(|shade| anchor.offset(shade.offset())),
            origin: Origin::Generated {
                base_input: base.to_owned(),
            },
        })
    }

    /// Build a palette from an explicit token table, lightest first.
    ///
    /// Token tables are hand-tuned; unlike generated ramps they are not
    /// checked for luminance ordering.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidToken`] naming the first shade that does not parse.
    pub fn from_hex_steps(steps: [&str; 11]) -> Result<Self, ThemeError> {
        let mut colors = [Color::BLACK; 11];
        for (shade, token) in Shade::ALL.into_iter().zip(steps) {
            colors[shade.index()] = Color::parse(token)
                .map_err(|source| ThemeError::InvalidToken { shade, source })?;
        }
        Ok(Self {
            colors,
            origin: Origin::Tokens,
        })
    }

    /// The color at `shade`.
    #[must_use]
    pub const fn get(&self, shade: Shade) -> Color {
        self.colors[shade.index()]
    }

    /// Iterate `(shade, color)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Color)> + '_ {
        Shade::ALL.into_iter().map(|shade| (shade, self.get(shade)))
    }

    /// The CSS value the dashboard binds for `shade`.
    ///
    /// Generated ramps render as `rgb(r, g, b)`, except shade 500 which is
    /// the base exactly as the caller wrote it. Token palettes render as
    /// lowercase hex.
    #[must_use]
    pub fn css(&self, shade: Shade) -> String {
        match &self.origin {
            Origin::Generated { base_input } if shade == Shade::S500 => base_input.clone(),
            Origin::Generated { .. } => self.get(shade).to_css_rgb(),
            Origin::Tokens => self.get(shade).to_hex(),
        }
    }

    /// Whether this palette was produced by [`Palette::generate`].
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self.origin, Origin::Generated { .. })
    }
}

impl Index<Shade> for Palette {
    type Output = Color;

    fn index(&self, shade: Shade) -> &Color {
        &self.colors[shade.index()]
    }
}

/// Generate the offset ramp for `base`. See [`Palette::generate`].
///
/// # Errors
///
/// [`ThemeError::InvalidBaseColor`] if `base` is not a `#RRGGBB` color.
pub fn generate_palette(base: &str) -> Result<Palette, ThemeError> {
    Palette::generate(base)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::relative_luminance;
    use pretty_assertions::assert_eq;

    fn blue() -> Palette {
        generate_palette("#3B82F6").unwrap()
    }

    // ── Shade ───────────────────────────────────────────────────────

    #[test]
    fn shade_values_round_trip() {
        for shade in Shade::ALL {
            assert_eq!(Shade::try_from(shade.value()).unwrap(), shade);
        }
    }

    #[test]
    fn unknown_shade_rejected() {
        assert!(matches!(Shade::try_from(450), Err(ThemeError::UnknownShade(450))));
        assert!(matches!(Shade::try_from(0), Err(ThemeError::UnknownShade(0))));
    }

    #[test]
    fn shades_sorted_light_to_dark() {
        let mut sorted = Shade::ALL;
        sorted.sort();
        assert_eq!(sorted, Shade::ALL);
        assert!(Shade::ALL.windows(2).all(|w| w[0].offset() > w[1].offset()));
    }

    // ── Generation ──────────────────────────────────────────────────

    #[test]
    fn blue_ramp_matches_offset_table() {
        let p = blue();
        let expected: [(u8, u8, u8); 11] = [
            (255, 255, 255),
            (209, 255, 255),
            (159, 230, 255),
            (109, 180, 255),
            (84, 155, 255),
            (59, 130, 246),
            (34, 105, 221),
            (9, 80, 196),
            (0, 30, 146),
            (0, 0, 96),
            (0, 0, 46),
        ];
        let actual: Vec<_> = p.iter().map(|(_, c)| c.channels()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn anchor_is_base() {
        let p = blue();
        assert_eq!(p[Shade::S500], Color::rgb(59, 130, 246));
        assert_eq!(p.get(Shade::S500), p[Shade::S500]);
    }

    #[test]
    fn anchor_css_keeps_input_spelling() {
        let p = blue();
        assert_eq!(p.css(Shade::S500), "#3B82F6");
        assert_eq!(p.css(Shade::S600), "rgb(34, 105, 221)");
        assert_eq!(p.css(Shade::S50), "rgb(255, 255, 255)");

        let bare = generate_palette("3b82f6").unwrap();
        assert_eq!(bare.css(Shade::S500), "3b82f6");
    }

    #[test]
    fn luminance_never_increases() {
        let p = generate_palette("#10b981").unwrap();
        let lums: Vec<f64> = p.iter().map(|(_, c)| relative_luminance(c)).collect();
        assert!(lums.windows(2).all(|w| w[0] >= w[1]), "{lums:?}");
    }

    #[test]
    fn dark_base_collapses_to_black() {
        let p = generate_palette("#78716c").unwrap();
        assert_eq!(p[Shade::S900], Color::BLACK);
        assert_eq!(p[Shade::S950], Color::BLACK);
        assert_eq!(p[Shade::S800], Color::rgb(20, 13, 8));
    }

    #[test]
    fn invalid_base_fails() {
        let err = generate_palette("not-a-color").unwrap_err();
        assert!(
            matches!(&err, ThemeError::InvalidBaseColor { input, .. } if input == "not-a-color"),
            "{err:?}"
        );
    }

    #[test]
    fn shorthand_and_named_bases_fail() {
        for bad in ["#fff", "red", "green", "", "#12345g"] {
            assert!(
                matches!(generate_palette(bad), Err(ThemeError::InvalidBaseColor { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    // ── Token tables ────────────────────────────────────────────────

    #[test]
    fn tokens_render_as_hex() {
        let p = Palette::from_hex_steps([
            "#FAFAF9", "#f5f5f4", "#e7e5e4", "#d6d3d1", "#a8a29e", "#78716c", "#57534e",
            "#44403c", "#292524", "#1c1917", "#0c0a09",
        ])
        .unwrap();
        assert!(!p.is_generated());
        assert_eq!(p.css(Shade::S50), "#fafaf9");
        assert_eq!(p.css(Shade::S500), "#78716c");
        assert_eq!(p[Shade::S950], Color::rgb(0x0c, 0x0a, 0x09));
    }

    #[test]
    fn bad_token_names_shade() {
        let err = Palette::from_hex_steps([
            "#ffffff", "#eeeeee", "#dddddd", "#cccccc", "#bbbbbb", "#aaaaaa", "#999999",
            "#888888", "oops", "#666666", "#555555",
        ])
        .unwrap_err();
        assert!(
            matches!(err, ThemeError::InvalidToken { shade: Shade::S800, .. }),
            "{err:?}"
        );
    }
}
