//! WCAG 2.1 luminance and contrast checks.
//!
//! - Normal text: AA needs 4.5:1, AAA needs 7:1
//! - Large text (≥ 18pt, or ≥ 14pt bold): AA needs 3:1, AAA needs 4.5:1
//!
//! Luminance is computed in plain `f64` arithmetic, operation for operation
//! as the guideline writes it, so ratios reproduce exactly across platforms.

use dg_color::Color;
use dg_color::color::srgb_to_linear;

/// AA threshold for normal-size text.
pub const AA_NORMAL: f64 = 4.5;
/// AA threshold for large text.
pub const AA_LARGE: f64 = 3.0;
/// AAA threshold for normal-size text.
pub const AAA_NORMAL: f64 = 7.0;
/// AAA threshold for large text.
pub const AAA_LARGE: f64 = 4.5;

/// WCAG 2.1 relative luminance: each channel is linearized, then weighted
/// `0.2126 R + 0.7152 G + 0.0722 B`.
///
/// Black is 0.0 and white is 1.0; everything else lies between.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// WCAG 2.1 contrast ratio, `(L_max + 0.05) / (L_min + 0.05)`.
///
/// Symmetric in its arguments. Ranges from 1.0 (same luminance) to 21.0
/// (black on white).
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (l1, l2) = (relative_luminance(a), relative_luminance(b));
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// [`contrast_ratio`] on hex strings.
///
/// Fails open: if either string is not a `#RRGGBB` color the ratio is
/// reported as 1.0 (no contrast), which fails every threshold. Lint and
/// advisory code can call this on arbitrary style values without crashing;
/// callers that need to tell "unparseable" apart from "no contrast" should
/// parse first.
#[must_use]
pub fn contrast_ratio_str(a: &str, b: &str) -> f64 {
    match (Color::parse(a), Color::parse(b)) {
        (Ok(a), Ok(b)) => contrast_ratio(a, b),
        (a_res, b_res) => {
            tracing::debug!(
                a,
                b,
                a_ok = a_res.is_ok(),
                b_ok = b_res.is_ok(),
                "unparseable color in contrast check, reporting ratio 1"
            );
            1.0
        }
    }
}

/// Whether `fg` on `bg` meets WCAG AA (4.5:1, or 3:1 for large text).
#[must_use]
pub fn meets_aa(fg: Color, bg: Color, is_large_text: bool) -> bool {
    let min = if is_large_text { AA_LARGE } else { AA_NORMAL };
    contrast_ratio(fg, bg) >= min
}

/// Whether `fg` on `bg` meets WCAG AAA (7:1, or 4.5:1 for large text).
#[must_use]
pub fn meets_aaa(fg: Color, bg: Color, is_large_text: bool) -> bool {
    let min = if is_large_text { AAA_LARGE } else { AAA_NORMAL };
    contrast_ratio(fg, bg) >= min
}

// ---------------------------------------------------------------------------
// Text tone
// ---------------------------------------------------------------------------

/// Which family of text color to put on a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTone {
    Light,
    Dark,
}

impl TextTone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Pick light or dark text for `background` by luminance midpoint.
///
/// Backgrounds brighter than 0.5 get dark text. This is a two-way split,
/// not a search for the best ratio: mid-luminance backgrounds can come out
/// below AA either way.
#[must_use]
pub fn preferred_text_color(background: Color) -> TextTone {
    if relative_luminance(background) > 0.5 {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}

/// [`preferred_text_color`] on a hex string; unparseable input gets `Dark`.
#[must_use]
pub fn preferred_text_color_str(background: &str) -> TextTone {
    Color::parse(background).map_or(TextTone::Dark, preferred_text_color)
}

// ---------------------------------------------------------------------------
// WcagReport
// ---------------------------------------------------------------------------

/// Every WCAG pass/fail flag for one color pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WcagReport {
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

impl WcagReport {
    /// Classify an already computed ratio.
    #[must_use]
    pub fn evaluate(ratio: f64) -> Self {
        Self {
            ratio,
            aa: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }

    /// Compute and classify the ratio of `fg` against `bg`.
    #[must_use]
    pub fn between(fg: Color, bg: Color) -> Self {
        Self::evaluate(contrast_ratio(fg, bg))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
