//! Design-safety checks.
//!
//! The design system avoids pure black entirely and keeps near-black tones
//! to a handful of shades, since large dark surfaces read as "broken" on
//! most displays. These checks produce issue records; deciding how many
//! issues are acceptable is up to the caller.

use std::fmt;

use dg_color::Color;

use crate::contrast::relative_luminance;
use crate::palette::{Palette, Shade};
use crate::system::ColorFamily;

/// Colors below this luminance are too dark to fill large areas.
pub const DARK_AREA_LUMINANCE: f64 = 0.05;

/// Whether `color` spells pure black: `000000` or `000`, any case, with or
/// without a leading `#`.
///
/// This is a spelling check and accepts the `#000` shorthand that
/// [`Color::parse`] rejects, so a shorthand black in a stylesheet is still
/// caught. Typed colors use [`Color::is_black`].
#[must_use]
pub fn is_pure_black(color: &str) -> bool {
    let normalized = color.to_ascii_lowercase().replacen('#', "", 1);
    normalized == "000000" || normalized == "000"
}

/// Whether `color` is dark enough (luminance below 0.05) that it should not
/// be used as a large background.
#[must_use]
pub fn is_too_dark(color: Color) -> bool {
    relative_luminance(color) < DARK_AREA_LUMINANCE
}

/// [`is_too_dark`] on a hex string.
///
/// Advisory only, so it fails open: unparseable input returns `false`.
#[must_use]
pub fn is_too_dark_for_large_areas(color: &str) -> bool {
    Color::parse(color).is_ok_and(is_too_dark)
}

// ---------------------------------------------------------------------------
// ValidationIssue
// ---------------------------------------------------------------------------

/// The kind of policy violation found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// A shade is exactly `#000000`.
    PureBlack,
    /// Too many shades are too dark for large areas.
    ExcessiveDarkArea,
    /// A text-role shade cannot reach the required contrast against either
    /// white or black.
    LowContrast,
}

impl IssueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PureBlack => "pure-black",
            Self::ExcessiveDarkArea => "dark-area",
            Self::LowContrast => "low-contrast",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub description: String,
    /// Family the issue was raised for, when the check is per family.
    pub family: Option<ColorFamily>,
    /// Shade the issue was raised for, when the check is per shade.
    pub shade: Option<Shade>,
}

impl ValidationIssue {
    #[must_use]
    pub const fn new(kind: IssueKind, description: String) -> Self {
        Self {
            kind,
            description,
            family: None,
            shade: None,
        }
    }

    #[must_use]
    pub const fn at(mut self, family: Option<ColorFamily>, shade: Shade) -> Self {
        self.family = family;
        self.shade = Some(shade);
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.description)
    }
}

/// Flag every shade of `palette` that is pure black.
#[must_use]
pub fn validate_palette(palette: &Palette) -> Vec<ValidationIssue> {
    pure_black_issues(palette, None)
}

pub(crate) fn pure_black_issues(
    palette: &Palette,
    family: Option<ColorFamily>,
) -> Vec<ValidationIssue> {
    palette
        .iter()
        .filter(|(_, color)| color.is_black())
        .map(|(shade, _)| {
            let place = family.map_or_else(
                || format!("shade {shade}"),
                |family| format!("{family}-{shade}"),
            );
            ValidationIssue::new(
                IssueKind::PureBlack,
                format!("Pure black detected at {place}"),
            )
            .at(family, shade)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::generate_palette;
    use pretty_assertions::assert_eq;

    // ── Pure black ──────────────────────────────────────────────────

    #[test]
    fn pure_black_spellings() {
        assert!(is_pure_black("#000000"));
        assert!(is_pure_black("000000"));
        assert!(is_pure_black("#000"));
        assert!(is_pure_black("000"));
    }

    #[test]
    fn near_black_is_not_pure_black() {
        assert!(!is_pure_black("#010101"));
        assert!(!is_pure_black("#0c0a09"));
        assert!(!is_pure_black("#0000"));
        assert!(!is_pure_black("black"));
        assert!(!is_pure_black(""));
    }

    // ── Dark areas ──────────────────────────────────────────────────

    #[test]
    fn near_black_is_too_dark() {
        assert!(is_too_dark_for_large_areas("#0c0a09"));
        assert!(is_too_dark_for_large_areas("#000000"));
        assert!(is_too_dark_for_large_areas("#1c1917"));
    }

    #[test]
    fn mid_tones_are_fine() {
        assert!(!is_too_dark_for_large_areas("#44403c"));
        assert!(!is_too_dark_for_large_areas("#3b82f6"));
        assert!(!is_too_dark_for_large_areas("#ffffff"));
    }

    #[test]
    fn too_dark_fails_open() {
        assert!(!is_too_dark_for_large_areas("#000"));
        assert!(!is_too_dark_for_large_areas("black"));
    }

    // ── Palette validation ──────────────────────────────────────────

    #[test]
    fn bright_palette_is_clean() {
        let p = generate_palette("#3B82F6").unwrap();
        assert!(validate_palette(&p).is_empty());
    }

    #[test]
    fn one_issue_per_black_shade() {
        let p = generate_palette("#78716c").unwrap();
        let issues = validate_palette(&p);
        let shades: Vec<_> = issues.iter().map(|i| i.shade).collect();
        assert_eq!(shades, [Some(Shade::S900), Some(Shade::S950)]);
        assert!(issues.iter().all(|i| i.kind == IssueKind::PureBlack));
        assert!(issues.iter().all(|i| i.family.is_none()));
        assert_eq!(issues[0].description, "Pure black detected at shade 900");
    }

    #[test]
    fn issue_display() {
        let issue = ValidationIssue::new(IssueKind::LowContrast, "too faint".into());
        assert_eq!(issue.to_string(), "[low-contrast] too faint");
    }
}
