//! Color systems — seven families of eleven shades, and the lint pass that
//! polices them.
//!
//! Lookup is by `(ColorFamily, Shade)`, both closed enums, so every lookup
//! resolves to a color. A color system is either generated from one base
//! color per family or assembled from hand-written token palettes.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use dg_color::Color;
use serde::{Deserialize, Serialize};

use crate::contrast::{AA_NORMAL, contrast_ratio};
use crate::error::ThemeError;
use crate::palette::{Palette, Shade};
use crate::validate::{IssueKind, ValidationIssue, is_too_dark, pure_black_issues};

// ---------------------------------------------------------------------------
// ColorFamily
// ---------------------------------------------------------------------------

/// A named color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorFamily {
    Primary,
    Secondary,
    Neutral,
    Success,
    Warning,
    Error,
    Info,
}

impl ColorFamily {
    pub const ALL: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Neutral,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Whether the family carries status meaning (alerts, badges, toasts).
    #[must_use]
    pub const fn is_status(self) -> bool {
        matches!(self, Self::Success | Self::Warning | Self::Error | Self::Info)
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFamily {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ThemeError::UnknownFamily(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// ColorBases
// ---------------------------------------------------------------------------

/// One base color per family, as hex strings.
///
/// Deserializes from a table with any subset of the family names; missing
/// families fall back to the dashboard defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorBases {
    pub primary: String,
    pub secondary: String,
    pub neutral: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

impl ColorBases {
    /// The base hex string for `family`.
    #[must_use]
    pub fn get(&self, family: ColorFamily) -> &str {
        match family {
            ColorFamily::Primary => &self.primary,
            ColorFamily::Secondary => &self.secondary,
            ColorFamily::Neutral => &self.neutral,
            ColorFamily::Success => &self.success,
            ColorFamily::Warning => &self.warning,
            ColorFamily::Error => &self.error,
            ColorFamily::Info => &self.info,
        }
    }
}

impl Default for ColorBases {
    /// The dashboard's brand and status colors.
    fn default() -> Self {
        Self {
            primary: "#3B82F6".into(),
            secondary: "#8B5CF6".into(),
            neutral: "#78716C".into(),
            success: "#22C55E".into(),
            warning: "#F59E0B".into(),
            error: "#EF4444".into(),
            info: "#0EA5E9".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Lint policy
// ---------------------------------------------------------------------------

bitflags! {
    /// Which checks [`ColorSystem::validate`] runs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Checks: u8 {
        const PURE_BLACK   = 1 << 0;
        const DARK_AREA    = 1 << 1;
        const LOW_CONTRAST = 1 << 2;
    }
}

impl Checks {
    /// Look up a check by its issue-kind name (`pure-black`, `dark-area`,
    /// `low-contrast`).
    #[must_use]
    pub fn from_kind_name(name: &str) -> Option<Self> {
        match name {
            "pure-black" => Some(Self::PURE_BLACK),
            "dark-area" => Some(Self::DARK_AREA),
            "low-contrast" => Some(Self::LOW_CONTRAST),
            _ => None,
        }
    }
}

/// Shades that the dashboard uses for status text.
pub const TEXT_SHADES: [Shade; 3] = [Shade::S400, Shade::S500, Shade::S600];

/// Thresholds for a system-wide lint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LintPolicy {
    /// How many shades across the whole system may be too dark for large
    /// areas before an `ExcessiveDarkArea` issue is raised.
    pub max_dark_steps: usize,
    /// Minimum contrast a status text shade must reach against white or
    /// black, whichever is better.
    pub min_text_contrast: f64,
    pub checks: Checks,
}

impl Default for LintPolicy {
    fn default() -> Self {
        Self {
            max_dark_steps: 4,
            min_text_contrast: AA_NORMAL,
            checks: Checks::all(),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorSystem
// ---------------------------------------------------------------------------

/// A palette for each of the seven families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSystem {
    pub primary: Palette,
    pub secondary: Palette,
    pub neutral: Palette,
    pub success: Palette,
    pub warning: Palette,
    pub error: Palette,
    pub info: Palette,
}

impl ColorSystem {
    /// Generate every family's ramp from its base color.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidBaseColor`] for the first base (in
    /// [`ColorFamily::ALL`] order) that does not parse.
    pub fn from_bases(bases: &ColorBases) -> Result<Self, ThemeError> {
        let ramp = |family| Palette::generate(bases.get(family));
        Ok(Self {
            primary: ramp(ColorFamily::Primary)?,
            secondary: ramp(ColorFamily::Secondary)?,
            neutral: ramp(ColorFamily::Neutral)?,
            success: ramp(ColorFamily::Success)?,
            warning: ramp(ColorFamily::Warning)?,
            error: ramp(ColorFamily::Error)?,
            info: ramp(ColorFamily::Info)?,
        })
    }

    /// The palette for `family`.
    #[must_use]
    pub const fn palette(&self, family: ColorFamily) -> &Palette {
        match family {
            ColorFamily::Primary => &self.primary,
            ColorFamily::Secondary => &self.secondary,
            ColorFamily::Neutral => &self.neutral,
            ColorFamily::Success => &self.success,
            ColorFamily::Warning => &self.warning,
            ColorFamily::Error => &self.error,
            ColorFamily::Info => &self.info,
        }
    }

    /// The color at `(family, shade)`.
    #[must_use]
    pub const fn color(&self, family: ColorFamily, shade: Shade) -> Color {
        self.palette(family).get(shade)
    }

    /// A family's representative color (shade 500).
    #[must_use]
    pub const fn semantic(&self, family: ColorFamily) -> Color {
        self.color(family, Shade::S500)
    }

    /// Iterate every `(family, shade, color)`, family by family.
    pub fn iter(&self) -> impl Iterator<Item = (ColorFamily, Shade, Color)> + '_ {
        ColorFamily::ALL.into_iter().flat_map(move |family| {
            self.palette(family)
                .iter()
                .map(move |(shade, color)| (family, shade, color))
        })
    }

    /// Run the enabled checks of `policy` over the whole system.
    ///
    /// Issues come out grouped by check: pure black first, then dark area,
    /// then low contrast.
    #[must_use]
    pub fn validate(&self, policy: &LintPolicy) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if policy.checks.contains(Checks::PURE_BLACK) {
            for family in ColorFamily::ALL {
                issues.extend(pure_black_issues(self.palette(family), Some(family)));
            }
        }

        if policy.checks.contains(Checks::DARK_AREA) {
            let dark: Vec<String> = self
                .iter()
                .filter(|&(_, _, color)| is_too_dark(color))
                .map(|(family, shade, _)| format!("{family}-{shade}"))
                .collect();
            if dark.len() > policy.max_dark_steps {
                issues.push(ValidationIssue::new(
                    IssueKind::ExcessiveDarkArea,
                    format!(
                        "{} shades are too dark for large areas (limit {}): {}",
                        dark.len(),
                        policy.max_dark_steps,
                        dark.join(", ")
                    ),
                ));
            }
        }

        if policy.checks.contains(Checks::LOW_CONTRAST) {
            for family in ColorFamily::ALL.into_iter().filter(|f| f.is_status()) {
                for shade in TEXT_SHADES {
                    let color = self.color(family, shade);
                    let best = best_text_contrast(color);
                    if best < policy.min_text_contrast {
                        issues.push(
                            ValidationIssue::new(
                                IssueKind::LowContrast,
                                format!(
                                    "{family}-{shade} ({color}) reaches only {best:.2}:1 against white or black (need {:.2}:1)",
                                    policy.min_text_contrast
                                ),
                            )
                            .at(Some(family), shade),
                        );
                    }
                }
            }
        }

        tracing::debug!(count = issues.len(), "color system validated");
        issues
    }
}

/// The better of `color`'s contrast against white and against black.
///
/// Never below √21 ≈ 4.58: any color is at least that far from one end.
#[must_use]
pub fn best_text_contrast(color: Color) -> f64 {
    contrast_ratio(color, Color::WHITE).max(contrast_ratio(color, Color::BLACK))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
