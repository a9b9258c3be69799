//! Named color systems — ready-to-lint configurations.
//!
//! `dashgo` is the dashboard's hand-tuned token set: stone neutrals, a blue
//! primary, a violet secondary, and green/amber/red/sky status colors.
//! Only the neutral 800–950 surfaces drop below the dark-area luminance; the
//! colored ramps bottom out just above it.
//! `generated` runs the same brand colors through the offset ramp, which is
//! what the theme editor previews before tokens are hand-tuned.

use crate::error::ThemeError;
use crate::palette::Palette;
use crate::system::{ColorBases, ColorSystem};

const PRIMARY: [&str; 11] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3d99", "#1d398c",
];

const SECONDARY: [&str; 11] = [
    "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9",
    "#5b21b6", "#5620aa", "#501d9f",
];

const NEUTRAL: [&str; 11] = [
    "#fafaf9", "#f5f5f4", "#e7e5e4", "#d6d3d1", "#a8a29e", "#78716c", "#57534e", "#44403c",
    "#292524", "#1c1917", "#0c0a09",
];

const SUCCESS: [&str; 11] = [
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d", "#104a27",
];

const WARNING: [&str; 11] = [
    "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
    "#92400e", "#78350f", "#6b2e0c",
];

const ERROR: [&str; 11] = [
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#851d1d", "#7c1a1a",
];

const INFO: [&str; 11] = [
    "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1",
    "#075985", "#0c4a6e", "#0b4465",
];

fn dashgo_tokens() -> Result<ColorSystem, ThemeError> {
    Ok(ColorSystem {
        primary: Palette::from_hex_steps(PRIMARY)?,
        secondary: Palette::from_hex_steps(SECONDARY)?,
        neutral: Palette::from_hex_steps(NEUTRAL)?,
        success: Palette::from_hex_steps(SUCCESS)?,
        warning: Palette::from_hex_steps(WARNING)?,
        error: Palette::from_hex_steps(ERROR)?,
        info: Palette::from_hex_steps(INFO)?,
    })
}

/// Look up a builtin color system by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_system(name: &str) -> Option<ColorSystem> {
    let built = match name {
        "default" | "dashgo" => dashgo_tokens(),
        "generated" => ColorSystem::from_bases(&ColorBases::default()),
        _ => return None,
    };
    built
        .inspect_err(|err| tracing::error!(name, %err, "builtin color system failed to build"))
        .ok()
}

/// List all available builtin color system names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "dashgo", "generated"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
