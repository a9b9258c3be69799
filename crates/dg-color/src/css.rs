// SPDX-License-Identifier: MIT
//
// CSS string helpers used by the dashboard's theme layer.
//
// These take raw strings because that is what style bindings hold. They
// fail open: a value that is not a hex color is passed through untouched,
// so a CSS variable or named color in a style binding keeps working.

use crate::color::Color;

/// Direction used by the dashboard's gradients unless a caller overrides it.
pub const DEFAULT_GRADIENT_DIRECTION: &str = "135deg";

/// Apply `opacity` to a hex color, producing `rgba(r, g, b, opacity)`.
///
/// Returns `color` unchanged when it does not parse as `#RRGGBB`.
#[must_use]
pub fn with_opacity(color: &str, opacity: f64) -> String {
    Color::parse(color).map_or_else(|_| color.to_owned(), |c| c.to_css_rgba(opacity))
}

/// A two-stop `linear-gradient()` from `from` at 0% to `to` at 100%.
///
/// The stops are inserted verbatim; any CSS color syntax works.
#[must_use]
pub fn linear_gradient(from: &str, to: &str, direction: &str) -> String {
    format!("linear-gradient({direction}, {from} 0%, {to} 100%)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opacity_on_hex() {
        assert_eq!(with_opacity("#3B82F6", 0.25), "rgba(59, 130, 246, 0.25)");
    }

    #[test]
    fn opacity_passes_through_unparseable() {
        assert_eq!(with_opacity("var(--primary)", 0.5), "var(--primary)");
        assert_eq!(with_opacity("red", 0.5), "red");
    }

    #[test]
    fn gradient_default_direction() {
        assert_eq!(
            linear_gradient("#3b82f6", "#8b5cf6", DEFAULT_GRADIENT_DIRECTION),
            "linear-gradient(135deg, #3b82f6 0%, #8b5cf6 100%)"
        );
    }

    #[test]
    fn gradient_custom_direction() {
        assert_eq!(
            linear_gradient("red", "blue", "to right"),
            "linear-gradient(to right, red 0%, blue 100%)"
        );
    }
}
