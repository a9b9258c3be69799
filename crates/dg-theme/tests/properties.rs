//! Property-based tests for the color accessibility engine
//!
//! Uses proptest to check the WCAG math and the palette/variant generators
//! over arbitrary 8-bit colors.

use dg_color::Color;
use dg_theme::contrast::{meets_aa, meets_aaa};
use dg_theme::validate::is_too_dark_for_large_areas;
use dg_theme::{
    Palette, SemanticVariants, Shade, ThemeError, WcagReport, contrast_ratio, generate_palette,
    relative_luminance, semantic_variants,
};

use proptest::prelude::*;

const EPS: f64 = 1e-9;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any 24-bit color
fn color_strategy() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(Color::from)
}

/// A `#RRGGBB` string in either case
fn hex_strategy() -> impl Strategy<Value = String> {
    (color_strategy(), any::<bool>()).prop_map(|(c, upper)| {
        let hex = c.to_hex();
        if upper { hex.to_ascii_uppercase() } else { hex }
    })
}

/// Strings that are not six hex digits after an optional `#`
fn malformed_hex_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("#?[0-9a-fA-F]{0,5}").expect("valid regex"),
        prop::string::string_regex("#?[0-9a-fA-F]{7,9}").expect("valid regex"),
        prop::string::string_regex("#?[g-zG-Z]{6}").expect("valid regex"),
    ]
}

// ============================================================================
// Luminance and contrast
// ============================================================================

proptest! {
    /// Relative luminance stays in [0, 1]
    #[test]
    fn luminance_is_bounded(c in color_strategy()) {
        let l = relative_luminance(c);
        prop_assert!((0.0..=1.0).contains(&l), "{c}: {l}");
    }

    /// Contrast does not depend on argument order
    #[test]
    fn contrast_is_symmetric(a in color_strategy(), b in color_strategy()) {
        prop_assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < EPS);
    }

    /// Contrast lies in [1, 21] and a color against itself is exactly 1
    #[test]
    fn contrast_is_bounded(a in color_strategy(), b in color_strategy()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!(ratio >= 1.0 - EPS && ratio <= 21.0 + EPS, "{ratio}");
        prop_assert!((contrast_ratio(a, a) - 1.0).abs() < EPS);
    }

    /// Passing AAA implies passing AA, for both text sizes
    #[test]
    fn aaa_implies_aa(fg in color_strategy(), bg in color_strategy(), large in any::<bool>()) {
        if meets_aaa(fg, bg, large) {
            prop_assert!(meets_aa(fg, bg, large));
        }
        let report = WcagReport::between(fg, bg);
        prop_assert!(!report.aaa || report.aa);
        prop_assert!(!report.aa || report.aa_large);
    }
}

#[test]
fn black_on_white_is_21() {
    assert!((contrast_ratio(Color::BLACK, Color::WHITE) - 21.0).abs() < EPS);
}

#[test]
fn brand_blue_on_white() {
    let blue = Color::parse("#3B82F6").unwrap();
    let ratio = contrast_ratio(blue, Color::WHITE);
    assert!((ratio - 3.68).abs() < 0.01, "{ratio}");
    assert!(!meets_aa(blue, Color::WHITE, false));
    assert!(meets_aa(blue, Color::WHITE, true));
    assert!(!meets_aaa(blue, Color::WHITE, true));
}

// ============================================================================
// Palettes
// ============================================================================

proptest! {
    /// Shade 500 is the base color, for any spelling of it
    #[test]
    fn palette_is_anchored_on_base(hex in hex_strategy()) {
        let base = Color::parse(&hex).unwrap();
        let palette = generate_palette(&hex).unwrap();
        prop_assert_eq!(palette[Shade::S500], base);
        prop_assert_eq!(palette.css(Shade::S500), hex);
    }

    /// Every channel is non-increasing from 50 to 950, so luminance is too
    #[test]
    fn palette_darkens_monotonically(hex in hex_strategy()) {
        let palette = generate_palette(&hex).unwrap();
        let colors: Vec<Color> = palette.iter().map(|(_, c)| c).collect();
        for pair in colors.windows(2) {
            let (r0, g0, b0) = pair[0].channels();
            let (r1, g1, b1) = pair[1].channels();
            prop_assert!(r1 <= r0 && g1 <= g0 && b1 <= b0, "{} -> {}", pair[0], pair[1]);
            prop_assert!(relative_luminance(pair[1]) <= relative_luminance(pair[0]) + EPS);
        }
    }

    /// Each shade is the base shifted by that shade's offset
    #[test]
    fn palette_applies_offsets(c in color_strategy()) {
        let palette = Palette::generate(&c.to_hex()).unwrap();
        for shade in Shade::ALL {
            prop_assert_eq!(palette[shade], c.offset(shade.offset()));
        }
    }

    /// Malformed input never yields a palette
    #[test]
    fn malformed_base_is_rejected(input in malformed_hex_strategy()) {
        let invalid_base = matches!(
            generate_palette(&input),
            Err(ThemeError::InvalidBaseColor { .. })
        );
        prop_assert!(invalid_base, "{:?}", input);
    }

    /// The dark-area check never panics and agrees with luminance
    #[test]
    fn dark_area_matches_luminance(c in color_strategy()) {
        prop_assert_eq!(
            is_too_dark_for_large_areas(&c.to_hex()),
            relative_luminance(c) < 0.05
        );
    }
}

// ============================================================================
// Variants
// ============================================================================

proptest! {
    /// active <= hover <= default <= disabled, by luminance
    #[test]
    fn variants_are_ordered(hex in hex_strategy()) {
        let v = semantic_variants(&hex).unwrap();
        prop_assert_eq!(v, SemanticVariants::from_color(Color::parse(&hex).unwrap()));
        let lum = relative_luminance;
        prop_assert!(lum(v.active) <= lum(v.hover) + EPS);
        prop_assert!(lum(v.hover) <= lum(v.default) + EPS);
        prop_assert!(lum(v.default) <= lum(v.disabled) + EPS);
    }
}
