// SPDX-License-Identifier: MIT
//
// Plain-text output for dg-lint. Each function renders one command's result
// as a string so main only has to print it.

use std::fmt::Write;

use dg_color::Color;
use dg_theme::contrast::preferred_text_color;
use dg_theme::{ColorSystem, Palette, SemanticVariants, ValidationIssue, WcagReport};

fn mark(pass: bool) -> &'static str {
    if pass { "pass" } else { "FAIL" }
}

/// Contrast ratio plus every WCAG level for `fg` on `bg`.
pub fn contrast(fg: Color, bg: Color, report: &WcagReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{fg} on {bg}: {:.2}:1", report.ratio);
    let _ = writeln!(out, "  AA        {}", mark(report.aa));
    let _ = writeln!(out, "  AA large  {}", mark(report.aa_large));
    let _ = writeln!(out, "  AAA       {}", mark(report.aaa));
    let _ = writeln!(out, "  AAA large {}", mark(report.aaa_large));
    let _ = writeln!(out, "  text on {bg}: {}", preferred_text_color(bg).as_str());
    out
}

/// One line per shade: number, hex, CSS value.
pub fn palette(palette: &Palette) -> String {
    let mut out = String::new();
    for (shade, color) in palette.iter() {
        let _ = writeln!(out, "{:>4}  {color}  {}", shade.value(), palette.css(shade));
    }
    out
}

pub fn variants(variants: &SemanticVariants) -> String {
    let mut out = String::new();
    for (state, color) in variants.iter() {
        let _ = writeln!(out, "{:<9} {color}  {}", state.name(), color.to_css_rgb());
    }
    out
}

/// Lint findings followed by a one-line summary.
pub fn issues(name: &str, system: &ColorSystem, issues: &[ValidationIssue]) -> String {
    let mut out = String::new();
    for issue in issues {
        let _ = writeln!(out, "{issue}");
    }
    let shades = system.iter().count();
    if issues.is_empty() {
        let _ = writeln!(out, "{name}: {shades} shades checked, no issues");
    } else {
        let _ = writeln!(
            out,
            "{name}: {shades} shades checked, {} issue{}",
            issues.len(),
            if issues.len() == 1 { "" } else { "s" }
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_theme::builtin::builtin_system;
    use dg_theme::{IssueKind, LintPolicy, generate_palette, semantic_variants};
    use pretty_assertions::assert_eq;

    #[test]
    fn contrast_report() {
        let fg = Color::BLACK;
        let bg = Color::WHITE;
        let text = contrast(fg, bg, &WcagReport::between(fg, bg));
        assert!(text.starts_with("#000000 on #ffffff: 21.00:1\n"), "{text}");
        assert!(!text.contains("FAIL"));
        assert!(text.ends_with("text on #ffffff: dark\n"));
    }

    #[test]
    fn failing_levels_are_marked() {
        let fg = Color::rgb(0x3b, 0x82, 0xf6);
        let text = contrast(fg, Color::WHITE, &WcagReport::between(fg, Color::WHITE));
        assert_eq!(text.matches("FAIL").count(), 3, "{text}");
    }

    #[test]
    fn palette_lines() {
        let p = generate_palette("#3B82F6").unwrap();
        let text = palette(&p);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "  50  #ffffff  rgb(255, 255, 255)");
        assert_eq!(lines[5], " 500  #3b82f6  #3B82F6");
    }

    #[test]
    fn variant_lines() {
        let v = semantic_variants("#ef4444").unwrap();
        let text = variants(&v);
        assert_eq!(text.lines().nth(1), Some("hover     #db3030  rgb(219, 48, 48)"));
    }

    #[test]
    fn summary_line() {
        let system = builtin_system("generated").unwrap();
        let found = system.validate(&LintPolicy::default());
        let text = issues("generated", &system, &found);
        assert!(text.starts_with("[pure-black] Pure black detected at neutral-900\n"), "{text}");
        assert!(text.ends_with("generated: 77 shades checked, 4 issues\n"), "{text}");

        let dashgo = builtin_system("dashgo").unwrap();
        let clean = issues("dashgo", &dashgo, &dashgo.validate(&LintPolicy::default()));
        assert_eq!(clean, "dashgo: 77 shades checked, no issues\n");

        let one = [ValidationIssue::new(IssueKind::LowContrast, "too faint".into())];
        let text = issues("dashgo", &dashgo, &one);
        assert_eq!(text, "[low-contrast] too faint\ndashgo: 77 shades checked, 1 issue\n");
    }
}
