// SPDX-License-Identifier: MIT
//
// dg-lint — design-system color linter for the dashgo dashboard.
//
// Wires the two library crates into a command-line tool:
//
//   dg-color → hex parsing and formatting
//   dg-theme → contrast, palettes, variants, color systems, lint checks
//
// `lint` builds a color system (builtin or from configured base colors),
// runs the policy checks and exits with status 1 if anything was found, so
// it can gate CI. The other commands answer one-off questions about a color.

mod config;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dg_color::Color;
use dg_theme::builtin::builtin_names;
use dg_theme::{WcagReport, generate_palette, semantic_variants};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "dg-lint")]
#[command(version)]
#[command(about = "Lint dashgo color systems for accessibility and design safety")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (default: ./dg-lint.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a color system; exits with status 1 when issues are found
    Lint {
        /// Builtin system to lint, overriding the config file
        #[arg(short, long)]
        system: Option<String>,
    },

    /// Contrast ratio and WCAG levels for a text/background pair
    Contrast {
        /// Text color (#RRGGBB)
        fg: String,
        /// Background color (#RRGGBB)
        bg: String,
    },

    /// Print the 11-step palette generated from a base color
    Palette {
        /// Base color (#RRGGBB), becomes shade 500
        base: String,
    },

    /// Print hover/active/disabled variants of a base color
    Variants {
        /// Base color (#RRGGBB)
        base: String,
    },

    /// List builtin color systems
    Systems,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Lint { system } => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            let config = Config::discover(cli.config.as_deref(), &cwd)?;
            let (code, text) = lint(&config, system.as_deref())?;
            print!("{text}");
            Ok(code)
        }
        Commands::Contrast { fg, bg } => {
            let fg = parse_color(&fg)?;
            let bg = parse_color(&bg)?;
            print!("{}", report::contrast(fg, bg, &WcagReport::between(fg, bg)));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Palette { base } => {
            print!("{}", report::palette(&generate_palette(&base)?));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Variants { base } => {
            print!("{}", report::variants(&semantic_variants(&base)?));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Systems => {
            for name in builtin_names() {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Lint the configured system. Returns the exit status (failure when any
/// issue was found) and the report to print.
fn lint(config: &Config, system_override: Option<&str>) -> Result<(ExitCode, String)> {
    let policy = config.policy.to_policy()?;
    let (system, name) = config.build_system(system_override)?;

    tracing::debug!(?policy, "linting");
    let issues = system.validate(&policy);
    let code = if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };
    Ok((code, report::issues(&name, &system, &issues)))
}

fn parse_color(input: &str) -> Result<Color> {
    Color::parse(input).with_context(|| format!("invalid color '{input}'"))
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lint_with_override() {
        let cli = Cli::try_parse_from(["dg-lint", "-vv", "lint", "--system", "generated"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Lint { system: Some(ref s) } if s == "generated"));
    }

    #[test]
    fn parses_contrast_pair() {
        let cli = Cli::try_parse_from(["dg-lint", "contrast", "#000000", "#ffffff"]).unwrap();
        assert!(matches!(cli.command, Commands::Contrast { .. }));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["dg-lint", "lint", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("x.toml")));
    }

    #[test]
    fn clean_system_lints_successfully() {
        let (code, text) = lint(&Config::default(), None).unwrap();
        assert!(same_code(code, ExitCode::SUCCESS), "{text}");
        assert_eq!(text, "default: 77 shades checked, no issues\n");
    }

    #[test]
    fn issues_fail_the_lint() {
        let config = Config::from_toml("system = \"generated\"").unwrap();
        let (code, text) = lint(&config, None).unwrap();
        assert!(same_code(code, ExitCode::FAILURE), "{text}");
        assert!(text.ends_with("generated: 77 shades checked, 4 issues\n"), "{text}");
    }

    #[test]
    fn override_is_reported_by_name() {
        let config = Config::from_toml("[bases]\nneutral = \"#000000\"").unwrap();
        let (code, text) = lint(&config, Some("dashgo")).unwrap();
        assert!(same_code(code, ExitCode::SUCCESS), "{text}");
        assert!(text.starts_with("dashgo: "), "{text}");

        let (code, text) = lint(&config, None).unwrap();
        assert!(same_code(code, ExitCode::FAILURE));
        assert!(text.contains("configured bases: 77 shades checked"), "{text}");
    }

    #[test]
    fn bad_color_names_the_input() {
        let err = parse_color("#12345").unwrap_err();
        assert!(err.to_string().contains("#12345"));
    }
}
