// SPDX-License-Identifier: MIT
//
// dg-lint configuration.
//
// Read from `--config <path>` or, failing that, `dg-lint.toml` in the working
// directory. Every key is optional; an absent file means the dashgo builtin
// system linted with the default policy.
//
//   system = "dashgo"
//   [bases]   primary = "#3B82F6" ...      (overrides `system`)
//   [policy]  max_dark_steps, min_text_contrast, checks = ["pure-black", ...]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use dg_theme::builtin::{builtin_names, builtin_system};
use dg_theme::{Checks, ColorBases, ColorSystem, LintPolicy};
use serde::Deserialize;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "dg-lint.toml";

const DEFAULT_SYSTEM: &str = "default";

/// Report name for a system generated from `[bases]`.
const BASES_SYSTEM_NAME: &str = "configured bases";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Builtin color system to lint.
    pub system: Option<String>,
    /// Base colors to generate a system from; takes precedence over `system`.
    pub bases: Option<ColorBases>,
    pub policy: PolicyConfig,
}

/// The `[policy]` table. Unset keys keep the [`LintPolicy`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub max_dark_steps: Option<usize>,
    pub min_text_contrast: Option<f64>,
    /// Issue-kind names of the checks to run.
    pub checks: Option<Vec<String>>,
}

impl PolicyConfig {
    pub fn to_policy(&self) -> Result<LintPolicy> {
        let mut policy = LintPolicy::default();
        if let Some(steps) = self.max_dark_steps {
            policy.max_dark_steps = steps;
        }
        if let Some(ratio) = self.min_text_contrast {
            if !(1.0..=21.0).contains(&ratio) {
                bail!("min_text_contrast must be between 1 and 21, got {ratio}");
            }
            policy.min_text_contrast = ratio;
        }
        if let Some(names) = &self.checks {
            policy.checks = names.iter().try_fold(Checks::empty(), |acc, name| {
                Checks::from_kind_name(name)
                    .map(|check| acc | check)
                    .ok_or_else(|| {
                        anyhow!(
                            "unknown check '{name}' (expected pure-black, dark-area or low-contrast)"
                        )
                    })
            })?;
        }
        Ok(policy)
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load `explicit` if given, else `dg-lint.toml` from `dir` if present,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            tracing::info!(path = %local.display(), "using config");
            return Self::load(&local);
        }
        tracing::debug!("no config file, using defaults");
        Ok(Self::default())
    }

    /// Build the color system to lint, along with the name it is reported
    /// under.
    ///
    /// `override_name` (from `--system`) wins over everything in the file;
    /// otherwise `[bases]` wins over `system`.
    pub fn build_system(&self, override_name: Option<&str>) -> Result<(ColorSystem, String)> {
        if let (None, Some(bases)) = (override_name, &self.bases) {
            tracing::info!("generating color system from configured bases");
            return Ok((ColorSystem::from_bases(bases)?, BASES_SYSTEM_NAME.to_owned()));
        }
        let name = override_name
            .or(self.system.as_deref())
            .unwrap_or(DEFAULT_SYSTEM);
        tracing::info!(system = name, "using builtin color system");
        let system = builtin_system(name).ok_or_else(|| {
            anyhow!(
                "unknown color system '{name}' (available: {})",
                builtin_names().join(", ")
            )
        })?;
        Ok((system, name.to_owned()))
    }
}
