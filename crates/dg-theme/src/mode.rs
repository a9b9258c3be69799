//! Theme mode — the user's light/dark/auto preference.
//!
//! [`ThemeState`] is a single owner of the preference: it reads the
//! persisted value once at construction, writes it back on every change, and
//! tells subscribers when either the chosen mode or the effective appearance
//! changes. `Auto` follows the system appearance, which the host reports
//! through [`ThemeState::set_system_appearance`].

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

// ---------------------------------------------------------------------------
// ThemeMode / Appearance
// ---------------------------------------------------------------------------

/// What the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the system appearance.
    #[default]
    Auto,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Capitalized label for menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }

    /// The next mode in the light → dark → auto → light cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
            Self::Auto => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            _ => Err(ThemeError::UnknownThemeMode(s.to_owned())),
        }
    }
}

/// What is actually on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Browser chrome color for this appearance (neutral 50 / neutral 950).
    #[must_use]
    pub const fn meta_theme_color(self) -> &'static str {
        match self {
            Self::Light => "#FAFAF9",
            Self::Dark => "#0C0A09",
        }
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// Where the preference lives between sessions.
pub trait PreferenceStore {
    /// The stored value, if any.
    fn load(&self) -> Option<String>;

    /// Replace the stored value. Failures are the store's to report; the
    /// in-memory state stays authoritative either way.
    fn save(&mut self, value: &str);
}

/// A store that forgets everything when dropped. Useful for tests and for
/// hosts without persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_owned());
    }
}

/// A store backed by a single small text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents.trim().to_owned()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "could not read theme preference");
                None
            }
        }
    }

    fn save(&mut self, value: &str) {
        let result = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(&self.path, value));
        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), %err, "could not persist theme preference");
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeState
// ---------------------------------------------------------------------------

/// Delivered to subscribers after the mode or appearance changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    pub mode: ThemeMode,
    pub effective: Appearance,
}

/// Handle returned by [`ThemeState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(ThemeChange)>;

/// A snapshot of the preference that can be moved between installs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub theme: ThemeMode,
    pub system_theme: Appearance,
    /// Milliseconds since the Unix epoch when the snapshot was taken.
    pub timestamp: u64,
}

impl ThemePreference {
    /// Serialize as JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures (none are expected for this type).
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot produced by [`ThemePreference::to_json`].
    ///
    /// # Errors
    ///
    /// [`ThemeError::Preference`] for malformed JSON or an unknown mode.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The owned light/dark/auto state.
pub struct ThemeState<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
    system: Appearance,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Start from the persisted preference, or `Auto` when there is none or
    /// it is not a valid mode.
    pub fn init(store: S, system: Appearance) -> Self {
        let mode = match store.load() {
            Some(stored) => stored.parse::<ThemeMode>().unwrap_or_else(|err: ThemeError| {
                tracing::debug!(%err, "ignoring stored theme preference");
                ThemeMode::Auto
            }),
            None => ThemeMode::Auto,
        };
        Self {
            store,
            mode,
            system,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// The mode the user picked.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The appearance last reported by the system.
    #[must_use]
    pub const fn system_appearance(&self) -> Appearance {
        self.system
    }

    /// What is on screen: the chosen mode, with `Auto` resolved.
    #[must_use]
    pub const fn effective(&self) -> Appearance {
        match self.mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::Auto => self.system,
        }
    }

    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self.mode, ThemeMode::Auto)
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self.effective(), Appearance::Dark)
    }

    /// Pick `light` or `dark` by the effective appearance.
    pub fn theme_aware<T>(&self, light: T, dark: T) -> T {
        match self.effective() {
            Appearance::Light => light,
            Appearance::Dark => dark,
        }
    }

    /// Browser chrome color for the effective appearance.
    #[must_use]
    pub const fn meta_theme_color(&self) -> &'static str {
        self.effective().meta_theme_color()
    }

    /// Label of the chosen mode.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.mode.label()
    }

    /// Choose a mode. Persists and notifies only if it differs from the
    /// current one.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if mode == self.mode {
            return;
        }
        let before = self.effective();
        self.mode = mode;
        self.store.save(mode.as_str());
        tracing::debug!(%mode, "theme mode changed");
        self.notify(before, true);
    }

    /// Step through light → dark → auto.
    pub fn cycle(&mut self) {
        self.set_mode(self.mode.next());
    }

    /// Switch to the opposite of what is on screen, as an explicit mode.
    pub fn toggle_light_dark(&mut self) {
        let target = match self.effective() {
            Appearance::Light => ThemeMode::Dark,
            Appearance::Dark => ThemeMode::Light,
        };
        self.set_mode(target);
    }

    /// Go back to following the system.
    pub fn reset_to_system(&mut self) {
        self.set_mode(ThemeMode::Auto);
    }

    /// Record a system appearance change. Only visible when in `Auto`.
    pub fn set_system_appearance(&mut self, system: Appearance) {
        if system == self.system {
            return;
        }
        let before = self.effective();
        self.system = system;
        self.notify(before, false);
    }

    /// Register `callback` for [`ThemeChange`]s.
    pub fn subscribe(&mut self, callback: impl FnMut(ThemeChange) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Snapshot the preference.
    #[must_use]
    pub fn export_preference(&self) -> ThemePreference {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        ThemePreference {
            theme: self.mode,
            system_theme: self.system,
            timestamp,
        }
    }

    /// Apply a snapshot's mode. The snapshot's system appearance is
    /// informational; the live system value is kept.
    pub fn import_preference(&mut self, preference: &ThemePreference) {
        self.set_mode(preference.theme);
    }

    /// Give the store back, e.g. to inspect what was persisted.
    pub fn into_store(self) -> S {
        self.store
    }

    fn notify(&mut self, before: Appearance, mode_changed: bool) {
        let change = ThemeChange {
            mode: self.mode,
            effective: self.effective(),
        };
        if !mode_changed && change.effective == before {
            return;
        }
        for (_, callback) in &mut self.subscribers {
            callback(change);
        }
    }
}

impl<S: PreferenceStore + fmt::Debug> fmt::Debug for ThemeState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("store", &self.store)
            .field("mode", &self.mode)
            .field("system", &self.system)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
