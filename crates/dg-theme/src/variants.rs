//! Interaction-state colors derived from one base color.
//!
//! Buttons, badges, and links use the base as-is, darken it for hover and
//! pressed states, and wash it out toward white when disabled.

use dg_color::Color;

use crate::error::ThemeError;

/// Channel offset for the hover state.
pub const HOVER_OFFSET: i16 = -20;
/// Channel offset for the active (pressed) state.
pub const ACTIVE_OFFSET: i16 = -40;
/// Channel offset for the disabled state.
pub const DISABLED_OFFSET: i16 = 100;

/// An interactive element's visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Default,
    Hover,
    Active,
    Disabled,
}

impl InteractionState {
    pub const ALL: [Self; 4] = [Self::Default, Self::Hover, Self::Active, Self::Disabled];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

/// The four state colors for one base color.
///
/// Ordered by luminance: `active <= hover <= default <= disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticVariants {
    pub default: Color,
    pub hover: Color,
    pub active: Color,
    pub disabled: Color,
}

impl SemanticVariants {
    /// Derive the state colors from an already parsed base.
    #[must_use]
    pub fn from_color(base: Color) -> Self {
        Self {
            default: base,
            hover: base.offset(HOVER_OFFSET),
            active: base.offset(ACTIVE_OFFSET),
            disabled: base.offset(DISABLED_OFFSET),
        }
    }

    /// The color for `state`.
    #[must_use]
    pub const fn get(&self, state: InteractionState) -> Color {
        match state {
            InteractionState::Default => self.default,
            InteractionState::Hover => self.hover,
            InteractionState::Active => self.active,
            InteractionState::Disabled => self.disabled,
        }
    }

    /// Iterate `(state, color)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (InteractionState, Color)> + '_ {
        InteractionState::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

/// Derive hover/active/disabled colors for `base`.
///
/// # Errors
///
/// [`ThemeError::InvalidBaseColor`] if `base` is not a `#RRGGBB` color.
pub fn semantic_variants(base: &str) -> Result<SemanticVariants, ThemeError> {
    Color::parse(base)
        .map(SemanticVariants::from_color)
        .map_err(|source| ThemeError::InvalidBaseColor {
            input: base.to_owned(),
            source,
        })
}
