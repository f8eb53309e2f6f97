//! Edit session of a currency-style amount input.
//!
//! While the field holds focus the displayed text belongs to the user: external
//! value changes are recorded but not shown. On blur the text is parsed,
//! clamped into the configured bounds and re-rendered in canonical form.

use super::locale_number::{format_grouped, parse_grouped};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountFieldError {
    #[error("invalid amount bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: u64, max: u64 },
}

/// Optional inclusive range applied when an edit is committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBounds {
    #[serde(default)]
    pub min: Option<u64>,
    #[serde(default)]
    pub max: Option<u64>,
}

impl AmountBounds {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Result<Self, AmountFieldError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), AmountFieldError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(AmountFieldError::InvalidBounds { min, max }),
            _ => Ok(()),
        }
    }

    /// The empty field has nothing to clamp and stays empty.
    pub fn clamp(&self, value: Option<u64>) -> Option<u64> {
        value.map(|mut v| {
            if let Some(min) = self.min {
                v = v.max(min);
            }
            if let Some(max) = self.max {
                v = v.min(max);
            }
            v
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing,
}

/// What the host element must do after `focus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEffect {
    /// Select the whole text so typing replaces it.
    SelectAll,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountField {
    value: Option<u64>,
    display: String,
    state: EditState,
    bounds: AmountBounds,
}

impl AmountField {
    pub fn new(value: Option<u64>, bounds: AmountBounds) -> Self {
        Self {
            value,
            display: format_grouped(value),
            state: EditState::Idle,
            bounds,
        }
    }

    pub fn value(&self) -> Option<u64> {
        self.value
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }

    pub fn bounds(&self) -> AmountBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: AmountBounds) {
        self.bounds = bounds;
    }

    /// Value pushed by the owner of the field.
    pub fn set_value(&mut self, value: Option<u64>) {
        self.value = value;
        if self.state == EditState::Idle {
            self.display = format_grouped(value);
        }
    }

    pub fn focus(&mut self) -> FocusEffect {
        match self.state {
            EditState::Idle => {
                self.state = EditState::Editing;
                FocusEffect::SelectAll
            }
            EditState::Editing => FocusEffect::None,
        }
    }

    /// Keystroke. Returns the parsed, unclamped value to report upstream.
    pub fn input(&mut self, text: &str) -> Option<u64> {
        let parsed = parse_grouped(text);
        self.display = format_grouped(parsed);
        self.value = parsed;
        parsed
    }

    /// Commits the edit. Returns the clamped value to report upstream.
    pub fn blur(&mut self) -> Option<u64> {
        if self.state == EditState::Idle {
            return self.value;
        }

        let committed = self.bounds.clamp(parse_grouped(&self.display));
        self.state = EditState::Idle;
        self.value = committed;
        self.display = format_grouped(committed);
        log::debug!("amount committed: {:?}", committed);
        committed
    }
}

impl Default for AmountField {
    fn default() -> Self {
        Self::new(None, AmountBounds::unbounded())
    }
}
