#![forbid(unsafe_code)]

//! Board configuration as data.
//!
//! [`BoardConfig`] collects the tunables of a board view (list axis, pointer
//! history length, reflow animation) into one struct that can be loaded from
//! TOML or JSON when the `config` feature is enabled.
//!
//! ```toml
//! axis = "inline"
//! pointer_history = 4
//!
//! [reflow]
//! enabled = true
//! transition_ms = 180
//! slot_extent = "measured"
//! ```
//!
//! ```rust,ignore
//! let config = BoardConfig::from_toml_file("board.toml")?;
//! ```
//!
//! Every field has a default, so a partial file only overrides what it
//! names. Loaders reject values that [`BoardConfig::validate`] flags.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sortboard_core::{Axis, DEFAULT_POINTER_HISTORY};
use sortboard_reflow::{ReflowConfig, SlotExtent};
#[cfg(feature = "config")]
use thiserror::Error;

/// Tunables for a [`BoardView`](crate::BoardView).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Layout direction of every list on the board.
    pub axis: Axis,
    /// Pointer samples kept for direction tracking.
    pub pointer_history: usize,
    /// Reflow animation. Its axis is overridden by [`BoardConfig::axis`].
    pub reflow: ReflowConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Block,
            pointer_history: DEFAULT_POINTER_HISTORY,
            reflow: ReflowConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Problems with this configuration, empty when it is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.pointer_history < 2 {
            issues.push(format!(
                "pointer_history must be at least 2, got {}",
                self.pointer_history
            ));
        }
        if let SlotExtent::Fixed(extent) = self.reflow.slot_extent
            && !(extent.is_finite() && extent > 0.0)
        {
            issues.push(format!(
                "reflow.slot_extent must be finite and positive, got {extent}"
            ));
        }
        issues
    }
}

#[cfg(feature = "config")]
impl BoardConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(issues))
        }
    }
}

/// Errors raised while loading a [`BoardConfig`].
#[cfg(feature = "config")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading board config: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid board config: {}", .0.join("; "))]
    Validation(Vec<String>),
}
