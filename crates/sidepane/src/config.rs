//! Tunable container parameters.
//!
//! [`ContainerConfig`] collects every number the container would otherwise
//! hardcode. `ContainerConfig::default()` reproduces the stock behavior:
//! 300-wide side panes, a 500 units/sec flick threshold, and a 500ms spring.
//!
//! # Loading
//!
//! With the `config-file` feature:
//!
//! ```toml
//! left_width = 280.0
//! right_width = 250.0
//! preferred_dim_side = "left"
//! transition_curve = "ease_out"
//! ```
//!
//! ```rust,ignore
//! let config = ContainerConfig::from_toml_file("sidepane.toml")?;
//! ```

#[cfg(feature = "config-file")]
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sidepane_core::animation::{TransitionCurve, TransitionSpec};
use sidepane_core::gesture::PanConfig;

use crate::position::PanePosition;

/// Default width of either side pane.
pub const DEFAULT_PANE_WIDTH: f64 = 300.0;

/// Release speed above which a drag counts as a flick.
pub const FLICK_VELOCITY_THRESHOLD: f64 = 500.0;

/// Container tunables. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Width used when setup does not give the left pane one.
    pub left_width: f64,
    /// Width used when setup does not give the right pane one.
    pub right_width: f64,
    /// Horizontal release speed (units/sec) above which a drag is a flick.
    pub velocity_threshold: f64,
    /// Duration of the settle transition in milliseconds.
    pub transition_duration_ms: u64,
    /// Shape of the settle transition.
    pub transition_curve: TransitionCurve,
    /// Side whose reveal drives the dim overlay; `none` leaves it alone.
    /// Any value other than `left` tracks the right pane's reveal.
    pub preferred_dim_side: PanePosition,
    /// Distance a pointer must travel before a pan begins.
    pub pan_slop: f64,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            left_width: DEFAULT_PANE_WIDTH,
            right_width: DEFAULT_PANE_WIDTH,
            velocity_threshold: FLICK_VELOCITY_THRESHOLD,
            transition_duration_ms: 500,
            transition_curve: TransitionCurve::Spring,
            preferred_dim_side: PanePosition::None,
            pan_slop: PanConfig::default().slop,
        }
    }
}

impl ContainerConfig {
    /// The settle transition described by this config.
    #[must_use]
    pub fn transition(&self) -> TransitionSpec {
        TransitionSpec::new(
            Duration::from_millis(self.transition_duration_ms),
            self.transition_curve,
        )
    }

    /// Recognizer thresholds described by this config.
    #[must_use]
    pub fn pan(&self) -> PanConfig {
        PanConfig {
            slop: self.pan_slop,
            ..PanConfig::default()
        }
    }

    /// Check every parameter. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, width) in [("left_width", self.left_width), ("right_width", self.right_width)] {
            if !width.is_finite() || width <= 0.0 {
                errors.push(format!("{name} must be finite and > 0, got {width}"));
            }
        }

        if !self.velocity_threshold.is_finite() || self.velocity_threshold < 0.0 {
            errors.push(format!(
                "velocity_threshold must be finite and >= 0, got {}",
                self.velocity_threshold
            ));
        }

        if !self.pan_slop.is_finite() || self.pan_slop < 0.0 {
            errors.push(format!("pan_slop must be finite and >= 0, got {}", self.pan_slop));
        }

        errors
    }

    /// Validate, turning a non-empty error list into [`ConfigError::Validation`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)
            .map_err(ConfigError::Toml)?
            .validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)
            .map_err(ConfigError::Json)?
            .validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }
}

/// Errors from loading or validating a [`ContainerConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-file")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config-file")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
