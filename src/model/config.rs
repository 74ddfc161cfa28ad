//! JSON choreography configuration.
//!
//! Every field has a default, so a partial file (or none) is valid.
//! Values are clamped on load; nothing is ever written back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::*;
use super::style::StyleConfig;
use crate::clamp;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable choreography parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChoreographyConfig {
    pub speed_ms_per_revolution: f64,
    pub start_angle_deg: f64,
    pub sweep_deg: f64,
    pub throw_duration_ms: f64,
    pub hold_duration_ms: f64,
    pub hold_nudge_px: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    pub center_x_ratio: f64,
    pub center_y_ratio: f64,
    pub default_target_ratio: f64,
    pub target_x_ratio: f64,
    pub release_x_ratio: f64,
    pub status_duration_ms: f64,
    pub tick_interval_ms: f64,
    pub style: StyleConfig,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            speed_ms_per_revolution: DEFAULT_SPEED_MS_PER_REVOLUTION,
            start_angle_deg: DEFAULT_START_ANGLE_DEG,
            sweep_deg: DEFAULT_SWEEP_DEG,
            throw_duration_ms: DEFAULT_THROW_DURATION_MS,
            hold_duration_ms: DEFAULT_HOLD_DURATION_MS,
            hold_nudge_px: DEFAULT_HOLD_NUDGE_PX,
            radius_x: DEFAULT_RADIUS_X,
            radius_y: DEFAULT_RADIUS_Y,
            center_x_ratio: DEFAULT_CENTER_X_RATIO,
            center_y_ratio: DEFAULT_CENTER_Y_RATIO,
            default_target_ratio: DEFAULT_TARGET_RATIO,
            target_x_ratio: DEFAULT_TARGET_X_RATIO,
            release_x_ratio: DEFAULT_RELEASE_X_RATIO,
            status_duration_ms: DEFAULT_STATUS_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            style: StyleConfig::default(),
        }
    }
}

impl ChoreographyConfig {
    /// Parse a JSON document and clamp the result.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate();
        Ok(config)
    }

    /// Load and clamp a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.speed_ms_per_revolution =
            clamp(self.speed_ms_per_revolution, MIN_SPEED_MS, MAX_SPEED_MS);
        self.start_angle_deg =
            finite_or(self.start_angle_deg, DEFAULT_START_ANGLE_DEG).rem_euclid(360.0);
        self.sweep_deg = clamp(self.sweep_deg, MIN_SWEEP_DEG, MAX_SWEEP_DEG);
        self.throw_duration_ms = clamp(self.throw_duration_ms, MIN_THROW_MS, MAX_THROW_MS);
        self.hold_duration_ms = clamp(self.hold_duration_ms, MIN_HOLD_MS, MAX_HOLD_MS);
        self.hold_nudge_px = clamp(self.hold_nudge_px, 0.0, MAX_HOLD_NUDGE_PX);
        self.radius_x = clamp(self.radius_x, 0.0, MAX_RADIUS);
        self.radius_y = clamp(self.radius_y, 0.0, MAX_RADIUS);
        self.center_x_ratio = clamp(self.center_x_ratio, 0.0, 1.0);
        self.center_y_ratio = clamp(self.center_y_ratio, 0.0, 1.0);
        self.default_target_ratio = clamp(self.default_target_ratio, 0.0, 1.0);
        self.target_x_ratio = clamp(self.target_x_ratio, 0.0, 1.0);
        self.release_x_ratio = clamp(self.release_x_ratio, 0.0, 1.0);
        self.status_duration_ms = clamp(self.status_duration_ms, MIN_STATUS_MS, MAX_STATUS_MS);
        self.tick_interval_ms = clamp(self.tick_interval_ms, MIN_TICK_MS, MAX_TICK_MS);
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}
