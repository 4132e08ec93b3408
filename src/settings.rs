// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings - the policy knobs fixed at session construction.
//!
//! These are not protocol: hit-test radii, the spline's point budget, the
//! sampling resolution, the click timing budget, and the snap grid spacing.
//! Embedders can override the defaults from a TOML file. Visual styling
//! (colors, stroke widths) belongs to the renderer, not here.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Maximum number of anchor points on the spline
const MAX_POINTS: usize = 12;

/// Half-width of the box used to hit-test anchor points
const POINT_RADIUS: f64 = 10.0;

/// Half-width of the box used to hit-test tangent handles
const HANDLE_RADIUS: f64 = 6.0;

/// Bezier parameter step used when flattening a segment
const CURVE_RESOLUTION: f64 = 0.025;

/// A press released within this budget still counts as a click
const CLICK_DELAY_MS: u64 = 500;

/// Cell width of the snap-to-grid lattice
const GRID_CELL_SIZE: f64 = 20.0;

/// Errors raised while loading a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting: {0}")]
    Invalid(&'static str),
}

/// Editor policy knobs, fixed for the lifetime of a session
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Spline capacity; adding past it is a no-op
    pub max_points: usize,
    /// Half-width of the point hit-test box
    pub point_radius: f64,
    /// Half-width of the handle hit-test box
    pub handle_radius: f64,
    /// Parameter step for segment sampling, in (0, 1]
    pub curve_resolution: f64,
    /// Press-to-release budget distinguishing a click from a stalled press
    pub click_delay_ms: u64,
    /// Snap-to-grid cell width
    pub grid_cell_size: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS,
            point_radius: POINT_RADIUS,
            handle_radius: HANDLE_RADIUS,
            curve_resolution: CURVE_RESOLUTION,
            click_delay_ms: CLICK_DELAY_MS,
            grid_cell_size: GRID_CELL_SIZE,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; absent keys keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&raw)?;
        tracing::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.max_points == 0 {
            return Err(SettingsError::Invalid("max_points must be at least 1"));
        }
        if !(self.curve_resolution > 0.0 && self.curve_resolution <= 1.0) {
            return Err(SettingsError::Invalid(
                "curve_resolution must be in (0, 1]",
            ));
        }
        if self.point_radius <= 0.0 {
            return Err(SettingsError::Invalid("point_radius must be positive"));
        }
        if self.handle_radius <= 0.0 {
            return Err(SettingsError::Invalid("handle_radius must be positive"));
        }
        if self.grid_cell_size <= 0.0 {
            return Err(SettingsError::Invalid("grid_cell_size must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_points, 12);
        assert_eq!(settings.point_radius, 10.0);
        assert_eq!(settings.handle_radius, 6.0);
        assert_eq!(settings.curve_resolution, 0.025);
        assert_eq!(settings.click_delay_ms, 500);
        assert_eq!(settings.grid_cell_size, 20.0);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let settings = Settings::from_toml_str("max_points = 4\ngrid_cell_size = 8.0\n").unwrap();
        assert_eq!(settings.max_points, 4);
        assert_eq!(settings.grid_cell_size, 8.0);
        assert_eq!(settings.point_radius, 10.0);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let err = Settings::from_toml_str("curve_resolution = 0.0").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::from_toml_str("point_color = \"#aaaaaa\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = Settings::load(Path::new("/nonexistent/beziertool.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
