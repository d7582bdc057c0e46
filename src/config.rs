//! Timeline constants, with an optional read-only override file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Name used for the platform config directory.
pub const APP_NAME: &str = "LifeTimeline";

/// Immutable set of constants shared by layout, placement and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Age zero on the timeline.
    pub birth_date: NaiveDate,
    /// Physical length of one row, in centimetres.
    pub scale_length_cm: f64,
    /// Number of age rows (0..row_count).
    pub row_count: usize,
    /// Vertical distance between consecutive rows, in pixels.
    pub base_spacing: f32,
    /// Added below a row that carries at least one event.
    pub extra_spacing: f32,
    /// Left, right and top margin of the canvas.
    pub margin: f32,
    /// Screen density used to turn centimetres into pixels.
    pub pixels_per_inch: f32,
    /// Multiplier applied per wheel notch.
    pub zoom_step: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            birth_date: NaiveDate::from_ymd_opt(1997, 5, 3).unwrap_or_default(),
            scale_length_cm: 30.0,
            row_count: 100,
            base_spacing: 40.0,
            extra_spacing: 20.0,
            margin: 20.0,
            pixels_per_inch: 96.0,
            zoom_step: 1.1,
        }
    }
}

impl TimelineConfig {
    /// Pixels per centimetre at zoom 1.0.
    pub fn pixels_per_cm(&self) -> f32 {
        self.pixels_per_inch / 2.54
    }

    /// Reject values that would break the layout invariants
    /// (strictly increasing rows, a positive scale, a zoom step that moves).
    pub fn validate(&self) -> Result<()> {
        if self.row_count == 0 {
            return Err(TimelineError::InvalidConfig("row_count must be at least 1".into()));
        }
        if !(self.scale_length_cm.is_finite() && self.scale_length_cm > 0.0) {
            return Err(TimelineError::InvalidConfig(format!(
                "scale_length_cm must be positive, got {}",
                self.scale_length_cm
            )));
        }
        if !(self.base_spacing.is_finite() && self.base_spacing > 0.0) {
            return Err(TimelineError::InvalidConfig(format!(
                "base_spacing must be positive, got {}",
                self.base_spacing
            )));
        }
        if !(self.extra_spacing.is_finite() && self.extra_spacing >= 0.0) {
            return Err(TimelineError::InvalidConfig(format!(
                "extra_spacing must not be negative, got {}",
                self.extra_spacing
            )));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(TimelineError::InvalidConfig(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if !(self.pixels_per_inch.is_finite() && self.pixels_per_inch > 0.0) {
            return Err(TimelineError::InvalidConfig(format!(
                "pixels_per_inch must be positive, got {}",
                self.pixels_per_inch
            )));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(TimelineError::InvalidConfig(format!(
                "zoom_step must be greater than 1, got {}",
                self.zoom_step
            )));
        }
        Ok(())
    }

    /// Load the settings file from the platform config directory, falling back
    /// to defaults when it is missing or unusable.
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Read and validate a settings file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| TimelineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    fn settings_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = TimelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.birth_date, NaiveDate::from_ymd_opt(1997, 5, 3).unwrap());
        assert_eq!(config.row_count, 100);
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let config = TimelineConfig {
            base_spacing: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(TimelineError::InvalidConfig(_))));
    }

    #[test]
    fn zoom_step_must_grow() {
        let config = TimelineConfig {
            zoom_step: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_settings_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "birth_date": "2000-01-01", "scale_length_cm": 20.0 }}"#).unwrap();

        let config = TimelineConfig::load_from(file.path()).unwrap();
        assert_eq!(config.birth_date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(config.scale_length_cm, 20.0);
        assert_eq!(config.base_spacing, 40.0);
        assert_eq!(config.row_count, 100);
    }

    #[test]
    fn invalid_settings_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "row_count": 0 }}"#).unwrap();
        assert!(TimelineConfig::load_from(file.path()).is_err());
    }
}
