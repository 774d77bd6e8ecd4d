//! Grass field tuning parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Tuning parameters for a `GrassField`.
///
/// The two thresholds are independent: `cut_threshold` gates the expensive
/// whole-mask commit, `particle_threshold` gates the caller's one-shot
/// visual effect.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GrassFieldConfig {
    /// Sampling stride over the detail resolution. Higher builds faster at
    /// lower fidelity.
    pub precision_stride: usize,
    /// Summed density above which a cell holds no cuttable grass.
    pub density_cutoff: u32,
    /// Cut counts above this commit the renderable mask.
    pub cut_threshold: u32,
    /// Cut counts above this signal the caller to play a particle burst.
    pub particle_threshold: u32,
    /// Cut disc radius in world units.
    pub cut_radius: f32,
    /// Distance in front of the caster where the cut lands.
    pub forward_offset: f32,
    /// Accepted margin outside the grid for the cast pre-check.
    pub bounds_margin: f32,
}

impl Default for GrassFieldConfig {
    fn default() -> Self {
        Self {
            precision_stride: 4,
            density_cutoff: 4,
            cut_threshold: 2,
            particle_threshold: 8,
            cut_radius: 2.0,
            forward_offset: 1.5,
            bounds_margin: 2.0,
        }
    }
}

impl GrassFieldConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.precision_stride == 0 {
            return Err(Error::Config("precision_stride must be at least 1".into()));
        }
        if self.cut_radius < 0.0 {
            return Err(Error::Config("cut_radius must be non-negative".into()));
        }
        if self.bounds_margin < 0.0 {
            return Err(Error::Config("bounds_margin must be non-negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GrassFieldConfig::default();
        assert_eq!(config.precision_stride, 4);
        assert_eq!(config.cut_threshold, 2);
        assert_eq!(config.particle_threshold, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_stride() {
        let config = GrassFieldConfig {
            precision_stride: 0,
            ..GrassFieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let config = GrassFieldConfig {
            cut_radius: -1.0,
            ..GrassFieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grass.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "cut_radius": 3.5, "particle_threshold": 12 }}"#).unwrap();

        let config = GrassFieldConfig::from_json_file(&path).unwrap();
        assert_eq!(config.cut_radius, 3.5);
        assert_eq!(config.particle_threshold, 12);
        // Unspecified fields keep defaults
        assert_eq!(config.precision_stride, 4);
        assert_eq!(config.cut_threshold, 2);
    }

    #[test]
    fn test_from_json_file_missing() {
        assert!(GrassFieldConfig::from_json_file("/nonexistent/grass.json").is_err());
    }

    #[test]
    fn test_from_json_file_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grass.json");
        std::fs::write(&path, r#"{ "precision_stride": 0 }"#).unwrap();
        assert!(GrassFieldConfig::from_json_file(&path).is_err());
    }
}
