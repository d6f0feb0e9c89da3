//! # Skyline Configuration
//!
//! Physical layout, face resolution, label and logo placement.
//! Loaded once at startup from an optional TOML file; every field has a
//! default so an empty file is a valid configuration.
//!
//! ```toml
//! [layout]
//! cell_size = 2.5
//! tier_height = 8.0
//!
//! [labels]
//! username_anchor = "center"
//! username_offset = 0.5
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SkylineError, SkylineResult};

/// Horizontal anchor of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Text starts at the anchor point.
    #[default]
    Left,
    /// Text is centred on the anchor point.
    Center,
    /// Text ends at the anchor point.
    Right,
}

impl Anchor {
    /// Fraction of the text width that lies left of the anchor point.
    #[inline]
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

/// Physical layout of one yearly solid, in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Footprint edge of one day's tower.
    pub cell_size: f64,
    /// Border between the tower grid and the plinth edge.
    pub base_margin: f64,
    /// Plinth height; also the height of the label face.
    pub base_height: f64,
    /// Height of one building tier.
    pub tier_height: f64,
    /// Minimum number of week columns the plinth is sized for.
    pub min_weeks: usize,
    /// Gap between consecutive years in a range.
    pub year_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: 2.5,
            base_margin: 4.0,
            base_height: 10.0,
            tier_height: 8.0,
            min_weeks: 53,
            year_spacing: 10.0,
        }
    }
}

/// Raster face onto which labels and the logo are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Horizontal voxel count across the face.
    pub voxel_resolution: u32,
    /// How far face voxels protrude, in millimeters.
    pub voxel_depth: f64,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            voxel_resolution: 2000,
            voxel_depth: 1.0,
        }
    }
}

/// Username and year label placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Username height in face pixels.
    pub username_font_size: f64,
    /// Username anchor.
    pub username_anchor: Anchor,
    /// Username anchor position as a fraction of face width.
    pub username_offset: f64,
    /// Year height in face pixels.
    pub year_font_size: f64,
    /// Year anchor.
    pub year_anchor: Anchor,
    /// Year anchor position as a fraction of face width.
    pub year_offset: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            username_font_size: 120.0,
            username_anchor: Anchor::Left,
            username_offset: 0.1,
            year_font_size: 100.0,
            year_anchor: Anchor::Right,
            year_offset: 0.97,
        }
    }
}

/// Logo placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Face pixels per logo pixel.
    pub scale: f64,
    /// Left edge as a fraction of face width.
    pub left_offset: f64,
    /// Top edge as a fraction of face height.
    pub top_offset: f64,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            scale: 3.0,
            left_offset: 0.03,
            top_offset: 0.15,
        }
    }
}

/// Where fonts and the logo come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding `primary.font`, `fallback.font` and `logo.png`.
    /// Embedded assets are used when unset.
    pub directory: Option<PathBuf>,
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkylineConfig {
    /// Physical layout.
    pub layout: LayoutConfig,
    /// Label face.
    pub face: FaceConfig,
    /// Text labels.
    pub labels: LabelConfig,
    /// Logo.
    pub logo: LogoConfig,
    /// Asset location.
    pub assets: AssetConfig,
}

impl SkylineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidConfig`] on syntax errors or rejected values.
    pub fn from_toml_str(text: &str) -> SkylineResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| SkylineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`SkylineError::Io`] if the file cannot be read, otherwise as
    /// [`SkylineConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> SkylineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SkylineError::io("failed to read config", path, e))?;
        Self::from_toml_str(&text)
    }

    /// Rejects dimensions that would produce degenerate geometry.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> SkylineResult<()> {
        let positive = [
            ("layout.cell_size", self.layout.cell_size),
            ("layout.base_height", self.layout.base_height),
            ("layout.tier_height", self.layout.tier_height),
            ("face.voxel_depth", self.face.voxel_depth),
            ("labels.username_font_size", self.labels.username_font_size),
            ("labels.year_font_size", self.labels.year_font_size),
            ("logo.scale", self.logo.scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SkylineError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let non_negative = [
            ("layout.base_margin", self.layout.base_margin),
            ("layout.year_spacing", self.layout.year_spacing),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SkylineError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.face.voxel_resolution == 0 {
            return Err(SkylineError::InvalidConfig(
                "face.voxel_resolution must be positive".to_string(),
            ));
        }
        if self.layout.min_weeks == 0 {
            return Err(SkylineError::InvalidConfig(
                "layout.min_weeks must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SkylineConfig::from_toml_str("").unwrap(), SkylineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SkylineConfig::from_toml_str(
            r#"
            [layout]
            tier_height = 4.0

            [labels]
            username_anchor = "center"
            "#,
        )
        .unwrap();
        assert!((config.layout.tier_height - 4.0).abs() < f64::EPSILON);
        assert!((config.layout.cell_size - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.labels.username_anchor, Anchor::Center);
        assert_eq!(config.labels.year_anchor, Anchor::Right);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = SkylineConfig::from_toml_str("[layout]\ncell_size = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("layout.cell_size"));
        assert!(SkylineConfig::from_toml_str("[face]\nvoxel_resolution = 0\n").is_err());
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            SkylineConfig::from_toml_str("[layout"),
            Err(SkylineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skyline.toml");
        std::fs::write(&path, "[logo]\nscale = 2.0\n").unwrap();
        let config = SkylineConfig::load(&path).unwrap();
        assert!((config.logo.scale - 2.0).abs() < f64::EPSILON);
        assert!(SkylineConfig::load(dir.path().join("missing.toml")).is_err());
    }
}
