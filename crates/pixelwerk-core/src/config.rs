// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement configuration, persisted as pretty-printed JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PixelwerkError, Result};
use crate::types::{BorderPolicy, OutputFormat, SHARPEN_KERNEL, ToneParameters};

/// Default file name for the enhanced image when no output path is given.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "enhanced-image.jpg";

/// Default JPEG quality (1-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Persistent enhancement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Brightness/contrast factors for the tone pass.
    pub tone: ToneParameters,
    /// Sharpening kernel as a list of rows. Must be square with an odd side.
    pub kernel: Vec<Vec<f64>>,
    /// Contents of the border ring the kernel cannot reach.
    pub border: BorderPolicy,
    /// Container used when writing the result.
    pub output_format: OutputFormat,
    /// JPEG quality (1-100). Ignored for PNG.
    pub jpeg_quality: u8,
    /// File name used when the caller gives no explicit output path.
    pub output_file_name: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            tone: ToneParameters::default(),
            kernel: SHARPEN_KERNEL.iter().map(|row| row.to_vec()).collect(),
            border: BorderPolicy::default(),
            output_format: OutputFormat::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.into(),
        }
    }
}

impl EnhanceConfig {
    /// Load a configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Check the settings that are not validated elsewhere. The kernel shape
    /// is checked when the kernel itself is built.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PixelwerkError::Config(format!(
                "jpeg_quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if self.output_file_name.trim().is_empty() {
            return Err(PixelwerkError::Config(
                "output_file_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixelwerk.json");

        let mut config = EnhanceConfig::default();
        config.tone = ToneParameters::new(1.3, 0.8);
        config.border = BorderPolicy::Zero;
        config.output_format = OutputFormat::Png;
        config.save(&path).unwrap();

        let loaded = EnhanceConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "tone": { "brightness_factor": 2.0 } }"#).unwrap();

        let loaded = EnhanceConfig::load(&path).unwrap();
        assert_eq!(loaded.tone.brightness_factor, 2.0);
        assert_eq!(loaded.tone.contrast_factor, 1.0);
        assert_eq!(loaded.kernel, EnhanceConfig::default().kernel);
        assert_eq!(loaded.kernel[1], vec![-0.5, 3.0, -0.5]);
        assert_eq!(loaded.output_file_name, DEFAULT_OUTPUT_FILE_NAME);
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        let config = EnhanceConfig {
            jpeg_quality: 0,
            ..EnhanceConfig::default()
        };
        assert!(matches!(config.validate(), Err(PixelwerkError::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EnhanceConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PixelwerkError::Io(_)));
    }
}
