// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Pixelwerk enhancer.

use serde::{Deserialize, Serialize};

/// Brightness and contrast factors for the tone pass.
///
/// Brightness is multiplicative; contrast scales around the mid-gray pivot.
/// No range is enforced: zero or negative factors are legal and simply
/// produce degenerate (black or clamped) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneParameters {
    pub brightness_factor: f64,
    pub contrast_factor: f64,
}

impl ToneParameters {
    /// Factors that leave every sample unchanged.
    pub const IDENTITY: Self = Self {
        brightness_factor: 1.0,
        contrast_factor: 1.0,
    };

    pub fn new(brightness_factor: f64, contrast_factor: f64) -> Self {
        Self {
            brightness_factor,
            contrast_factor,
        }
    }
}

impl Default for ToneParameters {
    fn default() -> Self {
        Self {
            brightness_factor: 1.1,
            contrast_factor: 1.0,
        }
    }
}

/// The reference sharpening kernel, a milder variant of the classic
/// 5-point sharpen. Its weights sum to 1, so flat regions pass through.
pub const SHARPEN_KERNEL: [[f64; 3]; 3] = [
    [0.0, -0.5, 0.0],
    [-0.5, 3.0, -0.5],
    [0.0, -0.5, 0.0],
];

/// What the convolution output holds in the ring of pixels the kernel
/// cannot be centred on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderPolicy {
    /// The ring keeps the (tone-adjusted) source values, alpha included.
    #[default]
    CopySource,
    /// The ring is transparent black `(0, 0, 0, 0)`.
    Zero,
}

/// Encoded container for the enhanced image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy, no alpha channel.
    #[default]
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tone_matches_reference() {
        let tone = ToneParameters::default();
        assert_eq!(tone.brightness_factor, 1.1);
        assert_eq!(tone.contrast_factor, 1.0);
    }

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(OutputFormat::from_extension("JPEG"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension("Png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_extension("gif"), None);
    }

    #[test]
    fn border_policy_serializes_kebab_case() {
        let json = serde_json::to_string(&BorderPolicy::CopySource).unwrap();
        assert_eq!(json, "\"copy-source\"");
        let parsed: BorderPolicy = serde_json::from_str("\"zero\"").unwrap();
        assert_eq!(parsed, BorderPolicy::Zero);
    }
}
