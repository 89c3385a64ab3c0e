// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pixelwerk_core::{BorderPolicy, EnhanceConfig, OutputFormat, ToneParameters};

#[derive(Parser, Debug)]
#[command(author, version, about = "Brighten and sharpen raster images")]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enhance an image and write the result to disk
    Enhance(EnhanceArgs),
    /// Write the default configuration file
    InitConfig(InitConfigArgs),
}

#[derive(Parser, Debug)]
pub struct EnhanceArgs {
    /// Input image path
    pub input: PathBuf,
    /// Output file path (defaults to the configured file name next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Configuration file (defaults to the user config file, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub settings: EnhanceSettings,
}

#[derive(Parser, Debug)]
pub struct InitConfigArgs {
    /// Where to write the configuration (defaults to the user config file)
    pub path: Option<PathBuf>,
    /// Overwrite an existing file
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

/// Per-run overrides of the configuration file.
#[derive(Parser, Debug, Clone, Default)]
pub struct EnhanceSettings {
    /// Multiplicative brightness factor (1.0 = unchanged)
    #[arg(long)]
    pub brightness: Option<f64>,
    /// Contrast factor around mid-gray (1.0 = unchanged)
    #[arg(long)]
    pub contrast: Option<f64>,
    /// Output container
    #[arg(long, value_enum)]
    pub format: Option<FormatChoice>,
    /// JPEG quality (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,
    /// Contents of the border ring the sharpening kernel cannot reach
    #[arg(long, value_enum)]
    pub border: Option<BorderChoice>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    Jpeg,
    Png,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BorderChoice {
    CopySource,
    Zero,
}

impl EnhanceSettings {
    /// Layer the command-line values over `config`.
    pub fn apply_to(&self, config: &mut EnhanceConfig) {
        let ToneParameters {
            brightness_factor,
            contrast_factor,
        } = config.tone;
        config.tone = ToneParameters::new(
            self.brightness.unwrap_or(brightness_factor),
            self.contrast.unwrap_or(contrast_factor),
        );
        if let Some(format) = self.format {
            config.output_format = format.to_format();
        }
        if let Some(quality) = self.quality {
            config.jpeg_quality = quality;
        }
        if let Some(border) = self.border {
            config.border = border.to_policy();
        }
    }
}

impl FormatChoice {
    pub fn to_format(self) -> OutputFormat {
        match self {
            FormatChoice::Jpeg => OutputFormat::Jpeg,
            FormatChoice::Png => OutputFormat::Png,
        }
    }
}

impl BorderChoice {
    pub fn to_policy(self) -> BorderPolicy {
        match self {
            BorderChoice::CopySource => BorderPolicy::CopySource,
            BorderChoice::Zero => BorderPolicy::Zero,
        }
    }
}
