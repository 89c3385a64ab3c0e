// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement service — load, enhance, and save one image file.

use std::path::{Path, PathBuf};

use pixelwerk_core::error::Result;
use pixelwerk_core::{EnhanceConfig, OutputFormat};
use pixelwerk_raster::{EnhancementPipeline, codec};
use tracing::{debug, info, instrument};

use super::config_dir;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhanceOutcome {
    pub output: PathBuf,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
}

/// Load the configuration for a run.
///
/// An explicit path must exist. Without one, the user config file is used
/// when present, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<EnhanceConfig> {
    if let Some(path) = explicit {
        return EnhanceConfig::load(path);
    }
    let path = config_dir::default_config_path();
    if path.is_file() {
        debug!(path = %path.display(), "Using user configuration");
        EnhanceConfig::load(&path)
    } else {
        Ok(EnhanceConfig::default())
    }
}

/// Pick the output path and container.
///
/// The format comes from `format_flag`, else a recognised extension on an
/// explicit `output`, else the configured format. Without an explicit
/// output the configured file name is placed next to the input, with its
/// extension replaced to match the chosen format.
pub fn resolve_output(
    input: &Path,
    output: Option<&Path>,
    config: &EnhanceConfig,
    format_flag: Option<OutputFormat>,
) -> (PathBuf, OutputFormat) {
    let from_extension = output
        .and_then(|path| path.extension())
        .and_then(|ext| ext.to_str())
        .and_then(OutputFormat::from_extension);
    let format = format_flag
        .or(from_extension)
        .unwrap_or(config.output_format);

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&config.output_file_name)
            .with_extension(format.extension()),
    };
    (path, format)
}

/// Run the full decode → enhance → encode → write sequence.
#[instrument(skip(config), fields(input = %input.display(), output = %output.display()))]
pub fn enhance_file(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    config: &EnhanceConfig,
) -> Result<EnhanceOutcome> {
    config.validate()?;
    let pipeline = EnhancementPipeline::from_config(config)?;

    let buffer = codec::open(input)?;
    let enhanced = pipeline.enhance(buffer)?;
    codec::save(&enhanced, output, format, config.jpeg_quality)?;

    info!(
        width = enhanced.width(),
        height = enhanced.height(),
        format = %format,
        "Enhancement complete"
    );
    Ok(EnhanceOutcome {
        output: output.to_path_buf(),
        format,
        width: enhanced.width(),
        height: enhanced.height(),
    })
}
