// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixelwerk — command-line image enhancer.
//
// Entry point. Initialises logging, parses arguments, and dispatches to the
// service layer.

mod cli;
mod services;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pixelwerk_core::EnhanceConfig;
use pixelwerk_core::error::PixelwerkError;
use pixelwerk_core::human_errors::{Severity, humanize_error};

use cli::{Cli, Commands, EnhanceArgs, InitConfigArgs};
use services::{config_dir, enhance_service};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Enhance(args) => enhance(args),
        Commands::InitConfig(args) => init_config(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "pixelwerk failed");
            match err.downcast_ref::<PixelwerkError>() {
                Some(inner) => {
                    let human = humanize_error(inner);
                    if human.severity == Severity::Internal {
                        eprint!("internal error: ");
                    }
                    eprintln!("{}\n{}", human.message, human.suggestion);
                    ExitCode::from(human.severity.exit_code())
                }
                None => {
                    eprintln!("{err:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn enhance(args: EnhanceArgs) -> Result<()> {
    let mut config = enhance_service::load_config(args.config.as_deref())
        .context("failed to load configuration")?;
    args.settings.apply_to(&mut config);

    let format_flag = args.settings.format.map(|choice| choice.to_format());
    let (output, format) =
        enhance_service::resolve_output(&args.input, args.output.as_deref(), &config, format_flag);

    let outcome = enhance_service::enhance_file(&args.input, &output, format, &config)
        .with_context(|| format!("failed to enhance {:?}", args.input))?;

    println!(
        "{} ({}x{}, {})",
        outcome.output.display(),
        outcome.width,
        outcome.height,
        outcome.format
    );
    Ok(())
}

fn init_config(args: InitConfigArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(config_dir::default_config_path);
    if path.exists() && !args.force {
        anyhow::bail!("{:?} already exists (use --force to overwrite)", path);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {:?}", parent))?;
    }
    EnhanceConfig::default()
        .save(&path)
        .with_context(|| format!("failed to write {:?}", path))?;
    tracing::info!(path = %path.display(), "Default configuration written");
    println!("{}", path.display());
    Ok(())
}
