// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pixelwerk.

use thiserror::Error;

/// Top-level error type for all Pixelwerk operations.
#[derive(Debug, Error)]
pub enum PixelwerkError {
    // -- Pixel buffer errors --
    #[error(
        "pixel access out of bounds: ({x}, {y}) channel {channel} in a {width}x{height} buffer"
    )]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        channel: usize,
        width: u32,
        height: u32,
    },

    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel data length mismatch: expected {expected} samples, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    // -- Convolution errors --
    #[error("invalid convolution kernel: {0}")]
    InvalidKernel(String),

    #[error("kernel radius {radius} too large for a {width}x{height} buffer")]
    KernelTooLarge { radius: u32, width: u32, height: u32 },

    // -- Codec errors --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PixelwerkError>;
