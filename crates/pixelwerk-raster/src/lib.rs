// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixelwerk-raster — Pixel processing for the Pixelwerk enhancer.
//
// Provides the dense RGBA pixel buffer, the tone (brightness/contrast) pass,
// kernel convolution (sharpening), the fixed enhancement pipeline that chains
// them, and the codec boundary to and from encoded bytes.

pub mod buffer;
pub mod codec;
pub mod filter;
pub mod pipeline;

// Re-export the primary types so callers can use `pixelwerk_raster::PixelBuffer` etc.
pub use buffer::PixelBuffer;
pub use filter::{ConvolutionFilter, ConvolutionKernel, ToneAdjuster};
pub use pipeline::{EnhancedImage, EnhancementPipeline, PipelineStage};
