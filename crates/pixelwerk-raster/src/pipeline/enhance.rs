// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement pipeline — tone adjustment in place, then sharpening into a
// fresh buffer, packaged as an `EnhancedImage`.

use pixelwerk_core::error::Result;
use pixelwerk_core::{EnhanceConfig, ToneParameters};
use tracing::{debug, info, instrument};

use crate::buffer::PixelBuffer;
use crate::filter::{ConvolutionFilter, ConvolutionKernel, ToneAdjuster};

/// The stages a buffer passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    ToneAdjusted,
    Sharpened,
}

/// Result of a pipeline run, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedImage {
    buffer: PixelBuffer,
}

impl EnhancedImage {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Borrow the enhanced pixels.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Consume the image and return its pixels.
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}

/// Tone adjustment followed by sharpening.
///
/// Both stages run on every call, always in the same order. Running the
/// pipeline on its own output compounds the effect; it is not idempotent.
///
/// ```ignore
/// let pipeline = EnhancementPipeline::default();
/// let enhanced = pipeline.enhance(codec::decode(&bytes)?)?;
/// let jpeg = codec::encode(&enhanced, OutputFormat::Jpeg, 92)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnhancementPipeline {
    tone: ToneParameters,
    filter: ConvolutionFilter,
}

impl EnhancementPipeline {
    pub fn new(tone: ToneParameters, filter: ConvolutionFilter) -> Self {
        Self { tone, filter }
    }

    /// Build a pipeline from persisted settings, validating the kernel shape.
    pub fn from_config(config: &EnhanceConfig) -> Result<Self> {
        let kernel = ConvolutionKernel::from_rows(&config.kernel)?;
        Ok(Self {
            tone: config.tone,
            filter: ConvolutionFilter::new(kernel, config.border),
        })
    }

    /// The brightness/contrast factors of the tone stage.
    pub fn tone(&self) -> ToneParameters {
        self.tone
    }

    /// The sharpening stage.
    pub fn filter(&self) -> &ConvolutionFilter {
        &self.filter
    }

    /// Run both stages on `buffer`.
    ///
    /// The kernel is checked against the buffer size before any pixel is
    /// touched, so a `KernelTooLarge` error never follows a completed tone
    /// pass.
    #[instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
    pub fn enhance(&self, mut buffer: PixelBuffer) -> Result<EnhancedImage> {
        info!(
            brightness = self.tone.brightness_factor,
            contrast = self.tone.contrast_factor,
            kernel_size = self.filter.kernel().size(),
            "Running enhancement pipeline"
        );
        self.filter.validate(buffer.width(), buffer.height())?;

        ToneAdjuster::apply(&mut buffer, self.tone);
        debug!(stage = ?PipelineStage::ToneAdjusted, "Stage complete");

        let sharpened = self.filter.apply(&buffer)?;
        debug!(stage = ?PipelineStage::Sharpened, "Stage complete");

        Ok(EnhancedImage { buffer: sharpened })
    }
}

// -- Tests --------------------------------------------------------------------
