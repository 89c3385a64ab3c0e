// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spatial convolution over the color channels of an RGBA buffer. Reads an
// immutable source and writes a freshly allocated output, so no output pixel
// ever sees a neighbour that was already rewritten.

use pixelwerk_core::BorderPolicy;
use pixelwerk_core::error::{PixelwerkError, Result};
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::buffer::{ALPHA, CHANNELS, COLOR_CHANNELS, PixelBuffer, clamp_sample};
use crate::filter::kernel::ConvolutionKernel;

/// Alpha written to every interior pixel, whatever the source alpha was.
pub const OPAQUE: u8 = 255;

/// A kernel plus the policy for the border ring it cannot reach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvolutionFilter {
    kernel: ConvolutionKernel,
    border: BorderPolicy,
}

impl ConvolutionFilter {
    pub fn new(kernel: ConvolutionKernel, border: BorderPolicy) -> Self {
        Self { kernel, border }
    }

    /// The weights applied to each neighbourhood.
    pub fn kernel(&self) -> &ConvolutionKernel {
        &self.kernel
    }

    /// What the unreachable ring holds.
    pub fn border(&self) -> BorderPolicy {
        self.border
    }

    /// Check that the kernel fits inside a `width x height` buffer with at
    /// least one interior pixel, i.e. `2 * radius < width` and
    /// `2 * radius < height`.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        let radius = self.kernel.radius();
        let span = 2 * radius as u64;
        if span >= width as u64 || span >= height as u64 {
            return Err(PixelwerkError::KernelTooLarge {
                radius: radius as u32,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Convolve `source` and return a new buffer of the same size.
    ///
    /// Interior pixels (`radius <= x < width - radius`, same for `y`) get the
    /// clamped weighted sum of their neighbourhood on R, G and B, and alpha
    /// forced to [`OPAQUE`]. The outer `radius`-wide ring is never computed;
    /// its contents follow the [`BorderPolicy`]:
    ///
    /// - `CopySource`: the ring holds the source pixels unchanged.
    /// - `Zero`: the ring is `(0, 0, 0, 0)`.
    #[instrument(skip_all, fields(
        width = source.width(),
        height = source.height(),
        radius = self.kernel.radius(),
        border = ?self.border
    ))]
    pub fn apply(&self, source: &PixelBuffer) -> Result<PixelBuffer> {
        let (width, height) = source.dimensions();
        self.validate(width, height)?;

        let mut output = match self.border {
            BorderPolicy::CopySource => source.clone(),
            BorderPolicy::Zero => PixelBuffer::new(width, height)?,
        };

        let radius = self.kernel.radius();
        let interior_rows = radius..height as usize - radius;
        let stride = output.stride();

        // One task per output row; rows are disjoint and the source is shared
        // read-only, so the only synchronisation is the join at the end.
        output
            .as_raw_mut()
            .par_chunks_exact_mut(stride)
            .enumerate()
            .filter(|(y, _)| interior_rows.contains(y))
            .for_each(|(y, row)| self.convolve_row(source, y, row));

        debug!(
            interior = interior_pixel_count(&self.kernel, width, height),
            "Convolution complete"
        );
        Ok(output)
    }

    /// Fill the interior pixels of output row `y`.
    fn convolve_row(&self, source: &PixelBuffer, y: usize, row: &mut [u8]) {
        let radius = self.kernel.radius();
        let size = self.kernel.size();
        let width = source.width() as usize;
        let samples = source.as_raw();

        for x in radius..width - radius {
            let out = &mut row[x * CHANNELS..(x + 1) * CHANNELS];
            for c in 0..COLOR_CHANNELS {
                let mut sum = 0.0f64;
                for ky in 0..size {
                    let sy = y + ky - radius;
                    for kx in 0..size {
                        let sx = x + kx - radius;
                        sum += samples[source.index(sx, sy, c)] as f64 * self.kernel.weight(ky, kx);
                    }
                }
                out[c] = clamp_sample(sum);
            }
            out[ALPHA] = OPAQUE;
        }
    }
}

/// Number of pixels the kernel is centred on in a `width x height` buffer.
pub fn interior_pixel_count(kernel: &ConvolutionKernel, width: u32, height: u32) -> usize {
    let span = 2 * kernel.radius();
    (width as usize).saturating_sub(span) * (height as usize).saturating_sub(span)
}

// -- Tests --------------------------------------------------------------------
