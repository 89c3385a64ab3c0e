// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Square convolution kernel with an odd side length.

use pixelwerk_core::SHARPEN_KERNEL;
use pixelwerk_core::error::{PixelwerkError, Result};

/// A `size x size` matrix of weights, stored row-major.
///
/// Weights are not normalised. Output is clamped per sample, so kernels whose
/// weights do not sum to 1 brighten or darken flat regions.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionKernel {
    size: usize,
    weights: Vec<f64>,
}

impl ConvolutionKernel {
    /// Build a kernel from its rows.
    ///
    /// Fails with [`PixelwerkError::InvalidKernel`] if the matrix is empty,
    /// not square, or has an even side length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(PixelwerkError::InvalidKernel("kernel has no rows".into()));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(PixelwerkError::InvalidKernel(format!(
                "kernel is not square: row {index} has {} weights, expected {size}",
                row.len()
            )));
        }
        if size % 2 == 0 {
            return Err(PixelwerkError::InvalidKernel(format!(
                "side length {size} is even"
            )));
        }
        Ok(Self {
            size,
            weights: rows.iter().flatten().copied().collect(),
        })
    }

    /// The reference sharpening kernel:
    ///
    /// ```text
    ///  0   -0.5  0
    /// -0.5  3   -0.5
    ///  0   -0.5  0
    /// ```
    pub fn sharpen() -> Self {
        Self {
            size: SHARPEN_KERNEL.len(),
            weights: SHARPEN_KERNEL.iter().flatten().copied().collect(),
        }
    }

    /// 1x1 kernel that copies the centre sample.
    pub fn identity() -> Self {
        Self {
            size: 1,
            weights: vec![1.0],
        }
    }

    /// Side length of the square matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the centre to the edge, `(size - 1) / 2`.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Weight at row `ky`, column `kx` (both in `0..size`).
    #[inline]
    pub fn weight(&self, ky: usize, kx: usize) -> f64 {
        self.weights[ky * self.size + kx]
    }

    /// Sum of all weights. A flat field passes through unchanged when this
    /// is 1.
    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// The weights as a list of rows, the shape stored in the config file.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.weights.chunks(self.size).map(<[f64]>::to_vec).collect()
    }
}

impl Default for ConvolutionKernel {
    fn default() -> Self {
        Self::sharpen()
    }
}

impl TryFrom<Vec<Vec<f64>>> for ConvolutionKernel {
    type Error = PixelwerkError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}
