// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filter module — tone adjustment and kernel convolution.

pub mod convolve;
pub mod kernel;
pub mod tone;

pub use convolve::ConvolutionFilter;
pub use kernel::ConvolutionKernel;
pub use tone::ToneAdjuster;
