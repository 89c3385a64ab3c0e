// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Buffer module — the dense RGBA8 pixel store shared by every stage.

pub mod pixel_buffer;

pub use pixel_buffer::{ALPHA, CHANNELS, COLOR_CHANNELS, PixelBuffer, clamp_sample};
