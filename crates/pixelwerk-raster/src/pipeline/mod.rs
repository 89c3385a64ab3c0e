// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline module — the fixed tone-then-sharpen enhancement.

pub mod enhance;

pub use enhance::{EnhancedImage, EnhancementPipeline, PipelineStage};
