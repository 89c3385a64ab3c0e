// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pixelwerk-raster crate: the tone pass, the
// sharpening convolution, and the full pipeline on a synthetic image.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pixelwerk_core::ToneParameters;
use pixelwerk_raster::{ConvolutionFilter, EnhancementPipeline, PixelBuffer, ToneAdjuster};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A 512x512 diagonal gradient, so the convolution sees real edges.
fn synthetic_image() -> PixelBuffer {
    let (width, height) = (512u32, 512u32);
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) % 256) as u8;
            data.extend_from_slice(&[v, 255 - v, v / 2, 255]);
        }
    }
    PixelBuffer::from_raw(width, height, data).expect("synthetic buffer has exact length")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_tone(c: &mut Criterion) {
    let image = synthetic_image();
    c.bench_function("tone_adjust (512x512)", |b| {
        b.iter(|| {
            let mut buffer = black_box(image.clone());
            ToneAdjuster::apply(&mut buffer, ToneParameters::default());
            black_box(buffer);
        });
    });
}

fn bench_sharpen(c: &mut Criterion) {
    let image = synthetic_image();
    let filter = ConvolutionFilter::default();
    c.bench_function("sharpen_3x3 (512x512)", |b| {
        b.iter(|| black_box(filter.apply(black_box(&image)).expect("kernel fits")));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let image = synthetic_image();
    let pipeline = EnhancementPipeline::default();
    c.bench_function("enhance (512x512)", |b| {
        b.iter(|| black_box(pipeline.enhance(black_box(image.clone())).expect("kernel fits")));
    });
}

criterion_group!(benches, bench_tone, bench_sharpen, bench_pipeline);
criterion_main!(benches);
