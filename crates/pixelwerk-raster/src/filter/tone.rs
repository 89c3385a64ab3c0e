// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tone pass — multiplicative brightness followed by contrast around the
// mid-gray pivot, in place, color channels only.

use pixelwerk_core::ToneParameters;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::buffer::{CHANNELS, COLOR_CHANNELS, PixelBuffer, clamp_sample};

/// Contrast pivot.
pub const MID_GRAY: f64 = 128.0;

/// Applies brightness and contrast to a buffer in place.
pub struct ToneAdjuster;

impl ToneAdjuster {
    /// Adjust every pixel of `buffer`. Alpha is left untouched.
    ///
    /// Per color sample `s`:
    ///
    /// 1. `v = round(clamp(s * brightness))`
    /// 2. `v = round(clamp((v - 128) * contrast + 128))`
    ///
    /// Both steps always run, brightness first. Swapping them changes the
    /// result whenever the contrast factor is not 1.
    #[instrument(skip(buffer), fields(
        width = buffer.width(),
        height = buffer.height(),
        brightness = params.brightness_factor,
        contrast = params.contrast_factor
    ))]
    pub fn apply(buffer: &mut PixelBuffer, params: ToneParameters) {
        let ToneParameters {
            brightness_factor,
            contrast_factor,
        } = params;

        // Each chunk is one pixel, so the parallel workers never share a sample.
        buffer
            .as_raw_mut()
            .par_chunks_exact_mut(CHANNELS)
            .for_each(|pixel| {
                for sample in &mut pixel[..COLOR_CHANNELS] {
                    *sample = adjust_sample(*sample, brightness_factor, contrast_factor);
                }
            });

        debug!("Tone adjustment complete");
    }
}

/// Tone-map a single color sample.
#[inline]
pub fn adjust_sample(sample: u8, brightness_factor: f64, contrast_factor: f64) -> u8 {
    let brightened = clamp_sample(sample as f64 * brightness_factor);
    clamp_sample((brightened as f64 - MID_GRAY) * contrast_factor + MID_GRAY)
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_factors_leave_every_sample_unchanged() {
        for s in 0..=255u8 {
            assert_eq!(adjust_sample(s, 1.0, 1.0), s, "sample {s}");
        }
    }

    #[test]
    fn doubling_brightness_without_contrast() {
        let mut buf = PixelBuffer::from_pixel(1, 1, [100, 100, 100, 255]).unwrap();
        ToneAdjuster::apply(&mut buf, ToneParameters::new(2.0, 1.0));
        assert_eq!(buf.pixel(0, 0).unwrap(), [200, 200, 200, 255]);
    }

    #[test]
    fn alpha_is_untouched() {
        let mut buf = PixelBuffer::from_pixel(3, 2, [10, 200, 60, 37]).unwrap();
        ToneAdjuster::apply(&mut buf, ToneParameters::new(3.0, 2.5));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(buf.get(x, y, 3).unwrap(), 37);
            }
        }
    }

    #[test]
    fn output_stays_in_range_for_extreme_factors() {
        // u8 already guarantees [0, 255]; this checks the saturation points.
        assert_eq!(adjust_sample(200, 10.0, 1.0), 255);
        assert_eq!(adjust_sample(200, -1.0, 1.0), 0);
        assert_eq!(adjust_sample(50, 1.0, 100.0), 0);
        assert_eq!(adjust_sample(250, 1.0, 100.0), 255);
        assert_eq!(adjust_sample(77, f64::NAN, 1.0), 0);
    }

    #[test]
    fn brightness_is_applied_before_contrast() {
        // brightness then contrast: 100 * 2 = 200, (200 - 128) * 0.5 + 128 = 164
        assert_eq!(adjust_sample(100, 2.0, 0.5), 164);
        // the reverse order would give ((100 - 128) * 0.5 + 128) * 2 = 228
        assert_ne!(adjust_sample(100, 2.0, 0.5), 228);
    }

    #[test]
    fn brightness_saturates_before_contrast_sees_it() {
        // 200 * 2 = 400 clamps to 255 first, then (255 - 128) * 0.5 + 128 = 191.5 -> 192
        assert_eq!(adjust_sample(200, 2.0, 0.5), 192);
    }

    #[test]
    fn default_brightness_rounds_to_nearest() {
        // 128 * 1.1 = 140.8
        assert_eq!(adjust_sample(128, 1.1, 1.0), 141);
        assert_eq!(adjust_sample(255, 1.1, 1.0), 255);
    }

    #[test]
    fn default_brightness_matches_double_precision_canvas() {
        // 55 * 1.1 is 60.50000000000001 in f64, so it rounds up. A single
        // precision product lands exactly on 60.5 and would round to 60.
        let cases = [(55, 61), (95, 105), (115, 127), (175, 193), (195, 215), (215, 237)];
        for (sample, expected) in cases {
            assert_eq!(adjust_sample(sample, 1.1, 1.0), expected, "sample {sample}");
        }

        for s in 0..=255u8 {
            let reference = (s as f64 * 1.1).clamp(0.0, 255.0).round_ties_even() as u8;
            assert_eq!(adjust_sample(s, 1.1, 1.0), reference, "sample {s}");
        }
    }

    #[test]
    fn zero_contrast_flattens_to_pivot() {
        assert_eq!(adjust_sample(3, 1.0, 0.0), 128);
        assert_eq!(adjust_sample(250, 1.0, 0.0), 128);
    }
}
