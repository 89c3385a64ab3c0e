// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dense RGBA8 pixel buffer — the value every enhancement stage consumes and
// produces. Interleaved, row-major, exactly `width * height * 4` samples.

use image::RgbaImage;
use pixelwerk_core::error::{PixelwerkError, Result};

/// Samples per pixel (red, green, blue, alpha).
pub const CHANNELS: usize = 4;

/// Number of color channels processed by the filters. Alpha is always handled
/// separately.
pub const COLOR_CHANNELS: usize = 3;

/// Index of the alpha sample within a pixel.
pub const ALPHA: usize = 3;

/// Clamp an arithmetic result to `[0, 255]` and round it to a sample.
///
/// Rounds half to even, so `0.5 -> 0` and `1.5 -> 2`. NaN maps to 0.
#[inline]
pub fn clamp_sample(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

/// An owned, decoded RGBA image.
///
/// `Clone` is a deep copy; the convolution uses it to get an immutable
/// snapshot that its own writes can never reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    // -- Construction ---------------------------------------------------------

    /// A zero-filled (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = sample_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// A buffer with every pixel set to `pixel`.
    pub fn from_pixel(width: u32, height: u32, pixel: [u8; CHANNELS]) -> Result<Self> {
        let len = sample_count(width, height)?;
        let data = pixel.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap raw interleaved RGBA samples.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(PixelwerkError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take ownership of an `image` crate RGBA buffer.
    pub fn from_rgba_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_raw(width, height, image.into_raw())
    }

    /// Convert into an `image` crate RGBA buffer for encoding.
    pub fn into_rgba_image(self) -> RgbaImage {
        // Length is an invariant of this type, so the conversion cannot fail.
        RgbaImage::from_raw(self.width, self.height, self.data)
            .unwrap_or_else(|| unreachable!("pixel buffer length invariant violated"))
    }

    // -- Accessors ------------------------------------------------------------

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of samples (`width * height * 4`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: zero-sized buffers cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples per row.
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Borrow the interleaved samples.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable samples, for the in-place tone pass.
    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read one sample.
    pub fn get(&self, x: u32, y: u32, channel: usize) -> Result<u8> {
        let idx = self.checked_index(x, y, channel)?;
        Ok(self.data[idx])
    }

    /// Write one sample.
    pub fn set(&mut self, x: u32, y: u32, channel: usize, sample: u8) -> Result<()> {
        let idx = self.checked_index(x, y, channel)?;
        self.data[idx] = sample;
        Ok(())
    }

    /// Read all four samples of a pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; CHANNELS]> {
        let idx = self.checked_index(x, y, 0)?;
        let mut out = [0u8; CHANNELS];
        out.copy_from_slice(&self.data[idx..idx + CHANNELS]);
        Ok(out)
    }

    /// Samples of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride();
        Some(&self.data[start..start + self.stride()])
    }

    /// Flat index of `(x, y, channel)` without bounds checks. Callers in this
    /// crate guarantee the coordinates are in range.
    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize, channel: usize) -> usize {
        (y * self.width as usize + x) * CHANNELS + channel
    }

    fn checked_index(&self, x: u32, y: u32, channel: usize) -> Result<usize> {
        if x >= self.width || y >= self.height || channel >= CHANNELS {
            return Err(PixelwerkError::IndexOutOfBounds {
                x,
                y,
                channel,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x as usize, y as usize, channel))
    }
}

fn sample_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(PixelwerkError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(PixelwerkError::InvalidDimensions { width, height })
}

// -- Tests --------------------------------------------------------------------
