// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Codec boundary — turns encoded bytes into a `PixelBuffer` and an
// `EnhancedImage` back into bytes. All format work is delegated to the
// `image` crate; its errors are wrapped, not interpreted.

use std::path::Path;

use image::{DynamicImage, ImageFormat};
use pixelwerk_core::OutputFormat;
use pixelwerk_core::error::{PixelwerkError, Result};
use tracing::{debug, info, instrument};

use crate::buffer::PixelBuffer;
use crate::pipeline::EnhancedImage;

/// Decode encoded image bytes (JPEG, PNG, ...) into an RGBA buffer.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode(data: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(data)
        .map_err(|err| PixelwerkError::Decode(err.to_string()))?;
    debug!(width = img.width(), height = img.height(), "Image decoded from bytes");
    PixelBuffer::from_rgba_image(img.into_rgba8())
}

/// Read and decode an image file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let buffer = decode(&data).map_err(|err| match err {
        PixelwerkError::Decode(detail) => {
            PixelwerkError::Decode(format!("{}: {}", path.display(), detail))
        }
        other => other,
    })?;
    info!(width = buffer.width(), height = buffer.height(), "Image loaded");
    Ok(buffer)
}

/// Encode an enhanced image.
///
/// `jpeg_quality` (1-100) only applies to JPEG. JPEG has no alpha channel,
/// so alpha is dropped; PNG keeps it.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn encode(image: &EnhancedImage, format: OutputFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
    let dynamic = DynamicImage::ImageRgba8(image.buffer().clone().into_rgba_image());
    let bytes = match format {
        OutputFormat::Jpeg => encode_jpeg(&dynamic, jpeg_quality)?,
        OutputFormat::Png => encode_to_format(&dynamic, ImageFormat::Png)?,
    };
    debug!(bytes = bytes.len(), mime = format.mime_type(), "Image encoded");
    Ok(bytes)
}

/// Encode and write to `path`.
#[instrument(skip(image, path), fields(path = %path.as_ref().display()))]
pub fn save(
    image: &EnhancedImage,
    path: impl AsRef<Path>,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<()> {
    let bytes = encode(image, format, jpeg_quality)?;
    std::fs::write(path.as_ref(), bytes)?;
    info!("Enhanced image saved");
    Ok(())
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let rgb = img.to_rgb8();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|err| PixelwerkError::Encode(format!("JPEG encoding failed: {}", err)))?;
    Ok(buffer)
}

fn encode_to_format(img: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    img.write_to(&mut cursor, format)
        .map_err(|err| PixelwerkError::Encode(format!("{:?} encoding failed: {}", format, err)))?;
    Ok(buffer)
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::EnhancementPipeline;

    fn enhanced_gray(width: u32, height: u32) -> EnhancedImage {
        let input = PixelBuffer::from_pixel(width, height, [128, 128, 128, 255]).unwrap();
        EnhancementPipeline::default().enhance(input).unwrap()
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PixelwerkError::Decode(_)));
    }

    #[test]
    fn png_output_decodes_to_the_same_pixels() {
        let enhanced = enhanced_gray(6, 4);
        let bytes = encode(&enhanced, OutputFormat::Png, 92).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(&decoded, enhanced.buffer());
    }

    #[test]
    fn jpeg_output_has_jpeg_magic_and_dimensions() {
        let enhanced = enhanced_gray(16, 8);
        let bytes = encode(&enhanced, OutputFormat::Jpeg, 90).unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (16, 8));
        // JPEG carries no alpha; decoding yields opaque pixels.
        assert_eq!(decoded.get(0, 0, 3).unwrap(), 255);
    }

    #[test]
    fn save_and_open_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enhanced.png");
        let enhanced = enhanced_gray(5, 5);
        save(&enhanced, &path, OutputFormat::Png, 92).unwrap();
        assert_eq!(&open(&path).unwrap(), enhanced.buffer());
    }

    #[test]
    fn opening_a_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = open(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, PixelwerkError::Io(_)));
    }
}
