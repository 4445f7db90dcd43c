use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::imageops::FilterType;
use image::{AnimationDecoder, ImageDecoder, Limits};
use image::{DynamicImage, ImageFormat};

use crate::error::DecodeError;
use crate::models::DecodedImage;

/// Decodes raw entry bytes. Animated GIFs yield their first frame.
pub fn decode_bytes(name: &str, bytes: Vec<u8>) -> Result<DecodedImage, DecodeError> {
    let format = image::guess_format(&bytes).ok();

    if format == Some(ImageFormat::Gif) {
        let mut decoder =
            GifDecoder::new(Cursor::new(bytes)).map_err(|source| DecodeError::Image {
                name: name.to_string(),
                source,
            })?;
        // The frame canvas is sized from the declared logical screen
        decoder
            .set_limits(Limits::default())
            .map_err(|source| DecodeError::Image {
                name: name.to_string(),
                source,
            })?;
        let mut frames = decoder.into_frames();
        if let Some(frame) = frames.next() {
            let frame = frame.map_err(|source| DecodeError::Image {
                name: name.to_string(),
                source,
            })?;
            return Ok(DecodedImage::new(
                name,
                DynamicImage::ImageRgba8(frame.into_buffer()),
            ));
        }
        return Err(DecodeError::EmptyAnimation(name.to_string()));
    }

    let decoded = match format {
        Some(fmt) => image::load_from_memory_with_format(&bytes, fmt),
        None => image::load_from_memory(&bytes),
    };
    decoded
        .map(|bitmap| DecodedImage::new(name, bitmap))
        .map_err(|source| DecodeError::Image {
            name: name.to_string(),
            source,
        })
}

/// Resamples a bitmap to exactly `width`x`height` (each at least 1).
pub fn resample(bitmap: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (width, height) = (width.max(1), height.max(1));
    if bitmap.width() == width && bitmap.height() == height {
        return bitmap.clone();
    }
    bitmap.resize_exact(width, height, FilterType::Lanczos3)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    pub(crate) fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([200, 10, 10, 255]),
        ));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let decoded = decode_bytes("a.png", encoded(4, 3, ImageFormat::Png)).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.name, "a.png");
    }

    #[test]
    fn test_decode_gif_first_frame() {
        let decoded = decode_bytes("c.gif", encoded(5, 2, ImageFormat::Gif)).unwrap();
        assert_eq!(decoded.dimensions(), (5, 2));
    }

    #[test]
    fn test_decode_gif_with_huge_logical_screen() {
        let mut bytes = encoded(1, 1, ImageFormat::Gif);
        // Logical screen width and height, little endian
        bytes[6..10].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);

        let err = decode_bytes("big.gif", bytes).unwrap_err();
        assert!(matches!(err, DecodeError::Image { ref name, .. } if name == "big.gif"));
    }

    #[test]
    fn test_decode_corrupt_data() {
        let err = decode_bytes("bad.jpg", b"definitely not an image".to_vec()).unwrap_err();
        assert!(matches!(err, DecodeError::Image { ref name, .. } if name == "bad.jpg"));
    }

    #[test]
    fn test_resample_exact_size() {
        let decoded = decode_bytes("a.png", encoded(40, 20, ImageFormat::Png)).unwrap();
        let small = resample(&decoded.bitmap, 10, 5);
        assert_eq!((small.width(), small.height()), (10, 5));

        let clamped = resample(&decoded.bitmap, 0, 0);
        assert_eq!((clamped.width(), clamped.height()), (1, 1));
    }
}
