//! Aspect-preserving fit computation.

use crate::models::DecodedImage;

/// Scale factor that fits `width`x`height` inside `max_w`x`max_h`.
///
/// Non-positive targets are treated as 1x1 so the result stays usable.
pub fn fit_scale(width: u32, height: u32, max_w: i32, max_h: i32) -> f64 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    let (max_w, max_h) = if max_w <= 0 || max_h <= 0 {
        (1, 1)
    } else {
        (max_w, max_h)
    };
    f64::min(
        max_w as f64 / width as f64,
        max_h as f64 / height as f64,
    )
}

/// Dimensions of `width`x`height` scaled to fit `max_w`x`max_h`.
///
/// Never returns 0 in either axis.
pub fn fit_dimensions(width: u32, height: u32, max_w: i32, max_h: i32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (1, 1);
    }
    let scale = fit_scale(width, height, max_w, max_h);
    let scaled_w = (width as f64 * scale) as u32;
    let scaled_h = (height as f64 * scale) as u32;
    (scaled_w.max(1), scaled_h.max(1))
}

/// Fit dimensions for a decoded image.
pub fn compute_fit(image: &DecodedImage, max_w: i32, max_h: i32) -> (u32, u32) {
    fit_dimensions(image.width(), image.height(), max_w, max_h)
}
