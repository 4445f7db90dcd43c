use image::DynamicImage;

use crate::image_loader;
use crate::models::DecodedImage;

/// Width and height in viewport pixels. May be zero or negative when the
/// shell reports a collapsed viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// One image drawn at `dest`. The plan owns the decoded bitmap.
#[derive(Debug, Clone)]
pub struct Placement {
    pub image: DecodedImage,
    pub dest: Rect,
    /// Destination size over source size; 1.0 at native size.
    pub scale: f64,
}

impl Placement {
    /// The bitmap resampled to the destination size.
    pub fn resampled(&self) -> DynamicImage {
        image_loader::resample(&self.image.bitmap, self.dest.width, self.dest.height)
    }
}

/// Size and name of the primary image, drawn above everything else as white
/// text on an opaque black box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Draw order for the renderer.
#[derive(Debug, Clone, Copy)]
pub enum Layer<'a> {
    Image(&'a Placement),
    Overlay(&'a Overlay),
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    /// One or two placements, left to right.
    pub placements: Vec<Placement>,
    /// Index into `placements` of the current entry.
    pub primary: usize,
    pub overlay: Option<Overlay>,
    pub pan_enabled: bool,
    /// Extent of the content in pan mode.
    pub scroll_region: Option<Size>,
}

impl RenderPlan {
    pub fn primary(&self) -> &Placement {
        &self.placements[self.primary]
    }

    pub fn is_paired(&self) -> bool {
        self.placements.len() > 1
    }

    /// Images first, then the overlay.
    pub fn layers(&self) -> Vec<Layer<'_>> {
        let mut layers: Vec<Layer<'_>> = self.placements.iter().map(Layer::Image).collect();
        if let Some(overlay) = &self.overlay {
            layers.push(Layer::Overlay(overlay));
        }
        layers
    }
}
