use image::{DynamicImage, GenericImageView};

/// A decoded entry: the bitmap plus the entry name it came from.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub name: String,
    pub bitmap: DynamicImage,
}

impl DecodedImage {
    pub fn new(name: impl Into<String>, bitmap: DynamicImage) -> Self {
        Self {
            name: name.into(),
            bitmap,
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.bitmap.dimensions()
    }
}
