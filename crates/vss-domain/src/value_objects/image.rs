//! Decoded images

use image::DynamicImage;

use super::ObjectKey;

/// Decoded raster image plus the key it was fetched from
///
/// Owned by the fetcher until handed to the embedding engine; it is dropped
/// once embedded. `index` is the key's position in the listing, which keeps
/// downstream ordering independent of fetch completion order.
#[derive(Debug, Clone)]
pub struct RawImage {
    /// Originating object key
    pub key: ObjectKey,
    /// Position of the key in listing order
    pub index: usize,
    /// Decoded, resized raster
    pub image: DynamicImage,
}

impl RawImage {
    /// Create a raw image
    pub fn new(key: ObjectKey, index: usize, image: DynamicImage) -> Self {
        Self { key, index, image }
    }

    /// Width and height of the raster
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}
