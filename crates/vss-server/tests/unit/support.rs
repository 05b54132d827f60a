//! Shared fixtures: a colored in-memory bucket and a pixel-color model

use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use vss_application::{SearchContext, SearchPipeline, SearchSettings};
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::EmbeddingModelProvider;
use vss_providers::cache::MokaEmbeddingCache;
use vss_providers::object_store::InMemoryObjectStore;
use vss_server::JobHandler;

pub const BUCKET: &str = "media";

pub fn png(color: [u8; 3]) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb(color)));
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Image vector is its top-left pixel; queries name a primary color
#[derive(Debug, Default)]
pub struct ColorModel {
    pub panic_on_text: bool,
}

#[async_trait]
impl EmbeddingModelProvider for ColorModel {
    async fn encode_images(
        &self,
        images: &[DynamicImage],
        _batch_size: usize,
    ) -> Result<Vec<Vec<f32>>> {
        Ok(images
            .iter()
            .map(|img| {
                let [r, g, b] = img.to_rgb8().get_pixel(0, 0).0;
                vec![f32::from(r), f32::from(g), f32::from(b)]
            })
            .collect())
    }

    async fn encode_text(&self, texts: &[String], _batch_size: usize) -> Result<Vec<Vec<f32>>> {
        if self.panic_on_text {
            panic!("text encoder exploded");
        }
        texts
            .iter()
            .map(|t| match t.as_str() {
                "red" => Ok(vec![1.0, 0.0, 0.0]),
                "green" => Ok(vec![0.0, 1.0, 0.0]),
                "blue" => Ok(vec![0.0, 0.0, 1.0]),
                other => Err(Error::model(format!("cannot encode '{other}'"))),
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        3
    }

    fn provider_name(&self) -> &str {
        "color"
    }

    fn model_name(&self) -> &str {
        "top-left-pixel"
    }
}

/// `media/u1/palette/` holds red, green and blue swatches plus a note
pub fn palette_store() -> InMemoryObjectStore {
    let store = InMemoryObjectStore::new();
    store.put(BUCKET, "u1/palette/a-blue.png", png([0, 0, 255]));
    store.put(BUCKET, "u1/palette/b-red.png", png([255, 0, 0]));
    store.put(BUCKET, "u1/palette/c-green.png", png([0, 255, 0]));
    store.put(BUCKET, "u1/palette/notes.txt", b"not an image".to_vec());
    store.put(BUCKET, "u1/other/d-red.png", png([255, 0, 0]));
    store
}

pub fn handler_with(store: InMemoryObjectStore, model: ColorModel) -> JobHandler {
    let context = SearchContext::with_model(
        Arc::new(store),
        Arc::new(MokaEmbeddingCache::new(64)),
        Arc::new(model),
        SearchSettings::default(),
    );
    JobHandler::new(Arc::new(SearchPipeline::new(Arc::new(context))))
}

pub fn handler() -> JobHandler {
    handler_with(palette_store(), ColorModel::default())
}
