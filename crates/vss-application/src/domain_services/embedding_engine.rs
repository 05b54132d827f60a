//! Embedding Engine
//!
//! Turns decoded images and the query string into unit-norm vectors. Image
//! vectors go through the process-wide cache keyed by bucket and object key;
//! only the misses reach the model, in chunks of at most `batch_size`.

use std::sync::Arc;

use image::DynamicImage;
use tracing::{debug, warn};
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::{EmbeddingCacheProvider, EmbeddingModelProvider};
use vss_domain::value_objects::{CacheKey, EmbeddingVector, RawImage};

/// Per-image results of one `embed_images` call
#[derive(Debug, Default)]
pub struct ImageEmbeddings {
    /// One entry per input image, in input order
    pub vectors: Vec<Result<EmbeddingVector>>,
    /// How many entries were served from the cache
    pub cache_hits: usize,
}

impl ImageEmbeddings {
    /// Number of images that produced a usable vector
    pub fn succeeded(&self) -> usize {
        self.vectors.iter().filter(|v| v.is_ok()).count()
    }
}

/// Encoder front-end with caching and normalization
#[derive(Clone)]
pub struct EmbeddingEngine {
    model: Arc<dyn EmbeddingModelProvider>,
    cache: Arc<dyn EmbeddingCacheProvider>,
    image_batch_size: usize,
}

impl EmbeddingEngine {
    /// Create an engine over a loaded model and the shared cache
    pub fn new(
        model: Arc<dyn EmbeddingModelProvider>,
        cache: Arc<dyn EmbeddingCacheProvider>,
        image_batch_size: usize,
    ) -> Self {
        Self {
            model,
            cache,
            image_batch_size: image_batch_size.max(1),
        }
    }

    /// The model behind this engine
    pub fn model(&self) -> &Arc<dyn EmbeddingModelProvider> {
        &self.model
    }

    /// Embed images fetched from `bucket`, consulting the cache first
    ///
    /// A model failure aborts the call. A vector that cannot be normalized
    /// only fails its own entry and is not cached.
    pub async fn embed_images(
        &self,
        bucket: &str,
        images: &[RawImage],
    ) -> Result<ImageEmbeddings> {
        let cache_keys: Vec<CacheKey> = images
            .iter()
            .map(|image| CacheKey::new(bucket, image.key.clone()))
            .collect();
        let mut slots: Vec<Option<Result<EmbeddingVector>>> = Vec::with_capacity(images.len());
        let mut misses: Vec<usize> = Vec::new();
        let mut cache_hits = 0;

        for (position, cache_key) in cache_keys.iter().enumerate() {
            match self.cache.get(cache_key) {
                Some(vector) => {
                    cache_hits += 1;
                    slots.push(Some(Ok(vector)));
                }
                None => {
                    slots.push(None);
                    misses.push(position);
                }
            }
        }

        debug!(
            images = images.len(),
            cache_hits,
            to_encode = misses.len(),
            batch_size = self.image_batch_size,
            "Embedding images"
        );

        for chunk in misses.chunks(self.image_batch_size) {
            let rasters: Vec<DynamicImage> =
                chunk.iter().map(|&p| images[p].image.clone()).collect();
            let raw = self
                .model
                .encode_images(&rasters, self.image_batch_size)
                .await?;
            if raw.len() != chunk.len() {
                return Err(Error::model(format!(
                    "encoder returned {} vectors for {} images",
                    raw.len(),
                    chunk.len()
                )));
            }

            for (&position, values) in chunk.iter().zip(raw) {
                let cache_key = &cache_keys[position];
                let outcome = EmbeddingVector::normalized(values, cache_key.key.as_str());
                match &outcome {
                    Ok(vector) => self.cache.insert(cache_key.clone(), vector.clone()),
                    Err(e) => warn!(key = %cache_key, error = %e, "Discarding image embedding"),
                }
                slots[position] = Some(outcome);
            }
        }

        let vectors = slots
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| Err(Error::internal("image was not embedded"))))
            .collect();

        Ok(ImageEmbeddings {
            vectors,
            cache_hits,
        })
    }

    /// Embed the query string as a single-item batch
    ///
    /// Any failure, a degenerate vector included, is fatal for the request.
    pub async fn embed_text(&self, query: &str) -> Result<EmbeddingVector> {
        let raw = self.model.encode_query(query).await?;
        EmbeddingVector::normalized(raw, "query")
    }
}
