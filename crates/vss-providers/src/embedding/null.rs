//! Null embedding model for testing and development
//!
//! Provides deterministic, content-hash-based vectors. No model weights,
//! no downloads; always works offline.

use async_trait::async_trait;
use image::DynamicImage;
use vss_domain::error::Result;
use vss_domain::ports::providers::EmbeddingModelProvider;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding model for testing
///
/// Each vector is a pure function of its own input (pixel bytes or text),
/// so results never depend on batch composition.
///
/// # Example
///
/// ```rust
/// use vss_providers::embedding::NullEmbeddingModel;
/// use vss_domain::ports::providers::EmbeddingModelProvider;
///
/// let model = NullEmbeddingModel::new(512);
/// assert_eq!(model.dimensions(), 512);
/// assert_eq!(model.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingModel {
    dimensions: usize,
}

impl NullEmbeddingModel {
    /// Create a null model producing `dimensions`-wide vectors
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn vector_for(&self, seed_bytes: &[u8]) -> Vec<f32> {
        let mut state = fnv1a(seed_bytes) | 1;
        (0..self.dimensions)
            .map(|_| {
                // xorshift64
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let unit = (state >> 40) as f32 / (1u64 << 24) as f32;
                unit * 2.0 - 1.0
            })
            .collect()
    }
}

impl Default for NullEmbeddingModel {
    fn default() -> Self {
        Self::new(EMBEDDING_DIMENSION_NULL)
    }
}

#[async_trait]
impl EmbeddingModelProvider for NullEmbeddingModel {
    async fn encode_images(
        &self,
        images: &[DynamicImage],
        _batch_size: usize,
    ) -> Result<Vec<Vec<f32>>> {
        Ok(images
            .iter()
            .map(|img| self.vector_for(img.as_bytes()))
            .collect())
    }

    async fn encode_text(&self, texts: &[String], _batch_size: usize) -> Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| self.vector_for(t.as_bytes()))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }

    fn model_name(&self) -> &str {
        "null-hash"
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use std::sync::Arc;

use vss_application::ports::registry::{
    EMBEDDING_MODEL_PROVIDERS, EmbeddingModelConfig, EmbeddingModelEntry,
};

#[linkme::distributed_slice(EMBEDDING_MODEL_PROVIDERS)]
static NULL_MODEL: EmbeddingModelEntry = EmbeddingModelEntry {
    name: "null",
    description: "Null model for testing (deterministic hash-based vectors)",
    factory: |config: &EmbeddingModelConfig| {
        let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_NULL);
        Ok(Arc::new(NullEmbeddingModel::new(dimensions)))
    },
};
