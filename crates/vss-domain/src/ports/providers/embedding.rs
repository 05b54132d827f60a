//! Embedding Model Provider Port

use async_trait::async_trait;
use image::DynamicImage;

use crate::error::{Error, Result};

/// Joint Image/Text Encoder Interface
///
/// Wraps a pretrained vision-language model. Outputs are raw (not yet
/// normalized) vectors in the same order as the inputs. Encoding is
/// per-item deterministic: the vector for an input must not depend on the
/// other inputs in the batch or on `batch_size`.
///
/// Loading the weights is the implementation's constructor concern; by the
/// time a provider value exists the model is ready.
///
/// # Example
///
/// ```ignore
/// use vss_domain::ports::providers::EmbeddingModelProvider;
///
/// let vectors = model.encode_images(&images, 32).await?;
/// let query = model.encode_query("red summer dress").await?;
/// assert_eq!(vectors[0].len(), model.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingModelProvider: Send + Sync {
    /// Encode images; the encoder may split them into `batch_size` chunks
    async fn encode_images(
        &self,
        images: &[DynamicImage],
        batch_size: usize,
    ) -> Result<Vec<Vec<f32>>>;

    /// Encode strings; the encoder may split them into `batch_size` chunks
    async fn encode_text(&self, texts: &[String], batch_size: usize) -> Result<Vec<Vec<f32>>>;

    /// Encode a single query string (default implementation provided)
    async fn encode_query(&self, text: &str) -> Result<Vec<f32>> {
        self.encode_text(&[text.to_string()], 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::model("No text embedding returned"))
    }

    /// Dimensionality of the vectors this model produces
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Name of the loaded model
    fn model_name(&self) -> &str;
}
