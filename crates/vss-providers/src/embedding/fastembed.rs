//! FastEmbed CLIP Embedding Provider
//!
//! Implements the EmbeddingModelProvider port with fastembed's paired
//! vision and text encoders. Uses ONNX models for local inference without
//! external API calls.

use std::io::Cursor;
use std::path::PathBuf;

use async_trait::async_trait;
use fastembed::{
    EmbeddingModel, ImageEmbedding, ImageEmbeddingModel, ImageInitOptions, InitOptions,
    TextEmbedding,
};
use image::{DynamicImage, ImageFormat};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::EmbeddingModelProvider;

use crate::constants::{
    EMBEDDING_DIMENSION_CLIP_VIT_B32, FASTEMBED_CHANNEL_CAPACITY, FASTEMBED_DEFAULT_MODEL,
    MODEL_CACHE_DIR_NAME,
};

/// A vision encoder and the text encoder trained jointly with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipModel {
    /// OpenAI CLIP ViT-B/32 (512 dimensions)
    ClipVitB32,
    /// Nomic Embed Vision/Text v1.5 (768 dimensions)
    NomicV15,
}

impl ClipModel {
    /// Parse a configured model name
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "clip-vit-b-32" | "clipvitb32" | "clip" => Some(Self::ClipVitB32),
            "nomic-embed-v1.5" | "nomic-v1.5" | "nomic" => Some(Self::NomicV15),
            _ => None,
        }
    }

    fn image_model(self) -> ImageEmbeddingModel {
        match self {
            Self::ClipVitB32 => ImageEmbeddingModel::ClipVitB32,
            Self::NomicV15 => ImageEmbeddingModel::NomicEmbedVisionV15,
        }
    }

    fn text_model(self) -> EmbeddingModel {
        match self {
            Self::ClipVitB32 => EmbeddingModel::ClipVitB32,
            Self::NomicV15 => EmbeddingModel::NomicEmbedTextV15,
        }
    }

    /// Output dimensionality
    pub fn dimensions(self) -> usize {
        match self {
            Self::ClipVitB32 => EMBEDDING_DIMENSION_CLIP_VIT_B32,
            Self::NomicV15 => 768,
        }
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Self::ClipVitB32 => "clip-vit-b-32",
            Self::NomicV15 => "nomic-embed-v1.5",
        }
    }
}

/// Messages for the CLIP actor
enum ClipMessage {
    EncodeImages {
        images: Vec<DynamicImage>,
        batch_size: usize,
        tx: oneshot::Sender<Result<Vec<Vec<f32>>>>,
    },
    EncodeText {
        texts: Vec<String>,
        batch_size: usize,
        tx: oneshot::Sender<Result<Vec<Vec<f32>>>>,
    },
}

/// FastEmbed CLIP provider using the Actor pattern
///
/// Both ONNX sessions live on one dedicated thread that serves encode
/// requests from a channel, so inference never blocks the async runtime
/// and no lock guards the sessions.
///
/// Construction downloads (on first run) and loads the weights; call it
/// from a blocking context.
#[derive(Clone)]
pub struct FastEmbedClipModel {
    sender: mpsc::Sender<ClipMessage>,
    model: ClipModel,
}

impl FastEmbedClipModel {
    /// Load `model`, caching weights under `cache_dir`
    pub fn new(
        model: ClipModel,
        cache_dir: PathBuf,
        show_download_progress: bool,
    ) -> Result<Self> {
        info!(model = model.name(), cache_dir = %cache_dir.display(), "Loading CLIP encoders");

        let image = ImageEmbedding::try_new(
            ImageInitOptions::new(model.image_model())
                .with_cache_dir(cache_dir.clone())
                .with_show_download_progress(show_download_progress),
        )
        .map_err(|e| Error::model(format!("Failed to initialize image encoder: {e}")))?;

        let text = TextEmbedding::try_new(
            InitOptions::new(model.text_model())
                .with_cache_dir(cache_dir)
                .with_show_download_progress(show_download_progress),
        )
        .map_err(|e| Error::model(format!("Failed to initialize text encoder: {e}")))?;

        let (tx, rx) = mpsc::channel(FASTEMBED_CHANNEL_CAPACITY);
        let actor = ClipActor {
            receiver: rx,
            image,
            text,
        };
        std::thread::Builder::new()
            .name("vss-clip".to_string())
            .spawn(move || actor.run())
            .map_err(|e| Error::model(format!("Failed to start encoder thread: {e}")))?;

        Ok(Self { sender: tx, model })
    }

    async fn request(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<Vec<Vec<f32>>>>) -> ClipMessage,
    ) -> Result<Vec<Vec<f32>>> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(build(tx))
            .await
            .map_err(|_| Error::model("CLIP actor channel closed"))?;
        rx.await
            .unwrap_or_else(|_| Err(Error::model("CLIP actor closed")))
    }
}

#[async_trait]
impl EmbeddingModelProvider for FastEmbedClipModel {
    async fn encode_images(
        &self,
        images: &[DynamicImage],
        batch_size: usize,
    ) -> Result<Vec<Vec<f32>>> {
        let images = images.to_vec();
        self.request(|tx| ClipMessage::EncodeImages {
            images,
            batch_size,
            tx,
        })
        .await
    }

    async fn encode_text(&self, texts: &[String], batch_size: usize) -> Result<Vec<Vec<f32>>> {
        let texts = texts.to_vec();
        self.request(|tx| ClipMessage::EncodeText {
            texts,
            batch_size,
            tx,
        })
        .await
    }

    fn dimensions(&self) -> usize {
        self.model.dimensions()
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }

    fn model_name(&self) -> &str {
        self.model.name()
    }
}

/// Internal actor that owns the ONNX sessions
struct ClipActor {
    receiver: mpsc::Receiver<ClipMessage>,
    image: ImageEmbedding,
    text: TextEmbedding,
}

impl ClipActor {
    fn run(mut self) {
        while let Some(msg) = self.receiver.blocking_recv() {
            match msg {
                ClipMessage::EncodeImages {
                    images,
                    batch_size,
                    tx,
                } => {
                    let _ = tx.send(self.encode_images(&images, batch_size));
                }
                ClipMessage::EncodeText {
                    texts,
                    batch_size,
                    tx,
                } => {
                    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
                    let result = self
                        .text
                        .embed(refs, Some(batch_size))
                        .map_err(|e| Error::model(format!("Text encoding failed: {e}")));
                    let _ = tx.send(result);
                }
            }
        }
        debug!("CLIP actor stopped");
    }

    fn encode_images(
        &mut self,
        images: &[DynamicImage],
        batch_size: usize,
    ) -> Result<Vec<Vec<f32>>> {
        let encoded = images
            .iter()
            .map(|img| {
                let mut buf = Cursor::new(Vec::new());
                img.write_to(&mut buf, ImageFormat::Png)
                    .map(|()| buf.into_inner())
                    .map_err(|e| Error::model(format!("Failed to re-encode image: {e}")))
            })
            .collect::<Result<Vec<Vec<u8>>>>()?;
        let slices: Vec<&[u8]> = encoded.iter().map(Vec::as_slice).collect();
        self.image
            .embed_bytes(&slices, Some(batch_size))
            .map_err(|e| Error::model(format!("Image encoding failed: {e}")))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vss_application::ports::registry::{
    EMBEDDING_MODEL_PROVIDERS, EmbeddingModelConfig, EmbeddingModelEntry,
};

/// Factory function for creating FastEmbed CLIP instances
fn fastembed_factory(
    config: &EmbeddingModelConfig,
) -> std::result::Result<Arc<dyn EmbeddingModelProvider>, String> {
    let name = config.model.as_deref().unwrap_or(FASTEMBED_DEFAULT_MODEL);
    let model = ClipModel::parse(name).ok_or_else(|| {
        format!("Unknown FastEmbed model '{name}'. Available: clip-vit-b-32, nomic-embed-v1.5")
    })?;
    let cache_dir = config.cache_dir.clone().unwrap_or_else(|| {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(MODEL_CACHE_DIR_NAME)
    });

    let provider = FastEmbedClipModel::new(model, cache_dir, config.show_download_progress)
        .map_err(|e| format!("Failed to create FastEmbed provider: {e}"))?;
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_MODEL_PROVIDERS)]
static FASTEMBED_MODEL: EmbeddingModelEntry = EmbeddingModelEntry {
    name: "fastembed",
    description: "FastEmbed local CLIP encoders (clip-vit-b-32, nomic-embed-v1.5)",
    factory: fastembed_factory,
};
