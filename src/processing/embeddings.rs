//! Embedding capability backed by Model2Vec

use crate::config::EmbeddingConfig;
use crate::error::{Result, ScreenerError};
use log::{error, info, warn};
use model2vec_rs::model::StaticModel;
use std::sync::Arc;
use std::time::Instant;

/// Turns text into a dense vector. Implementations must be safe for concurrent
/// read-only use; the loaded model is shared by every request.
pub trait Embedder: Send + Sync {
    /// Model identifier, reported by health checks
    fn name(&self) -> &str;

    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

pub struct Model2VecEmbedder {
    model: StaticModel,
    model_name: String,
}

impl Model2VecEmbedder {
    /// Load from a local folder or a HuggingFace repo id. Blocking; may hit the network.
    pub fn load(model: &str) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading Model2Vec embedding model: {}", model);

        let static_model = StaticModel::from_pretrained(
            model,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| {
            ScreenerError::ModelUnavailable(format!("Failed to load model '{}': {}", model, e))
        })?;

        info!("Model loaded successfully in {:.2?}", start_time.elapsed());

        Ok(Self {
            model: static_model,
            model_name: model.to_string(),
        })
    }
}

impl Embedder for Model2VecEmbedder {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.model.encode_single(text))
    }
}

/// One-time startup load. `None` means the capability is absent and semantic
/// scores degrade to 0.0.
pub fn load_embedder(config: &EmbeddingConfig) -> Option<Arc<dyn Embedder>> {
    if !config.enabled {
        warn!("Embedding model disabled by configuration; semantic similarity will be 0.0");
        return None;
    }

    match Model2VecEmbedder::load(&config.model) {
        Ok(embedder) => Some(Arc::new(embedder)),
        Err(e) => {
            error!("Error loading model: {}", e);
            None
        }
    }
}

/// Cosine similarity between two embeddings. Zero vectors score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ScreenerError::Internal(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}
