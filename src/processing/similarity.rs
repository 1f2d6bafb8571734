//! Semantic similarity with a degrade-to-neutral policy
//!
//! A missing model, an embedding error, a panic inside the model or a timeout
//! all yield 0.0 and a warning. Nothing here aborts a request.

use crate::processing::embeddings::{cosine_similarity, Embedder};
use log::{debug, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct SimilarityScorer {
    embedder: Option<Arc<dyn Embedder>>,
    timeout: Duration,
}

impl SimilarityScorer {
    pub fn new(embedder: Option<Arc<dyn Embedder>>, timeout: Duration) -> Self {
        Self { embedder, timeout }
    }

    /// Scorer with no model; every call returns 0.0.
    pub fn unavailable() -> Self {
        Self::new(None, Duration::from_secs(10))
    }

    pub fn is_ready(&self) -> bool {
        self.embedder.is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.embedder.as_deref().map(|e| e.name())
    }

    /// Cosine similarity of the two texts' embeddings, roughly in [-1, 1].
    pub async fn similarity(&self, text1: &str, text2: &str) -> f64 {
        let Some(embedder) = &self.embedder else {
            warn!("Model is not loaded. Returning 0.0");
            return 0.0;
        };

        let embedder = Arc::clone(embedder);
        let (text1, text2) = (text1.to_string(), text2.to_string());
        let start_time = Instant::now();

        let task = tokio::task::spawn_blocking(move || {
            let embedding1 = embedder.embed(&text1)?;
            let embedding2 = embedder.embed(&text2)?;
            cosine_similarity(&embedding1, &embedding2)
        });

        let score = match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(Ok(score))) => score,
            Ok(Ok(Err(e))) => {
                warn!("Error calculating similarity: {}", e);
                return 0.0;
            }
            Ok(Err(e)) => {
                warn!("Embedding task failed: {}", e);
                return 0.0;
            }
            Err(_) => {
                warn!("Embedding timed out after {:?}; returning 0.0", self.timeout);
                return 0.0;
            }
        };

        if !score.is_finite() {
            warn!("Embedding produced a non-finite similarity; returning 0.0");
            return 0.0;
        }

        debug!(
            "Semantic similarity {:.4} computed in {:.2?}",
            score,
            start_time.elapsed()
        );
        f64::from(score)
    }
}
