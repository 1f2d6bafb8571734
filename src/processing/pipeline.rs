//! Screening pipeline: one resume against one job description
//!
//! Extraction failures abort with a client error, embedding problems degrade
//! the semantic score to 0.0, and anything unexpected afterwards is an
//! internal error. No partial results are returned.

use crate::config::Config;
use crate::error::{Result, ScreenerError};
use crate::input::{InputManager, ResumeUpload};
use crate::processing::catalog::SkillCatalog;
use crate::processing::coverage::{coverage, CoverageResult};
use crate::processing::embeddings::Embedder;
use crate::processing::experience::ExperienceExtractor;
use crate::processing::scoring::{fuse, WeightConfig};
use crate::processing::similarity::SimilarityScorer;
use crate::processing::skill_extractor::{extract_skills, JD_THRESHOLD, RESUME_THRESHOLD};
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Signals extracted from one resume. Built once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub raw_text: String,
    pub skills: Vec<String>,
    pub experience_years: f64,
}

/// Full result record for one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    pub filename: String,
    pub resume_skills: Vec<String>,
    pub experience_years: f64,
    pub jd_skills: Vec<String>,
    pub semantic_similarity: f64,
    pub skill_coverage: CoverageResult,
    pub final_score: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" when the embedding model is loaded, "degraded" otherwise
    pub status: String,
    pub embedding_ready: bool,
    pub embedding_model: Option<String>,
    pub skill_catalog_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineOptions {
    pub weights: WeightConfig,
    pub resume_threshold: u8,
    pub jd_threshold: u8,
    /// Refuse to rank without an embedding model instead of scoring similarity as 0.0
    pub strict_model: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            resume_threshold: RESUME_THRESHOLD,
            jd_threshold: JD_THRESHOLD,
            strict_model: false,
        }
    }
}

/// Shared, read-only screening service. Safe to call from many tasks at once.
pub struct ScreeningPipeline {
    catalog: Arc<SkillCatalog>,
    experience: ExperienceExtractor,
    input: InputManager,
    scorer: SimilarityScorer,
    options: PipelineOptions,
}

impl ScreeningPipeline {
    pub fn new(catalog: SkillCatalog, scorer: SimilarityScorer, options: PipelineOptions) -> Self {
        options.weights.warn_if_unbalanced();

        Self {
            catalog: Arc::new(catalog),
            experience: ExperienceExtractor::new(),
            input: InputManager::new(),
            scorer,
            options,
        }
    }

    pub fn from_config(config: &Config, embedder: Option<Arc<dyn Embedder>>) -> Self {
        let options = PipelineOptions {
            weights: config.weights(),
            resume_threshold: config.scoring.resume_threshold,
            jd_threshold: config.scoring.jd_threshold,
            strict_model: config.scoring.strict_model,
        };
        let scorer = SimilarityScorer::new(embedder, config.embedding_timeout());

        Self::new(config.catalog(), scorer, options)
    }

    /// Text, skills and experience of a resume.
    pub async fn parse_resume(&self, upload: ResumeUpload) -> Result<ExtractedDocument> {
        let raw_text = self.input.extract_text(upload).await?;
        let (raw_text, skills) = self
            .match_skills(raw_text, self.options.resume_threshold)
            .await?;
        let experience_years = self.experience.extract_years(&raw_text);

        Ok(ExtractedDocument {
            raw_text,
            skills,
            experience_years,
        })
    }

    /// Required skills of a job description. The text is lowercased before matching.
    pub async fn parse_jd(&self, job_description: &str) -> Result<Vec<String>> {
        let (_, skills) = self
            .match_skills(job_description.to_lowercase(), self.options.jd_threshold)
            .await?;
        Ok(skills)
    }

    /// Score one resume against one job description.
    pub async fn rank(&self, job_description: &str, upload: ResumeUpload) -> Result<RankResult> {
        let start_time = Instant::now();

        if self.options.strict_model && !self.scorer.is_ready() {
            return Err(ScreenerError::ModelUnavailable(
                "strict mode requires a loaded embedding model".to_string(),
            ));
        }

        let filename = upload.filename.clone();

        info!("Parsing resume: {}", filename);
        let resume = self.parse_resume(upload).await?;

        info!("Extracting required skills from job description");
        let jd_skills = self.parse_jd(job_description).await?;

        info!("Calculating semantic similarity");
        let semantic_similarity = self
            .scorer
            .similarity(&resume.raw_text, job_description)
            .await;

        let skill_coverage = coverage(resume.skills.as_slice(), jd_skills.as_slice());
        let score = fuse(
            semantic_similarity,
            skill_coverage.coverage_ratio,
            &self.options.weights,
        );

        if !score.final_score.is_finite() {
            return Err(ScreenerError::Internal(format!(
                "non-finite final score from similarity {} and coverage {}",
                semantic_similarity, skill_coverage.coverage_ratio
            )));
        }

        info!(
            "Ranked {} in {:.2?}: final score {:.3}",
            filename,
            start_time.elapsed(),
            score.final_score
        );

        Ok(RankResult {
            filename,
            resume_skills: resume.skills,
            experience_years: resume.experience_years,
            jd_skills,
            semantic_similarity,
            skill_coverage,
            final_score: score.final_score,
            explanation: score.explanation,
        })
    }

    pub fn health(&self) -> HealthStatus {
        let embedding_ready = self.scorer.is_ready();

        HealthStatus {
            status: if embedding_ready { "ok" } else { "degraded" }.to_string(),
            embedding_ready,
            embedding_model: self.scorer.model_name().map(str::to_string),
            skill_catalog_size: self.catalog.len(),
        }
    }

    /// Fuzzy matching is CPU bound, so it runs on the blocking pool. The text is handed back.
    async fn match_skills(&self, text: String, threshold: u8) -> Result<(String, Vec<String>)> {
        let catalog = Arc::clone(&self.catalog);

        tokio::task::spawn_blocking(move || {
            let skills = extract_skills(&text, &catalog, threshold);
            (text, skills)
        })
        .await
        .map_err(|e| ScreenerError::Internal(format!("Skill matching aborted: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(options: PipelineOptions) -> ScreeningPipeline {
        ScreeningPipeline::new(
            SkillCatalog::new(["java", "python", "aws", "sql"]),
            SimilarityScorer::unavailable(),
            options,
        )
    }

    #[tokio::test]
    async fn test_parse_jd_lowercases() {
        let pipeline = pipeline(PipelineOptions::default());
        assert_eq!(
            pipeline
                .parse_jd("Must know Java, AWS, and SQL. Python is a plus.")
                .await
                .unwrap(),
            vec!["aws", "java", "python", "sql"]
        );
        assert!(pipeline.parse_jd("").await.unwrap().is_empty());
    }

    #[test]
    fn test_health_without_model() {
        let health = pipeline(PipelineOptions::default()).health();
        assert_eq!(health.status, "degraded");
        assert!(!health.embedding_ready);
        assert_eq!(health.embedding_model, None);
        assert_eq!(health.skill_catalog_size, 4);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_missing_model() {
        let pipeline = pipeline(PipelineOptions {
            strict_model: true,
            ..PipelineOptions::default()
        });
        let upload = ResumeUpload::new("resume.docx", Vec::new());
        let err = pipeline.rank("java", upload).await.unwrap_err();
        assert!(matches!(err, ScreenerError::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn test_unsupported_format_aborts_rank() {
        let pipeline = pipeline(PipelineOptions::default());
        let upload = ResumeUpload::new("resume.rtf", b"java".to_vec());
        let err = pipeline.rank("java", upload).await.unwrap_err();
        assert!(matches!(err, ScreenerError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_non_finite_weights_are_internal_errors() {
        let pipeline = pipeline(PipelineOptions {
            weights: WeightConfig {
                semantic_weight: f64::NAN,
                skill_weight: 0.4,
            },
            ..PipelineOptions::default()
        });
        let upload = ResumeUpload::new("resume.docx", docx_with_text("java developer"));
        let err = pipeline.rank("java", upload).await.unwrap_err();
        assert!(matches!(err, ScreenerError::Internal(_)));
    }

    fn docx_with_text(text: &str) -> Vec<u8> {
        use std::io::{Cursor, Write};
        use zip::write::FileOptions;
        use zip::ZipWriter;

        let xml = format!(
            "<w:document><w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body></w:document>",
            text
        );
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("word/document.xml", FileOptions::default()).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }
}
