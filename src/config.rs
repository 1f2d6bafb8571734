//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use crate::processing::catalog::SkillCatalog;
use crate::processing::scoring::WeightConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub scoring: ScoringConfig,
    pub skills: SkillsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// HuggingFace repo id or local model folder
    pub model: String,
    pub enabled: bool,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub semantic_weight: f64,
    pub skill_weight: f64,
    pub resume_threshold: u8,
    pub jd_threshold: u8,
    /// Fail requests instead of degrading when the model is missing
    pub strict_model: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    pub catalog: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let weights = WeightConfig::default();

        Self {
            embedding: EmbeddingConfig {
                model: "minishlab/potion-base-8M".to_string(),
                enabled: true,
                timeout_ms: 10_000,
            },
            scoring: ScoringConfig {
                semantic_weight: weights.semantic_weight,
                skill_weight: weights.skill_weight,
                resume_threshold: 85,
                jd_threshold: 90,
                strict_model: false,
            },
            skills: SkillsConfig {
                catalog: SkillCatalog::default().iter().map(str::to_string).collect(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the user config dir (created on first use).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::load_from(&config_path)
                } else {
                    let config = Self::default();
                    config.save_to(&config_path)?;
                    Ok(config)
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScreenerError::Configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    pub fn weights(&self) -> WeightConfig {
        WeightConfig {
            semantic_weight: self.scoring.semantic_weight,
            skill_weight: self.scoring.skill_weight,
        }
    }

    pub fn catalog(&self) -> SkillCatalog {
        SkillCatalog::new(self.skills.catalog.iter().map(String::as_str))
    }

    pub fn embedding_timeout(&self) -> Duration {
        Duration::from_millis(self.embedding.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = Config::default();
        assert_eq!(config.scoring.semantic_weight, 0.6);
        assert_eq!(config.scoring.skill_weight, 0.4);
        assert_eq!(config.scoring.resume_threshold, 85);
        assert_eq!(config.scoring.jd_threshold, 90);
        assert!(!config.scoring.strict_model);
        assert_eq!(config.catalog().len(), SkillCatalog::default().len());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.semantic_weight = 0.7;
        config.skills.catalog = vec!["Rust".to_string(), "go".to_string()];
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.scoring.semantic_weight, 0.7);
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert_eq!(loaded.catalog().iter().collect::<Vec<_>>(), vec!["go", "rust"]);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ScreenerError::Configuration(_))));
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring\nsemantic_weight = ").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ScreenerError::Configuration(_))));
    }
}
