//! CLI interface for the resume screener

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Score resumes against a job description")]
#[command(
    long_about = "Score a PDF or DOCX resume against a job description by combining semantic similarity with required-skill coverage"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a resume against a job description
    Rank {
        /// Path to resume file (PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a plain-text job description
        #[arg(short, long, conflicts_with = "job_text", required_unless_present = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Weight of semantic similarity in the final score
        #[arg(long)]
        semantic_weight: Option<f64>,

        /// Weight of skill coverage in the final score
        #[arg(long)]
        skill_weight: Option<f64>,

        /// Fuzzy match threshold (0-100) for resume skills
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        resume_threshold: Option<u8>,

        /// Fuzzy match threshold (0-100) for job description skills
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        jd_threshold: Option<u8>,

        /// Skip loading the embedding model (semantic similarity scores 0.0)
        #[arg(long)]
        no_model: bool,

        /// Fail instead of degrading when the embedding model is unavailable
        #[arg(long, conflicts_with = "no_model")]
        strict: bool,
    },

    /// Extract skills and experience from a resume
    Parse {
        /// Path to resume file (PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Report readiness of the embedding model
    Health,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_rank_requires_a_job_description() {
        assert!(Cli::try_parse_from(["resume-screener", "rank", "-r", "cv.pdf"]).is_err());

        let cli = Cli::try_parse_from([
            "resume-screener",
            "rank",
            "-r",
            "cv.pdf",
            "--job-text",
            "Must know Java",
            "--semantic-weight",
            "0.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Rank {
                job,
                job_text,
                semantic_weight,
                ..
            } => {
                assert!(job.is_none());
                assert_eq!(job_text.as_deref(), Some("Must know Java"));
                assert_eq!(semantic_weight, Some(0.5));
            }
            _ => panic!("expected rank command"),
        }
    }

    #[test]
    fn test_threshold_out_of_range() {
        let result = Cli::try_parse_from([
            "resume-screener",
            "rank",
            "-r",
            "cv.pdf",
            "--job-text",
            "java",
            "--jd-threshold",
            "101",
        ]);
        assert!(result.is_err());
    }
}
