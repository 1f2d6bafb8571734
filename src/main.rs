//! Resume screener: ranks resumes against a job description

use clap::Parser;
use colored::Colorize;
use log::{error, info};
use resume_screener::cli::{self, Cli, Commands, ConfigAction};
use resume_screener::config::{Config, OutputFormat};
use resume_screener::error::{ErrorResponse, Result, ScreenerError};
use resume_screener::input::ResumeUpload;
use resume_screener::output::formatter::{formatter_for, save_report_to_file, OutputFormatter};
use resume_screener::processing::embeddings::load_embedder;
use resume_screener::processing::pipeline::{RankResult, ScreeningPipeline};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let exit_code = match run_command(cli.command, config, cli.config).await {
        Ok(code) => code,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{} {}", "Error:".red().bold(), ErrorResponse::from(&e).detail);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<i32> {
    match command {
        Commands::Rank {
            resume,
            job,
            job_text,
            output,
            save,
            semantic_weight,
            skill_weight,
            resume_threshold,
            jd_threshold,
            no_model,
            strict,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ScreenerError::InvalidInput)?,
                None => config.output.format,
            };

            if let Some(weight) = semantic_weight {
                config.scoring.semantic_weight = weight;
            }
            if let Some(weight) = skill_weight {
                config.scoring.skill_weight = weight;
            }
            if let Some(threshold) = resume_threshold {
                config.scoring.resume_threshold = threshold;
            }
            if let Some(threshold) = jd_threshold {
                config.scoring.jd_threshold = threshold;
            }
            if no_model {
                config.embedding.enabled = false;
            }
            if strict {
                config.scoring.strict_model = true;
            }

            let formatter = formatter_for(output_format, config.output.color_output && save.is_none());

            match rank_request(&config, &resume, job, job_text).await {
                Ok(result) => {
                    let rendered = formatter.format_result(&result)?;
                    match save {
                        Some(path) => {
                            save_report_to_file(&rendered, &path)?;
                            println!("✅ Report saved to {}", path.display());
                        }
                        None => println!("{}", rendered),
                    }
                    Ok(0)
                }
                Err(e) => {
                    error!("Ranking failed: {}", e);
                    let (rendered, to_stdout) = render_failure(formatter.as_ref(), &e)?;
                    if to_stdout {
                        println!("{}", rendered);
                    } else {
                        eprint!("{}", rendered);
                    }
                    Ok(e.exit_code())
                }
            }
        }

        Commands::Parse { resume } => {
            let upload = ResumeUpload::from_path(&resume).await?;
            let filename = upload.filename.clone();
            let pipeline = build_pipeline(&config, false).await?;
            let parsed = pipeline.parse_resume(upload).await?;

            if config.output.format == OutputFormat::Json {
                let record = serde_json::json!({
                    "filename": filename,
                    "skills": parsed.skills,
                    "experience_years": parsed.experience_years,
                });
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("📄 Resume: {}", filename);
                println!("  • Skills: {}", parsed.skills.join(", "));
                println!("  • Experience: {:.1} years", parsed.experience_years);
            }
            Ok(0)
        }

        Commands::Health => {
            let pipeline = build_pipeline(&config, true).await?;
            let health = pipeline.health();
            println!("{}", serde_json::to_string_pretty(&health)?);
            Ok(if health.embedding_ready { 0 } else { 1 })
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!(
                        "Embedding Model: {} ({})",
                        config.embedding.model,
                        if config.embedding.enabled { "enabled" } else { "disabled" }
                    );
                    println!("Embedding Timeout: {}ms", config.embedding.timeout_ms);
                    println!("\nScoring Weights:");
                    println!("  Semantic similarity: {:.1}%", config.scoring.semantic_weight * 100.0);
                    println!("  Skill coverage: {:.1}%", config.scoring.skill_weight * 100.0);
                    println!("\nMatch Thresholds:");
                    println!("  Resume: {}", config.scoring.resume_threshold);
                    println!("  Job description: {}", config.scoring.jd_threshold);
                    println!("  Strict model: {}", config.scoring.strict_model);
                    println!("\nSkill Catalog: {} skills", config.catalog().len());
                    println!("Output Format: {:?}", config.output.format);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    match &config_path {
                        Some(path) => default_config.save_to(path)?,
                        None => default_config.save()?,
                    }
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    let path = config_path.unwrap_or_else(Config::config_path);
                    println!("{}", path.display());
                }
            }
            Ok(0)
        }
    }
}

/// Load inputs, build the pipeline and rank. Every failure surfaces here so it
/// can be rendered in the requested output format.
async fn rank_request(
    config: &Config,
    resume: &Path,
    job: Option<PathBuf>,
    job_text: Option<String>,
) -> Result<RankResult> {
    let job_description = match (job, job_text) {
        (_, Some(text)) => text,
        (Some(path), None) => read_job_description(&path).await?,
        (None, None) => {
            return Err(ScreenerError::InvalidInput(
                "A job description is required (--job or --job-text)".to_string(),
            ))
        }
    };

    let upload = ResumeUpload::from_path(resume).await?;
    let pipeline = build_pipeline(config, true).await?;

    info!("Ranking {} against job description", upload.filename);
    pipeline.rank(&job_description, upload).await
}

/// Rendered failure and whether it belongs on stdout (JSON) or stderr.
fn render_failure(formatter: &dyn OutputFormatter, error: &ScreenerError) -> Result<(String, bool)> {
    let rendered = formatter.format_error(&ErrorResponse::from(error))?;
    Ok((rendered, formatter.supports_format() == OutputFormat::Json))
}

/// Build the shared pipeline. The model is loaded once, off the async runtime.
async fn build_pipeline(config: &Config, with_model: bool) -> Result<ScreeningPipeline> {
    let embedder = if with_model {
        let embedding = config.embedding.clone();
        tokio::task::spawn_blocking(move || load_embedder(&embedding))
            .await
            .map_err(anyhow::Error::from)?
    } else {
        None
    };

    Ok(ScreeningPipeline::from_config(config, embedder))
}

async fn read_job_description(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ScreenerError::InvalidInput(format!(
            "Job description file does not exist: {}",
            path.display()
        )));
    }
    Ok(tokio::fs::read_to_string(path).await?)
}
