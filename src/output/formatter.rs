//! Output formatters for screening results

use crate::config::OutputFormat;
use crate::error::{ErrorResponse, Result};
use crate::processing::pipeline::RankResult;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a screening result
pub trait OutputFormatter {
    fn format_result(&self, result: &RankResult) -> Result<String>;
    fn format_error(&self, error: &ErrorResponse) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human-readable terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// Machine-readable record with the public field names
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown report
pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(true)),
    }
}

/// Display-only percentage, bounded to 0..=100. The score itself is never clamped.
fn display_percentage(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG", Color::Green),
            65..=79 => ("GOOD", Color::BrightGreen),
            50..=64 => ("FAIR", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &RankResult) -> Result<String> {
        let mut output = String::new();
        let coverage = &result.skill_coverage;
        let required = coverage.matched.len() + coverage.missing.len();

        output.push_str(&self.format_header("RESUME SCREENING RESULT", 1));
        output.push_str(&format!("Resume: {}\n", result.filename));
        output.push_str(&format!(
            "Final Score: {:.2} {}\n",
            result.final_score,
            self.format_score_badge(display_percentage(result.final_score))
        ));
        output.push_str(&format!("{}\n", self.colorize(&result.explanation, Color::Cyan)));

        output.push_str(&self.format_header("Scores", 2));
        output.push_str(&format!(
            "  • Semantic similarity: {:.2}\n",
            result.semantic_similarity
        ));
        output.push_str(&format!(
            "  • Skill coverage: {:.0}% ({}/{})\n",
            coverage.coverage_ratio * 100.0,
            coverage.matched.len(),
            required
        ));
        output.push_str(&format!(
            "  • Experience: {:.1} years\n",
            result.experience_years
        ));

        output.push_str(&self.format_header("Skills", 2));
        output.push_str(&format!("  • Resume: {}\n", join_or_none(&result.resume_skills)));
        output.push_str(&format!("  • Required: {}\n", join_or_none(&result.jd_skills)));
        output.push_str(&format!(
            "  • Matched: {}\n",
            self.colorize(&join_or_none(&coverage.matched), Color::Green)
        ));
        output.push_str(&format!(
            "  • Missing: {}\n",
            self.colorize(&join_or_none(&coverage.missing), Color::Red)
        ));

        Ok(output)
    }

    fn format_error(&self, error: &ErrorResponse) -> Result<String> {
        Ok(format!(
            "{} {}\n",
            self.colorize("Error:", Color::Red),
            error.detail
        ))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &RankResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn format_error(&self, error: &ErrorResponse) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(error)?)
        } else {
            Ok(serde_json::to_string(error)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_result(&self, result: &RankResult) -> Result<String> {
        let coverage = &result.skill_coverage;
        let mut md = String::new();

        md.push_str(&format!("# Screening Result: {}\n\n", result.filename));
        if self.include_metadata {
            md.push_str(&format!(
                "_Generated {}_\n\n",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        md.push_str(&format!("**Final score:** {:.2}\n\n", result.final_score));
        md.push_str(&format!("> {}\n\n", result.explanation));

        md.push_str("| Signal | Value |\n|---|---|\n");
        md.push_str(&format!(
            "| Semantic similarity | {:.2} |\n",
            result.semantic_similarity
        ));
        md.push_str(&format!(
            "| Skill coverage | {:.0}% |\n",
            coverage.coverage_ratio * 100.0
        ));
        md.push_str(&format!(
            "| Experience | {:.1} years |\n\n",
            result.experience_years
        ));

        md.push_str("## Skills\n\n");
        md.push_str(&format!("- **Resume:** {}\n", join_or_none(&result.resume_skills)));
        md.push_str(&format!("- **Required:** {}\n", join_or_none(&result.jd_skills)));
        md.push_str(&format!("- **Matched:** {}\n", join_or_none(&coverage.matched)));
        md.push_str(&format!("- **Missing:** {}\n", join_or_none(&coverage.missing)));

        Ok(md)
    }

    fn format_error(&self, error: &ErrorResponse) -> Result<String> {
        Ok(format!("**Error:** {}\n", error.detail))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
