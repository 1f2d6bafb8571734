//! Skill coverage of a candidate against required skills

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    #[serde(rename = "matched_skills")]
    pub matched: Vec<String>,
    #[serde(rename = "missing_skills")]
    pub missing: Vec<String>,
    /// Fraction of required skills present, in [0, 1]
    #[serde(rename = "coverage_percentage")]
    pub coverage_ratio: f64,
}

/// Compare candidate skills with required skills.
///
/// No required skills means full coverage: a job description without
/// recognisable skills should not penalise anyone.
pub fn coverage<S: AsRef<str>>(candidate_skills: &[S], required_skills: &[S]) -> CoverageResult {
    let required: BTreeSet<&str> = required_skills.iter().map(|s| s.as_ref()).collect();
    if required.is_empty() {
        return CoverageResult {
            matched: Vec::new(),
            missing: Vec::new(),
            coverage_ratio: 1.0,
        };
    }

    let candidate: BTreeSet<&str> = candidate_skills.iter().map(|s| s.as_ref()).collect();

    let (matched, missing): (Vec<&str>, Vec<&str>) =
        required.iter().copied().partition(|skill| candidate.contains(skill));

    let coverage_ratio = matched.len() as f64 / required.len() as f64;

    CoverageResult {
        matched: matched.into_iter().map(str::to_string).collect(),
        missing: missing.into_iter().map(str::to_string).collect(),
        coverage_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_coverage() {
        let result = coverage(&["java", "python", "aws"], &["aws", "java", "python", "sql"]);
        assert_eq!(result.matched, vec!["aws", "java", "python"]);
        assert_eq!(result.missing, vec!["sql"]);
        assert_eq!(result.coverage_ratio, 0.75);
    }

    #[test]
    fn test_empty_requirements_are_fully_covered() {
        let result = coverage(&["java"], &[]);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.coverage_ratio, 1.0);

        let empty: [&str; 0] = [];
        assert_eq!(coverage(&empty, &empty).coverage_ratio, 1.0);
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let candidate = ["docker", "git", "rust", "sql"];
        let required = ["sql", "git", "kubernetes", "git", "aws"];
        let result = coverage(&candidate, &required);

        let mut union: Vec<&str> = result
            .matched
            .iter()
            .chain(result.missing.iter())
            .map(String::as_str)
            .collect();
        union.sort();
        assert_eq!(union, vec!["aws", "git", "kubernetes", "sql"]);
        assert!(result.matched.iter().all(|m| !result.missing.contains(m)));
        // Duplicates in the requirement list count once.
        assert_eq!(result.coverage_ratio, 0.5);
    }

    #[test]
    fn test_no_overlap() {
        let result = coverage(&["figma"], &["sql"]);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["sql"]);
        assert_eq!(result.coverage_ratio, 0.0);
    }

    #[test]
    fn test_serializes_with_record_field_names() {
        let result = coverage(&["java"], &["java", "sql"]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matched_skills"][0], "java");
        assert_eq!(json["missing_skills"][0], "sql");
        assert_eq!(json["coverage_percentage"], 0.5);
    }
}
