//! Static reference list of recognizable skills

use std::collections::BTreeSet;

/// Reference skills recognised out of the box.
const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "c++", "c#", "javascript", "typescript", "react", "next.js",
    "angular", "vue.js", "node.js", "express.js", "django", "flask", "fastapi",
    "sql", "mysql", "postgresql", "mongodb", "redis", "docker", "kubernetes", "aws",
    "azure", "gcp", "terraform", "ansible", "git", "jira", "scrum", "agile",
    "machine learning", "deep learning", "pytorch", "tensorflow", "scikit-learn",
    "pandas", "numpy", "data analysis", "data visualization", "nlp", "llm",
    "natural language processing", "power bi", "tableau", "figma", "adobe xd",
    "project management", "product management", "ui/ux design", "team leadership",
];

/// Immutable, lowercase, duplicate-free and lexicographically ordered skill set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Build a catalog, normalising entries to trimmed lowercase. Blank entries are dropped.
    pub fn new<'a, I>(skills: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let skills: BTreeSet<String> = skills
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            skills: skills.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills
            .binary_search_by(|s| s.as_str().cmp(skill))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}
