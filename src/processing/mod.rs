//! Skill extraction, scoring and the screening pipeline

pub mod catalog;
pub mod coverage;
pub mod embeddings;
pub mod experience;
pub mod pipeline;
pub mod scoring;
pub mod similarity;
pub mod skill_extractor;
