//! The multi-signal scoring pipeline: bounded analysis types, prompt
//! templates, and the `ScoringProvider` seam over the LLM.

pub mod models;
pub mod prompts;
pub mod provider;
