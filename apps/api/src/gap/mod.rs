//! Skills-gap analysis: the model-written gap report, the enhanced skills
//! analysis, and the local substring scorer both rely on.

pub mod analyze;
pub mod handlers;
pub mod prompts;
pub mod scoring;

pub use analyze::{analyze_gaps, analyze_skills, required_skills};
pub use scoring::{GapScorer, SkillMatchReport, SubstringGapScorer};
