//! Static prompt templates for structured JSON extraction
//!
//! Each template is a pure function of (schema text, source text); the result
//! is passed verbatim as the prompt to a [`crate::provider::Provider`]. The
//! caller owns the schema definition and the parsing of the model's output.

pub mod structured_job;
pub mod structured_resume;

pub use structured_job::structured_job_prompt;
pub use structured_resume::structured_resume_prompt;
