//! Resume Agent - LLM provider adapters for structured document extraction
//!
//! This library provides thin adapters over an OpenAI-compatible HTTP API
//! (chat completions and embeddings) together with the static prompt
//! templates used to turn job postings and resumes into schema-conforming
//! JSON.
//!
//! ## Features
//!
//! - **Text generation**: one POST to `/chat/completions` per call, result
//!   unwrapped to the first choice's message content
//! - **Embeddings**: one POST to `/embeddings` per call, result unwrapped to
//!   the first embedding vector
//! - **Worker-thread offload**: blocking HTTP runs on `spawn_blocking` so the
//!   caller's event loop is never stalled
//! - **Credential resolution**: explicit argument, then settings, then the
//!   `OPENAI_API_KEY` environment variable
//!
//! Retries, rate limiting, streaming, and validation of the model's output
//! against the target schema are deliberately out of scope; they belong to
//! the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume_agent::prelude::*;
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let settings = Settings::from_env()?;
//!     let provider = OpenAiProvider::new(None, &settings)?;
//!
//!     let schema = r#"{"title": "string", "extractedKeywords": ["string"]}"#;
//!     let prompt = structured_job_prompt(schema, "We are hiring a Rust engineer...");
//!     let json_text = provider.generate(&prompt, HashMap::new()).await?;
//!     println!("{json_text}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;

pub use config::Settings;
pub use error::{ProviderError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::error::{ProviderError, Result};
    pub use crate::prompt::{structured_job_prompt, structured_resume_prompt};
    pub use crate::provider::{
        EmbeddingProvider, GenerationOptions, OpenAiEmbeddingProvider, OpenAiProvider, Provider,
    };
}
