//! Provider adapters for remote LLM HTTP APIs

pub mod models;
pub mod openai;

pub use models::{ChatRequest, ChatResponse, EmbeddingRequest, EmbeddingResponse};
pub use openai::{GenerationOptions, OpenAiEmbeddingProvider, OpenAiProvider};

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;

/// Something that turns a prompt into generated text.
///
/// `generation_args` is an open-ended bag of per-call options; implementations
/// may ignore arguments they do not support (reporting them as a warning, not
/// an error).
#[async_trait]
pub trait Provider: Send + Sync {
    /// Generate text for a prompt
    async fn generate(
        &self,
        prompt: &str,
        generation_args: HashMap<String, Value>,
    ) -> Result<String>;
}

/// Something that turns text into a fixed-length numeric vector.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate the embedding vector for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
