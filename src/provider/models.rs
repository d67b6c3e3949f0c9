//! Data models for chat-completion and embedding requests and responses

use serde::{Deserialize, Serialize};

/// Request body for the chat-completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,

    /// Streaming flag, always disabled
    pub stream: bool,

    /// Conversation messages (a single system message carrying the prompt)
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature
    pub temperature: f64,

    /// Nucleus-sampling probability mass
    pub top_p: f64,
}

/// A single role-tagged message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response from the chat-completions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Generated completions; only the first is consumed
    pub choices: Vec<ChatChoice>,
}

/// One generated completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

/// Message payload inside a completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: String,
}

/// Request body for the embeddings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Input text to embed
    pub input: String,

    /// Model identifier
    pub model: String,
}

/// Response from the embeddings endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResponse {
    /// Generated embeddings; only the first is consumed
    pub data: Vec<EmbeddingData>,
}

/// Individual embedding data
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingData {
    /// Embedding vector, order preserved
    pub embedding: Vec<f32>,
}

impl ChatRequest {
    /// Build the fixed request shape: a single system message carrying the
    /// caller's prompt, streaming disabled.
    pub fn system_prompt(
        model: impl Into<String>,
        prompt: impl Into<String>,
        temperature: f64,
        top_p: f64,
    ) -> Self {
        Self {
            model: model.into(),
            stream: false,
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: prompt.into(),
            }],
            temperature,
            top_p,
        }
    }
}
