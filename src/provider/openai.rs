//! Adapters for the OpenAI-compatible chat-completion and embedding APIs

use super::models::*;
use super::{EmbeddingProvider, Provider};
use crate::config::{resolve_credential, Settings, OPENAI_API_KEY_ENV};
use crate::error::{HttpStatusError, ProviderError, Result};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Default generation options merged into every chat request.
///
/// Only temperature and top_p are recognized; the OpenAI API supports neither
/// top_k nor a per-request max_length, so there is nothing else to merge.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Sampling temperature, 0 when unset
    pub temperature: Option<f64>,
    /// Nucleus-sampling probability mass, 0.9 when unset
    pub top_p: Option<f64>,
}

impl GenerationOptions {
    fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(0.0)
    }

    fn top_p(&self) -> f64 {
        self.top_p.unwrap_or(0.9)
    }
}

/// Immutable per-adapter configuration, shared with worker threads
#[derive(Debug)]
struct AdapterConfig {
    api_key: Secret<String>,
    base_url: String,
    model: String,
}

/// Resolve an API key with the standard precedence: explicit argument, then
/// settings value, then the `OPENAI_API_KEY` environment variable.
fn resolve_api_key(
    explicit: Option<String>,
    from_settings: Option<&Secret<String>>,
) -> Result<Secret<String>> {
    resolve_credential([
        explicit,
        from_settings.map(|s| s.expose_secret().clone()),
        std::env::var(OPENAI_API_KEY_ENV).ok(),
    ])
    .ok_or_else(|| ProviderError::new("OpenAI API key is missing"))
}

/// Text-generation adapter for the `{base_url}/chat/completions` endpoint.
///
/// Each invocation issues one blocking HTTP POST, offloaded to a worker thread
/// via `spawn_blocking` so an async caller is never stalled. Configuration is
/// fixed at construction; concurrent calls on one instance are independent.
#[derive(Debug)]
pub struct OpenAiProvider {
    config: Arc<AdapterConfig>,
    opts: GenerationOptions,
}

impl OpenAiProvider {
    /// Create a new provider. The credential is resolved from the explicit
    /// argument, `settings.llm_api_key`, or the `OPENAI_API_KEY` environment
    /// variable, in that order; construction fails if none is present.
    pub fn new(api_key: Option<String>, settings: &Settings) -> Result<Self> {
        let api_key = resolve_api_key(api_key, settings.llm_api_key.as_ref())?;

        Ok(Self {
            config: Arc::new(AdapterConfig {
                api_key,
                base_url: settings.api_base_url.clone(),
                model: settings.llm_model.clone(),
            }),
            opts: GenerationOptions::default(),
        })
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config = Arc::new(AdapterConfig {
            api_key: self.config.api_key.clone(),
            base_url: self.config.base_url.clone(),
            model: model.into(),
        });
        self
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = Arc::new(AdapterConfig {
            api_key: self.config.api_key.clone(),
            base_url: base_url.into(),
            model: self.config.model.clone(),
        });
        self
    }

    /// Set the default generation options merged into every request
    pub fn with_options(mut self, opts: GenerationOptions) -> Self {
        self.opts = opts;
        self
    }

    fn generate_blocking(config: &AdapterConfig, request: &ChatRequest) -> Result<String> {
        let client = reqwest::blocking::Client::new();
        let url = format!("{}/chat/completions", config.base_url);

        let response = client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", config.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .map_err(|e| ProviderError::with_source("OpenAI - error generating response", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            error!("Chat completion failed with status {}: {}", status, body);
            return Err(ProviderError::with_source(
                "OpenAI - error generating response",
                HttpStatusError { status, body },
            ));
        }

        let data: ChatResponse = response
            .json()
            .map_err(|e| ProviderError::with_source("OpenAI - error generating response", e))?;

        let content = data
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::new("OpenAI - response contained no choices"))?;

        debug!("Chat completion succeeded");
        Ok(content)
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    /// Generate text for a prompt.
    ///
    /// Note: `generation_args` are accepted but never merged into the request
    /// body; only the adapter's configured temperature/top_p defaults are
    /// sent. Unsupported arguments are reported with a warning and otherwise
    /// ignored.
    async fn generate(
        &self,
        prompt: &str,
        generation_args: HashMap<String, Value>,
    ) -> Result<String> {
        if !generation_args.is_empty() {
            let ignored: Vec<&str> = generation_args.keys().map(String::as_str).collect();
            warn!("OpenAiProvider - generation_args not used: {:?}", ignored);
        }

        let request = ChatRequest::system_prompt(
            self.config.model.clone(),
            prompt,
            self.opts.temperature(),
            self.opts.top_p(),
        );

        let config = Arc::clone(&self.config);
        tokio::task::spawn_blocking(move || Self::generate_blocking(&config, &request))
            .await
            .map_err(|e| ProviderError::with_source("OpenAI - generation task failed", e))?
    }
}

/// Embedding adapter for the `{base_url}/embeddings` endpoint.
///
/// Same construction, credential precedence, error wrapping, and worker-thread
/// offload as [`OpenAiProvider`].
#[derive(Debug)]
pub struct OpenAiEmbeddingProvider {
    config: Arc<AdapterConfig>,
}

impl OpenAiEmbeddingProvider {
    /// Create a new embedding provider. Credential precedence: explicit
    /// argument, `settings.embedding_api_key`, `OPENAI_API_KEY`.
    pub fn new(api_key: Option<String>, settings: &Settings) -> Result<Self> {
        let api_key = resolve_api_key(api_key, settings.embedding_api_key.as_ref())?;

        Ok(Self {
            config: Arc::new(AdapterConfig {
                api_key,
                base_url: settings.api_base_url.clone(),
                model: settings.embedding_model.clone(),
            }),
        })
    }

    /// Override the embedding model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config = Arc::new(AdapterConfig {
            api_key: self.config.api_key.clone(),
            base_url: self.config.base_url.clone(),
            model: model.into(),
        });
        self
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = Arc::new(AdapterConfig {
            api_key: self.config.api_key.clone(),
            base_url: base_url.into(),
            model: self.config.model.clone(),
        });
        self
    }

    fn embed_blocking(config: &AdapterConfig, request: &EmbeddingRequest) -> Result<Vec<f32>> {
        let client = reqwest::blocking::Client::new();
        let url = format!("{}/embeddings", config.base_url);

        let response = client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", config.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .map_err(|e| ProviderError::with_source("OpenAI - error generating embedding", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            error!("Embedding request failed with status {}: {}", status, body);
            return Err(ProviderError::with_source(
                "OpenAI - error generating embedding",
                HttpStatusError { status, body },
            ));
        }

        let data: EmbeddingResponse = response
            .json()
            .map_err(|e| ProviderError::with_source("OpenAI - error generating embedding", e))?;

        let embedding = data
            .data
            .into_iter()
            .next()
            .map(|entry| entry.embedding)
            .ok_or_else(|| ProviderError::new("OpenAI - response contained no embeddings"))?;

        debug!("Received embedding of dimension {}", embedding.len());
        Ok(embedding)
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbeddingRequest {
            input: text.to_string(),
            model: self.config.model.clone(),
        };

        let config = Arc::clone(&self.config);
        tokio::task::spawn_blocking(move || Self::embed_blocking(&config, &request))
            .await
            .map_err(|e| ProviderError::with_source("OpenAI - embedding task failed", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_keys(llm: Option<&str>, embedding: Option<&str>) -> Settings {
        Settings {
            llm_api_key: llm.map(|k| Secret::new(k.to_string())),
            embedding_api_key: embedding.map(|k| Secret::new(k.to_string())),
            ..Settings::default()
        }
    }

    #[test]
    fn test_construction_fails_without_credential() {
        std::env::remove_var(OPENAI_API_KEY_ENV);
        let settings = settings_with_keys(None, None);

        let err = OpenAiProvider::new(None, &settings).unwrap_err();
        assert_eq!(err.to_string(), "OpenAI API key is missing");

        let err = OpenAiEmbeddingProvider::new(None, &settings).unwrap_err();
        assert_eq!(err.to_string(), "OpenAI API key is missing");
    }

    #[test]
    fn test_explicit_key_beats_settings() {
        let settings = settings_with_keys(Some("settings-key"), None);
        let provider =
            OpenAiProvider::new(Some("explicit-key".to_string()), &settings).unwrap();
        assert_eq!(provider.config.api_key.expose_secret(), "explicit-key");
    }

    #[test]
    fn test_settings_key_used_when_no_argument() {
        let settings = settings_with_keys(None, Some("embedding-key"));
        let provider = OpenAiEmbeddingProvider::new(None, &settings).unwrap();
        assert_eq!(provider.config.api_key.expose_secret(), "embedding-key");
    }

    #[test]
    fn test_builders_override_model_and_base_url() {
        let settings = settings_with_keys(Some("key"), None);
        let provider = OpenAiProvider::new(None, &settings)
            .unwrap()
            .with_model("gpt-4o")
            .with_base_url("http://localhost:8080/v1");

        assert_eq!(provider.config.model, "gpt-4o");
        assert_eq!(provider.config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_option_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.temperature(), 0.0);
        assert_eq!(opts.top_p(), 0.9);

        let opts = GenerationOptions {
            temperature: Some(0.7),
            top_p: None,
        };
        assert_eq!(opts.temperature(), 0.7);
        assert_eq!(opts.top_p(), 0.9);
    }
}
