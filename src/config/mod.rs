//! Process-wide settings and credential resolution

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable consulted as the last-resort credential source
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Process-wide settings consumed by the provider adapters.
///
/// Loaded once from the environment (optionally via a `.env` file) and passed
/// by reference to adapter constructors; adapters copy what they need at
/// construction time and never read settings again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// API key for the text-generation endpoint (secured)
    #[serde(
        default,
        serialize_with = "serialize_optional_secret",
        deserialize_with = "deserialize_optional_secret"
    )]
    pub llm_api_key: Option<Secret<String>>,

    /// API key for the embeddings endpoint (secured)
    #[serde(
        default,
        serialize_with = "serialize_optional_secret",
        deserialize_with = "deserialize_optional_secret"
    )]
    pub embedding_api_key: Option<Secret<String>>,

    /// Default model for text generation
    #[serde(default = "default_llm_model")]
    pub llm_model: String,

    /// Default model for embeddings
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Settings {
    /// Load settings from environment variables, reading a `.env` file first
    /// if one is present. Variable names match the field names uppercased
    /// (`LLM_API_KEY`, `EMBEDDING_MODEL`, ...).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            embedding_api_key: None,
            llm_model: default_llm_model(),
            embedding_model: default_embedding_model(),
            api_base_url: default_api_base_url(),
        }
    }
}

/// Return the first present, non-empty credential from an ordered list of
/// optional sources. Callers pass sources in precedence order (explicit
/// argument, settings value, environment fallback).
pub fn resolve_credential<I>(sources: I) -> Option<Secret<String>>
where
    I: IntoIterator<Item = Option<String>>,
{
    sources
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .map(Secret::new)
}

/// Custom serializer for Option<Secret<String>>
fn serialize_optional_secret<S>(
    secret: &Option<Secret<String>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

/// Custom deserializer for Option<Secret<String>>
fn deserialize_optional_secret<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Secret<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(Secret::new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.llm_api_key.is_none());
        assert_eq!(settings.llm_model, "gpt-4o-mini");
        assert_eq!(settings.embedding_model, "text-embedding-3-small");
        assert_eq!(settings.api_base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_resolver_takes_first_present() {
        let resolved = resolve_credential([
            Some("explicit".to_string()),
            Some("from_settings".to_string()),
            Some("from_env".to_string()),
        ])
        .unwrap();
        assert_eq!(resolved.expose_secret(), "explicit");
    }

    #[test]
    fn test_resolver_skips_absent_and_empty_sources() {
        let resolved = resolve_credential([
            None,
            Some(String::new()),
            Some("from_env".to_string()),
        ])
        .unwrap();
        assert_eq!(resolved.expose_secret(), "from_env");
    }

    #[test]
    fn test_resolver_with_no_sources() {
        assert!(resolve_credential([None, None, None]).is_none());
    }
}
