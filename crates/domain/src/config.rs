use serde::{Deserialize, Serialize};

use crate::profile::Configuration;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Initial assistant settings; every field can still be changed from
    /// the REPL at runtime.
    #[serde(default)]
    pub assistant: Configuration,
}

impl Config {
    /// Load the config from a TOML file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "config parse failed, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!(path = %path, "no config file, using defaults");
                Self::default()
            }
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Provider connection
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "d_base_url")]
    pub base_url: String,
    /// Plaintext API key. Prefer `api_key_env` or the keychain fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "d_api_key_env")]
    pub api_key_env: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keychain_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keychain_account: Option<String>,
    /// Chat models offered by the model selector.
    #[serde(default = "d_model_options")]
    pub model_options: Vec<String>,
    /// First candidate for image captioning.
    #[serde(default = "d_caption_model")]
    pub caption_model: String,
    /// Last-resort captioning candidate.
    #[serde(default = "d_caption_fallback_model")]
    pub caption_fallback_model: String,
    #[serde(default = "d_120")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: d_base_url(),
            api_key: None,
            api_key_env: d_api_key_env(),
            keychain_service: None,
            keychain_account: None,
            model_options: d_model_options(),
            caption_model: d_caption_model(),
            caption_fallback_model: d_caption_fallback_model(),
            timeout_secs: 120,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Document / memory caps
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum stored characters per ingested document.
    #[serde(default = "d_6000")]
    pub max_document_chars: usize,
    /// Display excerpt length, derived from the stored content.
    #[serde(default = "d_600")]
    pub document_preview_chars: usize,
    /// CSV files are previewed, not parsed: at most this many lines.
    #[serde(default = "d_80")]
    pub csv_preview_rows: usize,
    /// Rolling session-memory capacity (oldest note dropped first).
    #[serde(default = "d_5")]
    pub memory_notes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_document_chars: 6_000,
            document_preview_chars: 600,
            csv_preview_rows: 80,
            memory_notes: 5,
        }
    }
}

// ── serde default helpers ──────────────────────────────────────────

fn d_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}

fn d_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}

fn d_model_options() -> Vec<String> {
    vec![
        "gemini-2.5-flash".into(),
        "gemini-2.0-flash-exp".into(),
        "gemini-1.5-pro".into(),
    ]
}

fn d_caption_model() -> String {
    "gemini-1.5-flash-latest".into()
}

fn d_caption_fallback_model() -> String {
    "gemini-1.5-pro-latest".into()
}

fn d_120() -> u64 {
    120
}

fn d_6000() -> usize {
    6_000
}

fn d_600() -> usize {
    600
}

fn d_80() -> usize {
    80
}

fn d_5() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.limits.max_document_chars, 6_000);
        assert_eq!(config.limits.document_preview_chars, 600);
        assert_eq!(config.limits.csv_preview_rows, 80);
        assert_eq!(config.limits.memory_notes, 5);
        assert_eq!(config.provider.model_options.len(), 3);
        assert_eq!(config.assistant.model_id, "gemini-2.5-flash");
    }

    #[test]
    fn partial_sections_fill_in() {
        let config: Config = toml::from_str(
            r#"
            [limits]
            max_document_chars = 100

            [provider]
            caption_model = "gemini-2.0-flash-exp"
            "#,
        )
        .unwrap();
        assert_eq!(config.limits.max_document_chars, 100);
        assert_eq!(config.limits.document_preview_chars, 600);
        assert_eq!(config.provider.caption_model, "gemini-2.0-flash-exp");
        assert_eq!(config.provider.timeout_secs, 120);
    }
}
