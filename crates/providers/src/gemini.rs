//! Google Gemini adapter.
//!
//! Implements the Gemini `generateContent` API. Auth is via an API key
//! passed as a query parameter (`key={api_key}`). A chat session keeps
//! its history client-side and posts the full conversation on every
//! send, which is how the hosted chat surface behaves as well.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};

use fc_domain::config::ProviderConfig;
use fc_domain::{Error, Result};

use crate::traits::{ChatBackend, ChatHandle};
use crate::util::from_reqwest;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Adapter struct
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Backend adapter for the Google Gemini API.
#[derive(Clone)]
pub struct GeminiBackend {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiBackend {
    /// Create a backend bound to one API key.
    ///
    /// The key is the credential the session lifecycle tracks; rotating
    /// it means constructing a fresh backend.
    pub fn new(api_key: impl Into<String>, config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(from_reqwest)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    // ── Internal helpers ───────────────────────────────────────────

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    /// POST the given contents and extract the reply text.
    async fn generate(&self, model: &str, contents: &[Value]) -> Result<String> {
        let url = self.generate_url(model);
        let body = json!({ "contents": contents });

        tracing::debug!(url = %redact_url_key(&url), model = %model, "gemini generate request");

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = resp.status();
        let resp_text = resp.text().await.map_err(from_reqwest)?;

        if !status.is_success() {
            return Err(Error::Provider {
                provider: "gemini".into(),
                message: format!("HTTP {} - {}", status.as_u16(), resp_text),
            });
        }

        let resp_json: Value = serde_json::from_str(&resp_text)?;
        parse_reply(&resp_json)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Response deserialization
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Join the text parts of the first candidate.
pub(crate) fn parse_reply(body: &Value) -> Result<String> {
    let candidate = body
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|a| a.first())
        .ok_or_else(|| Error::Provider {
            provider: "gemini".into(),
            message: "no candidates in response".into(),
        })?;

    let mut text = String::new();
    if let Some(parts) = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
    {
        for part in parts {
            if let Some(t) = part.get("text").and_then(|v| v.as_str()) {
                text.push_str(t);
            }
        }
    }

    Ok(text.trim().to_string())
}

/// Redact the API key from a URL for safe logging.
fn redact_url_key(url: &str) -> String {
    if let Some(idx) = url.find("key=") {
        let prefix = &url[..idx + 4];
        let rest = &url[idx + 4..];
        let end = rest.find('&').unwrap_or(rest.len());
        format!("{prefix}[REDACTED]{}", &rest[end..])
    } else {
        url.to_string()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Chat session
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

struct GeminiChatSession {
    backend: GeminiBackend,
    model: String,
    history: Vec<Value>,
}

#[async_trait::async_trait]
impl ChatHandle for GeminiChatSession {
    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&mut self, text: &str) -> Result<String> {
        self.history.push(json!({
            "role": "user",
            "parts": [{"text": text}],
        }));

        match self.backend.generate(&self.model, &self.history).await {
            Ok(reply) => {
                self.history.push(json!({
                    "role": "model",
                    "parts": [{"text": reply}],
                }));
                Ok(reply)
            }
            Err(e) => {
                // A failed exchange must not poison the history.
                self.history.pop();
                Err(e)
            }
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait::async_trait]
impl ChatBackend for GeminiBackend {
    async fn create_session(&self, model: &str) -> Result<Box<dyn ChatHandle>> {
        Ok(Box::new(GeminiChatSession {
            backend: self.clone(),
            model: model.to_string(),
            history: Vec::new(),
        }))
    }

    async fn caption_image(
        &self,
        model: &str,
        bytes: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String> {
        let payload = BASE64.encode(bytes);
        let contents = vec![json!({
            "role": "user",
            "parts": [
                {"text": prompt},
                {"inlineData": {"mimeType": mime_type, "data": payload}},
            ],
        })];

        self.generate(model, &contents).await
    }
}
