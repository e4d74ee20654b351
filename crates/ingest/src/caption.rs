//! Image captioning with an ordered model fallback sequence.
//!
//! Candidates are tried in order, stopping at the first non-empty caption
//! or the first terminal error. Model-not-found / unsupported responses
//! are the only retriable failures; anything else aborts the sequence
//! with that error.

use fc_domain::TraceEvent;
use fc_providers::ChatBackend;

use crate::error::IngestError;

/// Prompt sent alongside the image bytes.
pub const CAPTION_PROMPT: &str = "Summarise this image focusing on financial data, text, or \
     cues that could help a financial advisor understand the user's situation. Respond with \
     concise bullet points and include any legible figures.";

/// Build the ordered candidate list: the dedicated caption model, then the
/// active chat model, then the configured last resort. Duplicates and
/// empty entries are dropped, order preserved.
pub fn model_sequence(
    caption_model: &str,
    model_hint: Option<&str>,
    fallback_model: &str,
) -> Vec<String> {
    let mut sequence: Vec<String> = Vec::new();
    for candidate in [Some(caption_model), model_hint, Some(fallback_model)]
        .into_iter()
        .flatten()
    {
        if !candidate.is_empty() && !sequence.iter().any(|m| m == candidate) {
            sequence.push(candidate.to_string());
        }
    }
    sequence
}

/// Run the fallback loop over `models`.
pub async fn caption_with_fallback(
    backend: &dyn ChatBackend,
    models: &[String],
    bytes: &[u8],
    mime_type: &str,
) -> Result<String, IngestError> {
    let mut last_error: Option<String> = None;
    let mut previous: Option<&str> = None;

    for model in models {
        if let Some(prev) = previous {
            TraceEvent::CaptionFallback {
                from_model: prev.to_string(),
                to_model: model.clone(),
            }
            .emit();
        }
        previous = Some(model);

        match backend
            .caption_image(model, bytes, mime_type, CAPTION_PROMPT)
            .await
        {
            Ok(text) if !text.trim().is_empty() => return Ok(text.trim().to_string()),
            Ok(_) => {
                // Empty caption; try the next candidate.
            }
            Err(e) => {
                let message = e.to_string();
                if !is_model_unavailable(&message) {
                    return Err(IngestError::CaptionUnavailable(message));
                }
                last_error = Some(message);
            }
        }
    }

    Err(IngestError::CaptionUnavailable(
        last_error.unwrap_or_else(|| "image analysis returned no text".into()),
    ))
}

/// Retriable failures: the candidate model does not exist or cannot take
/// image input. Everything else is terminal.
fn is_model_unavailable(message: &str) -> bool {
    message.contains("NOT_FOUND") || message.to_lowercase().contains("unsupported")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use fc_domain::{Error, Result};
    use fc_providers::ChatHandle;

    /// Scripted backend: one pre-programmed outcome per caption call.
    struct ScriptedBackend {
        outcomes: Mutex<Vec<Result<String>>>,
        models_called: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(outcomes: Vec<Result<String>>) -> Self {
            let mut outcomes = outcomes;
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
                models_called: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.models_called.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn create_session(&self, _model: &str) -> Result<Box<dyn ChatHandle>> {
            Err(Error::Other("not a chat backend".into()))
        }

        async fn caption_image(
            &self,
            model: &str,
            _bytes: &[u8],
            _mime_type: &str,
            _prompt: &str,
        ) -> Result<String> {
            self.models_called.lock().unwrap().push(model.to_string());
            self.outcomes
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(Error::Other("script exhausted".into())))
        }
    }

    fn models(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sequence_dedups_and_keeps_order() {
        let seq = model_sequence("cap-model", Some("chat-model"), "fallback-model");
        assert_eq!(seq, models(&["cap-model", "chat-model", "fallback-model"]));

        let seq = model_sequence("cap-model", Some("cap-model"), "cap-model");
        assert_eq!(seq, models(&["cap-model"]));
    }

    #[tokio::test]
    async fn falls_through_model_not_found_to_success() {
        let backend = ScriptedBackend::new(vec![
            Err(Error::Provider {
                provider: "gemini".into(),
                message: "HTTP 404 - NOT_FOUND".into(),
            }),
            Ok("a chart of expenses".into()),
        ]);
        let seq = models(&["missing-model", "good-model"]);

        let caption = caption_with_fallback(&backend, &seq, b"img", "image/png")
            .await
            .unwrap();
        assert_eq!(caption, "a chart of expenses");
        assert_eq!(backend.calls(), models(&["missing-model", "good-model"]));
    }

    #[tokio::test]
    async fn terminal_error_stops_the_sequence() {
        let backend = ScriptedBackend::new(vec![Err(Error::Provider {
            provider: "gemini".into(),
            message: "HTTP 403 - permission denied".into(),
        })]);
        let seq = models(&["first", "second"]);

        let err = caption_with_fallback(&backend, &seq, b"img", "image/png")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("permission denied"));
        assert_eq!(backend.calls(), models(&["first"]));
    }

    #[tokio::test]
    async fn all_candidates_failing_reports_the_last_error() {
        let backend = ScriptedBackend::new(vec![
            Err(Error::Provider {
                provider: "gemini".into(),
                message: "NOT_FOUND first".into(),
            }),
            Err(Error::Provider {
                provider: "gemini".into(),
                message: "NOT_FOUND second".into(),
            }),
        ]);
        let seq = models(&["a", "b"]);

        let err = caption_with_fallback(&backend, &seq, b"img", "image/png")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("NOT_FOUND second"));
    }

    #[tokio::test]
    async fn empty_captions_everywhere_report_no_text() {
        let backend = ScriptedBackend::new(vec![Ok("".into()), Ok("   ".into())]);
        let seq = models(&["a", "b"]);

        let err = caption_with_fallback(&backend, &seq, b"img", "image/png")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("image analysis returned no text"));
    }
}
