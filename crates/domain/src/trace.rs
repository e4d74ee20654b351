use serde::Serialize;

/// Structured trace events emitted across all FinConsult crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    SessionCreated {
        session_id: String,
        model: String,
        signature: String,
    },
    SessionInvalidated {
        session_id: String,
        reason: String,
    },
    RequestComposed {
        persona_lines: usize,
        memory_notes: usize,
        documents: usize,
        total_chars: usize,
    },
    TurnCompleted {
        session_id: String,
        request_chars: usize,
        reply_chars: usize,
        duration_ms: u64,
        ok: bool,
    },
    DocumentIngested {
        name: String,
        stored_chars: usize,
        truncated: bool,
    },
    DocumentRejected {
        name: String,
        reason: String,
    },
    CaptionFallback {
        from_model: String,
        to_model: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "fc_event");
    }
}
