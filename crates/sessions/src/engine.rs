//! The per-conversation turn engine.
//!
//! [`ConversationContext`] owns all mutable conversation state: the live
//! session, transcript, rolling memory, and the uploaded document batch.
//! Turn handling takes `&mut self`, so no two requests are ever in flight
//! against the same session; the provider call is the only await point.

use std::sync::Arc;
use std::time::Instant;

use fc_domain::{Configuration, Document, Error, ProfileSignature, Result, TraceEvent};
use fc_promptpack::{compose_persona, compose_request};
use fc_providers::ChatBackend;

use crate::lifecycle::{InvalidationReason, Session};
use crate::memory::MemoryBuffer;
use crate::transcript::Transcript;

/// Result of one completed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Assistant text appended to the transcript. On provider failure this
    /// is the warning-prefixed error turn, not a crash.
    pub reply: String,
    /// False when the provider call failed and `reply` carries the error.
    pub ok: bool,
}

/// All mutable state of one conversation, single-owner.
pub struct ConversationContext {
    backend: Option<Arc<dyn ChatBackend>>,
    credential: Option<String>,
    session: Option<Session>,
    transcript: Transcript,
    memory: MemoryBuffer,
    documents: Vec<Document>,
    document_errors: Vec<String>,
}

impl ConversationContext {
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            backend: None,
            credential: None,
            session: None,
            transcript: Transcript::new(),
            memory: MemoryBuffer::new(memory_capacity),
            documents: Vec::new(),
            document_errors: Vec::new(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.backend.is_some()
    }

    // ── Lifecycle transitions ──────────────────────────────────────

    /// Record a credential and its backend.
    ///
    /// A first-time or changed key discards the session, transcript, and
    /// memory, then opens a fresh session for the configured model.
    /// Returns whether a rotation happened. The document batch survives.
    pub async fn set_credential(
        &mut self,
        key: &str,
        backend: Arc<dyn ChatBackend>,
        config: &Configuration,
    ) -> Result<bool> {
        if self.credential.as_deref() == Some(key) {
            return Ok(false);
        }

        self.invalidate(InvalidationReason::CredentialRotated);
        self.credential = Some(key.to_string());
        self.backend = Some(backend);
        self.create_session(config).await?;
        Ok(true)
    }

    /// Compare the live session against the current profile signature and
    /// rebuild when they disagree. A profile change is an implicit,
    /// documented conversation reset. Returns whether a rebuild happened.
    pub async fn sync_profile(&mut self, config: &Configuration) -> Result<bool> {
        if self.backend.is_none() {
            return Err(Error::CredentialMissing);
        }

        let signature = ProfileSignature::of(config);
        match &self.session {
            Some(session) if session.signature == signature => Ok(false),
            Some(_) => {
                self.invalidate(InvalidationReason::ProfileChanged);
                self.create_session(config).await?;
                Ok(true)
            }
            None => {
                self.create_session(config).await?;
                Ok(true)
            }
        }
    }

    /// Explicit user reset: discard session, transcript, memory, and the
    /// document batch. Credential and configuration stay untouched; safe
    /// to call when no session exists yet.
    pub fn reset(&mut self) {
        self.invalidate(InvalidationReason::ManualReset);
        self.documents.clear();
        self.document_errors.clear();
    }

    // ── Documents ──────────────────────────────────────────────────

    /// Replace the document batch wholesale (no incremental merge).
    pub fn set_documents(&mut self, documents: Vec<Document>, errors: Vec<String>) {
        self.documents = documents;
        self.document_errors = errors;
    }

    pub fn clear_documents(&mut self) {
        self.documents.clear();
        self.document_errors.clear();
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_errors(&self) -> &[String] {
        &self.document_errors
    }

    // ── Read access for the display layer ──────────────────────────

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn memory_notes(&self) -> &[String] {
        self.memory.notes()
    }

    // ── Turn handling ──────────────────────────────────────────────

    /// Process one user turn.
    ///
    /// Empty or whitespace-only input is a no-op: no transcript entries,
    /// no outbound call, `Ok(None)`. A provider failure is not an error
    /// of this function: the failed exchange is appended as a
    /// warning-prefixed assistant turn and the user message still lands
    /// in memory.
    pub async fn send_turn(
        &mut self,
        config: &Configuration,
        message: &str,
    ) -> Result<Option<TurnOutcome>> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        self.sync_profile(config).await?;

        self.transcript.push_user(trimmed);
        if config.memory_enabled {
            self.memory.push(trimmed);
        }

        let persona = compose_persona(config);
        let memory_notes: &[String] = if config.memory_enabled {
            self.memory.notes()
        } else {
            &[]
        };
        let request = compose_request(
            &persona,
            trimmed,
            memory_notes,
            &self.documents,
            config.locale,
        );

        TraceEvent::RequestComposed {
            persona_lines: persona.lines().count(),
            memory_notes: memory_notes.len(),
            documents: self.documents.len(),
            total_chars: request.chars().count(),
        }
        .emit();

        let session = self
            .session
            .as_mut()
            .ok_or_else(|| Error::Other("no session after profile sync".into()))?;

        let started = Instant::now();
        let (reply, ok) = match session.handle.send(&request).await {
            Ok(text) => (text, true),
            Err(e) => (format!("⚠️ Unable to complete the request: {e}"), false),
        };

        TraceEvent::TurnCompleted {
            session_id: session.session_id.to_string(),
            request_chars: request.chars().count(),
            reply_chars: reply.chars().count(),
            duration_ms: started.elapsed().as_millis() as u64,
            ok,
        }
        .emit();

        self.transcript.push_assistant(&reply);
        Ok(Some(TurnOutcome { reply, ok }))
    }

    // ── Private helpers ────────────────────────────────────────────

    /// Drop the live session (if any) and clear transcript + memory in
    /// the same step. Documents are handled by the callers that own that
    /// decision.
    fn invalidate(&mut self, reason: InvalidationReason) {
        if let Some(session) = self.session.take() {
            TraceEvent::SessionInvalidated {
                session_id: session.session_id.to_string(),
                reason: reason.to_string(),
            }
            .emit();
        }
        self.transcript.clear();
        self.memory.clear();
    }

    async fn create_session(&mut self, config: &Configuration) -> Result<()> {
        let backend = self.backend.as_ref().ok_or(Error::CredentialMissing)?;
        let handle = backend.create_session(&config.model_id).await?;
        let signature = ProfileSignature::of(config);
        let session = Session::new(handle, signature);

        TraceEvent::SessionCreated {
            session_id: session.session_id.to_string(),
            model: config.model_id.clone(),
            signature: session.signature.to_string(),
        }
        .emit();

        self.session = Some(session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use fc_domain::{KnowledgeDomain, Tone};
    use fc_providers::ChatHandle;

    /// Backend double: counts sessions, records requests, optionally fails
    /// every send.
    struct MockBackend {
        sessions_created: AtomicUsize,
        sends: Arc<AtomicUsize>,
        last_request: Arc<Mutex<String>>,
        fail_sends: bool,
    }

    impl MockBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sessions_created: AtomicUsize::new(0),
                sends: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(String::new())),
                fail_sends: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                sessions_created: AtomicUsize::new(0),
                sends: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(String::new())),
                fail_sends: true,
            })
        }

        fn session_count(&self) -> usize {
            self.sessions_created.load(Ordering::SeqCst)
        }

        fn send_count(&self) -> usize {
            self.sends.load(Ordering::SeqCst)
        }

        fn last_request(&self) -> String {
            self.last_request.lock().unwrap().clone()
        }
    }

    struct MockHandle {
        model: String,
        sends: Arc<AtomicUsize>,
        last_request: Arc<Mutex<String>>,
        fail_sends: bool,
    }

    #[async_trait::async_trait]
    impl ChatBackend for MockBackend {
        async fn create_session(&self, model: &str) -> Result<Box<dyn ChatHandle>> {
            self.sessions_created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MockHandle {
                model: model.to_string(),
                sends: self.sends.clone(),
                last_request: self.last_request.clone(),
                fail_sends: self.fail_sends,
            }))
        }

        async fn caption_image(
            &self,
            _model: &str,
            _bytes: &[u8],
            _mime_type: &str,
            _prompt: &str,
        ) -> Result<String> {
            Ok("a caption".into())
        }
    }

    #[async_trait::async_trait]
    impl ChatHandle for MockHandle {
        fn model(&self) -> &str {
            &self.model
        }

        async fn send(&mut self, text: &str) -> Result<String> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = text.to_string();
            if self.fail_sends {
                Err(Error::Provider {
                    provider: "mock".into(),
                    message: "boom".into(),
                })
            } else {
                Ok("reply".into())
            }
        }
    }

    fn document(name: &str) -> Document {
        Document {
            name: name.into(),
            content: "content".into(),
            preview: "content".into(),
            truncated: false,
            char_count: 7,
        }
    }

    async fn ready_context(backend: &Arc<MockBackend>) -> (ConversationContext, Configuration) {
        let config = Configuration::default();
        let mut ctx = ConversationContext::new(5);
        ctx.set_credential("key-1", backend.clone(), &config)
            .await
            .unwrap();
        (ctx, config)
    }

    #[tokio::test]
    async fn empty_message_is_a_complete_no_op() {
        let backend = MockBackend::new();
        let (mut ctx, config) = ready_context(&backend).await;

        let outcome = ctx.send_turn(&config, "   \n\t ").await.unwrap();
        assert!(outcome.is_none());
        assert!(ctx.transcript().is_empty());
        assert_eq!(backend.send_count(), 0);
    }

    #[tokio::test]
    async fn missing_credential_blocks_the_turn() {
        let mut ctx = ConversationContext::new(5);
        let err = ctx
            .send_turn(&Configuration::default(), "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CredentialMissing));
        assert!(ctx.transcript().is_empty());
    }

    #[tokio::test]
    async fn a_turn_appends_user_and_assistant_entries() {
        let backend = MockBackend::new();
        let (mut ctx, config) = ready_context(&backend).await;

        let outcome = ctx.send_turn(&config, "how do I budget?").await.unwrap().unwrap();
        assert!(outcome.ok);
        assert_eq!(outcome.reply, "reply");
        assert_eq!(ctx.transcript().len(), 2);
        assert_eq!(ctx.transcript().turns()[0].content, "how do I budget?");
        assert_eq!(ctx.transcript().turns()[1].content, "reply");
    }

    #[tokio::test]
    async fn memory_rolls_over_after_five_turns() {
        let backend = MockBackend::new();
        let (mut ctx, config) = ready_context(&backend).await;

        for i in 1..=6 {
            ctx.send_turn(&config, &format!("m{i}")).await.unwrap();
        }
        assert_eq!(ctx.memory_notes(), ["m2", "m3", "m4", "m5", "m6"]);
    }

    #[tokio::test]
    async fn disabled_memory_records_nothing_and_sends_no_memory_section() {
        let backend = MockBackend::new();
        let config = Configuration {
            memory_enabled: false,
            ..Configuration::default()
        };
        let mut ctx = ConversationContext::new(5);
        ctx.set_credential("key-1", backend.clone(), &config)
            .await
            .unwrap();

        ctx.send_turn(&config, "first").await.unwrap();
        ctx.send_turn(&config, "second").await.unwrap();

        assert!(ctx.memory_notes().is_empty());
        assert!(!backend.last_request().contains("Session memory"));
    }

    #[tokio::test]
    async fn same_profile_reuses_the_session() {
        let backend = MockBackend::new();
        let (mut ctx, config) = ready_context(&backend).await;

        ctx.send_turn(&config, "one").await.unwrap();
        ctx.send_turn(&config, "two").await.unwrap();

        assert_eq!(backend.session_count(), 1);
        assert_eq!(ctx.transcript().len(), 4);
    }

    #[tokio::test]
    async fn profile_change_rebuilds_and_clears_but_keeps_documents() {
        let backend = MockBackend::new();
        let (mut ctx, config) = ready_context(&backend).await;
        ctx.set_documents(vec![document("ref.txt")], Vec::new());

        ctx.send_turn(&config, "before").await.unwrap();
        assert_eq!(ctx.transcript().len(), 2);

        let changed = Configuration {
            tone: Tone::Analytical,
            ..config.clone()
        };
        let rebuilt = ctx.sync_profile(&changed).await.unwrap();
        assert!(rebuilt);
        assert_eq!(backend.session_count(), 2);
        assert!(ctx.transcript().is_empty());
        assert!(ctx.memory_notes().is_empty());
        assert_eq!(ctx.documents().len(), 1);

        // Domain reordering alone is the same profile: no rebuild.
        let reordered = Configuration {
            knowledge_domains: changed
                .knowledge_domains
                .iter()
                .rev()
                .copied()
                .collect::<Vec<KnowledgeDomain>>(),
            ..changed.clone()
        };
        assert!(!ctx.sync_profile(&reordered).await.unwrap());
        assert_eq!(backend.session_count(), 2);
    }

    #[tokio::test]
    async fn credential_rotation_clears_conversation_state() {
        let backend = MockBackend::new();
        let (mut ctx, config) = ready_context(&backend).await;
        ctx.set_documents(vec![document("kept.txt")], Vec::new());
        ctx.send_turn(&config, "remember me").await.unwrap();

        let rotated = ctx
            .set_credential("key-2", backend.clone(), &config)
            .await
            .unwrap();
        assert!(rotated);
        assert!(ctx.transcript().is_empty());
        assert!(ctx.memory_notes().is_empty());
        assert_eq!(ctx.documents().len(), 1);
        assert_eq!(backend.session_count(), 2);

        // Same key again is not a rotation.
        let again = ctx
            .set_credential("key-2", backend.clone(), &config)
            .await
            .unwrap();
        assert!(!again);
        assert_eq!(backend.session_count(), 2);
    }

    #[tokio::test]
    async fn reset_clears_everything_but_credential_and_config() {
        let backend = MockBackend::new();
        let (mut ctx, config) = ready_context(&backend).await;
        ctx.set_documents(vec![document("doc.txt")], vec!["bad.exe: nope".into()]);
        ctx.send_turn(&config, "hello").await.unwrap();

        ctx.reset();

        assert!(ctx.transcript().is_empty());
        assert!(ctx.memory_notes().is_empty());
        assert!(ctx.documents().is_empty());
        assert!(ctx.document_errors().is_empty());
        assert!(ctx.has_credential());

        // Next turn transparently opens a new session.
        ctx.send_turn(&config, "again").await.unwrap();
        assert_eq!(backend.session_count(), 2);
    }

    #[tokio::test]
    async fn reset_without_a_session_is_harmless() {
        let mut ctx = ConversationContext::new(5);
        ctx.reset();
        assert!(ctx.transcript().is_empty());
        assert!(!ctx.has_credential());
    }

    #[tokio::test]
    async fn provider_failure_becomes_a_visible_error_turn() {
        let backend = MockBackend::failing();
        let config = Configuration::default();
        let mut ctx = ConversationContext::new(5);
        ctx.set_credential("key-1", backend.clone(), &config)
            .await
            .unwrap();

        let outcome = ctx.send_turn(&config, "hello").await.unwrap().unwrap();
        assert!(!outcome.ok);
        assert!(outcome.reply.starts_with("⚠️ Unable to complete the request:"));
        assert_eq!(ctx.transcript().len(), 2);
        assert_eq!(ctx.transcript().turns()[1].content, outcome.reply);
        // The user message is still remembered.
        assert_eq!(ctx.memory_notes(), ["hello"]);
    }

    #[tokio::test]
    async fn request_carries_documents_and_memory() {
        let backend = MockBackend::new();
        let (mut ctx, config) = ready_context(&backend).await;
        ctx.set_documents(vec![document("ref.txt")], Vec::new());

        ctx.send_turn(&config, "question").await.unwrap();

        let request = backend.last_request();
        assert!(request.contains("Document: ref.txt"));
        assert!(request.contains("User request:\nquestion"));
        assert!(request.contains("Response format:"));
    }
}
