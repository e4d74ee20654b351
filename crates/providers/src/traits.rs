use fc_domain::Result;

/// Factory side of the provider seam: creates chat sessions and answers
/// one-shot captioning calls.
///
/// Implementations are provider-specific adapters that translate between
/// our internal types and the wire format of the hosted API. The session
/// engine only ever talks to these traits, so tests can substitute a
/// scripted backend.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Open a new conversational session bound to `model`.
    async fn create_session(&self, model: &str) -> Result<Box<dyn ChatHandle>>;

    /// Describe an image in text. One candidate model per call; the
    /// fallback sequence over candidates is owned by the ingestion layer.
    async fn caption_image(
        &self,
        model: &str,
        bytes: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String>;
}

/// A live chat session. Sending is `&mut self`: one request in flight per
/// session, by construction.
#[async_trait::async_trait]
pub trait ChatHandle: Send {
    /// The model this session is bound to.
    fn model(&self) -> &str;

    /// Send the full request text and wait for the reply text.
    async fn send(&mut self, text: &str) -> Result<String>;
}
