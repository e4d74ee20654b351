use serde::Serialize;

/// A single ingested reference document, bounded and display-ready.
///
/// `content` is capped at the configured maximum; `preview` is a shorter
/// excerpt derived from the already-truncated content, so a preview is
/// never longer than the stored content. `char_count` counts characters
/// of the stored content, not the raw upload.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub name: String,
    pub content: String,
    pub preview: String,
    pub truncated: bool,
    pub char_count: usize,
}
