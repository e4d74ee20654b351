//! Per-file text extraction and batch assembly.

use std::path::Path;

use fc_domain::config::LimitsConfig;
use fc_domain::{Document, TraceEvent};
use fc_providers::ChatBackend;

use crate::caption::caption_with_fallback;
use crate::error::IngestError;
use crate::truncation::truncate_chars;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Inputs
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One uploaded file, name plus raw bytes. The type is inferred solely
/// from the filename extension.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Read a file from disk into a source entry. An unreadable path is a
    /// per-file error, not a batch abort.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead(e.to_string()))?;
        Ok(Self { name, bytes })
    }
}

/// Ingestion caps, normally sourced from the app config.
#[derive(Debug, Clone)]
pub struct IngestLimits {
    pub max_document_chars: usize,
    pub preview_chars: usize,
    pub csv_preview_rows: usize,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_document_chars: 6_000,
            preview_chars: 600,
            csv_preview_rows: 80,
        }
    }
}

impl From<&LimitsConfig> for IngestLimits {
    fn from(limits: &LimitsConfig) -> Self {
        Self {
            max_document_chars: limits.max_document_chars,
            preview_chars: limits.document_preview_chars,
            csv_preview_rows: limits.csv_preview_rows,
        }
    }
}

/// Result of one upload batch: documents in upload order plus one message
/// per failed file. Replaces any prior batch wholesale.
#[derive(Debug, Default)]
pub struct IngestOutcome {
    pub documents: Vec<Document>,
    pub errors: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Batch ingestion
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Ingest an upload batch.
///
/// `backend` is the captioning collaborator for image files; pass `None`
/// when no credential is configured yet (image files then fail per-file,
/// everything else still ingests). `caption_models` is the ordered
/// fallback sequence from [`crate::caption::model_sequence`].
pub async fn ingest_batch(
    files: &[SourceFile],
    backend: Option<&dyn ChatBackend>,
    caption_models: &[String],
    limits: &IngestLimits,
) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();

    for file in files {
        match ingest_file(file, backend, caption_models, limits).await {
            Ok(document) => {
                TraceEvent::DocumentIngested {
                    name: document.name.clone(),
                    stored_chars: document.char_count,
                    truncated: document.truncated,
                }
                .emit();
                outcome.documents.push(document);
            }
            Err(e) => {
                TraceEvent::DocumentRejected {
                    name: file.name.clone(),
                    reason: e.to_string(),
                }
                .emit();
                outcome.errors.push(format!("{}: {}", file.name, e));
            }
        }
    }

    outcome
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Per-file extraction
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

async fn ingest_file(
    file: &SourceFile,
    backend: Option<&dyn ChatBackend>,
    caption_models: &[String],
    limits: &IngestLimits,
) -> Result<Document, IngestError> {
    if file.bytes.is_empty() {
        return Err(IngestError::FileEmpty);
    }

    let ext = extension_of(&file.name);
    let raw = match ext.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(&file.bytes)
            .map_err(|e| IngestError::Parse(e.to_string()))?,
        "txt" | "md" => String::from_utf8_lossy(&file.bytes).into_owned(),
        "csv" => csv_preview(
            &String::from_utf8_lossy(&file.bytes),
            limits.csv_preview_rows,
        ),
        "png" | "jpg" | "jpeg" | "webp" => {
            let mime = image_mime(&ext);
            let backend = backend.ok_or_else(|| {
                IngestError::CaptionUnavailable(
                    "no model backend available to interpret the image".into(),
                )
            })?;
            caption_with_fallback(backend, caption_models, &file.bytes, mime).await?
        }
        other => {
            let shown = if other.is_empty() {
                "unknown".to_string()
            } else {
                format!(".{other}")
            };
            return Err(IngestError::UnsupportedType(shown));
        }
    };

    // Uniform post-processing for every kind.
    let cleaned = normalize(&raw);
    if cleaned.is_empty() {
        return Err(IngestError::NoReadableText);
    }

    let (content, truncated) = truncate_chars(&cleaned, limits.max_document_chars);
    let (preview, _) = truncate_chars(&content, limits.preview_chars);
    let char_count = content.chars().count();

    Ok(Document {
        name: file.name.clone(),
        content,
        preview,
        truncated,
        char_count,
    })
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn image_mime(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "image/webp",
    }
}

/// CSV files are previewed verbatim, not parsed: at most `rows` lines,
/// with an ellipsis marker line when more existed.
fn csv_preview(decoded: &str, rows: usize) -> String {
    let lines: Vec<&str> = decoded.lines().collect();
    let mut preview = lines[..lines.len().min(rows)].join("\n");
    if lines.len() > rows {
        preview.push_str("\n...");
    }
    preview
}

/// Normalize line endings to `\n` and trim surrounding whitespace.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn txt(name: &str, content: &str) -> SourceFile {
        SourceFile {
            name: name.into(),
            bytes: content.as_bytes().to_vec(),
        }
    }

    async fn ingest(files: &[SourceFile]) -> IngestOutcome {
        ingest_batch(files, None, &[], &IngestLimits::default()).await
    }

    #[tokio::test]
    async fn plain_text_round_trips() {
        let outcome = ingest(&[txt("notes.txt", "monthly budget notes")]).await;
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.documents.len(), 1);
        let doc = &outcome.documents[0];
        assert_eq!(doc.content, "monthly budget notes");
        assert!(!doc.truncated);
        assert_eq!(doc.char_count, 20);
    }

    #[tokio::test]
    async fn line_endings_are_normalized_and_trimmed() {
        let outcome = ingest(&[txt("a.md", "  first\r\nsecond\rthird\n\n")]).await;
        assert_eq!(outcome.documents[0].content, "first\nsecond\nthird");
    }

    #[tokio::test]
    async fn oversize_document_is_truncated_with_preview() {
        let body = "x".repeat(6_001);
        let outcome = ingest(&[txt("big.txt", &body)]).await;
        let doc = &outcome.documents[0];
        assert!(doc.truncated);
        assert_eq!(doc.content.chars().count(), 6_000);
        assert_eq!(doc.char_count, 6_000);
        assert!(doc.preview.chars().count() <= 600);
    }

    #[tokio::test]
    async fn document_at_exactly_the_cap_is_not_truncated() {
        let body = "x".repeat(6_000);
        let outcome = ingest(&[txt("fit.txt", &body)]).await;
        assert!(!outcome.documents[0].truncated);
    }

    #[tokio::test]
    async fn csv_is_previewed_not_parsed() {
        let many: String = (0..100)
            .map(|i| format!("row{i},1,2"))
            .collect::<Vec<_>>()
            .join("\n");
        let outcome = ingest(&[txt("data.csv", &many)]).await;
        let doc = &outcome.documents[0];
        assert!(doc.content.ends_with("..."));
        // 80 data lines plus the marker line.
        assert_eq!(doc.content.lines().count(), 81);
        assert!(doc.content.starts_with("row0,1,2"));
    }

    #[tokio::test]
    async fn csv_at_the_row_cap_has_no_marker() {
        let exact: String = (0..80)
            .map(|i| format!("row{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let outcome = ingest(&[txt("data.csv", &exact)]).await;
        assert!(!outcome.documents[0].content.ends_with("..."));
    }

    #[tokio::test]
    async fn unsupported_extension_fails_per_file() {
        let outcome = ingest(&[txt("tool.exe", "MZ")]).await;
        assert!(outcome.documents.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("tool.exe"));
        assert!(outcome.errors[0].contains("unsupported file type: .exe"));
    }

    #[tokio::test]
    async fn empty_and_whitespace_files_are_rejected() {
        let outcome = ingest(&[
            SourceFile {
                name: "empty.txt".into(),
                bytes: Vec::new(),
            },
            txt("blank.txt", "   \n  \n"),
        ])
        .await;
        assert!(outcome.documents.is_empty());
        assert!(outcome.errors[0].contains("file is empty"));
        assert!(outcome.errors[1].contains("no readable text"));
    }

    #[tokio::test]
    async fn one_bad_file_does_not_block_the_batch() {
        let outcome = ingest(&[
            txt("one.txt", "first"),
            txt("two.exe", "nope"),
            txt("three.md", "third"),
        ])
        .await;

        assert_eq!(outcome.documents.len(), 2);
        assert_eq!(outcome.documents[0].name, "one.txt");
        assert_eq!(outcome.documents[1].name, "three.md");
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("two.exe"));
    }

    #[tokio::test]
    async fn image_without_backend_fails_per_file() {
        let outcome = ingest(&[SourceFile {
            name: "chart.png".into(),
            bytes: vec![1, 2, 3],
        }])
        .await;
        assert!(outcome.errors[0].contains("could not interpret image"));
    }

    #[tokio::test]
    async fn garbage_pdf_is_a_parse_error() {
        let outcome = ingest(&[txt("broken.pdf", "not a pdf at all")]).await;
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("could not parse file"));
    }

    #[test]
    fn source_file_from_path_reads_and_names() {
        let mut tmp = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        tmp.write_all(b"from disk").unwrap();

        let source = SourceFile::from_path(tmp.path()).unwrap();
        assert!(source.name.ends_with(".txt"));
        assert_eq!(source.bytes, b"from disk");

        let missing = SourceFile::from_path(Path::new("/nonexistent/nope.txt")).unwrap_err();
        assert!(missing.to_string().contains("could not read file bytes"));
    }
}
