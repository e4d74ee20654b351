//! Document ingestion.
//!
//! Converts uploaded files (documents or images) into bounded plain text.
//! Dispatch is purely on filename extension, never content sniffing. Each
//! file in a batch succeeds or fails on its own: one bad file produces one
//! error entry and never blocks the rest, and the batch result replaces
//! any prior batch wholesale.

pub mod caption;
pub mod error;
pub mod extract;
pub mod truncation;

pub use caption::{caption_with_fallback, model_sequence, CAPTION_PROMPT};
pub use error::IngestError;
pub use extract::{ingest_batch, IngestLimits, IngestOutcome, SourceFile};
pub use truncation::truncate_chars;
