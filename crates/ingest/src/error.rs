/// Per-file ingestion failure.
///
/// These never abort a batch; each is rendered as one error entry next to
/// the documents that did ingest.
#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("could not read file bytes: {0}")]
    FileRead(String),

    #[error("file is empty")]
    FileEmpty,

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("could not parse file: {0}")]
    Parse(String),

    #[error("no readable text found in the file")]
    NoReadableText,

    #[error("could not interpret image: {0}")]
    CaptionUnavailable(String),
}
