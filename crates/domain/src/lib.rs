//! Shared domain types for FinConsult.
//!
//! Holds the configuration snapshot and its canonical profile signature,
//! the ingested-document value object, the shared error type, structured
//! trace events, and the TOML application config.

pub mod config;
pub mod document;
pub mod error;
pub mod profile;
pub mod signature;
pub mod trace;

pub use config::Config;
pub use document::Document;
pub use error::{Error, Result};
pub use profile::{Configuration, Horizon, KnowledgeDomain, Locale, Tone, UseCase};
pub use signature::ProfileSignature;
pub use trace::TraceEvent;
