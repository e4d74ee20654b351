//! Model provider adapters for FinConsult.
//!
//! The [`traits::ChatBackend`] / [`traits::ChatHandle`] pair is the seam
//! between the session engine and the hosted model; [`gemini`] is the
//! production adapter for the Google Gemini `generateContent` API.

pub mod auth;
pub mod gemini;
pub mod traits;
pub(crate) mod util;

// Re-exports for convenience.
pub use auth::resolve_api_key;
pub use gemini::GeminiBackend;
pub use traits::{ChatBackend, ChatHandle};
