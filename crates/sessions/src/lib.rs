//! Session ownership for FinConsult.
//!
//! Implements the profile-invalidation model: exactly one live provider
//! session per conversation context, bound to one profile signature.
//! A credential rotation or any profile change replaces the session and
//! clears the transcript and rolling memory in the same step, so a stale
//! conversation is never shown against a new persona. The uploaded
//! document batch lives independently and survives those replacements.

pub mod engine;
pub mod lifecycle;
pub mod memory;
pub mod transcript;

pub use engine::{ConversationContext, TurnOutcome};
pub use lifecycle::{InvalidationReason, Session};
pub use memory::MemoryBuffer;
pub use transcript::{Role, Transcript, Turn};
