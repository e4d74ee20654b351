//! Deterministic prompt assembly.
//!
//! Pure string builders: a configuration snapshot in, an ordered
//! instruction block out. Nothing here performs I/O or fails; upstream
//! validation (non-empty user message, resolvable credential) happens in
//! the session engine.

pub mod persona;
pub mod request;

pub use persona::compose_persona;
pub use request::compose_request;
