//! Session identity and invalidation.
//!
//! A session is bound to the profile signature it was created under and
//! is replaced, never mutated, when that binding breaks. Replacement is
//! triggered by a credential rotation, a profile change, or an explicit
//! reset; the engine clears transcript and memory in the same step.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use fc_domain::ProfileSignature;
use fc_providers::ChatHandle;

/// Why a live session was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationReason {
    CredentialRotated,
    ProfileChanged,
    ManualReset,
}

impl std::fmt::Display for InvalidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CredentialRotated => write!(f, "credential rotated"),
            Self::ProfileChanged => write!(f, "profile changed"),
            Self::ManualReset => write!(f, "manual reset"),
        }
    }
}

/// The live provider session plus the identity it was created under.
pub struct Session {
    pub handle: Box<dyn ChatHandle>,
    pub signature: ProfileSignature,
    /// Trace identity only; the provider handle is opaque.
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(handle: Box<dyn ChatHandle>, signature: ProfileSignature) -> Self {
        Self {
            handle,
            signature,
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_render_for_trace_events() {
        assert_eq!(
            InvalidationReason::CredentialRotated.to_string(),
            "credential rotated"
        );
        assert_eq!(
            InvalidationReason::ProfileChanged.to_string(),
            "profile changed"
        );
        assert_eq!(InvalidationReason::ManualReset.to_string(), "manual reset");
    }
}
