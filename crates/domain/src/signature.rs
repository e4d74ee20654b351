//! Profile fingerprinting.
//!
//! The signature is the canonical identity of a conversational profile.
//! Two configurations that are semantically equal (same domain set in a
//! different selection order, `0.4` vs `0.40` creativity) must collide;
//! any single-field change must produce a different value. The session
//! lifecycle compares signatures on every pass to decide whether the
//! live session can be kept.

use std::fmt;

use crate::profile::Configuration;

/// Canonical fingerprint of a conversational profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileSignature(String);

impl ProfileSignature {
    /// Compute the signature for a configuration snapshot.
    ///
    /// Fields are joined with `|` in a fixed order. Knowledge domains are
    /// sorted (and deduplicated) before joining so selection order never
    /// matters; creativity is formatted to exactly two decimals so float
    /// formatting drift cannot split a profile. Pure function, no failure
    /// modes.
    pub fn of(config: &Configuration) -> Self {
        let mut domains: Vec<&str> = config.knowledge_domains.iter().map(|d| d.id()).collect();
        domains.sort_unstable();
        domains.dedup();

        ProfileSignature(format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|creativity={:.2}|{}",
            config.model_id,
            config.use_case.id(),
            config.tone.id(),
            domains.join(","),
            config.risk_level,
            config.horizon.id(),
            config.include_actions,
            config.include_disclaimer,
            config.creativity,
            config.locale.id(),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
