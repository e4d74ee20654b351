//! Canonical configuration-to-text resolution tables.
//!
//! One table keyed by (locale, key) replaces the per-surface string maps
//! the app would otherwise accumulate. Lookups are enum-keyed, so an
//! unknown locale/key combination is unrepresentable rather than a
//! runtime failure.

pub mod labels;
pub mod playbooks;
pub mod strings;

pub use labels::{domain_label, horizon_label, tone_label, tone_style};
pub use playbooks::{default_domains, playbook, Playbook};
pub use strings::{resolve, MessageKey};
