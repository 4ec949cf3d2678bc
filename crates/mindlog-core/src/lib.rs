//! mindlog-core
//!
//! Pure domain types and storage key conventions. No AWS SDK dependency.
//! This is the shared vocabulary of the mindlog system.

pub mod error;
pub mod keys;
pub mod models;
