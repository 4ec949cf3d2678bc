//! mindlog-auth
//!
//! Bearer token issuance and validation for the journaling API.

pub mod error;
pub mod jwt;
