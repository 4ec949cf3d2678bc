//! S3 key/path conventions.
//!
//! Pure string functions. Every object is scoped under the owning user so a
//! prefix listing never crosses tenants.

use uuid::Uuid;

pub fn user_prefix(user_id: &str) -> String {
    format!("users/{user_id}/")
}

pub fn entries_prefix(user_id: &str) -> String {
    format!("users/{user_id}/entries/")
}

pub fn entry(user_id: &str, id: Uuid) -> String {
    format!("users/{user_id}/entries/{id}.json")
}

pub fn assessments_prefix(user_id: &str) -> String {
    format!("users/{user_id}/assessments/")
}

pub fn assessment(user_id: &str, id: Uuid) -> String {
    format!("users/{user_id}/assessments/{id}.json")
}

/// Optional analysis tuning file, shared by all users.
pub const ANALYSIS_CONFIG: &str = "_config/analysis.json";
