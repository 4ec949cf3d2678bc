//! mindlog-storage
//!
//! Journal entry and assessment result persistence. Handlers depend on the
//! repository traits; S3 and in-memory backends implement them.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod repository;
pub mod s3;
pub mod state;

pub use memory::MemoryStore;
pub use repository::{AssessmentRepository, EntryRepository};
pub use s3::S3Store;
