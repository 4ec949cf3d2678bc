pub mod assessment;
pub mod entry;
pub mod sentiment;
pub mod strategy;
