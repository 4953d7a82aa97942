//! Human-readable and JSON rendering of benchmark results.
pub mod report;

pub use report::{format_report, to_json};
