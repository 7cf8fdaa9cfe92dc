//! Schema module - Configuration and reporting types for numeric searches.

mod config;
mod report;

pub use config::*;
pub use report::*;
