//! Shared orchestration helpers for CLI command handlers.
//!
//! Catalog loading with consistent error context, output target handling,
//! and the exit-code contract for CI use - everything the individual
//! command handlers would otherwise duplicate.

mod load;
mod output;

pub use load::load_catalog_with_context;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// A requested threshold was not met (e.g. --min-score)
    pub const THRESHOLD_NOT_MET: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
