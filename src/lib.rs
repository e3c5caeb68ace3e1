//! Commit staged changes with a generated message
//!
//! Reads the staged git diff, asks a commit-message generation service for a
//! message and commits with it.
pub mod api;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use config::CommitConfig;
pub use error::{CommitGenError, Result};
pub use types::{CommitOutcome, CommitStyle, GenerateResponse, GenerationOptions};
