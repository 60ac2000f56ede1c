//! Error handling.
//!
//! Only [`FetchError`] is a recognized failure: the entry point reports it and
//! finishes normally. Everything else (directory creation, writes, moves)
//! propagates to the caller.

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, OrganizeError, SaveError};
