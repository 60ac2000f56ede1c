//! Configuration constants.
//!
//! This module defines the fixed values used by the fetch and organize steps.

/// Output directory used when `-o/--output` is not given.
pub const DEFAULT_OUTPUT_DIR: &str = "copied_website";

/// File name the fetched page is written to inside the output directory.
pub const INDEX_FILE_NAME: &str = "index.html";

/// User-Agent header sent with the page request.
///
/// Fixed to a desktop Chrome string; some sites serve a stripped page (or
/// refuse the request) when they see a non-browser client.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Maximum URL length (2048 characters).
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;
