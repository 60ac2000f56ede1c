//! website_organizer library: copy a web page to disk and sort files by type
//!
//! The work is a two-step pipeline, run in order:
//!
//! 1. [`fetch::save_page`] downloads one page and writes it, prettified, to
//!    `<output>/index.html`.
//! 2. [`organize::organize_directory`] moves every top-level file of the
//!    output directory into `html/`, `css/`, `js/`, `images/` or `others/`.
//!
//! [`run_copy`] chains the two and turns a download failure into a
//! [`CopyOutcome`] instead of an error.
//!
//! # Example
//!
//! ```no_run
//! use website_organizer::{run_copy, Config, CopyOutcome};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     output: "mirror".into(),
//!     ..Default::default()
//! };
//!
//! match run_copy(&config).await? {
//!     CopyOutcome::Saved { report, .. } => println!("moved {} files", report.total_moved()),
//!     CopyOutcome::FetchFailed(e) => println!("download failed: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod html;
pub mod initialization;
pub mod organize;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError, OrganizeError, SaveError};
pub use organize::{Category, CategoryMap, OrganizeReport};
pub use run::{run_copy, run_copy_with, CopyOutcome};

// Internal run module (fetch, then organize)
mod run {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::{Config, DEFAULT_USER_AGENT};
    use crate::error_handling::{FetchError, SaveError};
    use crate::fetch::save_page;
    use crate::initialization::init_client;
    use crate::organize::{organize_directory, CategoryMap, OrganizeReport};

    /// Result of a copy run that did not hit an unrecoverable error.
    #[derive(Debug)]
    pub enum CopyOutcome {
        /// The page was saved and the output directory organized.
        Saved {
            /// Where the page was written before organizing
            page: PathBuf,
            /// Moves performed by the organize step
            report: OrganizeReport,
        },
        /// The download failed; nothing was written and nothing was organized.
        FetchFailed(FetchError),
    }

    /// Downloads `config.url` into `config.output` and organizes the directory.
    ///
    /// A download failure is reported as [`CopyOutcome::FetchFailed`]. Only
    /// after a successful save is the output directory organized.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, the page cannot be
    /// written, or a file cannot be moved. A failed move leaves the directory
    /// partially organized.
    pub async fn run_copy(config: &Config) -> Result<CopyOutcome> {
        run_copy_with(config, |_| {}).await
    }

    /// Same as [`run_copy`], calling `on_saved` with the page path once the
    /// page is written and before the directory is organized.
    ///
    /// # Errors
    ///
    /// See [`run_copy`].
    pub async fn run_copy_with<F>(config: &Config, on_saved: F) -> Result<CopyOutcome>
    where
        F: FnOnce(&Path),
    {
        let client =
            init_client(DEFAULT_USER_AGENT).context("Failed to initialize HTTP client")?;

        let page = match save_page(&client, &config.url, &config.output).await {
            Ok(page) => page,
            Err(SaveError::Fetch(e)) => {
                info!("Download of {} failed: {}", config.url, e);
                return Ok(CopyOutcome::FetchFailed(e));
            }
            Err(e) => return Err(e).context("Failed to save page"),
        };
        on_saved(&page);

        let report = organize_directory(&config.output, &CategoryMap::default())
            .with_context(|| format!("Failed to organize {}", config.output.display()))?;

        Ok(CopyOutcome::Saved { page, report })
    }
}
