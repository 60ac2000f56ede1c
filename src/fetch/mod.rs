//! Page download.
//!
//! One GET request against the caller's URL, status validation, and the
//! write of the normalized markup to `<output_dir>/index.html`.

mod url;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::INDEX_FILE_NAME;
use crate::error_handling::{FetchError, SaveError};
use crate::html::prettify;

pub use self::url::validate_and_normalize_url;

/// Downloads a page and returns its body as text.
///
/// The URL is validated (and given an `https://` scheme if it has none)
/// before the request is sent. Any status outside the success range is
/// turned into an error via `error_for_status`.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` if the URL is rejected up front, or
/// `FetchError::Request` for connection failures, error statuses, and body
/// read failures.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let url = validate_and_normalize_url(url)?;

    debug!("Requesting {url}");
    let response = client.get(&url).send().await?;
    debug!("Received {} from {}", response.status(), response.url());

    let response = response.error_for_status()?;
    let body = response.text().await?;
    Ok(body)
}

/// Downloads a page and writes it, prettified, to `<output_dir>/index.html`.
///
/// The output directory (and any missing parents) is created before the
/// request is sent, so an unwritable location fails without touching the
/// network. A failed download leaves the directory in place but empty of
/// anything new. An existing `index.html` is overwritten.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns `SaveError::Fetch` if the download fails, or `SaveError::Io` if the
/// directory or the file cannot be written.
pub async fn save_page(
    client: &reqwest::Client,
    url: &str,
    output_dir: &Path,
) -> Result<PathBuf, SaveError> {
    fs::create_dir_all(output_dir).map_err(|source| SaveError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let body = fetch_page(client, url).await?;
    let markup = prettify(&body);

    let page_path = output_dir.join(INDEX_FILE_NAME);
    fs::write(&page_path, markup.as_bytes()).map_err(|source| SaveError::Io {
        path: page_path.clone(),
        source,
    })?;

    info!(
        "Saved {} ({} bytes) to {}",
        url,
        markup.len(),
        page_path.display()
    );
    Ok(page_path)
}

#[cfg(test)]
mod tests;
