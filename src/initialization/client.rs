//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the page request.
///
/// Creates a `reqwest::Client` configured with the given User-Agent. No
/// timeout is set and the default redirect policy (up to 10 hops) applies,
/// so the request behaves like a plain browser navigation.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(user_agent: &str) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new().user_agent(user_agent).build()?;
    Ok(client)
}
