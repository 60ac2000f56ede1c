// Fetch module tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::DEFAULT_USER_AGENT;
use crate::error_handling::{FetchError, SaveError};
use crate::fetch::{fetch_page, save_page};
use crate::initialization::init_client;

fn client() -> reqwest::Client {
    init_client(DEFAULT_USER_AGENT).expect("client should build")
}

#[tokio::test]
async fn test_fetch_page_rejects_invalid_url_without_request() {
    let err = fetch_page(&client(), "file:///etc/hostname")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl { .. }));
}

#[tokio::test]
async fn test_fetch_page_connection_refused_is_request_error() {
    // Port 9 (discard) on loopback is not expected to be listening
    let err = fetch_page(&client(), "http://127.0.0.1:9/")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_save_page_failure_leaves_output_dir_empty() {
    let temp = TempDir::new().expect("temp dir");
    let output = temp.path().join("nested").join("site");

    let err = save_page(&client(), "ftp://example.com", &output)
        .await
        .unwrap_err();

    assert!(matches!(err, SaveError::Fetch(_)));
    assert!(output.is_dir(), "output dir is created before the request");
    assert!(!Path::new(&output).join("index.html").exists());
    assert_eq!(fs::read_dir(&output).expect("list output").count(), 0);
}

#[tokio::test]
async fn test_save_page_unwritable_output_fails_before_request() {
    let temp = TempDir::new().expect("temp dir");
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "x").expect("write blocker");

    // Unparseable URL: reaching the fetch step would yield SaveError::Fetch
    let err = save_page(&client(), "not a valid url!!!", &blocker.join("site"))
        .await
        .unwrap_err();

    assert!(matches!(err, SaveError::Io { .. }), "got {err:?}");
}
