//! Forensics endpoint integration tests.
//!
//! Run with: `cargo test -p osint-vision-api --test forensics_test`

mod helpers;

use helpers::fixtures;
use serde_json::Value;

fn labels(body: &Value) -> Vec<String> {
    body["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["label"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_blank_white_image() {
    let server = helpers::server_without_engine();

    let response = server
        .post("/api/forensics")
        .multipart(helpers::png_upload(fixtures::white_png(100, 100)))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["analysis"]["blur_detected"], true);
    assert_eq!(body["analysis"]["brightness"], 255.0);
    assert!(body["quality_score"].as_u64().unwrap() <= 70);
    assert_eq!(body["quality_score"], 55);
    assert_eq!(body["manipulation_likelihood"], "high");

    let labels = labels(&body);
    assert!(labels.contains(&"Very Bright Image".to_string()));
    assert!(labels.contains(&"Low Contrast".to_string()));
}

#[tokio::test]
async fn test_sharp_high_contrast_image() {
    let server = helpers::server_without_engine();

    let response = server
        .post("/api/forensics")
        .multipart(helpers::png_upload(fixtures::checkerboard_png(128, 32)))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["analysis"]["blur_detected"], false);
    // Two grey levels: only the entropy check fails.
    assert_eq!(body["quality_score"], 85);
    assert_eq!(body["manipulation_likelihood"], "low");
    let labels = labels(&body);
    assert!(labels.contains(&"Low Histogram Entropy".to_string()));
    assert!(!labels.contains(&"Image Blur Detected".to_string()));
    assert!(!labels.contains(&"Low Contrast".to_string()));
}

#[tokio::test]
async fn test_resubmitting_same_bytes_gives_same_digests() {
    let server = helpers::server_without_engine();
    let data = fixtures::white_png(50, 50);

    let first: Value = server
        .post("/api/forensics")
        .multipart(helpers::png_upload(data.clone()))
        .await
        .json();
    let second: Value = server
        .post("/api/forensics")
        .multipart(helpers::png_upload(data))
        .await
        .json();

    assert_eq!(first["hashes"], second["hashes"]);
    assert_eq!(first["hashes"]["md5"].as_str().unwrap().len(), 32);
    assert_eq!(first["hashes"]["sha1"].as_str().unwrap().len(), 40);
    assert_eq!(first["hashes"]["sha256"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_corrupt_upload_is_a_processing_error() {
    let server = helpers::server_without_engine();

    let response = server
        .post("/api/forensics")
        .multipart(helpers::upload(b"GIF89a".to_vec(), "x.gif", "image/gif"))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["code"], "PROCESSING_ERROR");
}
