// End-to-end: mock OpenTSDB -> pipeline::run -> data.json on disk

mod common;

use common::{ENERGY_QUERY_M, THREE_SOURCE_RESPONSE};
use energy_chart::config::AppConfig;
use energy_chart::pipeline;
use mockito::{Matcher, Server};
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

fn test_config(url: &str, output: &Path) -> AppConfig {
    AppConfig::load_from_str(&format!(
        "url = \"{}\"\noutput_path = \"{}\"\nrequest_timeout_secs = 5\n",
        url,
        output.display()
    ))
    .unwrap()
}

#[tokio::test]
async fn test_run_writes_summed_chart() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "3d-ago".into()),
            Matcher::UrlEncoded("m".into(), ENERGY_QUERY_M.into()),
        ]))
        .with_status(200)
        .with_body(THREE_SOURCE_RESPONSE)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data.json");
    let summary = pipeline::run(&test_config(&server.url(), &output))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(summary.series_count, 3);
    assert_eq!(summary.row_count, 2);

    let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed["cols"].as_array().unwrap().len(), 4);
    assert_eq!(
        parsed["rows"],
        json!([
            {"c":[{"v":1477299600000u64},{"v":35},{"v":null},{"v":null}]},
            {"c":[{"v":1477303200000u64},{"v":6},{"v":null},{"v":null}]}
        ])
    );
}

#[tokio::test]
async fn test_run_missing_timestamp_fails_and_leaves_previous_output() {
    let body = r#"[
      {"metric":"energy","tags":{"source":"GDSP1"},"aggregateTags":[],"dps":{"100":1,"200":2}},
      {"metric":"energy","tags":{"source":"GDSP2"},"aggregateTags":[],"dps":{"100":1}}
    ]"#;
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data.json");
    std::fs::write(&output, "previous").unwrap();

    let err = pipeline::run(&test_config(&server.url(), &output))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("200"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
}

#[tokio::test]
async fn test_run_empty_response_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data.json");
    let err = pipeline::run(&test_config(&server.url(), &output))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no series"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_run_server_error_fails_before_write() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data.json");
    let err = pipeline::run(&test_config(&server.url(), &output))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("500"));
    assert!(!output.exists());
}
