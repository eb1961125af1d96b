use assert_cmd::Command;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

const STORE: &str = r#"{
    "articles": [
        {"url": "https://nytimes.com/nyc-1", "headline": "One", "coordinates": {"lat": 40.70, "lng": -74.00}},
        {"url": "https://nytimes.com/nyc-2", "headline": "Two", "coordinates": {"lat": 40.71, "lng": -74.01}},
        {"url": "https://nytimes.com/unknown", "headline": "Three", "coordinates": {"lat": 0.0, "lng": 0.0}},
        {"url": "https://nytimes.com/paris", "headline": "Four", "coordinates": {"lat": 48.85, "lng": 2.35}}
    ],
    "images": []
}"#;

fn store_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn geomark() -> Command {
    let mut cmd = Command::cargo_bin("geomark").unwrap();
    cmd.env_remove("GEOMARK_EPS").env_remove("GEOMARK_MIN_POINTS");
    cmd
}

#[test]
fn test_cli_groups_articles() {
    let store = store_file(STORE);

    let output = geomark()
        .arg("articles")
        .arg("--input")
        .arg(store.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = response["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["numberItems"], 2);
    assert_eq!(groups[0]["markers"][0]["url"], "https://nytimes.com/nyc-1");
    assert!(groups[0]["markers"][0].get("type").is_none());
    assert_eq!(groups[1]["numberItems"], 1);
    assert_eq!(groups[1]["coordinates"]["lat"], 48.85);
}

#[test]
fn test_cli_min_points_flag() {
    let store = store_file(STORE);

    let output = geomark()
        .args(["articles", "--min-points", "3", "--input"])
        .arg(store.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    // Nothing is dense enough: every located article is a singleton
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["groups"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_config_file() {
    let store = store_file(STORE);
    let config = store_file(r#"{"eps": 100.0}"#);

    let output = geomark()
        .arg("articles")
        .arg("--input")
        .arg(store.path())
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    // A huge radius pulls New York and Paris together
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = response["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["numberItems"], 3);
}

#[test]
fn test_cli_empty_collection_fails() {
    let store = store_file(STORE);

    let output = geomark()
        .arg("images")
        .arg("--input")
        .arg(store.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no images found"));
}

#[test]
fn test_cli_invalid_eps_fails() {
    let store = store_file(STORE);

    let output = geomark()
        .args(["articles", "--eps", "0", "--input"])
        .arg(store.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid grouping parameters"));
}

#[test]
fn test_cli_unknown_collection_fails() {
    let store = store_file(STORE);

    geomark()
        .arg("videos")
        .arg("--input")
        .arg(store.path())
        .assert()
        .failure();
}
