//! End-to-end runs of the download pipeline against a mock image host.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use icon_downloader::{run_pipeline, Config, Error};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::ZipArchive;

fn test_config(workdir: &TempDir, server: &MockServer, mapping: &str) -> Config {
    let mapping_path = workdir.path().join("item_icons.json");
    fs::write(&mapping_path, mapping).unwrap();

    let mut config = Config::default();
    config.input.mapping_path = mapping_path;
    config.output.directory = workdir.path().join("icons");
    config.output.archive_path = workdir.path().join("icons.zip");
    config.http.base_url = format!("{}/images", server.uri());
    config.http.timeout_seconds = 5;
    config.options.concurrency = 2;
    config
}

async fn mount_icon(server: &MockServer, remote_name: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/images/{}", remote_name)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .expect(1)
        .mount(server)
        .await;
}

fn read_archive(path: &Path) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut content = Vec::new();
        file.read_to_end(&mut content).unwrap();
        entries.push((file.name().to_string(), content));
    }
    entries.sort();
    entries
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_downloads_and_archives_icons() {
    let workdir = tempfile::tempdir().unwrap();
    let mock_server = MockServer::start().await;

    mount_icon(&mock_server, "Coins", b"coins-png").await;
    mount_icon(&mock_server, "Shark", b"shark-png").await;

    // Nothing else may be requested; the empty icon in particular.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(10)
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(
        &workdir,
        &mock_server,
        r#"[{"icon":"Coins"},{"icon":"Shark"},{"icon":""}]"#,
    );
    let report = run_pipeline(&config).await.unwrap();

    assert_eq!(report.summary.succeeded, 2);
    assert_eq!(report.summary.failed, 0);
    assert_eq!(report.summary.no_icon, 1);

    assert_eq!(dir_entries(&config.output.directory), vec!["Coins", "Shark"]);

    let archive = report.archive.unwrap();
    assert_eq!(archive.entries, 2);
    assert_eq!(
        read_archive(&config.output.archive_path),
        vec![
            ("Coins".to_string(), b"coins-png".to_vec()),
            ("Shark".to_string(), b"shark-png".to_vec()),
        ]
    );
}

#[tokio::test]
async fn test_failed_downloads_are_skipped() {
    let workdir = tempfile::tempdir().unwrap();
    let mock_server = MockServer::start().await;

    mount_icon(&mock_server, "Coins", b"coins-png").await;
    Mock::given(method("GET"))
        .and(path("/images/Shark"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/images/Lobster"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(
        &workdir,
        &mock_server,
        r#"[{"icon":"Shark"},{"icon":"Coins"},{"icon":"Lobster"}]"#,
    );
    let report = run_pipeline(&config).await.unwrap();

    assert_eq!(report.summary.succeeded, 1);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(dir_entries(&config.output.directory), vec!["Coins"]);
    assert_eq!(
        read_archive(&config.output.archive_path),
        vec![("Coins".to_string(), b"coins-png".to_vec())]
    );

    let labels: Vec<&str> = report
        .summary
        .failures
        .iter()
        .map(|(label, _)| label.as_str())
        .collect();
    assert_eq!(labels, vec!["Shark", "Lobster"]);
}

#[tokio::test]
async fn test_icon_names_are_normalized_in_urls_only() {
    let workdir = tempfile::tempdir().unwrap();
    let mock_server = MockServer::start().await;

    mount_icon(&mock_server, "Rune_scimitar", b"scimitar").await;

    let config = test_config(&workdir, &mock_server, r#"[{"icon":"Rune scimitar"}]"#);
    let report = run_pipeline(&config).await.unwrap();

    assert_eq!(report.summary.succeeded, 1);
    assert_eq!(dir_entries(&config.output.directory), vec!["Rune scimitar"]);
    assert_eq!(
        read_archive(&config.output.archive_path),
        vec![("Rune scimitar".to_string(), b"scimitar".to_vec())]
    );
}

#[tokio::test]
async fn test_rerun_overwrites_previous_results() {
    let workdir = tempfile::tempdir().unwrap();
    let mock_server = MockServer::start().await;
    let mapping = r#"[{"icon":"Coins"},{"icon":"Shark"}]"#;

    mount_icon(&mock_server, "Coins", b"coins-v1").await;
    mount_icon(&mock_server, "Shark", b"shark-v1").await;

    let config = test_config(&workdir, &mock_server, mapping);
    run_pipeline(&config).await.unwrap();

    mock_server.reset().await;
    mount_icon(&mock_server, "Coins", b"coins-v2").await;
    mount_icon(&mock_server, "Shark", b"shark-v2-longer").await;

    let report = run_pipeline(&config).await.unwrap();

    assert_eq!(report.summary.succeeded, 2);
    assert_eq!(
        fs::read(config.output.directory.join("Shark")).unwrap(),
        b"shark-v2-longer"
    );
    assert_eq!(
        read_archive(&config.output.archive_path),
        vec![
            ("Coins".to_string(), b"coins-v2".to_vec()),
            ("Shark".to_string(), b"shark-v2-longer".to_vec()),
        ]
    );
}

#[tokio::test]
async fn test_skip_archive() {
    let workdir = tempfile::tempdir().unwrap();
    let mock_server = MockServer::start().await;

    mount_icon(&mock_server, "Coins", b"coins-png").await;

    let mut config = test_config(&workdir, &mock_server, r#"[{"icon":"Coins"}]"#);
    config.options.skip_archive = true;

    let report = run_pipeline(&config).await.unwrap();

    assert_eq!(report.summary.succeeded, 1);
    assert!(report.archive.is_none());
    assert!(!config.output.archive_path.exists());
}

#[tokio::test]
async fn test_malformed_mapping_is_fatal() {
    let workdir = tempfile::tempdir().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(10)
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(&workdir, &mock_server, r#"{"icon": "Coins"}"#);
    let err = run_pipeline(&config).await.unwrap_err();

    assert!(matches!(err, Error::Mapping(_)));
    assert!(!config.output.directory.exists());
    assert!(!config.output.archive_path.exists());
}

#[tokio::test]
async fn test_missing_mapping_is_fatal() {
    let workdir = tempfile::tempdir().unwrap();
    let mock_server = MockServer::start().await;

    let mut config = test_config(&workdir, &mock_server, "[]");
    config.input.mapping_path = workdir.path().join("does-not-exist.json");

    let err = run_pipeline(&config).await.unwrap_err();
    assert!(matches!(err, Error::Mapping(_)));
}
