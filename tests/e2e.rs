//! End-to-end tests for the release-verify CLI
//!
//! These tests run the actual binary against a local mock server and check
//! that stdout carries exactly one line.

use release_verify::helpers::internal::hash::sha256_bytes;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERSION: &str = "go1.22.3";
const FILENAME: &str = "go1.22.3.src.tar.gz";
const ARCHIVE: &[u8] = b"pretend this is a gzipped tarball";

fn manifest(sha256: &str) -> String {
    format!(
        r#"[{{"version":"{VERSION}","stable":true,"files":[{{"filename":"{FILENAME}","sha256":"{sha256}"}}]}}]"#
    )
}

/// Start a server publishing the archive and the given manifest body.
async fn serve(manifest_body: String) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/dl/{FILENAME}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(ARCHIVE))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dl/"))
        .and(query_param("mode", "json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(manifest_body),
        )
        .mount(&server)
        .await;

    server
}

/// Run the binary in `workdir`, isolated from any user config.
fn run_verify(server: &MockServer, workdir: &Path, version: &str, extra: &[&str]) -> Output {
    let uri = server.uri();
    Command::new(env!("CARGO_BIN_EXE_release-verify"))
        .current_dir(workdir)
        .env("XDG_CONFIG_HOME", workdir)
        .env("XDG_CONFIG_DIRS", workdir)
        .env_remove("RELEASE_VERIFY_HTTP_TIMEOUT")
        .env_remove("RELEASE_VERIFY_OUTPUT")
        .env_remove("RELEASE_VERIFY_CONFIG")
        .arg("--archive-url")
        .arg(format!("{uri}/dl/{FILENAME}"))
        .arg("--manifest-url")
        .arg(format!("{uri}/dl/?mode=json"))
        .args(["--release", version, "--filename", FILENAME, "--quiet"])
        .args(extra)
        .output()
        .expect("Failed to execute release-verify")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

// =============================================================================
// Verdicts
// =============================================================================

#[tokio::test]
async fn test_matching_digest_prints_true() {
    let server = serve(manifest(&sha256_bytes(ARCHIVE))).await;
    let dir = TempDir::new().unwrap();

    let output = run_verify(&server, dir.path(), VERSION, &[]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["true"]);
    // Archive lands under its file name in the working directory and is kept
    assert_eq!(std::fs::read(dir.path().join(FILENAME)).unwrap(), ARCHIVE);
}

#[tokio::test]
async fn test_different_digest_prints_false() {
    let server = serve(manifest(&"0".repeat(64))).await;
    let dir = TempDir::new().unwrap();

    let output = run_verify(&server, dir.path(), VERSION, &[]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["false"]);
}

#[tokio::test]
async fn test_uppercase_published_digest_prints_false() {
    let server = serve(manifest(&sha256_bytes(ARCHIVE).to_uppercase())).await;
    let dir = TempDir::new().unwrap();

    let output = run_verify(&server, dir.path(), VERSION, &[]);

    assert_eq!(stdout_lines(&output), ["false"]);
}

#[tokio::test]
async fn test_output_flag_sets_destination() {
    let server = serve(manifest(&sha256_bytes(ARCHIVE))).await;
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("downloads/archive.bin");

    let dest_arg = dest.to_str().unwrap();
    let output = run_verify(&server, dir.path(), VERSION, &["--output", dest_arg]);

    assert_eq!(stdout_lines(&output), ["true"]);
    assert!(dest.is_file());
    assert!(!dir.path().join(FILENAME).exists());
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_truncated_manifest_prints_decode_error() {
    let full = manifest(&sha256_bytes(ARCHIVE));
    let server = serve(full[..full.len() / 2].to_string()).await;
    let dir = TempDir::new().unwrap();

    let output = run_verify(&server, dir.path(), VERSION, &[]);

    assert!(!output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("cannot decode manifest"), "{}", lines[0]);
    assert!(lines[0] != "true" && lines[0] != "false");
}

#[tokio::test]
async fn test_unknown_version_prints_lookup_error() {
    let server = serve(manifest(&sha256_bytes(ARCHIVE))).await;
    let dir = TempDir::new().unwrap();

    let output = run_verify(&server, dir.path(), "go1.99.0", &[]);

    assert!(!output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("no checksum for"), "{}", lines[0]);
    assert!(lines[0].contains("go1.99.0"), "{}", lines[0]);
}

#[tokio::test]
async fn test_missing_archive_stops_before_manifest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/dl/{FILENAME}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    // Fail-fast: the manifest must never be requested
    Mock::given(method("GET"))
        .and(path("/dl/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(manifest("x")))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = run_verify(&server, dir.path(), VERSION, &[]);

    assert!(!output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("HTTP 404"), "{}", lines[0]);
    assert!(!dir.path().join(FILENAME).exists());

    server.verify().await;
}

#[tokio::test]
async fn test_missing_config_file_is_reported() {
    let server = serve(manifest(&sha256_bytes(ARCHIVE))).await;
    let dir = TempDir::new().unwrap();

    let extra = ["--config", "does-not-exist.toml"];
    let output = run_verify(&server, dir.path(), VERSION, &extra);

    assert!(!output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Failed to load configuration"), "{}", lines[0]);
}

#[tokio::test]
async fn test_cli_flags_override_config_file() {
    let server = serve(manifest(&sha256_bytes(ARCHIVE))).await;
    let dir = TempDir::new().unwrap();
    let cfg_dir = dir.path().join("release-verify");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    // XDG_CONFIG_HOME points at `dir`, so this file is picked up.
    // CLI flags still win over it.
    std::fs::write(
        cfg_dir.join("config.toml"),
        "version = \"go1.0\"\nhttp_timeout_secs = 10\n",
    )
    .unwrap();

    let output = run_verify(&server, dir.path(), VERSION, &[]);
    assert_eq!(stdout_lines(&output), ["true"]);
}

// =============================================================================
// CLI surface
// =============================================================================

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_release-verify"))
        .arg("--help")
        .output()
        .expect("Failed to run release-verify --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--archive-url"));
    assert!(stdout.contains("--manifest-url"));
    assert!(stdout.contains("--release"));
}
