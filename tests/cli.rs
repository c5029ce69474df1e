//! Command-line front-end.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use ebl_atf::atf::testing::{CATALOG_JSON, SAMPLE_ATF};
use predicates::prelude::*;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("sample.atf"), SAMPLE_ATF).expect("write sample");
        fs::write(dir.path().join("signs.json"), CATALOG_JSON).expect("write catalog");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn command(&self) -> Command {
        let mut command = cargo_bin_cmd!("ebl-atf");
        command.current_dir(self.dir.path());
        command
    }
}

#[test]
fn test_parse_json() {
    let workspace = Workspace::new();

    workspace
        .command()
        .args(["parse", "sample.atf"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "SurfaceAtLine""#))
        .stdout(predicate::str::contains(r#""type": "LoneDeterminative""#));
}

#[test]
fn test_parse_summary() {
    let workspace = Workspace::new();

    workspace
        .command()
        .args(["parse", "sample.atf", "--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ControlLine"))
        .stdout(predicate::str::contains("1'. {giš}"));
}

#[test]
fn test_compact_output_from_local_config() {
    let workspace = Workspace::new();
    fs::write(workspace.path("ebl-atf.toml"), "[output]\npretty = false\n").expect("write config");

    workspace
        .command()
        .args(["parse", "sample.atf"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"[{"type":"SurfaceAtLine""#));
}

#[test]
fn test_parse_error() {
    let workspace = Workspace::new();
    fs::write(workspace.path("invalid.atf"), "1. ku\ninvalid").expect("write atf");

    workspace
        .command()
        .args(["parse", "invalid.atf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_missing_file() {
    Workspace::new()
        .command()
        .args(["clean", "missing.atf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot read missing.atf"));
}

#[test]
fn test_clean() {
    Workspace::new()
        .command()
        .args(["clean", "sample.atf"])
        .assert()
        .success()
        .stdout("šu mi d utu x\nku₃ ku ku₃/šu\ngiš\n1(AŠ) |BI×IS| ku₂\n");
}

#[test]
fn test_signs() {
    Workspace::new()
        .command()
        .args(["signs", "sample.atf", "--catalog", "signs.json"])
        .assert()
        .success()
        .stdout("ŠU MI AN UD X\nKU₃ ? KU₃/ŠU\nGIŠ\nAŠ |BI×IS| ?\n");
}

#[test]
fn test_signs_from_config() {
    let workspace = Workspace::new();
    fs::write(workspace.path("other.toml"), "[signs]\ncatalog = \"signs.json\"\n").expect("write config");

    workspace
        .command()
        .args(["signs", "sample.atf", "--config", "other.toml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ŠU MI AN UD X\n"));
}

#[test]
fn test_search() {
    Workspace::new()
        .command()
        .args(["search", "sample.atf", "--catalog", "signs.json", "--query", "1. ku₃/šu\n2. {giš}"])
        .assert()
        .success()
        .stdout("ku₃ ku ku₃/šu\ngiš\n");
}

#[test]
fn test_search_without_matches() {
    Workspace::new()
        .command()
        .args(["search", "sample.atf", "--catalog", "signs.json", "--query", "1. me"])
        .assert()
        .success()
        .stdout("");
}
