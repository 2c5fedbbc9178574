//! Integration tests driving the `ce-go-function` binary.

mod common;

use assert_cmd::Command;
use ce_go_function::Category;
use common::{go_module, receiver_source, write_go_file};
use serde_json::Value;
use std::fs;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("ce-go-function").unwrap();
    cmd.env_remove("CE_GO_PACKAGE")
        .env_remove("CE_GO_FUNCTION")
        .env_remove("CE_PROTOCOL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_signatures_lists_registry_in_order() {
    let output = bin().arg("signatures").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find("func(event.Event)\n").unwrap();
    let last = stdout
        .find("func(context.Context, event.Event) (*event.Event, error)")
        .unwrap();
    assert!(first < last);
}

#[test]
fn test_detect_prints_json_outcome() {
    let module = go_module("example.org/myfn");
    write_go_file(
        module.path(),
        "fn.go",
        &receiver_source("Handle", &[Category::Envelope], &[Category::Error]),
    );

    let output = bin()
        .args(["detect", "--function", "Handle", "--format", "json", "--working-dir"])
        .arg(module.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["package"], "example.org/myfn");
    assert_eq!(json["function"], "Handle");
    assert_eq!(json["protocol"], "http");
}

#[test]
fn test_detect_then_build_through_plan() {
    let module = go_module("example.org/myfn");
    write_go_file(
        module.path(),
        "fn.go",
        &receiver_source("Receiver", &[Category::Envelope], &[]),
    );
    let plan = module.path().join("plan.toml");

    bin()
        .args(["detect", "--working-dir"])
        .arg(module.path())
        .arg("--plan")
        .arg(&plan)
        .assert()
        .success();

    let output = bin()
        .args(["build", "--working-dir"])
        .arg(module.path())
        .arg("--plan")
        .arg(&plan)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let directive: toml::Table = toml::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(
        directive["BP_GO_TARGETS.override"].as_str(),
        Some("./ce-cmd/function")
    );
    assert_eq!(directive["GOFLAGS.append"].as_str(), Some(" -tags=http"));

    let main = fs::read_to_string(module.path().join("ce-cmd/function/main.go")).unwrap();
    assert!(main.contains("fn.Receiver"));
}

#[test]
fn test_detect_without_match_fails_with_listing() {
    let module = go_module("example.org/myfn");

    let output = bin()
        .args(["detect", "--working-dir"])
        .arg(module.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("func(event.Event)"), "stderr: {stderr}");
}

#[test]
fn test_environment_selects_protocol() {
    let module = go_module("example.org/myfn");
    write_go_file(
        module.path(),
        "fn.go",
        &receiver_source("Receiver", &[Category::Envelope], &[]),
    );

    let output = bin()
        .env("CE_PROTOCOL", "unknown")
        .args(["generate", "--working-dir"])
        .arg(module.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported protocol"));
    assert!(!module.path().join("ce-cmd").exists());
}
