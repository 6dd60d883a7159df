//! End-to-end tests driving the `sizefmt` binary.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::io::Write;
use std::process::{Command, Output};

fn sizefmt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sizefmt"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("SIZEFMT_CONFIG")
        .output()
        .expect("should run sizefmt")
}

fn stdout_of(args: &[&str]) -> String {
    let output = sizefmt(args);
    assert!(
        output.status.success(),
        "sizefmt {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

// ── format ───────────────────────────────────────────────────────────

#[test]
fn format_prints_one_line_per_size() {
    let out = stdout_of(&["format", "0", "1023", "1024", "null", "-5"]);
    assert_eq!(out, "0b\n1023b\n1Kb\nNULL\n-5b\n");
}

#[test]
fn format_rounds_halfway_values_up() {
    let out = stdout_of(&["format", "2560", "4608", "3670016"]);
    assert_eq!(out, "3Kb\n5Kb\n4Mb\n");
    assert_eq!(stdout_of(&["format", "1280", "-p", "1"]), "1.3Kb\n");
}

#[test]
fn format_applies_options() {
    let out = stdout_of(&["format", "1536", "-w", "8", "-p", "1", "-u"]);
    assert_eq!(out, "   1.5KB\n");
}

#[test]
fn format_applies_directive() {
    let out = stdout_of(&["format", "1536", "null", "-d", "%-8.2s"]);
    assert_eq!(out, "1.50Kb  \nNULL\n");
}

#[test]
fn format_json_output() {
    let out = stdout_of(&["format", "2048", "null", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&out).expect("should be JSON");
    assert_eq!(rows[0]["size"], 2048);
    assert_eq!(rows[0]["rendered"], "2Kb");
    assert!(rows[1]["size"].is_null());
    assert_eq!(rows[1]["rendered"], "NULL");
}

#[test]
fn format_rejects_bad_directive() {
    let output = sizefmt(&["format", "1", "-d", "%x"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid directive"));
}

#[test]
fn format_uses_config_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    file.write_all(br#"{"defaults": {"width": 7, "precision": 1}}"#)
        .expect("should write config");
    let path = file.path().to_str().expect("UTF-8 path");

    let out = stdout_of(&["--config", path, "format", "1536"]);
    assert_eq!(out, "  1.5Kb\n");

    let out = stdout_of(&["--config", path, "format", "1536", "-p", "0"]);
    assert_eq!(out, "    2Kb\n");
}

// ── scale / units ────────────────────────────────────────────────────

#[test]
fn scale_reports_power_and_suffix() {
    assert_eq!(stdout_of(&["scale", "1536"]), "1.5\t1\tKb\n");
}

#[test]
fn scale_caps_at_yottabytes() {
    let out = stdout_of(&["scale", "1237940039285380274899124224", "--json"]);
    let scaled: serde_json::Value = serde_json::from_str(&out).expect("should be JSON");
    assert_eq!(scaled["power"], 8);
    assert_eq!(scaled["suffix"], "Yb");
    assert_eq!(scaled["value"], 1024.0);
}

#[test]
fn units_lists_every_suffix() {
    let out = stdout_of(&["units"]);
    let suffixes: Vec<&str> = out
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert_eq!(
        suffixes,
        vec!["b", "Kb", "Mb", "Gb", "Tb", "Pb", "Eb", "Zb", "Yb"]
    );
}
