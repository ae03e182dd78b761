use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture grid present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("teleroute");
    cmd.env("RUST_LOG", "error").env("NO_COLOR", "1");
    cmd
}

#[test]
fn inspect_prints_counts_and_cells() {
    let mut cmd = cli();
    cmd.arg("inspect").arg("--grid").arg(fixture("sample_6x6.csv"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Grid size: 6x6\nBlocked cells: 5\nFree cells: 29\nTeleports: (1, 1) <-> (2, 4)\n",
        ))
        .stdout(predicate::str::contains("1, 2, 0, 0, 1, 1\n"));
}

#[test]
fn inspect_json_reports_summary() {
    let mut cmd = cli();
    cmd.args(["--format", "json", "inspect", "--grid"])
        .arg(fixture("enclosed_4x4.csv"));

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["size"], serde_json::json!(4));
    assert_eq!(value["blocked"], serde_json::json!(5));
    assert_eq!(value["free"], serde_json::json!(9));
    assert_eq!(value["rows"][1], serde_json::json!([2, 1, 0, 1]));
}

#[test]
fn inspect_map_uses_glyphs() {
    let mut cmd = cli();
    cmd.args(["--format", "map", "inspect", "--grid"])
        .arg(fixture("enclosed_4x4.csv"));

    cmd.assert()
        .success()
        .stdout("..#.\nT.#.\n..##\nT.#.\n");
}

#[test]
fn inspect_rejects_invalid_grid() {
    let mut cmd = cli();
    cmd.arg("inspect").arg("--grid").arg(fixture("invalid_value.csv"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("row 2 column 2 has value 3"));
}
