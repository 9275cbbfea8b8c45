use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn royal_args(root: &Path) -> [String; 8] {
    let fixture = |name: &str| {
        root.join("fixtures")
            .join("royal")
            .join(name)
            .to_string_lossy()
            .into_owned()
    };
    [
        "--persons".to_string(),
        fixture("persons.json"),
        "--relations".to_string(),
        fixture("relations.json"),
        "--settings".to_string(),
        fixture("person-settings.json"),
        "--dynasties".to_string(),
        fixture("dynasty-settings.json"),
    ]
}

#[test]
fn cli_renders_svg_smoke() {
    let root = repo_root();
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("royal.svg");

    let exe = assert_cmd::cargo_bin!("stemma-cli");
    Command::new(exe)
        .current_dir(&root)
        .arg("render")
        .args(royal_args(&root))
        .args(["--out", out.to_string_lossy().as_ref()])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.starts_with("<svg"), "output is not an SVG");
    assert!(svg.contains(r#"<g class="relations">"#));
    assert!(svg.contains("Hugh Capet"));
}

#[test]
fn cli_emits_the_layout_model_as_json() {
    let root = repo_root();

    let exe = assert_cmd::cargo_bin!("stemma-cli");
    let assert = Command::new(exe)
        .current_dir(&root)
        .arg("layout")
        .args(royal_args(&root))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let layout: serde_json::Value = serde_json::from_str(&stdout).expect("layout json");
    assert_eq!(layout["nodes"].as_array().map(Vec::len), Some(7));
    assert_eq!(layout["edges"].as_array().map(Vec::len), Some(6));
}

#[test]
fn cli_rejects_missing_inputs_with_usage() {
    let exe = assert_cmd::cargo_bin!("stemma-cli");
    Command::new(exe).arg("render").assert().code(2);
}
