use assert_cmd::Command;
use std::path::Path;

fn fixture_path() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/record.json")
        .display()
        .to_string()
}

#[test]
fn report_command_writes_an_xlsx_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.xlsx");
    let fixture = fixture_path();

    Command::cargo_bin("herring")
        .unwrap()
        .args(["report", "--in", fixture.as_str(), "--out"])
        .arg(&out)
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[test]
fn diagram_command_writes_svg_with_all_category_labels() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fishbone.svg");
    let fixture = fixture_path();

    Command::cargo_bin("herring")
        .unwrap()
        .args(["diagram", "--in", fixture.as_str(), "--out"])
        .arg(&out)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    for label in ["Machine", "Method", "Material", "Manpower", "Measurement", "Environment"] {
        assert!(svg.contains(label), "missing {label}");
    }
    assert!(svg.contains("- Reflow oven profile drift"));
}

#[test]
fn diagram_command_writes_png_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fishbone.png");
    let fixture = fixture_path();

    Command::cargo_bin("herring")
        .unwrap()
        .args(["diagram", "--format", "png", "--in", fixture.as_str(), "--out"])
        .arg(&out)
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn record_is_read_from_stdin_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.xlsx");
    let json = std::fs::read_to_string(fixture_path()).unwrap();

    Command::cargo_bin("herring")
        .unwrap()
        .args(["report", "--out"])
        .arg(&out)
        .write_stdin(json)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn unknown_command_fails_with_usage_error() {
    Command::cargo_bin("herring")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}

#[test]
fn malformed_json_fails_cleanly() {
    Command::cargo_bin("herring")
        .unwrap()
        .arg("report")
        .write_stdin("{ not json")
        .assert()
        .failure();
}
