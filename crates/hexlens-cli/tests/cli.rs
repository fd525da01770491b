use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hexlens"))
}

#[test]
fn help_covers_all_subcommands() {
    for sub in ["hex", "number", "text"] {
        cmd().arg(sub).arg("--help").assert().success();
    }
    cmd().arg("--version").assert().success();
}

#[test]
fn hex_inspection_renders_grouped_views() {
    cmd()
        .arg("hex")
        .arg("E8 08 B0 04 00 00 2C 01")
        .arg("--group")
        .arg("2")
        .arg("--endian")
        .arg("little")
        .assert()
        .success()
        .stdout(
            contains("Bytes: E8 08 B0 04 00 00 2C 01")
                .and(contains("Hex groups: 08 E8 04 B0 00 00 01 2C"))
                .and(contains("Unsigned: 2280 1200 0 300"))
                .and(contains("Length: 8")),
        );
}

#[test]
fn hex_reads_stdin_when_no_argument_is_given() {
    cmd()
        .arg("hex")
        .write_stdin("0x00FF")
        .assert()
        .success()
        .stdout(contains("Bytes: 00 FF").and(contains("Length: 2")));
}

#[test]
fn malformed_hex_shows_error_and_hint() {
    cmd()
        .arg("hex")
        .arg("E808B0040")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn number_encodes_with_width_and_representation() {
    cmd()
        .arg("number")
        .arg("-1")
        .arg("--width")
        .arg("1")
        .arg("--repr")
        .arg("twos")
        .arg("--endian")
        .arg("big")
        .assert()
        .success()
        .stdout(
            contains("Bytes: FF")
                .and(contains("Scalar hex: 0xff"))
                .and(contains("Scalar dec: -1")),
        );
}

#[test]
fn number_overflow_is_reported_with_a_hint() {
    cmd()
        .arg("number")
        .arg("256")
        .arg("--width")
        .arg("1")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("out of range").and(contains("hint:")));
}

#[test]
fn text_inspection_shows_bytes_and_ascii() {
    cmd()
        .arg("text")
        .arg("Hello")
        .assert()
        .success()
        .stdout(contains("Bytes: 48 65 6C 6C 6F").and(contains("ASCII: Hello")));
}

#[test]
fn custom_grouping_splits_by_pattern() {
    cmd()
        .arg("text")
        .arg("Hello CAN")
        .arg("--group")
        .arg("custom")
        .arg("--groups")
        .arg("1,1,6")
        .arg("--endian")
        .arg("big")
        .assert()
        .success()
        .stdout(contains("Text groups: H e llo CA N"));
}

#[test]
fn bad_custom_pattern_shows_error_and_hint() {
    cmd()
        .arg("hex")
        .arg("00 FF")
        .arg("--group")
        .arg("custom")
        .arg("--groups")
        .arg("1,x")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("1,1,6")));
}

#[test]
fn json_output_is_parseable_and_versioned() {
    let assert = cmd()
        .arg("hex")
        .arg("0x00FF")
        .arg("--json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["inspection_version"], 1);
    assert_eq!(value["input"]["kind"], "hex");
    assert_eq!(value["bytes_hex"], "00 FF");
}

#[test]
fn json_and_pretty_conflict() {
    cmd()
        .arg("hex")
        .arg("00")
        .arg("--json")
        .arg("--pretty")
        .assert()
        .failure();
}

#[test]
fn report_file_is_written_and_announced() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("48 65 6C 6C 6F")
        .arg("--json")
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: report written ->"));

    let contents = std::fs::read_to_string(&report).expect("read report");
    let value: Value = serde_json::from_str(&contents).expect("valid json");
    assert_eq!(value["ascii"], "Hello");
}

#[test]
fn quiet_suppresses_the_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    let assert = cmd()
        .arg("hex")
        .arg("00 FF")
        .arg("--json")
        .arg("-o")
        .arg(&report)
        .arg("--quiet")
        .assert()
        .success();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8 stderr");
    assert!(!stderr.contains("OK:"));
}
