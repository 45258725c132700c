use assert_cmd::Command;
use predicates::str::{contains, diff};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("find-customers").unwrap()
}

fn customers_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("customers.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn file_is_required() {
    cmd().assert().code(2).stderr(contains("<FILE>"));
}

#[test]
fn nothing_is_printed_for_empty_stdin() {
    cmd().arg("-").write_stdin("").assert().success().stdout("").stderr("");
}

#[test]
fn closest_customers_are_printed() {
    let dir = TempDir::new().unwrap();
    let path = customers_file(
        &dir,
        concat!(
            r#"{"latitude": "0", "user_id": 7, "name": "John", "longitude": "0"}"#,
            "\n",
            r#"{"latitude": "95", "user_id": 42, "name": "Peter", "longitude": "95"}"#,
        ),
    );

    cmd()
        .args(["-c", "0", "0"])
        .arg(&path)
        .assert()
        .success()
        .stdout("John (7)\n")
        .stderr("");
}

#[test]
fn negative_center_and_custom_distance() {
    let dir = TempDir::new().unwrap();
    let path = customers_file(
        &dir,
        concat!(
            r#"{"latitude": "52.986375", "user_id": 12, "name": "Christina McArdle", "longitude": "-6.043701"}"#,
            "\n",
            r#"{"latitude": "51.92893", "user_id": 1, "name": "Alice Cahill", "longitude": "-10.27699"}"#,
            "\n",
        ),
    );

    cmd().arg(&path).assert().success().stdout("Christina McArdle (12)\n");

    cmd()
        .args(["--center", "52.0", "-9.0", "--distance", "500"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Alice Cahill (1)\nChristina McArdle (12)\n");
}

#[test]
fn stdin_input_is_sorted_by_id() {
    let input = concat!(
        r#"{"user_id": 9, "name": "B", "latitude": 0.1, "longitude": 0}"#,
        "\n",
        r#"{"user_id": 3, "name": "A", "latitude": 0, "longitude": 0.1}"#,
        "\n",
    );
    cmd()
        .args(["-c", "0", "0", "-"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("A (3)\nB (9)\n");
}

#[test]
fn empty_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = customers_file(&dir, "\n  \n\n");
    cmd().arg(&path).assert().success().stdout("");
}

#[test]
fn invalid_line_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = customers_file(&dir, "Something that is not a json\n");
    cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout("")
        .stderr("Failed to parse: \"Something that is not a json\"\n");
}

#[test]
fn not_all_fields_are_available() {
    let dir = TempDir::new().unwrap();
    let path = customers_file(&dir, "{\"name\": \"John\"}\n");
    cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stderr("Failed to parse: \"{\"name\": \"John\"}\"\n");
}

#[test]
fn lat_or_lon_not_a_number() {
    for line in [
        r#"{"user_id": 42, "name": "John", "latitude": "fail"}"#,
        r#"{"user_id": 42, "name": "John", "latitude": "0", "longitude": "fail"}"#,
    ] {
        let dir = TempDir::new().unwrap();
        let path = customers_file(&dir, &format!("{}\n", line));
        cmd()
            .arg(&path)
            .assert()
            .code(1)
            .stdout("")
            .stderr(diff(format!("Failed to parse: \"{}\"\n", line)));
    }
}

#[test]
fn bad_line_after_matches_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let path = customers_file(
        &dir,
        concat!(
            r#"{"latitude": "0", "user_id": 7, "name": "John", "longitude": "0"}"#,
            "\n",
            "oops\n",
        ),
    );
    cmd()
        .args(["-c", "0", "0"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout("")
        .stderr("Failed to parse: \"oops\"\n");
}

#[test]
fn missing_file_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    cmd()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .code(2)
        .stderr(contains("Could not open file"));
}

#[test]
fn malformed_options_are_usage_errors() {
    cmd().args(["-d", "far", "-"]).assert().code(2);
    cmd().args(["-c", "1", "-"]).assert().code(2);
}

#[test]
fn last_center_wins_when_repeated() {
    cmd()
        .args(["-c", "10", "10", "-c", "0", "0", "-"])
        .write_stdin(r#"{"user_id": 7, "name": "John", "latitude": 0, "longitude": 0}"#)
        .assert()
        .success()
        .stdout("John (7)\n")
        .stderr("");
}
