use std::process::Command;

use assert_cmd::prelude::*;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;

fn main_binary() -> Command {
    let mut command = Command::cargo_bin("patcmp").unwrap();
    command.env_remove("PATCMP_LOG").env("NO_COLOR", "1");
    command
}

fn path_with(temp: &TempDir, name: &str, contents: &str) -> String {
    let f = temp.child(name);
    f.write_str(contents).unwrap();
    f.path().to_str().unwrap().to_string()
}

fn stdout_of(left: &str, right: &str, expected_status: i32) -> String {
    let temp = TempDir::new().unwrap();
    let a1 = path_with(&temp, "a1.txt", left);
    let a2 = path_with(&temp, "a2.txt", right);
    let output = main_binary().args([&a1, &a2]).output().unwrap();
    assert_eq!(output.status.code(), Some(expected_status));
    String::from_utf8(output.stdout).unwrap().replace(&a1, "a1.txt").replace(&a2, "a2.txt")
}

#[test]
fn requires_two_files() {
    main_binary().assert().failure().code(2);
    main_binary().arg("only-one.txt").assert().failure().code(2);
}

#[test]
fn matching_files_succeed() {
    const RECORDS: &str = "texts/t1.txt virus worm\ntexts/t2.txt\ntexts/t3.txt trojan\n";
    const SHUFFLED: &str = "texts/t3.txt trojan\n\ntexts/t1.txt worm virus worm\ntexts/t2.txt";
    assert_eq!(stdout_of(RECORDS, SHUFFLED, 0), "All lines match between a1.txt and a2.txt.\n");
}

#[test]
fn empty_files_match() {
    assert_eq!(stdout_of("", "", 0), "All lines match between a1.txt and a2.txt.\n");
}

#[test]
fn every_kind_of_discrepancy_is_reported_in_order() {
    const LEFT: &str = "p/q.txt alpha beta\nonly/left.txt x\nfoo.txt x y\n";
    const RIGHT: &str = "foo.txt x z\np/q.txt beta alpha\nr/s.txt gamma\n";
    const EXPECTED: &str = "\
only/left.txt found in a1.txt but not in a2.txt
Patterns for foo.txt do not match:
a1.txt: {x, y}
a2.txt: {x, z}
r/s.txt found in a2.txt but not in a1.txt
";
    assert_eq!(stdout_of(LEFT, RIGHT, 1), EXPECTED);
}

#[test]
fn a_key_only_in_the_second_file_fails() {
    let report = stdout_of("p/q.txt alpha beta\n", "p/q.txt beta alpha\nr/s.txt gamma\n", 1);
    assert_eq!(report, "r/s.txt found in a2.txt but not in a1.txt\n");
}

#[test]
fn the_last_record_for_a_key_wins() {
    let report = stdout_of("k 1 2\nk 3\n", "k 3\n", 0);
    assert_eq!(report, "All lines match between a1.txt and a2.txt.\n");
}

#[test]
fn fail_on_missing_file() {
    let temp = TempDir::new().unwrap();
    let present = path_with(&temp, "a1.txt", "k 1\n");
    main_binary()
        .args([present.as_str(), "no-such-file.txt"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Can't read file: no-such-file.txt"));
    main_binary()
        .args(["no-such-file.txt", present.as_str()])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no-such-file.txt"));
}

#[test]
fn quiet_reports_only_through_the_exit_status() {
    let temp = TempDir::new().unwrap();
    let a1 = path_with(&temp, "a1.txt", "k 1\n");
    let a2 = path_with(&temp, "a2.txt", "k 2\n");
    let silent = predicate::str::is_empty;
    main_binary().args(["-q", a1.as_str(), a2.as_str()]).assert().code(1).stdout(silent());
    main_binary().args(["--quiet", a1.as_str(), a1.as_str()]).assert().success().stdout(silent());
}

#[test]
fn utf16_and_bom_files_compare_as_their_text() {
    const RECORDS: &str = "docs/a.txt alpha beta\n";
    let mut utf16 = b"\xff\xfe".to_vec();
    for unit in RECORDS.encode_utf16() {
        utf16.extend_from_slice(&unit.to_le_bytes());
    }
    let temp = TempDir::new().unwrap();
    let plain = path_with(&temp, "plain.txt", RECORDS);
    let bom = path_with(&temp, "bom.txt", &("\u{FEFF}".to_owned() + RECORDS));
    let wide = temp.child("wide.txt");
    wide.write_binary(&utf16).unwrap();
    let wide = wide.path().to_str().unwrap();
    main_binary().args([&plain, &bom]).assert().success();
    main_binary().args([wide, plain.as_str()]).assert().success();
}

#[test]
fn color_always_styles_the_report() {
    let temp = TempDir::new().unwrap();
    let a1 = path_with(&temp, "a1.txt", "k 1\n");
    main_binary()
        .env_remove("NO_COLOR")
        .args(["--color", "always", a1.as_str(), a1.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
    main_binary()
        .args(["--color", "never", a1.as_str(), a1.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn help_and_version_succeed() {
    main_binary()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: patcmp [OPTIONS] <LEFT> <RIGHT>"));
    main_binary()
        .arg("-V")
        .assert()
        .success()
        .stdout(format!("patcmp {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp = TempDir::new().unwrap();
    let a1 = path_with(&temp, "a1.txt", "k 1\n");
    main_binary()
        .env("PATCMP_LOG", "debug")
        .args([&a1, &a1])
        .assert()
        .success()
        .stdout("All lines match between ".to_owned() + &a1 + " and " + &a1 + ".\n")
        .stderr(predicate::str::contains("records"));
}

#[test]
fn the_discrepancy_count_is_logged_on_failure() {
    let temp = TempDir::new().unwrap();
    let a1 = path_with(&temp, "a1.txt", "k 1\nj 2\n");
    let a2 = path_with(&temp, "a2.txt", "k 2\n");
    main_binary()
        .env("PATCMP_LOG", "info")
        .args(["-q", a1.as_str(), a2.as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("2 discrepancies, exiting with status 1"));
}

#[test]
fn carriage_return_line_endings_match_newlines() {
    let report = stdout_of("a x\rb y\r", "b y\na x\n", 0);
    assert_eq!(report, "All lines match between a1.txt and a2.txt.\n");
}
