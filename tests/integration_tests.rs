//! Integration tests for the hexstr CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A hexstr command whose preference file lives under a throwaway HOME.
fn hexstr(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hexstr").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

fn prefs_path(home: &TempDir) -> std::path::PathBuf {
    home.path().join(".config/hexstr/ignored")
}

#[test]
fn help_goes_to_stderr_and_lists_ignored_extensions() {
    let home = TempDir::new().unwrap();
    hexstr(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Ignored file types:"))
        .stderr(predicate::str::contains("pxm"));

    // Showing help must not create the preference file
    assert!(!prefs_path(&home).exists());
}

#[test]
fn version_flag_reports_the_package() {
    let home = TempDir::new().unwrap();
    hexstr(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hexstr"));
}

#[test]
fn unknown_option_is_a_fatal_usage_error() {
    let home = TempDir::new().unwrap();
    hexstr(&home)
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn add_without_a_value_is_a_fatal_usage_error() {
    let home = TempDir::new().unwrap();
    hexstr(&home).arg("-a").assert().failure();
}

#[test]
fn add_followed_by_an_option_is_a_fatal_usage_error() {
    let home = TempDir::new().unwrap();
    hexstr(&home).args(["-a", "-v"]).assert().failure();
}

#[test]
fn encodes_a_named_file() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("data.bin"), [0x01, 0xAB, 0xFF]).unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .arg("data.bin")
        .assert()
        .success()
        .stdout("\\x01\\xAB\\xFF\n");
}

#[test]
fn named_files_bypass_the_ignore_list() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    // txt is on the default ignore list, but the file is named explicitly
    fs::write(work.path().join("notes.txt"), [0x41]).unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .arg("notes.txt")
        .assert()
        .success()
        .stdout("\\x41\n");
}

#[test]
fn encodes_named_files_in_order() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("one.bin"), [0x01]).unwrap();
    fs::write(work.path().join("two.bin"), [0x02]).unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .args(["one.bin", "two.bin"])
        .assert()
        .success()
        .stdout("\\x01\n\\x02\n");
}

#[test]
fn empty_file_is_skipped_with_a_notice() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("empty.bin"), []).unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .arg("empty.bin")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Skipping"))
        .stderr(predicate::str::contains("no bytes"));
}

#[test]
fn missing_file_is_skipped_with_a_notice() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .arg("nope.bin")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn a_skip_does_not_stop_later_files() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("good.bin"), [0xFF]).unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .args(["nope.bin", "good.bin"])
        .assert()
        .success()
        .stdout("\\xFF\n")
        .stderr(predicate::str::contains("Skipping"));
}

#[test]
fn scan_honors_ignore_rules() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("keep.bin"), [0x00]).unwrap();
    fs::write(work.path().join("notes.txt"), "skipped by extension").unwrap();
    fs::write(work.path().join(".hidden"), "skipped as hidden").unwrap();
    fs::write(work.path().join("README"), "skipped, no extension").unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .assert()
        .success()
        .stdout("\\x00\n")
        .stderr(predicate::str::contains("Processing 1 file found in"));
}

#[test]
fn scan_with_no_suitable_files_reports_and_exits_zero() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("notes.txt"), "ignored").unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No suitable files found in"));
}

#[test]
fn first_run_creates_the_preference_file_with_defaults() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    hexstr(&home).current_dir(work.path()).assert().success();

    let written = fs::read_to_string(prefs_path(&home)).unwrap();
    assert_eq!(written, "pxm\npy\ntxt\ntext\nhtml\nmd\nmarkdown\n");
}

#[test]
fn added_extensions_persist_across_runs() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .args(["-a", "rtf,pdf", "-a", "jpeg"])
        .assert()
        .success();

    let written = fs::read_to_string(prefs_path(&home)).unwrap();
    for ext in ["rtf", "pdf", "jpeg", "py"] {
        assert!(written.lines().any(|line| line == ext), "missing {ext}");
    }
}

#[test]
fn removed_extensions_persist_across_runs() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .args(["-r", "txt"])
        .assert()
        .success();

    let written = fs::read_to_string(prefs_path(&home)).unwrap();
    assert!(!written.lines().any(|line| line == "txt"));
    assert!(written.lines().any(|line| line == "py"));
}

#[test]
fn removed_extension_is_scanned_again() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("notes.txt"), [0x42]).unwrap();

    // Default list skips txt
    hexstr(&home)
        .current_dir(work.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // Dropping txt from the list makes the same scan pick the file up
    hexstr(&home)
        .current_dir(work.path())
        .args(["-r", "txt"])
        .assert()
        .success()
        .stdout("\\x42\n");
}

#[test]
fn verbose_reports_the_change_count() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .args(["-v", "-a", "rtf,pdf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("2 file extensions added: rtf, pdf"));
}

#[test]
fn adding_a_present_extension_reports_no_change() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    hexstr(&home)
        .current_dir(work.path())
        .args(["-v", "-a", "py"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No file extensions added"));
}
