//! Integration tests for the PassOP CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive prompts are sidestepped by passing every field on the
//! command line (or piping the password on stdin), so each invocation
//! runs non-interactively.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passop binary.
fn passop() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passop").expect("binary should exist")
}

/// Helper: run `add` in `dir` and return the minted record id, parsed
/// from the success message ("... (id: <uuid>, N total)").
fn add_record(dir: &TempDir, site: &str, username: &str, password: &str) -> String {
    let output = passop()
        .args(["add", site, username, "--password", password])
        .current_dir(dir.path())
        .output()
        .expect("run add");
    assert!(output.status.success(), "add failed: {output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find("(id: ").expect("success message carries the id") + 5;
    let end = stdout[start..].find(',').expect("id is comma-terminated") + start;
    stdout[start..end].to_string()
}

#[test]
fn help_flag_shows_usage() {
    passop()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your own password manager"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("get"));
}

#[test]
fn version_flag_shows_version() {
    passop()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passop"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    passop().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn list_on_fresh_directory_is_empty() {
    let tmp = TempDir::new().unwrap();

    passop()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords saved yet"));
}

#[test]
fn add_then_list_shows_masked_password() {
    let tmp = TempDir::new().unwrap();
    add_record(&tmp, "example.com", "alice1", "secret1");

    passop()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com"))
        .stdout(predicate::str::contains("alice1"))
        .stdout(predicate::str::contains("*******"))
        .stdout(predicate::str::contains("secret1").not());
}

#[test]
fn list_show_reveals_plaintext() {
    let tmp = TempDir::new().unwrap();
    add_record(&tmp, "example.com", "alice1", "secret1");

    passop()
        .args(["list", "--show"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("secret1"));
}

#[test]
fn add_with_short_field_is_rejected() {
    let tmp = TempDir::new().unwrap();

    passop()
        .args(["add", "ab", "alice1", "--password", "secret1"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"))
        .stderr(predicate::str::contains("site"));

    // Nothing was saved.
    passop()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords saved yet"));
}

#[test]
fn add_reads_password_from_stdin() {
    let tmp = TempDir::new().unwrap();

    passop()
        .args(["add", "example.com", "alice1"])
        .current_dir(tmp.path())
        .write_stdin("piped-secret\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password saved for 'example.com'"));

    passop()
        .args(["get", add_first_id(&tmp).as_str()])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("piped-secret"));
}

/// Helper: fetch the id of the first saved record by reading the slot
/// file directly.
fn add_first_id(dir: &TempDir) -> String {
    let raw = std::fs::read_to_string(dir.path().join(".passop/passwords.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    parsed[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn get_prints_requested_field() {
    let tmp = TempDir::new().unwrap();
    let id = add_record(&tmp, "example.com", "alice1", "secret1");

    passop()
        .args(["get", &id, "--field", "username"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("alice1\n"));

    passop()
        .args(["get", &id])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("secret1\n"));
}

#[test]
fn get_unknown_id_fails() {
    let tmp = TempDir::new().unwrap();

    passop()
        .args(["get", "no-such-id"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-id"));
}

#[test]
fn edit_replaces_fields_in_place() {
    let tmp = TempDir::new().unwrap();
    let id = add_record(&tmp, "example.com", "alice1", "secret1");

    passop()
        .args([
            "edit",
            &id,
            "--site",
            "example.org",
            "--username",
            "alice-renamed",
            "--password",
            "rotated1",
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    passop()
        .args(["get", &id, "--field", "site"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("example.org\n"));
}

#[test]
fn edit_with_short_field_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let id = add_record(&tmp, "example.com", "alice1", "secret1");

    passop()
        .args([
            "edit", &id, "--site", "ab", "--username", "alice1", "--password", "secret1",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));

    // Original value survives.
    passop()
        .args(["get", &id, "--field", "site"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("example.com\n"));
}

#[test]
fn delete_force_removes_the_record() {
    let tmp = TempDir::new().unwrap();
    let id = add_record(&tmp, "example.com", "alice1", "secret1");

    passop()
        .args(["delete", &id, "--force"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Password deleted"));

    passop()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords saved yet"));
}

#[test]
fn delete_force_on_absent_id_is_a_noop() {
    let tmp = TempDir::new().unwrap();
    add_record(&tmp, "example.com", "alice1", "secret1");

    passop()
        .args(["delete", "no-such-id", "--force"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to delete"));

    passop()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com"));
}

#[test]
fn storage_dir_flag_overrides_default() {
    let tmp = TempDir::new().unwrap();

    passop()
        .args([
            "add",
            "example.com",
            "alice1",
            "--password",
            "secret1",
            "--storage-dir",
            "vault",
        ])
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("vault/passwords.json").exists());
    assert!(!tmp.path().join(".passop").exists());
}

#[test]
fn config_file_sets_storage_dir() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".passop.toml"), "storage_dir = \"creds\"\n").unwrap();

    add_record(&tmp, "example.com", "alice1", "secret1");

    assert!(tmp.path().join("creds/passwords.json").exists());
}

#[test]
fn completions_bash_generates_script() {
    passop()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passop"));
}

#[test]
fn completions_unknown_shell_fails() {
    passop()
        .args(["completions", "csh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}
