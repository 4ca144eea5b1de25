//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibdev() -> Command {
    let mut cmd = Command::cargo_bin("fibdev").expect("binary not found");
    cmd.env_remove("FIBDEV_OFFSET").env_remove("FIBDEV_ENGINE");
    cmd
}

#[test]
fn help_flag() {
    fibdev()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibdev()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdev"));
}

#[test]
fn read_f0() {
    fibdev()
        .args(["-k", "0", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn read_f10() {
    fibdev()
        .args(["-k", "10"])
        .assert()
        .success()
        .stdout("F(10) = 55\n");
}

#[test]
fn negative_offset_clamps_to_zero() {
    fibdev()
        .args(["-k", "-10", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn huge_offset_clamps_to_max() {
    fibdev()
        .args(["-k", "10000"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("F(500) = 1394"));
}

#[test]
fn end_relative_offset() {
    fibdev()
        .args(["-k", "100", "--whence", "end"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("F(400) = 1760236806450139664"));
}

#[test]
fn offset_from_env() {
    fibdev()
        .env("FIBDEV_OFFSET", "20")
        .arg("-q")
        .assert()
        .success()
        .stdout("6765\n");
}

#[test]
fn fast_engine() {
    fibdev()
        .args(["-k", "92", "--engine", "fast", "-q"])
        .assert()
        .success()
        .stdout("7540113804746346429\n");
}

#[test]
fn fast_engine_wraps() {
    fibdev()
        .args(["-k", "93", "--engine", "fast", "-q"])
        .assert()
        .success()
        .stdout("-6246583658587674878\n");
}

#[test]
fn unknown_engine_fails() {
    fibdev()
        .args(["--engine", "matrix"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown engine"));
}

#[test]
fn sweep_to_stdout() {
    fibdev()
        .args(["--sweep", "--max", "3"])
        .assert()
        .success()
        .stdout(
            "Reading from /dev/fibonacci at offset 0, returned the sequence 0.\n\
             Reading from /dev/fibonacci at offset 1, returned the sequence 1.\n\
             Reading from /dev/fibonacci at offset 2, returned the sequence 1.\n\
             Reading from /dev/fibonacci at offset 3, returned the sequence 2.\n",
        );
}

#[test]
fn sweep_then_verify() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fibdev()
        .args(["--sweep", "-o"])
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 501);

    fibdev()
        .arg("--verify")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified 501 values (max index 500)"));
}

#[test]
fn verify_detects_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::write(
        &out,
        "Reading from /dev/fibonacci at offset 10, returned the sequence 56.\n",
    )
    .unwrap();

    fibdev()
        .arg("--verify")
        .arg(&out)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("f(10) fail"));
}

#[test]
fn verify_rejects_offset_past_max() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::write(
        &out,
        "Reading from /dev/fibonacci at offset 18446744073709551615, returned the sequence 1.\n",
    )
    .unwrap();

    fibdev()
        .arg("--verify")
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of range (max 500)"));
}

#[test]
fn verify_fast_sweep_fails_past_i64() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fibdev()
        .args(["--sweep", "--max", "100", "--engine", "fast", "-o"])
        .arg(&out)
        .assert()
        .success();

    fibdev()
        .arg("--verify")
        .arg(&out)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("f(93) fail"));
}

#[test]
fn completion_bash() {
    fibdev()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdev"));
}
