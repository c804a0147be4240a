// Integration tests for the binary using assert_cmd.
// These tests shell out the compiled binary and validate observable behavior.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BIN: &str = "langton_ant";

#[test]
fn prints_report_and_summary() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    writeln!(f, "3 3 1\n1 1 0\nWWW\nWWW\nWWW")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.env("NO_COLOR", "1")
        .args(["--map", f.path().to_str().unwrap(), "--steps", "1"]);

    cmd.assert()
        .success()
        .stdout(contains("NUM ANTS: 1"))
        .stdout(contains("ANT[0] ROW: 0 COL: 1 DIRECTION: 1"))
        .stdout(contains("==="))
        .stdout(contains("Simulation Latency"))
        .stdout(contains("board=3x3"))
        .stdout(contains("black=1"));

    Ok(())
}

#[test]
fn snapshot_after_growing_upwards() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    writeln!(f, "1 1 1\n0 0 0\nW")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-m", f.path().to_str().unwrap(), "--snapshot"]);

    cmd.assert()
        .success()
        .stdout(predicate::eq("2 1 1\n0 0 1\nW\nB\n"));

    Ok(())
}

#[test]
fn generated_world_runs_with_seed() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.env("NO_COLOR", "1").args([
        "--rows", "4",
        "--cols", "4",
        "--ants", "3",
        "--seed", "42",
        "--steps", "500",
        "--quiet",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("steps=500"))
        .stdout(contains("ants=3"))
        .stdout(contains("NUM ANTS").not());

    Ok(())
}

#[test]
fn bad_world_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    writeln!(f, "2 2 1\n9 9 0\nWW\nWW")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["--map", f.path().to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(contains("OutOfBounds"));

    Ok(())
}

#[test]
fn prints_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--version");

    cmd.assert().success().stdout(contains("ver. 1.0"));

    Ok(())
}
