//! End-to-end tests of the `ironsift` binary.

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::process::{Command, Output};

fn ironsift(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_ironsift"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

#[test]
fn full_statistics_for_mixed_input() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let input = tmp.path().join("in.txt");
    fs::write(&input, "123\n45.67\nhello\n3.1415\n")?;
    let out = tmp.path().join("out");

    let output = ironsift(&[
        "-f",
        "-o",
        out.to_str().unwrap(),
        "-p",
        "r_",
        input.to_str().unwrap(),
    ])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "Integer Statistics:\n  Count: 1\n  Min: 123\n  Max: 123\n  Sum: 123\n  Avg: 123\n\
         Float Statistics:\n  Count: 2\n  Min: 3.1415\n  Max: 45.67\n  Sum: 48.8115\n  Avg: 24.4057500000\n\
         String Statistics:\n  Count: 1\n  Min Length: 5\n  Max Length: 5\n"
    );
    assert_eq!(fs::read_to_string(out.join("r_floats.txt"))?, "45.67\n3.1415\n");
    Ok(())
}

#[test]
fn short_statistics_by_default() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let input = tmp.path().join("in.txt");
    fs::write(&input, "only words\n")?;

    let output = ironsift(&["-o", tmp.path().to_str().unwrap(), input.to_str().unwrap()])?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Integer Statistics:\n  Count: 0\nFloat Statistics:\n  Count: 0\nString Statistics:\n  Count: 1\n"
    );
    assert!(!tmp.path().join("integers.txt").exists());
    Ok(())
}

#[test]
fn append_flag_accumulates_across_runs() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().to_str().unwrap().to_string();
    let first = tmp.path().join("a.txt");
    let second = tmp.path().join("b.txt");
    fs::write(&first, "100\n")?;
    fs::write(&second, "200\n")?;

    assert!(ironsift(&["-o", &dir, first.to_str().unwrap()])?.status.success());
    assert!(ironsift(&["-a", "-o", &dir, second.to_str().unwrap()])?.status.success());
    assert_eq!(fs::read_to_string(tmp.path().join("integers.txt"))?, "100\n200\n");
    Ok(())
}

#[test]
fn missing_input_is_reported_but_not_fatal() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let output = ironsift(&["-o", tmp.path().to_str().unwrap(), "does-not-exist.txt"])?;
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("File not found: does-not-exist.txt"), "{stderr}");
    Ok(())
}

#[test]
fn unusable_output_directory_is_fatal() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let blocker = tmp.path().join("file");
    fs::write(&blocker, "")?;
    let input = tmp.path().join("in.txt");
    fs::write(&input, "1\n")?;

    let output = ironsift(&["-o", blocker.to_str().unwrap(), input.to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.starts_with("Fatal error:"));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn no_input_files_is_a_usage_error() -> Result<()> {
    let output = ironsift(&["-f"])?;
    assert!(!output.status.success());
    Ok(())
}
