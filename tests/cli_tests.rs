use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_bplus-writer");

fn run(storage: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .arg(storage)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute process")
}

/// Pulls `offset` and `csize` out of a `write` report line.
fn parse_write_report(stdout: &[u8]) -> (u64, u64) {
    let line = String::from_utf8_lossy(stdout);
    let field = |name: &str| -> u64 {
        line.split_whitespace()
            .find_map(|part| part.strip_prefix(name))
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| panic!("Missing `{}` in {:?}", name, line))
    };
    (field("offset="), field("csize="))
}

/// Value column of an `info` table row.
fn info_field<'a>(stdout: &'a str, label: &str) -> &'a str {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(label))
        .map(str::trim)
        .unwrap_or_else(|| panic!("Missing `{}` in {:?}", label, stdout))
}

fn temp_storage() -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("cli_records.bp");
    (dir, path)
}

#[test]
fn test_write_and_read() {
    let (_dir, storage) = temp_storage();

    let output = run(&storage, &["write", "hello"]);
    assert!(output.status.success(), "Write command failed: {:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "offset=0 size=5 csize=5"
    );

    let output = run(&storage, &["write", "world"]);
    assert!(output.status.success(), "Write command failed: {:?}", output);
    let (offset, csize) = parse_write_report(&output.stdout);
    assert_eq!((offset, csize), (1024, 5));

    let output = run(&storage, &["read", &offset.to_string(), &csize.to_string()]);
    assert!(output.status.success(), "Read command failed: {:?}", output);
    assert_eq!(output.stdout, b"world");
}

#[test]
fn test_write_without_value() {
    let (_dir, storage) = temp_storage();

    let output = Command::new(BIN)
        .arg(&storage)
        .arg("write")
        .env("FORCE_NO_TTY", "1") // Set env variable to override is_terminal()
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute process");

    assert!(
        !output.status.success(),
        "Expected failure on missing value"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No value provided"),
        "Unexpected error message: {:?}",
        stderr
    );
    assert!(!storage.exists(), "A rejected write should not create the file");
}

#[test]
fn test_large_write_from_stdin() {
    let (_dir, storage) = temp_storage();
    let large_value = "A".repeat(128 * 1024);

    let mut child = Command::new(BIN)
        .arg(&storage)
        .arg("write")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute process");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(large_value.as_bytes())
            .expect("Failed to write to stdin");
    }

    let output = child
        .wait_with_output()
        .expect("Failed to wait on child process");
    assert!(output.status.success(), "Write command failed: {:?}", output);

    let report = String::from_utf8_lossy(&output.stdout);
    assert!(report.contains("(compressed)"), "Unexpected report: {:?}", report);

    let (offset, csize) = parse_write_report(&output.stdout);
    assert_eq!(offset, 0);
    assert!(csize > 1024 && csize < large_value.len() as u64);

    let output = run(&storage, &["read", &offset.to_string(), &csize.to_string()]);
    assert!(output.status.success(), "Read command failed: {:?}", output);
    assert_eq!(output.stdout.len(), large_value.len());
    assert!(output.stdout.iter().all(|&b| b == b'A'));
}

#[test]
fn test_read_out_of_bounds() {
    let (_dir, storage) = temp_storage();
    assert!(run(&storage, &["write", "hello"]).status.success());

    let output = run(&storage, &["read", "0", "10"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("exceeds file size"),
        "Unexpected error output: {:?}",
        stderr
    );
}

#[test]
fn test_read_missing_file() {
    let (_dir, storage) = temp_storage();

    let output = run(&storage, &["read", "0", "1"]);
    assert!(!output.status.success());
    assert!(!storage.exists(), "Read must not create the file");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("file error"), "Unexpected error output: {:?}", stderr);
}

#[test]
fn test_find_hit_and_miss() {
    let (_dir, storage) = temp_storage();
    assert!(run(&storage, &["write", "needle-in-haystack"]).status.success());

    let output = run(&storage, &["find", "64", "haystack"]);
    assert!(output.status.success(), "Find command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("offset=0 size=64"),
        "Unexpected find output: {:?}",
        stdout
    );

    let output = run(&storage, &["find", "64", "thimble"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No 64-byte slot contains 'thimble'"),
        "Unexpected miss output: {:?}",
        stderr
    );
}

#[test]
fn test_find_rejects_zero_slot_size() {
    let (_dir, storage) = temp_storage();
    assert!(run(&storage, &["write", "x"]).status.success());

    let output = run(&storage, &["find", "0", "x"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("greater than zero"));
}

#[test]
fn test_pad_and_info() {
    let (_dir, storage) = temp_storage();
    assert!(run(&storage, &["write", "abc"]).status.success());

    let output = run(&storage, &["info"]);
    assert!(output.status.success(), "Info command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RECORD FILE INFO"));
    assert_eq!(info_field(&stdout, "ALIGNED TAIL:"), "no");

    let output = run(&storage, &["pad"]);
    assert!(output.status.success(), "Pad command failed: {:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Padded 1021 bytes; file size 1024"
    );

    let output = run(&storage, &["pad"]);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Padded 0 bytes; file size 1024"
    );

    let stdout = String::from_utf8_lossy(&run(&storage, &["info"]).stdout).to_string();
    assert_eq!(info_field(&stdout, "ALIGNED TAIL:"), "yes");
    assert_eq!(info_field(&stdout, "ALIGNED BLOCKS:"), "1");
}
