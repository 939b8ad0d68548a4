use std::process::Command;

#[test]
fn test_help_lists_flags() {
    let bin = env!("CARGO_BIN_EXE_sitepush");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--color", "--no-animation", "--verbose"] {
        assert!(stdout.contains(flag), "help should list {flag}; got:\n{stdout}");
    }
    assert!(
        stdout.contains("Files under .werks/ and bin/ are never copied."),
        "help should explain the excluded directories; got:\n{}",
        stdout
    );
}

#[test]
fn test_dry_run_is_not_a_flag() {
    let bin = env!("CARGO_BIN_EXE_sitepush");

    let output = Command::new(bin).arg("--dry-run").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}
