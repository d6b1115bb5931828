use std::process::Command;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_outreach-composer"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_json_output_stays_parseable_when_copying_to_stream() {
    let output = run_cli(&[
        "--business-name",
        "Reform Fitness",
        "--copy",
        "--clipboard",
        "stdout",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["copied"], true);
    assert!(value["message"]
        .as_str()
        .unwrap()
        .starts_with("Hi there, quick question regarding Reform Fitness."));

    // The copied message lands on stderr instead.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Hi there, quick question regarding Reform Fitness."));
}

#[test]
fn test_text_output_prints_message_once() {
    let output = run_cli(&[
        "--business-name",
        "Reform Fitness",
        "--copy",
        "--clipboard",
        "stderr",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Hi there")).count(), 1);
    assert!(stdout.trim_end().ends_with("Message copied to clipboard."));
}

#[test]
fn test_invalid_reset_exits_with_error() {
    let output = run_cli(&["--copied-reset-ms", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
