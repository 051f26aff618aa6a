use std::process::{Command, Output};

fn propedit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_propedit"))
        .args(args)
        .output()
        .expect("run propedit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn validate_reports_verdict_and_exit_status() {
    let output = propedit(&["validate", "--mode", "integer", "--no-negative", "-5"]);
    assert_eq!(stdout(&output), "invalid");
    assert!(!output.status.success());

    let output = propedit(&["validate", "--mode", "Integer", "-5"]);
    assert_eq!(stdout(&output), "valid");
    assert!(output.status.success());

    let output = propedit(&["validate", "--ratio", "9:5"]);
    assert_eq!(stdout(&output), "valid");
}

#[test]
fn commit_clamps_and_reverts() {
    let output = propedit(&["commit", "--min", "0", "--max", "10", "15"]);
    assert_eq!(stdout(&output), "10.0");

    let output = propedit(&["commit", "--min", "0", "--max", "10", "--previous", "5.0", "--", "--"]);
    assert_eq!(stdout(&output), "5.0");
}

#[test]
fn commit_prints_json_outcome() {
    let output = propedit(&["commit", "--json", "--previous", "2.0", "abc"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["display"], "2.0");
    assert_eq!(value["reverted"], true);
}

#[test]
fn step_wraps_when_asked() {
    let output = propedit(&[
        "step", "up", "355", "--mode", "integer", "--min", "0", "--max", "359", "--increment",
        "10", "--wrap",
    ]);
    assert_eq!(stdout(&output), "0.0");

    let output = propedit(&["step", "down", "3", "--min", "0", "--max", "10", "--increment", "5"]);
    assert_eq!(stdout(&output), "0.0");
}

#[test]
fn step_rejects_non_finite_current_value() {
    for current in ["nan", "inf"] {
        let output = propedit(&["step", "up", current]);
        assert!(!output.status.success(), "{current}");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("[propedit][ERROR]"), "{stderr}");
    }
}

#[test]
fn commit_uses_profile_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fields.toml");
    std::fs::write(
        &path,
        "[fields.opacity]\nallow_negative = false\nmax_fraction_digits = 2\nbounds = { minimum = 0.0, maximum = 1.0 }\n",
    )
    .expect("write profile");
    let profile = path.to_str().expect("utf-8 path");

    let output = propedit(&["commit", "--profile", profile, "--field", "opacity", "0.456"]);
    assert_eq!(stdout(&output), "0.46");

    let output = propedit(&["commit", "--profile", profile, "--field", "missing", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[propedit][ERROR]"));
}

#[test]
fn convert_subcommands() {
    assert_eq!(stdout(&propedit(&["convert", "human", "RGBValue"])), "RGB Value");
    assert_eq!(stdout(&propedit(&["convert", "version", "3035"])), "3035.0");
    assert_eq!(stdout(&propedit(&["convert", "point", "1.50, 2"])), "1.5, 2");
    assert_eq!(stdout(&propedit(&["convert", "storyboard-bool", "False"])), "NO");
    assert!(!propedit(&["convert", "ratio", "1:2:3"]).status.success());
}
