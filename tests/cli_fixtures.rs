use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fixture_cli"))
}

fn stdout_json(args: &[&str]) -> Value {
    let output = cli()
        .args(args)
        .output()
        .expect("failed to run fixture_cli");
    assert!(
        output.status.success(),
        "CLI exited with {:?}",
        output.status.code()
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    serde_json::from_str(stdout.trim()).expect("JSON payload on stdout")
}

#[test]
fn users_command_prints_fixture_users() {
    let json = stdout_json(&["users"]);
    let users = json.as_array().expect("users array");
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["name"], "Leanne Graham");
    assert_eq!(users[1]["username"], "Antonette");
    assert_eq!(users[2]["company"]["name"], "Romaguera-Jacobson");
}

#[test]
fn claim_command_prints_claim_document() {
    let json = stdout_json(&["claim", "--pretty"]);
    let losses = &json["response_body"]["Losses 2022"]["losses"];
    assert_eq!(losses.as_array().map(Vec::len), Some(2));
    assert_eq!(losses[0]["claimant_name"], "Jane Doe");
    assert_eq!(losses[0]["total_paid"], "$200,000");
}

#[test]
fn dump_command_writes_snapshot_file() {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "fixture_cli_dump_{}.json",
        std::process::id()
    ));

    let output = cli()
        .args(["dump", "--output"])
        .arg(&path)
        .output()
        .expect("failed to run dump");
    assert!(output.status.success());

    let contents = std::fs::read_to_string(&path).expect("snapshot file written");
    std::fs::remove_file(&path).ok();
    let json: Value = serde_json::from_str(&contents).expect("snapshot JSON");
    assert_eq!(json["users"][0]["id"], 1);
    assert_eq!(
        json["responseBody"]["response_body"]["Insured"]["policy_no"],
        "1234567890"
    );
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let json = stdout_json(&["--config", "/nonexistent/store_config.json", "users"]);
    assert_eq!(json.as_array().map(Vec::len), Some(3));
}

#[test]
fn missing_config_warns_on_stderr() {
    let output = cli()
        .args(["--config", "/nonexistent/store_config.json", "users"])
        .output()
        .expect("failed to run users");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(
        stderr.contains("Using defaults"),
        "expected fallback warning in stderr, got {stderr}"
    );
    assert!(stderr.contains("/nonexistent/store_config.json"));
}

#[test]
fn invalid_config_warns_on_stderr() {
    let path = std::env::temp_dir().join(format!(
        "fixture_cli_bad_config_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, "{ not json").expect("write config");

    let output = cli()
        .arg("--config")
        .arg(&path)
        .arg("claim")
        .output()
        .expect("failed to run claim");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(
        stderr.contains("Failed to parse JSON") && stderr.contains("Using defaults"),
        "expected parse fallback warning in stderr, got {stderr}"
    );
}

#[test]
fn version_flag_prints_crate_version() {
    let output = cli().arg("--version").output().expect("failed to run --version");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "expected version in stdout, got {stdout}"
    );
}

#[test]
fn unwritable_output_fails() {
    let output = cli()
        .args(["dump", "--output", "/nonexistent-dir/snapshot.json"])
        .output()
        .expect("failed to run dump");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(
        stderr.contains("writing snapshot"),
        "expected context in stderr, got {stderr}"
    );
}
