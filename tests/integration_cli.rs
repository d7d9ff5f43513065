use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("throwsim-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("throwsim-cli");
    }

    path
}

#[test]
fn test_cli_estimate_basic() {
    let output = Command::new(get_cli_binary())
        .args(["estimate", "--distance", "300", "--angle", "35"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("RELEASE SPEED ESTIMATE") || stdout.contains("mph"),
        "Should contain estimate output"
    );
}

#[test]
fn test_cli_estimate_json_output() {
    let output = Command::new(get_cli_binary())
        .args([
            "estimate",
            "--distance",
            "60",
            "--angle",
            "45",
            "--output",
            "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"velocity_mph\": 32"), "Pinned 60ft/45° estimate");
}

#[test]
fn test_cli_estimate_no_solution() {
    let output = Command::new(get_cli_binary())
        .args(["estimate", "--distance", "60", "--angle", "90"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Sentinel output is not a failure");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No solution"), "Should report no solution");
}

#[test]
fn test_cli_trajectory_csv_output() {
    let output = Command::new(get_cli_binary())
        .args([
            "trajectory",
            "--distance",
            "150",
            "--angle",
            "40",
            "--output",
            "csv",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "time_s,x_ft,y_ft");
    assert!(lines[1].starts_with("0.000,0.00,6.00"), "Arc starts at release point");
    assert_eq!(lines.len(), 52, "Header plus 51 samples");
}

#[test]
fn test_cli_spread_command() {
    let output = Command::new(get_cli_binary())
        .args([
            "spread",
            "--distance",
            "300",
            "--angle",
            "40",
            "--num-sims",
            "50",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("VELOCITY SPREAD") || stdout.contains("Mean"),
        "Should contain spread statistics"
    );
}

#[test]
fn test_cli_info_command() {
    let output = Command::new(get_cli_binary())
        .args(["info"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("THROW SIMULATOR"));
}
