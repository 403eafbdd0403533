use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "voter-synth-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_writes_json_report() {
    let exe = env!("CARGO_BIN_EXE_voter-synth-cli");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args(["--campaign", "bill-101", "--count", "50", "--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(report["campaign_id"], "bill-101");
    assert_eq!(report["total_participants"], 50);
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_is_reproducible_for_a_seed() {
    let exe = env!("CARGO_BIN_EXE_voter-synth-cli");
    let run = || {
        Command::new(exe)
            .args([
                "--campaign", "parks", "--count", "30", "--seed", "1337", "--report", "json",
            ])
            .output()
            .expect("run cli")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cli_rejects_negative_counts() {
    let exe = env!("CARGO_BIN_EXE_voter-synth-cli");
    let output = Command::new(exe)
        .args(["--campaign", "bill-101", "--count", "-4"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative"), "stderr: {stderr}");
}

#[test]
fn cli_reads_participant_file_as_markdown() {
    let exe = env!("CARGO_BIN_EXE_voter-synth-cli");
    let input = temp_path("participants");
    std::fs::write(&input, "# roster\nuser-1,support\nuser-2,oppose\n").expect("write input");
    let output = Command::new(exe)
        .args(["--campaign", "transit", "--report", "markdown", "--participants"])
        .arg(&input)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Campaign Demographics: transit"));
    assert!(stdout.contains("- **Total participants**: 2"));
    let _ = std::fs::remove_file(input);
}
