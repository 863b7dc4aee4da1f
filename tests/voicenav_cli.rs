//! Integration tests that lock voicenav CLI flag and output behavior.

use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn voicenav_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_voicenav").expect("voicenav test binary not built")
}

#[test]
fn help_lists_the_shell_flags() {
    let output = Command::new(voicenav_bin())
        .arg("--help")
        .output()
        .expect("run voicenav --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("voicenav"));
    assert!(combined.contains("--lang"));
    assert!(combined.contains("--json"));
    assert!(combined.contains("--once"));
    assert!(combined.contains("--speak"));
}

#[test]
fn once_mode_routes_a_navigation_phrase() {
    let output = Command::new(voicenav_bin())
        .args(["--once", "go home"])
        .output()
        .expect("run voicenav --once");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("-> /"));
    assert!(combined.contains("Navigating home"));
}

#[test]
fn once_mode_json_emits_a_parseable_record() {
    let output = Command::new(voicenav_bin())
        .args(["--json", "--once", "show me furniture requests"])
        .output()
        .expect("run voicenav --json --once");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next().expect("one JSON line");
    let record: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
    assert_eq!(record["kind"], "navigate");
    assert_eq!(record["href"], "/feed?tab=requests&category=furniture");
}

#[test]
fn once_mode_unrecognized_phrase_suggests_help() {
    let output = Command::new(voicenav_bin())
        .args(["--once", "make me a sandwich"])
        .output()
        .expect("run voicenav --once");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("help"));
    assert!(!combined.contains("-> "));
}
