//! Integration tests that lock hubvoice CLI flag and output behavior.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn hubvoice_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_hubvoice").expect("hubvoice test binary not built")
}

fn combined_output(output: &Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn run_session(args: &[&str], script: &str) -> Output {
    let mut child = Command::new(hubvoice_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hubvoice");
    child
        .stdin
        .as_mut()
        .expect("piped stdin")
        .write_all(script.as_bytes())
        .expect("write session script");
    child.wait_with_output().expect("hubvoice session output")
}

#[test]
fn hubvoice_help_mentions_name_and_flags() {
    let output = Command::new(hubvoice_bin())
        .arg("--help")
        .output()
        .expect("run hubvoice --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("hubvoice"));
    assert!(combined.contains("--font-size"));
    assert!(combined.contains("--high-contrast"));
    assert!(combined.contains("--empty-schedule"));
    assert!(combined.contains("--output"));
    assert!(combined.contains("--lang"));
}

#[test]
fn voice_command_session_emits_json_events() {
    let output = run_session(
        &["--output", "json", "--empty-schedule"],
        "start\nsay open schedule now\nquit\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""event":"listening","active":true"#));
    assert!(stdout.contains(r#""event":"focus","target":"schedule""#));
}

#[test]
fn transcript_while_idle_is_discarded() {
    let output = run_session(
        &["--output", "json", "--empty-schedule"],
        "say toggle contrast\nquit\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains(r#""event":"settings""#));
}

#[test]
fn schedule_add_and_list_round_trip() {
    let output = run_session(
        &["--empty-schedule"],
        "add 09:00 Snack\nschedule\nquit\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Snack"));
    assert!(stdout.contains("Schedule:"));
}

#[test]
fn font_command_clamps_to_the_renderable_ceiling() {
    let output = run_session(&["--empty-schedule"], "font 99\nquit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("font 28"));
}

#[test]
fn unrecognized_voice_command_reports_the_transcript() {
    let output = run_session(
        &["--empty-schedule"],
        "start\nsay xyz not a command\nquit\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sorry, I didn't understand: \"xyz not a command\""));
}
