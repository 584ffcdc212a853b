use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::process::{Command, Stdio};

fn run_shell(input: &str) -> i32 {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minish"))
        .arg("--quiet")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start minish");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("failed to write input");

    let status = child.wait().expect("failed to wait for minish");
    status.code().expect("shell killed by signal")
}

#[test]
fn exit_request_sets_process_code() {
    assert_eq!(run_shell("exit 42\n"), 42);
}

#[test]
fn exit_without_argument_is_zero() {
    assert_eq!(run_shell("exit\n"), 0);
}

#[test]
fn empty_input_exits_zero() {
    assert_eq!(run_shell(""), 0);
    assert_eq!(run_shell("\n\n\n"), 0);
}

#[test]
fn missing_command_exits_127() {
    assert_eq!(run_shell("/bin/doesnotexist_minish\n"), 127);
}

#[test]
fn last_status_survives_end_of_input() {
    let dir = std::env::temp_dir().join("minish_cli_status");
    fs::create_dir_all(&dir).expect("mkdir");
    let script = dir.join("exits_two");
    fs::write(&script, "#!/bin/sh\nexit 2\n").expect("write script");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");

    let input = format!("{}\n", script.display());
    assert_eq!(run_shell(&input), 2);
}

#[test]
fn quiet_keeps_command_diagnostics() {
    // --quiet silences shell warnings, never the per-command
    // diagnostic lines
    let mut child = Command::new(env!("CARGO_BIN_EXE_minish"))
        .arg("--quiet")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start minish");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"/bin/doesnotexist_minish\n")
        .expect("write input");
    let output = child.wait_with_output().expect("wait");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn failure_does_not_stop_the_loop() {
    // The not-found line is recoverable; the exit request still lands
    assert_eq!(run_shell("/bin/doesnotexist_minish\nexit 3\n"), 3);
}

#[test]
fn blank_lines_keep_last_status() {
    assert_eq!(run_shell("/bin/false\n\n\n"), 1);
}

#[test]
fn builtin_status_is_final_status() {
    // setenv with bad arity fails with status 1, then input ends
    assert_eq!(run_shell("setenv ONLY_NAME\n"), 1);
}
