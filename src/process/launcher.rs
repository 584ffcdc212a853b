use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;
use crate::core::env::Environment;

/// Runs a resolved executable to completion and normalizes its wait status
/// into a [0,255] exit code. The child gets the session's environment
/// snapshot and the argument vector unchanged, with argv[0] being the name
/// the command was invoked under.
///
/// Two failure domains stay separate here: a failure to create the child at
/// all (EAGAIN/ENOMEM) is a recoverable `ProcessError::Spawn`, while an
/// exec-side failure is folded into the visible status the way a shell
/// child would report it: 126 when permission was denied, 1 otherwise.
#[derive(Clone, Default)]
pub struct Launcher;

impl Launcher {
    pub fn new() -> Self {
        Self
    }

    pub fn run(
        &self,
        path: &Path,
        argv: &[String],
        env: &Environment,
    ) -> Result<i32, ProcessError> {
        let mut command = Command::new(path);
        if let Some(name) = argv.first() {
            command.arg0(name);
        }
        command
            .args(argv.iter().skip(1))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => return exec_failure(e),
        };

        let status = child.wait().map_err(ProcessError::Wait)?;
        Ok(normalize_status(status))
    }
}

fn exec_failure(err: std::io::Error) -> Result<i32, ProcessError> {
    match err.raw_os_error() {
        Some(libc::EAGAIN) | Some(libc::ENOMEM) => Err(ProcessError::Spawn(err)),
        Some(libc::EACCES) => Ok(126),
        _ => Ok(1),
    }
}

fn normalize_status(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        // Terminated by a signal: conventional 128+signo encoding
        None => 128 + status.signal().unwrap_or(0),
    }
}
