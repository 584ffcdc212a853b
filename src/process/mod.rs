use std::fmt;

mod launcher;

pub use launcher::Launcher;

#[derive(Debug)]
pub enum ProcessError {
    Spawn(std::io::Error),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "Cannot create process: {}", e),
            ProcessError::Wait(e) => write!(f, "Wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
