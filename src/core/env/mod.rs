mod vars;

pub use vars::Environment;

#[derive(Debug)]
pub enum EnvError {
    InvalidName,
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName => write!(f, "Empty variable name"),
        }
    }
}

impl std::error::Error for EnvError {}
