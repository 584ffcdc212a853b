use std::collections::HashMap;
use std::path::PathBuf;

use crate::core::env::Environment;
use crate::input::History;

/// Mutable state shared across one interpreter lifetime. The line, argument
/// vector and resolved path are per-iteration and cleared by `clear`; the
/// counter, status, environment, aliases and history persist.
pub struct Session {
    pub line: String,
    pub argv: Vec<String>,
    pub resolved: Option<PathBuf>,
    pub status: i32,
    pub command_count: u64,
    pub interactive: bool,
    pub env: Environment,
    pub aliases: HashMap<String, String>,
    pub history: History,
    pub pending_exit: Option<i32>,
    pub progname: String,
}

impl Session {
    pub fn new(progname: String, interactive: bool, history: History) -> Self {
        Self {
            line: String::new(),
            argv: Vec::new(),
            resolved: None,
            status: 0,
            command_count: 0,
            interactive,
            env: Environment::from_process(),
            aliases: HashMap::new(),
            history,
            pending_exit: None,
            progname,
        }
    }

    /// Per-iteration reset. Persistent fields are left untouched.
    pub fn clear(&mut self) {
        self.line.clear();
        self.argv.clear();
        self.resolved = None;
    }

    /// Stores the raw line and tokenizes it, expanding an alias on the
    /// first token (single pass, no recursive expansion).
    pub fn set_line(&mut self, line: &str) {
        self.line = line.to_string();
        self.argv = line.split_whitespace().map(str::to_owned).collect();

        if let Some(first) = self.argv.first() {
            if let Some(expansion) = self.aliases.get(first) {
                let mut expanded: Vec<String> =
                    expansion.split_whitespace().map(str::to_owned).collect();
                if !expanded.is_empty() {
                    expanded.extend(self.argv.drain(1..));
                    self.argv = expanded;
                }
            }
        }
    }

    pub fn is_blank(&self) -> bool {
        self.argv.is_empty()
    }

    /// Diagnostic line on stderr in the conventional
    /// `prog: count: token: message` form. Diagnostics always print;
    /// `--quiet` only silences ancillary shell warnings.
    pub fn report(&self, message: &str) {
        let token = self.argv.first().map(String::as_str).unwrap_or("");
        eprintln!(
            "{}: {}: {}: {}",
            self.progname, self.command_count, token, message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::History;
    use std::env;

    fn test_session() -> Session {
        let history_file = env::temp_dir().join("minish_session_test_history");
        let history = History::new(history_file, 16).unwrap();
        Session::new("minish".to_string(), false, history)
    }

    #[test]
    fn test_set_line_tokenizes() {
        let mut session = test_session();
        session.set_line("echo  one\ttwo ");
        assert_eq!(session.line, "echo  one\ttwo ");
        assert_eq!(session.argv, vec!["echo", "one", "two"]);
    }

    #[test]
    fn test_blank_line() {
        let mut session = test_session();
        session.set_line("   \t ");
        assert!(session.is_blank());
    }

    #[test]
    fn test_clear_keeps_persistent_fields() {
        let mut session = test_session();
        session.set_line("ls -l");
        session.status = 3;
        session.command_count = 7;
        session.resolved = Some("/bin/ls".into());

        session.clear();
        assert!(session.line.is_empty());
        assert!(session.argv.is_empty());
        assert!(session.resolved.is_none());
        assert_eq!(session.status, 3);
        assert_eq!(session.command_count, 7);
    }

    #[test]
    fn test_alias_expansion() {
        let mut session = test_session();
        session
            .aliases
            .insert("ll".to_string(), "ls -l".to_string());
        session.set_line("ll /tmp");
        assert_eq!(session.argv, vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_alias_expansion_first_token_only() {
        let mut session = test_session();
        session
            .aliases
            .insert("ll".to_string(), "ls -l".to_string());
        session.set_line("echo ll");
        assert_eq!(session.argv, vec!["echo", "ll"]);
    }
}
