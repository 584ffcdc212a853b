use super::{BuiltinOutcome, Command};
use crate::core::session::Session;

/// Prints the numbered command history, oldest first.
#[derive(Clone)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, session: &mut Session) -> BuiltinOutcome {
        for (index, entry) in session.history.entries().iter().enumerate() {
            println!("{:5}  {}", index, entry);
        }
        BuiltinOutcome::Status(0)
    }
}
