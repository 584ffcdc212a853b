use super::{BuiltinOutcome, Command};
use crate::core::session::Session;

/// Terminates the loop. With an argument, the requested status becomes the
/// pending override consumed at shutdown; a malformed argument keeps the
/// session running with status 2.
#[derive(Clone)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, session: &mut Session) -> BuiltinOutcome {
        match session.argv.get(1) {
            Some(arg) => match parse_status(arg) {
                Some(code) => {
                    session.pending_exit = Some(code);
                    BuiltinOutcome::Exit
                }
                None => {
                    session.report(&format!("Illegal number: {}", arg));
                    BuiltinOutcome::Status(2)
                }
            },
            None => BuiltinOutcome::Exit,
        }
    }
}

fn parse_status(arg: &str) -> Option<i32> {
    arg.parse::<i32>().ok().filter(|code| *code >= 0)
}
