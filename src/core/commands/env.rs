use super::{BuiltinOutcome, Command};
use crate::core::session::Session;

/// Prints the session environment, one NAME=VALUE per line.
#[derive(Clone)]
pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(&self, session: &mut Session) -> BuiltinOutcome {
        for (name, value) in session.env.sorted() {
            println!("{}={}", name, value);
        }
        BuiltinOutcome::Status(0)
    }
}

/// `setenv NAME VALUE`
#[derive(Clone)]
pub struct SetenvCommand;

impl Command for SetenvCommand {
    fn execute(&self, session: &mut Session) -> BuiltinOutcome {
        if session.argv.len() != 3 {
            session.report("Incorrect number of arguments");
            return BuiltinOutcome::Status(1);
        }

        let name = session.argv[1].clone();
        let value = session.argv[2].clone();
        match session.env.set(&name, &value) {
            Ok(()) => BuiltinOutcome::Status(0),
            Err(e) => {
                session.report(&e.to_string());
                BuiltinOutcome::Status(1)
            }
        }
    }
}

/// `unsetenv NAME...` — removing an absent name is not an error.
#[derive(Clone)]
pub struct UnsetenvCommand;

impl Command for UnsetenvCommand {
    fn execute(&self, session: &mut Session) -> BuiltinOutcome {
        if session.argv.len() < 2 {
            session.report("Too few arguments");
            return BuiltinOutcome::Status(1);
        }

        for name in session.argv[1..].to_vec() {
            session.env.unset(&name);
        }
        BuiltinOutcome::Status(0)
    }
}
