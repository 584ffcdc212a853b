use std::env;

use super::{BuiltinOutcome, Command};
use crate::core::session::Session;

/// Changes the working directory. Without an argument the target is $HOME
/// (falling back to $PWD, then "/"); "-" swaps to $OLDPWD and prints the
/// new directory. PWD and OLDPWD in the session environment track the move.
#[derive(Clone)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, session: &mut Session) -> BuiltinOutcome {
        let target = match session.argv.get(1).map(String::as_str) {
            None => session
                .env
                .get("HOME")
                .or_else(|| session.env.get("PWD"))
                .unwrap_or("/")
                .to_string(),
            Some("-") => match session.env.get("OLDPWD") {
                Some(dir) => {
                    let dir = dir.to_string();
                    println!("{}", dir);
                    dir
                }
                None => {
                    session.report("OLDPWD not set");
                    return BuiltinOutcome::Status(1);
                }
            },
            Some(dir) => dir.to_string(),
        };

        let previous = env::current_dir().ok();
        if env::set_current_dir(&target).is_err() {
            session.report(&format!("can't cd to {}", target));
            return BuiltinOutcome::Status(2);
        }

        if let Some(prev) = previous {
            let _ = session.env.set("OLDPWD", &prev.to_string_lossy());
        }
        if let Ok(now) = env::current_dir() {
            let _ = session.env.set("PWD", &now.to_string_lossy());
        }
        BuiltinOutcome::Status(0)
    }
}
