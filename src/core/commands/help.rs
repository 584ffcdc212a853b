use super::{BuiltinOutcome, Command};
use crate::core::session::Session;

#[derive(Clone)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _session: &mut Session) -> BuiltinOutcome {
        println!("minish, a minimal command interpreter");
        println!("Built-in commands:");
        println!("  exit [status]        leave the shell, optionally with a status");
        println!("  cd [dir | -]         change directory (default $HOME, - for $OLDPWD)");
        println!("  setenv NAME VALUE    set an environment variable");
        println!("  unsetenv NAME...     remove environment variables");
        println!("  alias [name[=value]] list, show or define aliases");
        println!("  env                  print the environment");
        println!("  history              print the command history");
        println!("  help                 show this text");
        BuiltinOutcome::Status(0)
    }
}
