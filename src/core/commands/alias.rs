use super::{BuiltinOutcome, Command};
use crate::core::session::Session;

/// `alias` lists all aliases; `alias name` prints one; `alias name=value`
/// defines one and `alias name=` removes it. Looking up an unknown alias
/// fails the command, the other forms go through regardless.
#[derive(Clone)]
pub struct AliasCommand;

impl Command for AliasCommand {
    fn execute(&self, session: &mut Session) -> BuiltinOutcome {
        let args = session.argv[1..].to_vec();
        if args.is_empty() {
            let mut pairs: Vec<(&String, &String)> = session.aliases.iter().collect();
            pairs.sort_by_key(|(name, _)| name.as_str());
            for (name, value) in pairs {
                println!("{}='{}'", name, value);
            }
            return BuiltinOutcome::Status(0);
        }

        // Re-join so a definition like ll='ls -l' survives word splitting
        let joined = args.join(" ");
        if let Some((name, value)) = joined.split_once('=') {
            let name = name.trim().to_string();
            if value.is_empty() {
                session.aliases.remove(&name);
            } else {
                let value = value.trim_matches(|c| c == '\'' || c == '"');
                session.aliases.insert(name, value.to_string());
            }
            return BuiltinOutcome::Status(0);
        }

        let mut status = 0;
        for arg in args {
            match session.aliases.get(&arg) {
                Some(value) => println!("{}='{}'", arg, value),
                None => status = 1,
            }
        }
        BuiltinOutcome::Status(status)
    }
}
