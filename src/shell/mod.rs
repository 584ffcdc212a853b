use std::env;
use std::io::{self, Write};

use inksac::prelude::*;

use crate::core::commands::{Dispatcher, Outcome};
use crate::core::session::Session;
use crate::error::ShellError;
use crate::flags::Flags;
use crate::input::history::HIST_MAX;
use crate::input::{History, LineReader};

/// The top-level read-eval loop: reset per-iteration session state, prompt
/// when attached to a terminal, read one line, dispatch it, repeat until
/// end-of-input or an exit request. `run` yields the process exit code.
pub struct Shell {
    reader: LineReader,
    session: Session,
    dispatcher: Dispatcher,
    prompt: String,
    quiet: bool,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let interactive = unsafe { libc::isatty(libc::STDIN_FILENO) == 1 };
        let progname = env::args().next().unwrap_or_else(|| "minish".to_string());

        let history_file = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(".minish_history");
        let history = History::new(history_file, HIST_MAX)?;

        let quiet = flags.is_set("quiet");
        Ok(Shell {
            reader: LineReader::new(interactive)?,
            session: Session::new(progname, interactive, history),
            dispatcher: Dispatcher::new(quiet),
            prompt: prompt_string(interactive),
            quiet,
        })
    }

    pub fn run(&mut self) -> Result<i32, ShellError> {
        let mut last = Outcome::Empty;

        loop {
            self.session.clear();
            if self.session.interactive {
                io::stdout().flush()?;
            }

            let line = match self.reader.read_line(&self.prompt)? {
                Some(line) => line,
                None => {
                    if self.session.interactive {
                        println!();
                    }
                    break;
                }
            };

            self.session.set_line(&line);
            if !self.session.is_blank() {
                self.session.history.add(&line);
            }

            let outcome = self.dispatcher.dispatch(&mut self.session);
            let exiting = matches!(outcome, Outcome::Exit(_));
            last = outcome;
            if exiting {
                break;
            }
        }

        if let Err(e) = self.session.history.flush() {
            if !self.quiet {
                eprintln!("Warning: Couldn't write history: {}", e);
            }
        }

        // An exit request carries its own code; everything else, including
        // end-of-input on a piped session, surfaces the last status.
        let code = match last {
            Outcome::Exit(code) => code,
            _ => self.session.status,
        };
        Ok(code & 0xff)
    }
}

fn prompt_string(interactive: bool) -> String {
    if !interactive {
        return String::new();
    }
    match check_color_support() {
        Ok(support) if !matches!(support, ColorSupport::NoColor) => {
            let style = Style::builder().foreground(Color::Green).bold().build();
            format!("{} ", "$".style(style))
        }
        _ => "$ ".to_string(),
    }
}
