use std::io::{self, BufRead, BufReader};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// One-line-at-a-time input source. Interactive sessions get a rustyline
/// editor with in-session recall; anything else reads buffered lines from
/// stdin. `read_line` returns None on end-of-input.
pub enum LineReader {
    Interactive(Box<DefaultEditor>),
    Piped(BufReader<io::Stdin>),
}

impl LineReader {
    pub fn new(interactive: bool) -> Result<Self, ShellError> {
        if interactive {
            Ok(LineReader::Interactive(Box::new(DefaultEditor::new()?)))
        } else {
            Ok(LineReader::Piped(BufReader::new(io::stdin())))
        }
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self {
            LineReader::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    Ok(Some(line))
                }
                Err(ReadlineError::Eof) => Ok(None),
                // Interrupted edits come back as an empty line
                Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
                Err(e) => Err(e.into()),
            },
            LineReader::Piped(reader) => {
                let mut buf = String::new();
                match reader.read_line(&mut buf) {
                    Ok(0) => Ok(None),
                    Ok(_) => {
                        while buf.ends_with('\n') || buf.ends_with('\r') {
                            buf.pop();
                        }
                        Ok(Some(buf))
                    }
                    Err(e) => Err(e.into()),
                }
            }
        }
    }
}
