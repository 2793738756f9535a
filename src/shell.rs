use crate::error::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Line-oriented input for interactive mode.
pub trait LineReader {
    /// Shows `prompt` and reads one line without its terminator.
    ///
    /// Returns `None` once the input is exhausted.
    fn next_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>>;
}

impl<R: BufRead> LineReader for R {
    fn next_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        write!(out, "{prompt} ")?;
        out.flush()?;

        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Terminal line editor with history, backed by [`rustyline`].
///
/// The prompt is drawn by the editor itself rather than written to the
/// output sink. Ctrl-C and Ctrl-D end the session.
pub struct Editor {
    editor: DefaultEditor,
}

impl Editor {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { editor })
    }
}

impl LineReader for Editor {
    fn next_line(&mut self, prompt: &str, _out: &mut dyn Write) -> Result<Option<String>> {
        match self.editor.readline(&format!("{prompt} ")) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(readline_error)?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                tracing::debug!("line editor closed");
                Ok(None)
            }
            Err(err) => Err(readline_error(err)),
        }
    }
}

fn readline_error(err: ReadlineError) -> crate::Error {
    match err {
        ReadlineError::Io(err) => err.into(),
        other => std::io::Error::other(other.to_string()).into(),
    }
}
