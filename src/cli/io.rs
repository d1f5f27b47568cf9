use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::{error::ReadlineError, DefaultEditor};

use super::CliError;

/// Source of user answers for the shell.
pub trait Prompter {
    /// Reads one answer, or `None` once input is exhausted or the user chose to quit.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Interactive prompter backed by a line editor with history.
pub struct LineEditorPrompter {
    editor: DefaultEditor,
    theme: ColorfulTheme,
}

impl LineEditorPrompter {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            theme: ColorfulTheme::default(),
        })
    }

    fn confirm_exit(&self) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit the banking system?")
            .default(false)
            .interact()
            .map_err(CliError::from)
    }
}

impl Prompter for LineEditorPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        loop {
            match self.editor.readline(&format!("{prompt} ")) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.trim()).ok();
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    if self.confirm_exit()? {
                        return Ok(None);
                    }
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Reads answers line by line from any buffered reader, without echoing prompts.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the session.
pub struct ScriptPrompter<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&self.buf).into_owned();
        if line.contains(char::REPLACEMENT_CHARACTER) {
            tracing::warn!(%line, "script input was not valid UTF-8");
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_prompter_yields_lines_then_none() {
        let mut prompter = ScriptPrompter::new(Cursor::new("1\nAsha\n"));
        assert_eq!(prompter.read_line("choice").unwrap().as_deref(), Some("1"));
        assert_eq!(prompter.read_line("name").unwrap().as_deref(), Some("Asha"));
        assert!(prompter.read_line("balance").unwrap().is_none());
    }

    #[test]
    fn script_prompter_replaces_invalid_utf8() {
        let mut prompter = ScriptPrompter::new(Cursor::new(b"\xff\xfe\r\nKofi".to_vec()));
        assert_eq!(
            prompter.read_line("name").unwrap().as_deref(),
            Some("\u{fffd}\u{fffd}")
        );
        assert_eq!(prompter.read_line("name").unwrap().as_deref(), Some("Kofi"));
        assert!(prompter.read_line("name").unwrap().is_none());
    }
}
