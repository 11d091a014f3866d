//! Line-based question/answer session.
//!
//! Generic over the reader and writer so commands can be driven from a
//! `Cursor` in tests and from locked stdin/stdout in the binary.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::{CliError, CliResult, IntoCli};

pub const MENU: &str = "Select an option:\n1. Generate use case scaffold\n2. Generate empty project\nEnter your choice (1 or 2): ";
pub const USE_CASE_NAME: &str = "Enter the name of the use case: ";
pub const PROJECT_NAME: &str = "Enter the name of the project: ";
pub const PROJECT_AUTHOR: &str = "Enter the author name: ";
pub const PROJECT_DESCRIPTION: &str = "Enter a brief description of the project: ";

/// Asks questions on `writer` and reads one answer line per question from
/// `reader`.
pub struct PromptSession<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `question` without a newline and return the answer with its
    /// line terminator stripped. The answer is otherwise untouched: empty
    /// lines and surrounding spaces are kept.
    ///
    /// Returns [`CliError::Cancelled`] when input ends before an answer.
    pub fn ask(&mut self, question: &str) -> CliResult<String> {
        self.writer
            .write_all(question.as_bytes())
            .and_then(|()| self.writer.flush())
            .with_cli_context(|| "failed to write prompt")?;

        let mut answer = String::new();
        let read = self
            .reader
            .read_line(&mut answer)
            .with_cli_context(|| "failed to read answer")?;
        if read == 0 {
            return Err(CliError::Cancelled);
        }

        strip_line_ending(&mut answer);
        trace!(question = question.trim_end(), answer = %answer, "Prompt answered");
        Ok(answer)
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
