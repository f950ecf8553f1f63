//! Line editing for the REPL, with history kept in a file.

use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;

pub(crate) struct LineReader {
    rl: Editor<(), FileHistory>,
    history_file: String,
    prompt: String,
}

impl Drop for LineReader {
    fn drop(&mut self) {
        if let Err(e) = self.rl.save_history(&self.history_file) {
            tracing::debug!(error = %e, "could not save history");
        }
    }
}

pub(crate) enum LineReadStatus {
    Line(String),
    Done,
}

impl LineReader {
    pub(crate) fn new(history_file: &str, prompt: &str) -> rustyline::Result<LineReader> {
        let mut rl = Editor::<(), FileHistory>::new()?;
        // A missing history file is normal on first start.
        rl.load_history(history_file).ok();
        Ok(LineReader {
            rl,
            history_file: history_file.into(),
            prompt: prompt.into(),
        })
    }

    pub(crate) fn readline(&mut self) -> LineReadStatus {
        match self.rl.readline(&self.prompt) {
            Ok(line) => {
                self.rl.add_history_entry(line.as_str()).ok();
                LineReadStatus::Line(line)
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => LineReadStatus::Done,
            Err(e) => {
                tracing::warn!(error = %e, "readline failed");
                LineReadStatus::Done
            }
        }
    }
}
