//! Interactive session.

use blisp_eval::Interpreter;

use super::report_read_error;
use crate::line_reader::{LineReadStatus, LineReader};

const PROMPT: &str = "blisp> ";
const HISTORY_FILE: &str = ".blisp_history";

/// Read lines until Ctrl-C or Ctrl-D, evaluating each as one S-expression
/// and printing the result.
pub fn run_repl(interp: &mut Interpreter) -> rustyline::Result<()> {
    println!("blisp {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+C to exit");
    println!();

    let mut reader = LineReader::new(HISTORY_FILE, PROMPT)?;
    while let LineReadStatus::Line(line) = reader.readline() {
        match interp.eval_line(&line) {
            Ok(value) => println!("{value}"),
            Err(err) => report_read_error("<repl>", &line, &err),
        }
    }
    Ok(())
}
