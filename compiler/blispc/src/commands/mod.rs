//! Command handlers for the blisp CLI.
//!
//! `run_files` loads scripts, `run_repl` runs the interactive session. Both
//! report reader errors through `report_read_error`.

mod repl;
mod report;
mod run;

pub use repl::run_repl;
pub use report::{render_read_error, report_read_error};
pub use run::run_files;
