//! blisp command-line interpreter.

use blisp_eval::Interpreter;
use blispc::commands::{run_files, run_repl};
use blispc::options::usage;
use blispc::{init_tracing, parse_args, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Run 'blisp --help' for usage.");
            std::process::exit(2);
        }
    };

    let mut interp = Interpreter::builder()
        .max_call_depth(options.max_call_depth)
        .build();

    match options.command {
        Command::Help => println!("{}", usage()),
        Command::Version => println!("blisp {}", env!("CARGO_PKG_VERSION")),
        Command::RunFiles(paths) => {
            if !run_files(&mut interp, &paths) {
                std::process::exit(1);
            }
        }
        Command::Repl => {
            if let Err(e) = run_repl(&mut interp) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}
