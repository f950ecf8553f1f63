//! Command-line options.

use blisp_eval::DEFAULT_MAX_CALL_DEPTH;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// No files given: interactive session.
    Repl,
    /// Load each file in order.
    RunFiles(Vec<String>),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    /// Maximum nesting of closure calls and `eval`/`load`.
    pub max_call_depth: usize,
}

/// Parse the arguments that follow the program name.
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut files = Vec::new();
    let mut max_call_depth = DEFAULT_MAX_CALL_DEPTH;

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => {
                return Ok(CliOptions {
                    command: Command::Help,
                    max_call_depth,
                })
            }
            "--version" | "-V" => {
                return Ok(CliOptions {
                    command: Command::Version,
                    max_call_depth,
                })
            }
            _ => {}
        }

        if let Some(value) = arg.strip_prefix("--max-depth=") {
            max_call_depth = match value.parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => return Err(format!("invalid value for --max-depth: '{value}'")),
            };
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            files.push(arg.clone());
        }
    }

    let command = if files.is_empty() {
        Command::Repl
    } else {
        Command::RunFiles(files)
    };
    Ok(CliOptions {
        command,
        max_call_depth,
    })
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "blisp {version}

Usage: blisp [options] [FILE]...

With no files, starts an interactive session. Otherwise each file is
loaded in order into one interpreter.

Options:
  --max-depth=<n>   Maximum nesting of function calls and eval/load
                    (default: {DEFAULT_MAX_CALL_DEPTH})
  -h, --help        Show this help message
  -V, --version     Show version information

Set RUST_LOG (e.g. RUST_LOG=blisp_eval=trace) for diagnostic logging.",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn no_arguments_starts_repl() {
        assert_eq!(
            parse_args(&[]),
            Ok(CliOptions {
                command: Command::Repl,
                max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            })
        );
    }

    #[test]
    fn files_are_kept_in_order() {
        let options = parse_args(&args(&["a.blisp", "--max-depth=50", "b.blisp"])).unwrap();
        assert_eq!(
            options,
            CliOptions {
                command: Command::RunFiles(args(&["a.blisp", "b.blisp"])),
                max_call_depth: 50,
            }
        );
    }

    #[test]
    fn help_and_version_win() {
        assert_eq!(parse_args(&args(&["x.blisp", "--help"])).unwrap().command, Command::Help);
        assert_eq!(parse_args(&args(&["-V"])).unwrap().command, Command::Version);
    }

    #[test]
    fn bad_options_are_rejected() {
        assert!(parse_args(&args(&["--max-depth=zero"])).is_err());
        assert!(parse_args(&args(&["--max-depth=0"])).is_err());
        assert_eq!(
            parse_args(&args(&["--frobnicate"])),
            Err("unknown option '--frobnicate'".to_owned())
        );
    }

    #[test]
    fn usage_mentions_options() {
        let text = usage();
        assert!(text.contains("--max-depth"));
        assert!(text.contains("Usage: blisp"));
    }
}
