//! File runner.

use blisp_eval::Interpreter;

use super::report_read_error;

/// Load each file in order into `interp`.
///
/// Error values are reported as they occur and do not stop the run. A file
/// that cannot be read or parsed is reported and skipped. Returns `false`
/// if any file was skipped.
pub fn run_files(interp: &mut Interpreter, paths: &[String]) -> bool {
    let mut all_ok = true;

    for path in paths {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("error: could not read '{path}': {e}");
                all_ok = false;
                continue;
            }
        };

        tracing::debug!(path = %path, "running file");
        if let Err(err) = interp.run_source(&source) {
            report_read_error(path, &source, &err);
            all_ok = false;
        }
    }

    all_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use blisp_eval::{buffer_handler, Value};
    use pretty_assertions::assert_eq;

    fn temp_script(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("blispc_{}_{name}.blisp", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn files_share_one_interpreter() {
        let first = temp_script("first", "(def {x} 20)");
        let second = temp_script("second", "(print (+ x 1)) (oops)");
        let handler = buffer_handler();
        let mut interp = Interpreter::builder().print_handler(handler.clone()).build();

        assert!(run_files(&mut interp, &[first.clone(), second.clone()]));
        assert_eq!(handler.get_output(), "21\nError: Unbound Symbol 'oops'\n");
        assert_eq!(interp.global().lookup("x"), Ok(Value::Integer(20)));

        std::fs::remove_file(first).unwrap();
        std::fs::remove_file(second).unwrap();
    }

    #[test]
    fn unreadable_and_unparsable_files_are_skipped() {
        let broken = temp_script("broken", "(def {y} 1");
        let good = temp_script("good", "(def {z} 2)");
        let mut interp = Interpreter::builder().print_handler(buffer_handler()).build();

        let paths = ["/no/such/file.blisp".to_owned(), broken.clone(), good.clone()];
        assert!(!run_files(&mut interp, &paths));
        assert!(interp.global().lookup("y").is_err());
        assert_eq!(interp.global().lookup("z"), Ok(Value::Integer(2)));

        std::fs::remove_file(broken).unwrap();
        std::fs::remove_file(good).unwrap();
    }
}
