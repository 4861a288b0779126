//! Destination of the `print` built-in.
//!
//! Programs run from the command line print to stdout. Tests and embedders
//! use a buffer and read it back after the run.

use std::sync::Arc;

use parking_lot::Mutex;

pub enum PrintHandler {
    /// One line per `print` call on stdout.
    Stdout,
    /// Captures output, one `\n`-terminated line per `print` call.
    Buffer(Mutex<String>),
}

/// Print handler shared between a runtime and whoever reads its output.
pub type SharedPrintHandler = Arc<PrintHandler>;

impl PrintHandler {
    pub fn stdout() -> SharedPrintHandler {
        Arc::new(PrintHandler::Stdout)
    }

    pub fn buffer() -> SharedPrintHandler {
        Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
    }

    pub fn println(&self, line: &str) {
        match self {
            PrintHandler::Stdout => println!("{line}"),
            PrintHandler::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
        }
    }

    /// Everything captured so far; empty for stdout.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Stdout => String::new(),
            PrintHandler::Buffer(buf) => buf.lock().clone(),
        }
    }
}

impl std::fmt::Debug for PrintHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintHandler::Stdout => f.write_str("Stdout"),
            PrintHandler::Buffer(_) => f.write_str("Buffer"),
        }
    }
}
