//! fieldcheck CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. Errors that stop a
//! command from running are printed to stderr with a non-zero exit code.

use fieldcheck::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
