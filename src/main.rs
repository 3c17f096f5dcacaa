//! svj-siginj CLI entry point.

#![allow(clippy::print_stderr)]

use svj_siginj::Error;

fn main() {
    match svj_siginj::run() {
        Ok(code) => std::process::exit(code),
        Err(e @ Error::UnknownParameter { .. }) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
