//! CLI argument parsing.

mod args;
pub mod validators;

pub use args::{Cli, parse_from};
pub use validators::MassList;
