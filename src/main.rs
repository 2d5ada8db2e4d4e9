//! cinemateca CLI - Queries over a movie catalog
//!
//! Command-line interface for cinemateca operations.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

fn main() -> ExitCode {
    cinemateca::cli::run()
}
