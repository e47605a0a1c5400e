//! # Recstat CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/` and this file
//! only invokes `cli::run()` and handles process termination. Everything the
//! CLI calls into (`recstat::commands`, `recstat::model`) is UI agnostic and
//! never touches stdout, stderr or exit codes.
//!
//! ## Testing Approach
//!
//! - **Commands and model**: unit tests next to the code, plus property tests
//!   for the record invariants and statistics.
//! - **CLI**: rendering helpers are tested on plain strings in `cli/print.rs`;
//!   end-to-end behavior (exit codes, messages, written files) is covered by
//!   `tests/cli_integration.rs` through `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
