//! # CLI Layer
//!
//! One possible UI client for recstat. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Initializes logging
//! - Formats output for human consumption
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `logging`: tracing subscriber setup
//! - `print`: tables, statistics and messages
//! - `setup`: argument parsing via clap

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;
