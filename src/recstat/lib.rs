//! # Recstat Architecture
//!
//! Recstat validates a JSON array of records, shows them as a table and
//! summarizes their values. Like any small tool here it is a library with a CLI
//! client, not a CLI with some helper code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, draws tables, initializes logging      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate, stats, table: pure functions over records      │
//! │  - import, export: flat JSON files in and out               │
//! │  - process, demo, greet: compositions returning CmdResult   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs)                                           │
//! │  - Record: validated at construction, immutable after       │
//! │  - Numeric: integer or float, compared numerically          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Rules
//!
//! - `name`: required string, trimmed, 1 to 100 characters
//! - `value`: required finite number, strictly positive
//! - `tags`: list of strings, empty when absent
//! - `metadata`: JSON object or absent
//!
//! Any other key rejects the record. Batch validation is all-or-nothing: the
//! first bad item aborts the batch and its position is reported.
//!
//! ## Module Overview
//!
//! - [`model`]: `Record` and `Numeric`
//! - [`commands`]: validation, statistics, table rows, file import/export
//! - [`config`]: presentation settings
//! - [`error`]: error types
//! - `cli`: argument parsing, printing and logging setup for the binary (not part of the lib API)

pub mod commands;
pub mod config;
pub mod error;
pub mod model;

mod property_tests;
