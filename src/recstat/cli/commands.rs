//! Dispatch and per-command handlers.
//!
//! Handlers call into `recstat::commands` and turn the returned values into
//! terminal output. Errors are returned to `main`, which reports them and sets
//! the exit status.

use super::logging::init_logging;
use super::print::{print_messages, print_records, print_statistics};
use super::setup::{Cli, Commands};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use recstat::commands::greet::greet;
use recstat::commands::process::{self, ProcessOptions};
use recstat::commands::{demo, MessageLevel};
use recstat::config::RecstatConfig;
use recstat::error::{RecstatError, Result};
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Hello { name }) => handle_hello(&name),
        Some(Commands::Process {
            input,
            output,
            stats,
        }) => handle_process(&config, &input, output, stats),
        Some(Commands::Demo) => handle_demo(&config),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<RecstatConfig> {
    match path {
        Some(path) => RecstatConfig::load_file(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            RecstatConfig::load(cwd)
        }
    }
}

fn handle_hello(name: &str) -> Result<()> {
    println!("{}", greet(Some(name)).bold().green());
    Ok(())
}

fn handle_process(
    config: &RecstatConfig,
    input: &Path,
    output: Option<PathBuf>,
    stats: bool,
) -> Result<()> {
    let options = ProcessOptions {
        output,
        stats,
        pretty: config.pretty_output,
    };
    let result = process::run(input, &options)?;

    print_messages(&result.messages, MessageLevel::Info);
    print_records(&result.records, config);
    if let Some(statistics) = &result.statistics {
        print_statistics(&"Statistics:".bold().yellow().to_string(), statistics);
    }
    print_messages(&result.messages, MessageLevel::Success);
    Ok(())
}

fn handle_demo(config: &RecstatConfig) -> Result<()> {
    println!("{}", "Recstat Demo".bold().blue());

    println!();
    println!("{}", "Sample data:".yellow());
    let sample = serde_json::to_string_pretty(&demo::sample_data())
        .map_err(RecstatError::Serialization)?;
    println!("{}", sample);

    let result = demo::run()?;

    println!();
    println!("{}", "Processed data:".green());
    print_records(&result.records, config);

    if let Some(statistics) = &result.statistics {
        print_statistics(&"Statistics:".cyan().to_string(), statistics);
    }
    Ok(())
}
