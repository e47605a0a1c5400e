use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "recstat", bin_name = "recstat", version = get_version())]
#[command(
    about = "Validate JSON records, show them as a table and summarize their values",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./recstat.json when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Say hello to someone
    #[command(display_order = 1)]
    Hello {
        /// Name to greet
        #[arg(default_value = "World")]
        name: String,
    },

    /// Validate records from a JSON file and display them
    #[command(display_order = 2)]
    Process {
        /// JSON file containing an array of records
        input: PathBuf,

        /// Write the validated records to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Calculate and display statistics
        #[arg(long)]
        stats: bool,
    },

    /// Run the pipeline over built-in sample data
    #[command(display_order = 3)]
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_flags() {
        let cli = Cli::try_parse_from([
            "recstat", "-v", "process", "data.json", "-o", "out.json", "--stats",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Process {
                input,
                output,
                stats,
            }) => {
                assert_eq!(input, PathBuf::from("data.json"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(stats);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_hello_defaults_to_world() {
        let cli = Cli::try_parse_from(["recstat", "hello"]).unwrap();
        match cli.command {
            Some(Commands::Hello { name }) => assert_eq!(name, "World"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_process_requires_input() {
        assert!(Cli::try_parse_from(["recstat", "process"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["recstat", "demo", "--config", "custom.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
        assert!(matches!(cli.command, Some(Commands::Demo)));
    }
}
