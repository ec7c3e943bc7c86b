// salesboard CLI - seller performance reports from a run config + JSON dataset

mod exit_codes;
mod render;
mod run;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};
use run::OutputFormat;

#[derive(Parser)]
#[command(name = "salesboard")]
#[command(about = "Seller revenue, profit, ranking and bonus reports")]
#[command(version)]
struct Cli {
    /// Log progress to stderr (repeat for debug output). RUST_LOG overrides.
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the seller report from a TOML run config
    #[command(after_help = "\
Examples:
  salesboard run sales.toml
  salesboard run sales.toml --format json
  salesboard run sales.toml --format csv > sellers.csv
  salesboard run sales.toml --output report.json")]
    Run {
        /// Path to the run config (.toml)
        config: PathBuf,

        /// Stdout format
        #[arg(long, short = 'f', value_enum, default_value = "table")]
        format: OutputFormat,

        /// Also write the JSON report to this file (overrides [output] json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Check a run config and its dataset without computing the report
    #[command(after_help = "\
Examples:
  salesboard validate sales.toml")]
    Validate {
        /// Path to the run config (.toml)
        config: PathBuf,
    },
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run { config, format, output } => {
            if output.as_deref().is_some_and(|p| p == config.as_path()) {
                Err(CliError::args("--output must not overwrite the config file"))
            } else {
                run::cmd_run(config, format, output)
            }
        }
        Commands::Validate { config } => run::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}
