//! Yast CLI - inspect and check Yassou source files.
//!
//! This is the main entry point for the yast CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{Result, YastError};

/// Yast - inspect and check Yassou source files
///
/// Yast prints the token stream of a Yassou program and checks whole sets of
/// files against the lexical grammar.
#[derive(Parser, Debug)]
#[command(name = "yast")]
#[command(author = "Yassou Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and check Yassou source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "YAST_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "YAST_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "YAST_NO_COLOR")]
    no_color: bool,

    /// Trace every lexer decision
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the yast CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    ///
    /// Tokenizes the file and prints one row per token with its row,
    /// column, value and length.
    Tokens(TokensCommand),

    /// Check source files for lexical errors
    ///
    /// Tokenizes every file in parallel and reports each file that
    /// violates the lexical grammar.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to tokenize
    file: PathBuf,

    /// Output format (table, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Indent token length (width, marker)
    #[arg(long)]
    indent: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,

    /// Indent token length (width, marker)
    #[arg(long)]
    indent: Option<String>,
}

/// Main entry point for the yast CLI.
///
/// Errors are printed to stderr and turned into a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().trim_end());
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging and executes the command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.trace || config.lex.trace, cli.no_color)?;

    execute_command(cli.command, cli.trace, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that listings on stdout stay machine readable.
fn init_logging(verbose: bool, trace: bool, no_color: bool) -> Result<()> {
    let filter = if trace {
        EnvFilter::new("trace")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| YastError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, trace: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, trace, config),
        Commands::Check(args) => execute_check(args, trace, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, trace: bool, config: Config) -> Result<()> {
    let format = args
        .format
        .as_deref()
        .unwrap_or(&config.tokens.format)
        .parse::<OutputFormat>()?;
    let tokens_args = TokensArgs {
        file: args.file,
        format,
        lex: config.lex.to_lex_config(trace, args.indent.as_deref())?,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, trace: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        jobs: args.jobs.unwrap_or(config.check.jobs),
        lex: config.lex.to_lex_config(trace, args.indent.as_deref())?,
    };
    run_check(check_args)
}
