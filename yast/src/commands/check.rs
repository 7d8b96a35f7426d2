//! Check command implementation.
//!
//! Tokenizes many files and reports every file that violates the lexical
//! grammar. Each file is lexed sequentially; files are spread across a
//! scoped rayon pool.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};
use yassc_lex::{tokenize_with, LexConfig};

use crate::commands::common::{error_messages, lex_failure, read_source};
use crate::commands::traits::Command;
use crate::error::{Result, YastError};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Number of worker threads.
    pub jobs: u32,
    /// Lexer options.
    pub lex: LexConfig,
}

/// Result of checking one file.
#[derive(Debug)]
pub struct FileOutcome {
    /// The checked file.
    pub path: PathBuf,
    /// Token count on success, or the failure.
    pub result: Result<usize>,
}

/// Aggregate result of a check run.
#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Outcomes in the order the files were given.
    pub outcomes: Vec<FileOutcome>,
    /// Wall-clock time of the run.
    pub duration: Duration,
}

impl CheckSummary {
    /// Number of files that lexed cleanly.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Checks every file and collects the outcomes.
    pub fn check_all(&self) -> Result<CheckSummary> {
        if self.args.files.is_empty() {
            return Err(YastError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        if self.args.jobs == 0 {
            return Err(YastError::Validation(error_messages::ZERO_JOBS.to_string()));
        }

        let start = Instant::now();
        let lex = self.args.lex;
        let files = &self.args.files;

        let outcomes = if files.len() == 1 || self.args.jobs == 1 {
            files.iter().map(|path| check_file(path, &lex)).collect()
        } else {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.args.jobs as usize)
                .build_scoped(rayon::ThreadBuilder::run, |pool| {
                    pool.install(|| {
                        files
                            .par_iter()
                            .map(|path| check_file(path, &lex))
                            .collect::<Vec<_>>()
                    })
                })
                .unwrap_or_else(|e| {
                    warn!("failed to create thread pool ({e}), checking sequentially");
                    files.iter().map(|path| check_file(path, &lex)).collect()
                })
        };

        Ok(CheckSummary {
            outcomes,
            duration: start.elapsed(),
        })
    }
}

/// Reads and tokenizes a single file.
fn check_file(path: &Path, lex: &LexConfig) -> FileOutcome {
    let result = read_source(path).and_then(|buffer| {
        tokenize_with(buffer.text(), lex)
            .map(|tokens| tokens.len())
            .map_err(|err| lex_failure(path, &buffer, &err))
    });
    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let summary = self.check_all()?;

        for outcome in &summary.outcomes {
            match &outcome.result {
                Ok(tokens) => debug!(file = %outcome.path.display(), tokens, "ok"),
                Err(YastError::Lex { path, rendered }) => {
                    warn!(file = %path.display(), "lexical error");
                    eprint!("{}", rendered);
                },
                Err(err) => eprintln!("{}: {}", outcome.path.display(), err),
            }
        }

        println!(
            "checked {} file(s): {} ok, {} failed",
            summary.outcomes.len(),
            summary.passed(),
            summary.failed()
        );
        info!(
            elapsed_ms = summary.duration.as_millis() as u64,
            jobs = self.args.jobs,
            "check finished"
        );

        if summary.failed() > 0 {
            return Err(YastError::Validation(format!(
                "{} {}",
                summary.failed(),
                error_messages::FILES_FAILED
            )));
        }
        Ok(summary)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    CheckCommand::run_with(args).map(|_| ())
}
