//! Command trait for the yast CLI.
//!
//! Every subcommand is a value built from its arguments and executed once.

use crate::error::Result;

/// Standard command trait that all yast commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;

    /// Builds the command from `args`, logs its name and executes it.
    fn run_with(args: Self::Args) -> Result<Self::Output> {
        tracing::debug!(command = Self::name(), "executing");
        Self::new(args).execute()
    }
}
