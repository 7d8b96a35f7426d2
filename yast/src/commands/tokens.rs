//! Tokens command implementation.
//!
//! Tokenizes one file and prints its token listing as a table or as JSON.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};
use yassc_lex::{tokenize_with, LexConfig, ListingRow, TokenListing};

use crate::commands::common::{lex_failure, read_source, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file to tokenize.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Lexer options.
    pub lex: LexConfig,
}

/// One token as written to JSON output.
#[derive(Debug, Serialize, PartialEq)]
struct TokenRecord<'a> {
    row: u32,
    column: u32,
    kind: &'static str,
    value: &'a str,
    length: usize,
}

impl<'a> From<ListingRow<'a>> for TokenRecord<'a> {
    fn from(row: ListingRow<'a>) -> Self {
        Self {
            row: row.row,
            column: row.column,
            kind: row.kind.as_str(),
            value: row.value,
            length: row.length,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Tokenizes the file and renders the listing.
    pub fn render(&self) -> Result<String> {
        let buffer = read_source(&self.args.file)?;
        let tokens = tokenize_with(buffer.text(), &self.args.lex)
            .map_err(|err| lex_failure(&self.args.file, &buffer, &err))?;
        info!(
            file = %self.args.file.display(),
            tokens = tokens.len(),
            "tokenized"
        );

        let listing = TokenListing::new(&tokens, buffer.text());
        let output = match self.args.format {
            OutputFormat::Table => listing.to_string(),
            OutputFormat::Json => {
                let records: Vec<TokenRecord<'_>> = listing.rows().map(TokenRecord::from).collect();
                let mut json = serde_json::to_string_pretty(&records)?;
                json.push('\n');
                json
            },
        };
        debug!(bytes = output.len(), format = ?self.args.format, "rendered listing");
        Ok(output)
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let output = self.render()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    TokensCommand::run_with(args)
}
