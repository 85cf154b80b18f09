//! Drives a [`Bank`] from a CSV script. The interactive terminal is not part of
//! the ledger; this module is the batch stand-in used by the binary and the
//! integration tests.

use std::io::{Read, Write};

use crate::{
    bank::Bank,
    command::BankCommand,
    processor::{CommandOutcome, CommandProcessor, ProcessError},
};
use anyhow::{Context, Result};
use csv_parser::CsvScriptParser;
use csv_printer::{AccountRow, print_accounts};
use tracing::info;
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub bank: &'w Bank,
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ProcessError) + 'w>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvScriptParser::new(self.input);

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed command at line {line}"))?;
            let outcome = BankCommand::parse_command(row.control, row.id, row.name, row.amount)
                .map_err(ProcessError::from)
                .and_then(|command| self.bank.process_command(command));

            match outcome {
                Ok(CommandOutcome::Exit) => break,
                Ok(CommandOutcome::Report(text)) => {
                    writeln!(self.output, "{text}").context("Failed to write report")?
                }
                Ok(CommandOutcome::Opened(id)) => info!(line, %id, "opened"),
                Ok(CommandOutcome::Balance(balance)) => info!(line, balance, "balance"),
                Ok(CommandOutcome::Renamed) => info!(line, "renamed"),
                Err(err) => (self.error_printer)(line, err),
            }
        }

        let accounts = self.bank.accounts();
        print_accounts(self.output, accounts.iter().map(AccountRow::from))
    }
}
