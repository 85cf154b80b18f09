use thiserror::Error;

use crate::{
    account::Amount,
    bank::{AccountId, BankError},
    command::{BankCommand, CommandError},
};

pub mod bank_processor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    BankErr(#[from] BankError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Opened(AccountId),
    Balance(Amount),
    /// Human readable text produced by the dump commands.
    Report(String),
    Renamed,
    Exit,
}

pub trait CommandProcessor {
    fn process_command(&self, command: BankCommand) -> Result<CommandOutcome, ProcessError>;
}
