use crate::{bank::Bank, command::BankCommand};

use super::{CommandOutcome, CommandProcessor, ProcessError};

impl CommandProcessor for Bank {
    fn process_command(&self, command: BankCommand) -> Result<CommandOutcome, ProcessError> {
        let outcome = match command {
            BankCommand::Exit => CommandOutcome::Exit,
            BankCommand::OpenAccount { name } => CommandOutcome::Opened(self.open_account(&name)?),
            BankCommand::CheckBalance { id } => CommandOutcome::Balance(self.check_balance(&id)?),
            BankCommand::Deposit { id, amount } => {
                CommandOutcome::Balance(self.deposit(&id, amount)?)
            }
            BankCommand::Withdraw { id, amount } => {
                CommandOutcome::Balance(self.withdraw(&id, amount)?)
            }
            BankCommand::DumpAccount { id } => CommandOutcome::Report(self.dump_account(&id)?),
            BankCommand::DumpPassbook { id } => {
                CommandOutcome::Report(self.dump_account_passbook(&id)?)
            }
            BankCommand::RenameAccount { id, name } => {
                self.rename_account(&id, &name)?;
                CommandOutcome::Renamed
            }
        };
        Ok(outcome)
    }
}
