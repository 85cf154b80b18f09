use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::{account::Amount, bank::AccountId};

/// Operations a branch terminal offers, with their menu numbers.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BankControl {
    Exit,
    OpenAccount,
    CheckBalance,
    Deposit,
    Withdraw,
    DumpAccount,
    DumpPassbook,
    RenameAccount,
}

impl BankControl {
    pub const ALL: [BankControl; 8] = [
        BankControl::Exit,
        BankControl::OpenAccount,
        BankControl::CheckBalance,
        BankControl::Deposit,
        BankControl::Withdraw,
        BankControl::DumpAccount,
        BankControl::DumpPassbook,
        BankControl::RenameAccount,
    ];

    pub fn id(self) -> u8 {
        match self {
            BankControl::Exit => 0,
            BankControl::OpenAccount => 1,
            BankControl::CheckBalance => 2,
            BankControl::Deposit => 3,
            BankControl::Withdraw => 4,
            BankControl::DumpAccount => 5,
            BankControl::DumpPassbook => 6,
            BankControl::RenameAccount => 7,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BankControl::Exit => "Shut down the banking system",
            BankControl::OpenAccount => "Open an account",
            BankControl::CheckBalance => "Balance inquiry",
            BankControl::Deposit => "Deposit",
            BankControl::Withdraw => "Withdrawal",
            BankControl::DumpAccount => "Customer details",
            BankControl::DumpPassbook => "Passbook",
            BankControl::RenameAccount => "Change account holder name",
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.id() == id)
    }
}

impl fmt::Display for BankControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.id(), self.description())
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Account id is required for {control:?}")]
    IdRequired { control: BankControl },
    #[error("Account name is required for {control:?}")]
    NameRequired { control: BankControl },
    #[error("Amount is required for {control:?}")]
    AmountRequired { control: BankControl },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankCommand {
    Exit,
    OpenAccount { name: String },
    CheckBalance { id: AccountId },
    Deposit { id: AccountId, amount: Amount },
    Withdraw { id: AccountId, amount: Amount },
    DumpAccount { id: AccountId },
    DumpPassbook { id: AccountId },
    RenameAccount { id: AccountId, name: String },
}

impl BankCommand {
    /// Checks that `control` got every field it needs. Values themselves
    /// (empty names, non-positive amounts, unknown ids) are left to the bank.
    pub fn parse_command(
        control: BankControl,
        id: Option<AccountId>,
        name: Option<String>,
        amount: Option<Amount>,
    ) -> Result<Self, CommandError> {
        let require_id = || id.ok_or(CommandError::IdRequired { control });
        let require_name = || name.ok_or(CommandError::NameRequired { control });
        let amount = amount.ok_or(CommandError::AmountRequired { control });

        match control {
            BankControl::Exit => Ok(Self::Exit),
            BankControl::OpenAccount => Ok(Self::OpenAccount { name: require_name()? }),
            BankControl::CheckBalance => Ok(Self::CheckBalance { id: require_id()? }),
            BankControl::Deposit => Ok(Self::Deposit {
                id: require_id()?,
                amount: amount?,
            }),
            BankControl::Withdraw => Ok(Self::Withdraw {
                id: require_id()?,
                amount: amount?,
            }),
            BankControl::DumpAccount => Ok(Self::DumpAccount { id: require_id()? }),
            BankControl::DumpPassbook => Ok(Self::DumpPassbook { id: require_id()? }),
            BankControl::RenameAccount => Ok(Self::RenameAccount {
                id: require_id()?,
                name: require_name()?,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_table() {
        for control in BankControl::ALL {
            assert_eq!(BankControl::from_id(control.id()), Some(control));
        }
        assert_eq!(BankControl::from_id(8), None);
        assert_eq!(BankControl::Deposit.to_string(), "3 : Deposit");
        assert_eq!(
            BankControl::Exit.to_string(),
            "0 : Shut down the banking system"
        );
    }

    #[test]
    fn parse_commands() {
        let cmd = BankCommand::parse_command(
            BankControl::Deposit,
            Some("0000000".to_string()),
            None,
            Some(100),
        )
        .unwrap();
        assert_eq!(
            cmd,
            BankCommand::Deposit {
                id: "0000000".to_string(),
                amount: 100
            }
        );

        let cmd =
            BankCommand::parse_command(BankControl::OpenAccount, None, Some("Doi".into()), None)
                .unwrap();
        assert_eq!(
            cmd,
            BankCommand::OpenAccount {
                name: "Doi".to_string()
            }
        );

        // extra fields are ignored
        let cmd = BankCommand::parse_command(
            BankControl::Exit,
            Some("0000000".to_string()),
            Some("Doi".into()),
            Some(1),
        )
        .unwrap();
        assert_eq!(cmd, BankCommand::Exit);

        // negative amounts are passed through for the bank to reject
        let cmd = BankCommand::parse_command(
            BankControl::Withdraw,
            Some("0000000".to_string()),
            None,
            Some(-5),
        )
        .unwrap();
        assert!(matches!(cmd, BankCommand::Withdraw { amount: -5, .. }));
    }

    #[test]
    fn missing_fields() {
        let err = BankCommand::parse_command(BankControl::Withdraw, None, None, Some(1))
            .unwrap_err();
        assert!(matches!(
            err,
            CommandError::IdRequired {
                control: BankControl::Withdraw
            }
        ));

        let err = BankCommand::parse_command(
            BankControl::Deposit,
            Some("0000000".to_string()),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Amount is required for Deposit");

        let err = BankCommand::parse_command(
            BankControl::RenameAccount,
            Some("0000000".to_string()),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::NameRequired { .. }));
    }
}
