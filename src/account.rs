use std::fmt;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::{
    bank::AccountId,
    passbook::{Operation, PassbookEntry},
};

/// Money in the smallest currency unit.
pub type Amount = i64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: Amount },
    #[error("Depositing {amount} would exceed the balance limit of {max_balance} (balance is {balance})")]
    LimitExceeded {
        balance: Amount,
        amount: Amount,
        max_balance: Amount,
    },
    #[error("Insufficient funds: balance is {balance}, requested {amount}")]
    InsufficientFunds { balance: Amount, amount: Amount },
}

/// Consistent view of an account, taken under its lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub id: AccountId,
    pub name: String,
    pub balance: Amount,
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}\tname: {}\tbalance: {}",
            self.id, self.name, self.balance
        )
    }
}

#[derive(Debug)]
struct AccountState {
    name: String,
    balance: Amount,
    passbook: Vec<PassbookEntry>,
}

impl AccountState {
    fn log(&mut self, id: &str, operation: Operation, amount: Option<Amount>) {
        let entry = PassbookEntry::record(operation, id, &self.name, self.balance, amount);
        self.passbook.push(entry);
    }
}

/// A single ledger account.
///
/// Name, balance and passbook share one lock, so a deposit or withdrawal
/// checks the limit, moves the balance and appends its passbook entry as one
/// step. Uniqueness of `id` is up to whoever creates the account.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    max_balance: Amount,
    state: Mutex<AccountState>,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, name: impl Into<String>, max_balance: Amount) -> Self {
        let id = id.into();
        let mut state = AccountState {
            name: name.into(),
            balance: 0,
            passbook: Vec::new(),
        };
        state.log(&id, Operation::Open, None);
        Self {
            id,
            max_balance,
            state: Mutex::new(state),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> String {
        self.state.lock().name.clone()
    }

    pub fn balance(&self) -> Amount {
        self.state.lock().balance
    }

    pub fn deposit(&self, amount: Amount) -> Result<Amount, AccountError> {
        if amount <= 0 {
            return Err(AccountError::InvalidAmount { amount });
        }

        let mut state = self.state.lock();
        let new_balance = state
            .balance
            .checked_add(amount)
            .filter(|balance| *balance <= self.max_balance)
            .ok_or(AccountError::LimitExceeded {
                balance: state.balance,
                amount,
                max_balance: self.max_balance,
            })?;

        state.balance = new_balance;
        state.log(&self.id, Operation::Deposit, Some(amount));
        debug!(id = %self.id, amount, balance = new_balance, "deposit");
        Ok(new_balance)
    }

    pub fn withdraw(&self, amount: Amount) -> Result<Amount, AccountError> {
        if amount <= 0 {
            return Err(AccountError::InvalidAmount { amount });
        }

        let mut state = self.state.lock();
        if state.balance < amount {
            return Err(AccountError::InsufficientFunds {
                balance: state.balance,
                amount,
            });
        }

        state.balance -= amount;
        let new_balance = state.balance;
        state.log(&self.id, Operation::Withdraw, Some(amount));
        debug!(id = %self.id, amount, balance = new_balance, "withdraw");
        Ok(new_balance)
    }

    /// Display metadata only, nothing is written to the passbook.
    pub fn rename(&self, name: impl Into<String>) {
        let name = name.into();
        debug!(id = %self.id, %name, "rename");
        self.state.lock().name = name;
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        let state = self.state.lock();
        AccountSnapshot {
            id: self.id.clone(),
            name: state.name.clone(),
            balance: state.balance,
        }
    }

    /// Passbook entries in the order they were committed.
    pub fn passbook(&self) -> Vec<PassbookEntry> {
        self.state.lock().passbook.clone()
    }

    pub fn dump(&self) -> String {
        self.snapshot().to_string()
    }

    /// Reports are line-terminated by whoever prints them.
    pub fn dump_passbook(&self) -> String {
        let state = self.state.lock();
        let mut out = String::from("--- BEGIN LOG ---\n");
        for entry in &state.passbook {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out.push_str("---  END LOG  ---");
        out
    }
}
