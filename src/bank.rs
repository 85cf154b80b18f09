use std::{collections::BTreeMap, sync::Arc};

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info};

use crate::account::{Account, AccountError, AccountSnapshot, Amount};

/// Zero-padded decimal account number, e.g. `0000042`.
pub type AccountId = String;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Account `{id}` does not exist")]
    AccountNotFound { id: AccountId },
    #[error("No account numbers left, the branch limit is {max_id}")]
    CapacityExceeded { max_id: u32 },
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// Limits fixed for the lifetime of a [`Bank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankConfig {
    /// Upper bound for any account balance.
    pub max_balance: Amount,
    /// Largest account number the branch may issue.
    pub max_id: u32,
}

impl BankConfig {
    pub const DEFAULT_MAX_BALANCE: Amount = 1_000_000_000;
    pub const DEFAULT_MAX_ID: u32 = 9_999_999;

    /// Number of digits issued ids are padded to.
    pub fn id_width(&self) -> usize {
        self.max_id.checked_ilog10().unwrap_or(0) as usize + 1
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            max_balance: Self::DEFAULT_MAX_BALANCE,
            max_id: Self::DEFAULT_MAX_ID,
        }
    }
}

#[derive(Debug, Default)]
struct Registry {
    accounts: BTreeMap<AccountId, Arc<Account>>,
    next_account_id: u32,
    exhausted: bool,
}

/// A bank branch: issues account numbers and routes operations to accounts.
///
/// The registry lock is held only to issue ids or to look an account up;
/// balance operations then run under the account's own lock, so accounts
/// never contend with each other.
#[derive(Debug, Default)]
pub struct Bank {
    config: BankConfig,
    registry: RwLock<Registry>,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        Self {
            config,
            registry: RwLock::default(),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn open_account(&self, name: &str) -> Result<AccountId, BankError> {
        if name.is_empty() {
            return Err(BankError::InvalidArgument("account name must not be empty"));
        }

        let mut registry = self.registry.write();
        if registry.exhausted || registry.next_account_id > self.config.max_id {
            return Err(BankError::CapacityExceeded {
                max_id: self.config.max_id,
            });
        }

        let id = format!(
            "{:0width$}",
            registry.next_account_id,
            width = self.config.id_width()
        );
        let account = Account::new(id.clone(), name, self.config.max_balance);
        registry.accounts.insert(id.clone(), Arc::new(account));
        match registry.next_account_id.checked_add(1) {
            Some(next) => registry.next_account_id = next,
            None => registry.exhausted = true,
        }

        info!(%id, name, "account opened");
        Ok(id)
    }

    pub fn deposit(&self, id: &str, amount: Amount) -> Result<Amount, BankError> {
        Ok(self.search_account(id)?.deposit(amount)?)
    }

    pub fn withdraw(&self, id: &str, amount: Amount) -> Result<Amount, BankError> {
        Ok(self.search_account(id)?.withdraw(amount)?)
    }

    pub fn check_balance(&self, id: &str) -> Result<Amount, BankError> {
        Ok(self.search_account(id)?.balance())
    }

    pub fn rename_account(&self, id: &str, name: &str) -> Result<(), BankError> {
        if name.is_empty() {
            return Err(BankError::InvalidArgument("account name must not be empty"));
        }
        self.search_account(id)?.rename(name);
        debug!(id, name, "account renamed");
        Ok(())
    }

    pub fn dump_account(&self, id: &str) -> Result<String, BankError> {
        Ok(self.search_account(id)?.dump())
    }

    pub fn dump_account_passbook(&self, id: &str) -> Result<String, BankError> {
        Ok(self.search_account(id)?.dump_passbook())
    }

    /// Shared handle to an account; the registry lock is released on return.
    pub fn search_account(&self, id: &str) -> Result<Arc<Account>, BankError> {
        self.registry
            .read()
            .accounts
            .get(id)
            .cloned()
            .ok_or_else(|| BankError::AccountNotFound { id: id.to_owned() })
    }

    /// Snapshots of every account, ordered by id.
    pub fn accounts(&self) -> Vec<AccountSnapshot> {
        let accounts: Vec<Arc<Account>> =
            self.registry.read().accounts.values().cloned().collect();
        accounts.iter().map(|acc| acc.snapshot()).collect()
    }

    pub fn len(&self) -> usize {
        self.registry.read().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
