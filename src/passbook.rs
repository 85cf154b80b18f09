use std::fmt;

use chrono::{DateTime, Local};

use crate::{account::Amount, bank::AccountId};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open,
    Deposit,
    Withdraw,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Open => "OPEN",
            Operation::Deposit => "DEPOSIT",
            Operation::Withdraw => "WITHDRAW",
        })
    }
}

/// One immutable passbook line.
///
/// `balance` is the balance right after the operation was applied, and
/// `amount` is only present for deposits and withdrawals. Timestamps compare
/// by instant and print as local wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassbookEntry {
    timestamp: DateTime<Local>,
    operation: Operation,
    id: AccountId,
    name: String,
    balance: Amount,
    amount: Option<Amount>,
}

impl PassbookEntry {
    /// Stamps the entry with the current local time.
    pub(crate) fn record(
        operation: Operation,
        id: &str,
        name: &str,
        balance: Amount,
        amount: Option<Amount>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            operation,
            id: id.to_owned(),
            name: name.to_owned(),
            balance,
            amount,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }
}

impl fmt::Display for PassbookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}\tID:{}\tNAME:{}\tBALANCE:{:>10}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.operation,
            self.id,
            self.name,
            self.balance
        )?;
        if let Some(amount) = self.amount {
            write!(f, "\tAMOUNT:{amount:>10}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone};

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        Local.from_local_datetime(&naive).unwrap()
    }

    fn entry_at(timestamp: DateTime<Local>) -> PassbookEntry {
        PassbookEntry {
            timestamp,
            operation: Operation::Deposit,
            id: "0000000".to_string(),
            name: "Doi".to_string(),
            balance: 1,
            amount: Some(1),
        }
    }

    #[test]
    fn open_entry_has_no_amount_column() {
        let entry = PassbookEntry {
            timestamp: at(9, 30, 0),
            operation: Operation::Open,
            id: "0000000".to_string(),
            name: "Doi".to_string(),
            balance: 0,
            amount: None,
        };
        assert_eq!(
            entry.to_string(),
            "[2024-04-01 09:30:00] OPEN\tID:0000000\tNAME:Doi\tBALANCE:         0"
        );
    }

    #[test]
    fn deposit_entry_pads_balance_and_amount() {
        let entry = PassbookEntry {
            timestamp: at(17, 5, 42),
            operation: Operation::Deposit,
            id: "0000012".to_string(),
            name: "Suzuki".to_string(),
            balance: 110000,
            amount: Some(10000),
        };
        assert_eq!(
            entry.to_string(),
            "[2024-04-01 17:05:42] DEPOSIT\tID:0000012\tNAME:Suzuki\tBALANCE:    110000\tAMOUNT:     10000"
        );
    }

    #[test]
    fn record_uses_current_time() {
        let before = Local::now();
        let entry = PassbookEntry::record(Operation::Withdraw, "0000001", "Doi", 5, Some(3));
        let after = Local::now();
        assert!(before <= entry.timestamp() && entry.timestamp() <= after);
        assert_eq!(entry.operation(), Operation::Withdraw);
        assert_eq!(entry.amount(), Some(3));
        assert_eq!(entry.to_string().split('\t').count(), 5);
    }

    #[test]
    fn timestamps_order_by_instant_across_offset_change() {
        // 01:30 EDT happens before 01:10 EST on the night clocks go back
        let edt = FixedOffset::west_opt(4 * 3600).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let first = edt.with_ymd_and_hms(2024, 11, 3, 1, 30, 0).unwrap();
        let second = est.with_ymd_and_hms(2024, 11, 3, 1, 10, 0).unwrap();
        assert!(first.naive_local() > second.naive_local());

        let first = entry_at(first.with_timezone(&Local));
        let second = entry_at(second.with_timezone(&Local));
        assert!(first.timestamp() < second.timestamp());
    }
}
