use std::io::Write;

use crate::account::{AccountSnapshot, Amount};
use anyhow::Context;
use csv::Writer;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub balance: Amount,
}

impl<'a> From<&'a AccountSnapshot> for AccountRow<'a> {
    fn from(snapshot: &'a AccountSnapshot) -> Self {
        Self {
            id: &snapshot.id,
            name: &snapshot.name,
            balance: snapshot.balance,
        }
    }
}

/// Writes the `id,name,balance` summary. Nothing is written for an empty bank.
pub fn print_accounts<'a, W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountRow<'a>>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for acc in accounts {
        let id = acc.id;
        writer
            .serialize(acc)
            .with_context(|| format!("Failed to write account `{id}`"))?;
    }
    writer.flush().context("Failed to flush account summary")
}
