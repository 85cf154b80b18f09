use std::io::Read;

use crate::{account::Amount, command::BankControl};
use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScriptRow {
    #[serde(rename = "type")]
    pub control: BankControl,
    pub id: Option<String>,
    pub name: Option<String>,
    pub amount: Option<Amount>,
}

/// Parses a branch script in CSV format, with a `type,id,name,amount` header.
///
/// Each item carries the line it was read from, so errors can point at it.
pub struct CsvScriptParser<R> {
    iter: DeserializeRecordsIntoIter<R, ScriptRow>,
}

impl<R> CsvScriptParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvScriptParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<ScriptRow>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
