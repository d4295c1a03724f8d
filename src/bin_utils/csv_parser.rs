use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::account::AccountId;

#[derive(Debug, Deserialize)]
pub struct Transfer {
    pub sender: AccountId,
    pub receiver: AccountId,
    pub amount: Decimal,
}

/// Parses a transfer list in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct CsvTransferParser<R> {
    iter: DeserializeRecordsIntoIter<R, Transfer>,
}

impl<R> CsvTransferParser<R>
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

impl<R> Iterator for CsvTransferParser<R>
where
    R: Read,
{
    type Item = (u64, Transfer);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
