use std::io::Write;

use csv::Writer;
use serde::Serialize;

use crate::{
    account::{AccountId, Balance},
    ledger::TransactionEntry,
};

#[derive(Debug, Serialize)]
pub struct BalanceRow {
    pub account: AccountId,
    pub balance: Balance,
}

pub fn print_balances<W>(
    output: &mut W,
    rows: impl Iterator<Item = BalanceRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

pub fn print_log<W>(output: &mut W, entries: &[TransactionEntry]) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for entry in entries {
        if let Err(err) = writer.serialize(entry) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
