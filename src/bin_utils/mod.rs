//! This module could be a separate crate on its own, to bootstrap [`board_bank`]
//! within a binary, but for simplicity purposes, I include this module directly
//! in the binary.

use std::io::{Read, Write};

use crate::transfer::{TransferError, TransferService, in_memory_bank::InMemoryBank};
use anyhow::Result;
use csv_parser::CsvTransferParser;
use csv_printer::{BalanceRow, print_balances, print_log};
use rust_decimal::Decimal;

pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    /// Where to write the transfer log, if anywhere.
    pub log_output: Option<Box<dyn Write + 'w>>,
    pub player_count: u32,
    pub starting_balance: Decimal,
    pub error_printer: Box<dyn FnMut(u64, TransferError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvTransferParser::new(self.input);

        let mut bank = InMemoryBank::new(self.player_count, self.starting_balance);

        for (line, row) in parser {
            if let Err(err) = bank.transfer(row.sender, row.receiver, row.amount) {
                (self.error_printer)(line, err);
            }
        }

        print_balances(
            self.output,
            bank.accounts
                .accounts()
                .map(|(account, balance)| BalanceRow { account, balance }),
        )?;

        if let Some(log_output) = &mut self.log_output {
            print_log(log_output, bank.ledger.all())?;
        }
        Ok(())
    }
}
