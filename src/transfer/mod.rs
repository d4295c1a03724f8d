use rust_decimal::Decimal;
use thiserror::Error;

use crate::{account::AccountId, ledger::TransactionEntry};

pub mod in_memory_bank;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("Unknown sender account `{0}`")]
    UnknownSender(AccountId),
    #[error("Unknown receiver account `{0}`")]
    UnknownReceiver(AccountId),
    #[error("Transfer amount must be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("Sender and receiver must differ, both are `{0}`")]
    SelfTransfer(AccountId),
}

pub trait TransferService {
    /// Moves `amount` from `sender` to `receiver` and records the transfer.
    ///
    /// All-or-nothing: on any error both balances are exactly as they were
    /// before the call and nothing is logged.
    fn transfer(
        &mut self,
        sender: AccountId,
        receiver: AccountId,
        amount: Decimal,
    ) -> Result<TransactionEntry, TransferError>;
}
