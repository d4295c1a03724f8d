use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    account::{AccountId, AccountStore},
    ledger::{Ledger, TransactionEntry},
};

use super::{TransferError, TransferService};

type TransferListener = Box<dyn FnMut(&TransactionEntry)>;

/// The whole game bank in memory: the balance store, the transfer log and
/// any listeners a presentation layer registered.
///
/// State is owned here and nowhere else; callers hand the bank around by
/// reference instead of reaching for globals.
pub struct InMemoryBank {
    pub accounts: AccountStore,
    pub ledger: Ledger,
    listeners: Vec<TransferListener>,
}

impl InMemoryBank {
    pub fn new(player_count: u32, starting_balance: Decimal) -> Self {
        InMemoryBank {
            accounts: AccountStore::new(player_count, starting_balance),
            ledger: Ledger::default(),
            listeners: Vec::new(),
        }
    }

    /// Registers a callback invoked after every completed transfer, e.g. to
    /// push the entry into a per-wallet history view.
    pub fn on_transfer(&mut self, listener: impl FnMut(&TransactionEntry) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl TransferService for InMemoryBank {
    fn transfer(
        &mut self,
        sender: AccountId,
        receiver: AccountId,
        amount: Decimal,
    ) -> Result<TransactionEntry, TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount(amount));
        }
        if sender == receiver {
            return Err(TransferError::SelfTransfer(sender));
        }

        if self.accounts.adjust(sender, -amount).is_err() {
            return Err(TransferError::UnknownSender(sender));
        }
        if self.accounts.adjust(receiver, amount).is_err() {
            // the debit above succeeded, so the sender exists and the
            // rollback cannot fail
            let _ = self.accounts.adjust(sender, amount);
            return Err(TransferError::UnknownReceiver(receiver));
        }

        let entry = TransactionEntry {
            timestamp: Utc::now(),
            sender,
            receiver,
            amount,
        };
        self.ledger.append(entry.clone());
        debug!(%sender, %receiver, %amount, "transfer completed");
        for listener in &mut self.listeners {
            listener(&entry);
        }
        Ok(entry)
    }
}
