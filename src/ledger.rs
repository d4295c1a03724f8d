use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::AccountId;

/// Record of one completed transfer. Entries are only ever created by a
/// successful transfer and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionEntry {
    pub timestamp: DateTime<Utc>,
    pub sender: AccountId,
    pub receiver: AccountId,
    pub amount: Decimal,
}

/// Append-only log of completed transfers, in the order they happened.
/// Grows without bound; only an explicit [`clear`](Ledger::clear) empties it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    entries: Vec<TransactionEntry>,
}

impl Ledger {
    pub fn append(&mut self, entry: TransactionEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only view of every entry, oldest first.
    pub fn all(&self) -> &[TransactionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn entry(amount: i64) -> TransactionEntry {
        TransactionEntry {
            timestamp: Utc::now(),
            sender: AccountId::Player(1),
            receiver: AccountId::Player(2),
            amount: Decimal::from_i64(amount).unwrap(),
        }
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut ledger = Ledger::default();
        assert!(ledger.is_empty());

        for amount in [10, 20, 30] {
            ledger.append(entry(amount));
        }

        assert_eq!(ledger.len(), 3);
        let amounts: Vec<Decimal> = ledger.all().iter().map(|e| e.amount).collect();
        assert_eq!(
            amounts,
            vec![
                Decimal::from_i64(10).unwrap(),
                Decimal::from_i64(20).unwrap(),
                Decimal::from_i64(30).unwrap()
            ]
        );
    }

    #[test]
    fn clear_empties_the_log() {
        let mut ledger = Ledger::default();
        ledger.append(entry(5));
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.all(), &[]);
    }
}
