use std::collections::HashSet;

use crate::account::AccountId;

/// Which wallets are currently showing their expanded (full-format) balance.
///
/// Plain value type: clone it before mutating when a change notification
/// needs the previous state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpandedWallets {
    expanded: HashSet<AccountId>,
}

impl ExpandedWallets {
    /// Flips a wallet between expanded and collapsed. Returns `true` when
    /// the wallet ends up expanded.
    pub fn toggle(&mut self, wallet: AccountId) -> bool {
        if self.expanded.remove(&wallet) {
            false
        } else {
            self.expanded.insert(wallet);
            true
        }
    }

    pub fn is_expanded(&self, wallet: AccountId) -> bool {
        self.expanded.contains(&wallet)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
