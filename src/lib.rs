/// Account identities plus the in-memory balance store for the players,
/// the infinite Bank and the Tax pool.
pub mod account;

/// Balance display strings, full ("$1,500") and abbreviated ("$1.0M").
pub mod currency;

/// Value type tracking which wallets show their expanded balance.
pub mod expansion;

/// Append-only record of completed transfers.
pub mod ledger;

/// Transfer execution: validates a move of money between two accounts,
/// applies it all-or-nothing and records it in the ledger.
pub mod transfer;

/// Ideally, this module should exist in its own crate, as a way to
/// bootstrap the core logic. However, I want to use it for the integration
/// test so I put it here.
pub mod bin_utils;
