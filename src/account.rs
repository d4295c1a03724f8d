use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Identity of a party that can hold money: the infinite Bank, the Tax pool,
/// or a numbered player.
///
/// The textual form (`"Bank"`, `"Tax"`, `"Player 3"`) is the wire/display form
/// and round-trips through [`Display`](fmt::Display) and [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountId {
    Bank,
    Tax,
    Player(u32),
}

impl AccountId {
    pub fn is_bank(&self) -> bool {
        matches!(self, AccountId::Bank)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountId::Bank => write!(f, "Bank"),
            AccountId::Tax => write!(f, "Tax"),
            AccountId::Player(n) => write!(f, "Player {n}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a known account (expected `Bank`, `Tax` or `Player <n>`)")]
pub struct ParseAccountIdError(String);

impl FromStr for AccountId {
    type Err = ParseAccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bank" => Ok(AccountId::Bank),
            "Tax" => Ok(AccountId::Tax),
            _ => s
                .strip_prefix("Player ")
                .and_then(|n| n.parse().ok())
                .map(AccountId::Player)
                .ok_or_else(|| ParseAccountIdError(s.to_string())),
        }
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A balance as reported to callers. The Bank never exposes a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Finite(Decimal),
    Infinite,
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::Finite(amount) => write!(f, "{amount}"),
            Balance::Infinite => write!(f, "∞"),
        }
    }
}

impl Serialize for Balance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("No account found for `{0}`")]
    NotFound(AccountId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAccount {
    id: u32,
    balance: Decimal,
}

impl PlayerAccount {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

/// In-memory balances for every account in the game.
///
/// Players and Tax hold plain mutable numbers. Both may go negative: debt is
/// allowed game semantics and must not be rejected here. The Bank holds no
/// number at all, it reports [`Balance::Infinite`] and swallows adjustments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStore {
    players: Vec<PlayerAccount>,
    tax: Decimal,
}

impl AccountStore {
    pub fn new(player_count: u32, starting_balance: Decimal) -> Self {
        let mut store = AccountStore {
            players: Vec::new(),
            tax: Decimal::ZERO,
        };
        store.reset_players(player_count, starting_balance);
        store
    }

    /// Replaces the roster with `Player 1..=player_count`, each holding
    /// `starting_balance`. The Tax pool is left untouched.
    pub fn reset_players(&mut self, player_count: u32, starting_balance: Decimal) {
        self.players = (1..=player_count)
            .map(|id| PlayerAccount {
                id,
                balance: starting_balance,
            })
            .collect();
        tracing::debug!(player_count, %starting_balance, "players reset");
    }

    pub fn reset_tax(&mut self, amount: Decimal) {
        self.tax = amount;
    }

    pub fn players(&self) -> &[PlayerAccount] {
        &self.players
    }

    /// Current balance of an account. Unknown players report zero rather
    /// than an error, which is what balance displays expect.
    pub fn balance(&self, id: AccountId) -> Balance {
        match id {
            AccountId::Bank => Balance::Infinite,
            AccountId::Tax => Balance::Finite(self.tax),
            AccountId::Player(n) => Balance::Finite(
                self.players
                    .iter()
                    .find(|p| p.id == n)
                    .map(|p| p.balance)
                    .unwrap_or(Decimal::ZERO),
            ),
        }
    }

    /// Applies `delta` to a Tax or player balance. The Bank ignores the
    /// adjustment entirely; only an unknown player is an error.
    pub fn adjust(&mut self, id: AccountId, delta: Decimal) -> Result<(), AccountError> {
        match id {
            AccountId::Bank => Ok(()),
            AccountId::Tax => {
                self.tax += delta;
                Ok(())
            }
            AccountId::Player(n) => {
                let player = self
                    .players
                    .iter_mut()
                    .find(|p| p.id == n)
                    .ok_or(AccountError::NotFound(id))?;
                player.balance += delta;
                Ok(())
            }
        }
    }

    /// Every account with its balance, in display order: Bank, Tax, players.
    pub fn accounts(&self) -> impl Iterator<Item = (AccountId, Balance)> + '_ {
        [
            (AccountId::Bank, Balance::Infinite),
            (AccountId::Tax, Balance::Finite(self.tax)),
        ]
        .into_iter()
        .chain(
            self.players
                .iter()
                .map(|p| (AccountId::Player(p.id), Balance::Finite(p.balance))),
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from_i64(n).unwrap()
    }

    #[test]
    fn account_id_round_trip() {
        for (text, id) in [
            ("Bank", AccountId::Bank),
            ("Tax", AccountId::Tax),
            ("Player 1", AccountId::Player(1)),
            ("Player 12", AccountId::Player(12)),
        ] {
            assert_eq!(text.parse::<AccountId>().unwrap(), id);
            assert_eq!(id.to_string(), text);
        }

        assert!("Dog".parse::<AccountId>().is_err());
        assert!("Player ".parse::<AccountId>().is_err());
        assert!("Player x".parse::<AccountId>().is_err());
        assert_eq!(
            "banker".parse::<AccountId>().unwrap_err().to_string(),
            "`banker` is not a known account (expected `Bank`, `Tax` or `Player <n>`)"
        );
    }

    #[test]
    fn reset_players_builds_roster() {
        let store = AccountStore::new(4, dec(1500));
        assert_eq!(store.players().len(), 4);
        for (i, player) in store.players().iter().enumerate() {
            assert_eq!(player.id(), i as u32 + 1);
            assert_eq!(player.balance(), dec(1500));
        }
        assert_eq!(
            store.balance(AccountId::Player(4)),
            Balance::Finite(dec(1500))
        );
    }

    #[test]
    fn reset_players_leaves_tax_alone() {
        let mut store = AccountStore::new(2, dec(1500));
        store.adjust(AccountId::Tax, dec(75)).unwrap();
        store.reset_players(6, dec(2000));
        assert_eq!(store.players().len(), 6);
        assert_eq!(store.balance(AccountId::Tax), Balance::Finite(dec(75)));
        store.reset_tax(Decimal::ZERO);
        assert_eq!(
            store.balance(AccountId::Tax),
            Balance::Finite(Decimal::ZERO)
        );
    }

    #[test]
    fn bank_ignores_adjustments() {
        let mut store = AccountStore::new(1, dec(1500));
        store.adjust(AccountId::Bank, dec(-1_000_000)).unwrap();
        assert_eq!(store.balance(AccountId::Bank), Balance::Infinite);
    }

    #[test]
    fn balances_may_go_negative() {
        let mut store = AccountStore::new(1, dec(100));
        store.adjust(AccountId::Player(1), dec(-250)).unwrap();
        store.adjust(AccountId::Tax, dec(-40)).unwrap();
        assert_eq!(
            store.balance(AccountId::Player(1)),
            Balance::Finite(dec(-150))
        );
        assert_eq!(store.balance(AccountId::Tax), Balance::Finite(dec(-40)));
    }

    #[test]
    fn unknown_player_is_an_error() {
        let mut store = AccountStore::new(2, dec(1500));
        let err = store.adjust(AccountId::Player(9), dec(10)).unwrap_err();
        assert_eq!(err, AccountError::NotFound(AccountId::Player(9)));
        // balance queries stay permissive
        assert_eq!(
            store.balance(AccountId::Player(9)),
            Balance::Finite(Decimal::ZERO)
        );
    }

    #[test]
    fn accounts_snapshot_order() {
        let store = AccountStore::new(2, dec(10));
        let ids: Vec<AccountId> = store.accounts().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![
                AccountId::Bank,
                AccountId::Tax,
                AccountId::Player(1),
                AccountId::Player(2)
            ]
        );
    }
}
