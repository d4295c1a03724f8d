use rust_decimal::{Decimal, RoundingStrategy};

use crate::account::Balance;

/// Full display form of a balance: `$` plus a comma-grouped numeral, or `∞`
/// for the Bank.
pub fn format_currency(balance: Balance) -> String {
    match balance {
        Balance::Infinite => "∞".to_string(),
        Balance::Finite(amount) => format!("${}", group_thousands(amount)),
    }
}

/// Compact display form used by collapsed wallets.
///
/// Expanded wallets always get the full form. Collapsed ones abbreviate:
/// one decimal place with an `M` suffix from a million up, whole thousands
/// with a `K` suffix below that. Rounding is half-away-from-zero, so 999,999
/// renders as `$1000K` rather than jumping to the `M` tier. That quirk is
/// load-bearing for existing displays; keep it.
pub fn format_currency_abbreviated(balance: Balance, expanded: bool) -> String {
    if expanded {
        return format_currency(balance);
    }
    let Balance::Finite(amount) = balance else {
        return "∞".to_string();
    };
    if amount >= Decimal::from(1_000_000) {
        let mut millions = (amount / Decimal::from(1_000_000))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        millions.rescale(1);
        format!("${millions}M")
    } else if amount >= Decimal::ONE_THOUSAND {
        let thousands = (amount / Decimal::ONE_THOUSAND)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        format!("${thousands}K")
    } else {
        format_currency(balance)
    }
}

fn group_thousands(amount: Decimal) -> String {
    let whole = amount.abs().trunc().to_string();
    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 1);
    if amount.is_sign_negative() {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    let fraction = amount.abs().fract().normalize();
    if !fraction.is_zero() {
        // "0.5" -> ".5"
        out.push_str(fraction.to_string().trim_start_matches('0'));
    }
    out
}
