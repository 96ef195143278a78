//! Decimal-safe money helpers.
//!
//! All monetary aggregates go through [`sum_amounts`] so that revenue and
//! payment totals accumulate in `Decimal` rather than binary floating point.

use rust_decimal::{Decimal, RoundingStrategy};

/// Sums monetary amounts exactly.
pub fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().fold(Decimal::ZERO, |acc, amount| acc + amount)
}

/// Rounds an amount to cents, half away from zero.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount the way the French locale displays currency:
/// space-grouped thousands, comma decimal separator, two decimals,
/// currency code suffix.
///
/// ```ignore
/// assert_eq!(format_amount(dec!(1234.5), "MAD"), "1 234,50 MAD");
/// ```
#[must_use]
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rounded = round_cents(amount);
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if currency.is_empty() {
        format!("{sign}{grouped},{fraction}")
    } else {
        format!("{sign}{grouped},{fraction} {currency}")
    }
}
