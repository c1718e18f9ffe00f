//! Pure number and currency formatting helpers.

use crate::amount::Amount;

/// Currency symbol placed before the amount.
pub const CURRENCY_SYMBOL: char = '$';
/// Separator inserted between groups of three whole digits.
pub const GROUPING_SEPARATOR: char = ',';
/// Separator between whole and fractional digits.
pub const DECIMAL_SEPARATOR: char = '.';

/// How the fractional part of an amount is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionDisplay {
    /// No decimal point, whole dollars only (`$12`).
    Hidden,
    /// Decimal point followed by exactly two digits (`$12.00`).
    TwoDigits,
}

/// Number of decimal digits in `n`. Zero has one digit.
pub fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Appends the decimal digits of `value` to `prefix`.
///
/// `combine(12, 34) == 1234`, `combine(1, 0) == 10`. Saturates at `u64::MAX`.
pub fn combine(prefix: u64, value: u64) -> u64 {
    10u64
        .checked_pow(digit_count(value))
        .and_then(|scale| prefix.checked_mul(scale))
        .and_then(|shifted| shifted.checked_add(value))
        .unwrap_or(u64::MAX)
}

/// Groups the digits of `n` in threes, most significant group first.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUPING_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Formats an amount as a US dollar string.
///
/// `Hidden` expects a whole-dollar amount; any cents are dropped.
pub fn format_currency(amount: Amount, fraction: FractionDisplay) -> String {
    let mut out = String::new();
    out.push(CURRENCY_SYMBOL);
    out.push_str(&group_digits(amount.whole()));
    match fraction {
        FractionDisplay::Hidden => {
            debug_assert_eq!(amount.fraction(), 0, "cents dropped from {amount:?}");
        }
        FractionDisplay::TwoDigits => {
            out.push(DECIMAL_SEPARATOR);
            out.push_str(&format!("{:02}", amount.fraction()));
        }
    }
    out
}

/// Number of grouping separators `group_digits` inserts for `n`.
pub fn separator_count(n: u64) -> usize {
    (digit_count(n) as usize - 1) / 3
}
