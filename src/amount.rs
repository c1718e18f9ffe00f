use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::format::{
    CURRENCY_SYMBOL, DECIMAL_SEPARATOR, FractionDisplay, GROUPING_SEPARATOR, format_currency,
};

const CENTS_PER_DOLLAR: u64 = 100;

/// A non-negative currency amount stored as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    pub const ZERO: Amount = Amount { cents: 0 };
    pub const MAX: Amount = Amount { cents: u64::MAX };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Builds an amount from whole dollars and cents, `None` on overflow or
    /// when `cents` is 100 or more.
    pub fn from_parts(whole: u64, cents: u64) -> Option<Self> {
        if cents >= CENTS_PER_DOLLAR {
            return None;
        }
        whole
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|c| c.checked_add(cents))
            .map(Self::from_cents)
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Whole dollars.
    pub const fn whole(self) -> u64 {
        self.cents / CENTS_PER_DOLLAR
    }

    /// Cents past the whole dollars, `0..100`.
    pub const fn fraction(self) -> u64 {
        self.cents % CENTS_PER_DOLLAR
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(*self, FractionDisplay::TwoDigits))
    }
}

/// Errors returned when parsing an [`Amount`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    /// No digits at all.
    #[error("amount is empty")]
    Empty,

    /// A character that is not a digit, separator or leading symbol.
    #[error("unexpected character {ch:?} at byte {index}")]
    UnexpectedCharacter { ch: char, index: usize },

    /// More than two digits after the decimal point.
    #[error("at most two fractional digits are allowed, got {count}")]
    TooManyFractionDigits { count: usize },

    /// The value does not fit in the supported range.
    #[error("amount is too large")]
    Overflow,
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parses `"12"`, `"12.5"`, `"$1,234.56"` and `".05"`.
    ///
    /// A single fractional digit is read in the tenths place.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix(CURRENCY_SYMBOL).unwrap_or(s);
        let offset = s.len() - body.len();

        let mut whole: u64 = 0;
        let mut fraction: u64 = 0;
        let mut fraction_digits = 0usize;
        let mut seen_digit = false;
        let mut in_fraction = false;

        for (i, ch) in body.char_indices() {
            match ch {
                '0'..='9' => {
                    let d = u64::from(ch as u8 - b'0');
                    seen_digit = true;
                    if in_fraction {
                        fraction_digits += 1;
                        if fraction_digits > 2 {
                            return Err(ParseAmountError::TooManyFractionDigits {
                                count: body[i..].chars().take_while(char::is_ascii_digit).count()
                                    + 2,
                            });
                        }
                        fraction = fraction * 10 + d;
                    } else {
                        whole = whole
                            .checked_mul(10)
                            .and_then(|w| w.checked_add(d))
                            .ok_or(ParseAmountError::Overflow)?;
                    }
                }
                GROUPING_SEPARATOR if !in_fraction => {}
                DECIMAL_SEPARATOR if !in_fraction => in_fraction = true,
                _ => {
                    return Err(ParseAmountError::UnexpectedCharacter {
                        ch,
                        index: offset + i,
                    });
                }
            }
        }

        if !seen_digit {
            return Err(ParseAmountError::Empty);
        }
        if fraction_digits == 1 {
            fraction *= 10;
        }
        Amount::from_parts(whole, fraction).ok_or(ParseAmountError::Overflow)
    }
}
