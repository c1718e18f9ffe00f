use std::ops;

use unicode_segmentation::UnicodeSegmentation;

/// The current entry mode of the amount editor.
///
/// The editor starts in `Whole` and moves into the fraction modes once a
/// decimal point is typed. Each mode fixes how many fractional digits have
/// been entered, so the count is never tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing dollars, no decimal point yet.
    #[default]
    Whole,
    /// A decimal point was typed, no fractional digits yet.
    FractionNoDigits,
    /// One fractional digit typed. It is shown in the tenths place (`.5` is `.50`).
    FractionOneDigit,
    /// `0` then a second digit were typed. Only the second digit is stored,
    /// and it is shown in the hundredths place (`.05`).
    FractionOneDigitTenths,
    /// Two fractional digits typed, the first nonzero. Further digits are ignored.
    FractionTwoDigits,
}

impl Mode {
    /// Number of digits the user has typed after the decimal point.
    pub fn fraction_digits(self) -> u8 {
        match self {
            Mode::Whole | Mode::FractionNoDigits => 0,
            Mode::FractionOneDigit => 1,
            Mode::FractionOneDigitTenths | Mode::FractionTwoDigits => 2,
        }
    }

    /// Whether a decimal point is part of the entry.
    pub fn is_fractional(self) -> bool {
        !matches!(self, Mode::Whole)
    }
}

/// A keystroke that can change the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    /// The decimal point.
    DecimalPoint,
}

impl Keystroke {
    /// Classifies a character, returning `None` for anything that is neither
    /// an ASCII digit nor `'.'`.
    pub fn from_char(ch: char) -> Option<Keystroke> {
        match ch {
            '.' => Some(Keystroke::DecimalPoint),
            '0'..='9' => Some(Keystroke::Digit(ch as u8 - b'0')),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Keystroke::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Keystroke::DecimalPoint => '.',
        }
    }
}

/// Whether an input changed the editor state.
///
/// Hosts only need to re-render after `Changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Ignored,
}

impl Outcome {
    pub fn is_changed(self) -> bool {
        matches!(self, Outcome::Changed)
    }
}

/// The part of a formatted amount made of filler digits the user has not typed.
///
/// Offsets are half-open `[start, end)` and counted in grapheme clusters of
/// the formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderRange {
    /// The first filler position (inclusive).
    pub start: usize,
    /// One past the last filler position (exclusive).
    pub end: usize,
}

impl PlaceholderRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts the grapheme offsets into a byte range of `formatted`.
    ///
    /// Offsets past the end of the string are clamped to its length.
    pub fn byte_range(&self, formatted: &str) -> ops::Range<usize> {
        let mut start = formatted.len();
        let mut end = formatted.len();
        for (i, (byte, _)) in formatted.grapheme_indices(true).enumerate() {
            if i == self.start {
                start = byte;
            }
            if i == self.end {
                end = byte;
                break;
            }
        }
        start.min(end)..end
    }

    /// Splits `formatted` into the text before the filler, the filler itself,
    /// and the text after it.
    pub fn split<'a>(&self, formatted: &'a str) -> (&'a str, &'a str, &'a str) {
        let range = self.byte_range(formatted);
        (
            &formatted[..range.start],
            &formatted[range.clone()],
            &formatted[range.end..],
        )
    }
}
