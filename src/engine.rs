use tracing::{debug, trace};

use crate::amount::Amount;
use crate::format::{FractionDisplay, combine, digit_count, format_currency, separator_count};
use crate::key::{InputEvent, KeyCode, Modifiers};
use crate::traits::AmountView;
use crate::types::{Keystroke, Mode, Outcome, PlaceholderRange};

/// Largest whole-dollar value the editor accepts, so that any two cents
/// digits still fit in an [`Amount`].
pub const MAX_WHOLE: u64 = (u64::MAX - 99) / 100;

// Grapheme width of the leading currency symbol and of the decimal point.
const SYMBOL_WIDTH: usize = 1;
const DECIMAL_WIDTH: usize = 1;

/// Keypad-driven currency amount editor.
///
/// Digits accumulate into the whole part until a decimal point is typed,
/// then into at most two fractional digits. Backspace undoes exactly one
/// accepted keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmountEditor {
    mode: Mode,
    whole: u64,
    // Meaning depends on the mode: the single typed digit in
    // `FractionOneDigit`, the hundredths digit in `FractionOneDigitTenths`,
    // both digits in `FractionTwoDigits`, zero otherwise.
    fraction: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub mode: Mode,
    pub whole_amount: u64,
    pub fractional_amount: u64,
    pub fractional_digit_count: u8,
}

#[derive(Debug, Default)]
pub struct EditorBuilder {
    amount: Option<Amount>,
}

impl EditorBuilder {
    /// Starts the editor showing `amount`, as if it had been typed.
    ///
    /// Whole dollars above [`MAX_WHOLE`] are clamped.
    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn build(self) -> AmountEditor {
        let mut editor = AmountEditor::default();
        if let Some(amount) = self.amount {
            for key in canonical_keystrokes(amount) {
                editor.insert(key);
            }
        }
        editor
    }
}

/// The shortest keystroke sequence that produces `amount` from an empty editor.
fn canonical_keystrokes(amount: Amount) -> Vec<Keystroke> {
    let whole = amount.whole().min(MAX_WHOLE);
    let fraction = amount.fraction();

    let mut keys = Vec::new();
    if whole > 0 {
        keys.extend(
            whole
                .to_string()
                .chars()
                .filter_map(Keystroke::from_char),
        );
    }
    if fraction > 0 {
        keys.push(Keystroke::DecimalPoint);
        keys.push(Keystroke::Digit((fraction / 10) as u8));
        if fraction % 10 != 0 {
            keys.push(Keystroke::Digit((fraction % 10) as u8));
        }
    }
    keys
}

impl AmountEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EditorBuilder {
        EditorBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fractional_digit_count(&self) -> u8 {
        self.mode.fraction_digits()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            mode: self.mode,
            whole_amount: self.whole,
            fractional_amount: self.fraction,
            fractional_digit_count: self.mode.fraction_digits(),
        }
    }

    /// Whether the editor is in its initial state.
    pub fn is_empty(&self) -> bool {
        self.mode == Mode::Whole && self.whole == 0
    }

    /// Feeds one character of host text input.
    ///
    /// Anything other than a single digit or `"."` is ignored.
    pub fn insert_text(&mut self, text: &str) -> Outcome {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => match Keystroke::from_char(ch) {
                Some(key) => self.insert(key),
                None => {
                    debug!(?ch, "ignoring non-numeric input");
                    Outcome::Ignored
                }
            },
            _ => {
                debug!(len = text.chars().count(), "ignoring multi-character input");
                Outcome::Ignored
            }
        }
    }

    pub fn insert(&mut self, key: Keystroke) -> Outcome {
        let before = self.mode;
        let outcome = match (self.mode, key) {
            (Mode::Whole, Keystroke::DecimalPoint) => {
                self.mode = Mode::FractionNoDigits;
                Outcome::Changed
            }
            (_, Keystroke::DecimalPoint) => Outcome::Ignored,
            (_, Keystroke::Digit(d)) if d > 9 => Outcome::Ignored,

            (Mode::Whole, Keystroke::Digit(d)) => {
                match self
                    .whole
                    .checked_mul(10)
                    .and_then(|w| w.checked_add(u64::from(d)))
                    .filter(|w| *w <= MAX_WHOLE && *w != self.whole)
                {
                    Some(whole) => {
                        self.whole = whole;
                        Outcome::Changed
                    }
                    None => Outcome::Ignored,
                }
            }
            (Mode::FractionNoDigits, Keystroke::Digit(d)) => {
                self.mode = Mode::FractionOneDigit;
                self.fraction = u64::from(d);
                Outcome::Changed
            }
            (Mode::FractionOneDigit, Keystroke::Digit(d)) => {
                if self.fraction == 0 {
                    // ".0d": keep only d, displayed as hundredths
                    self.mode = Mode::FractionOneDigitTenths;
                    self.fraction = u64::from(d);
                } else {
                    self.mode = Mode::FractionTwoDigits;
                    self.fraction = self.fraction * 10 + u64::from(d);
                }
                Outcome::Changed
            }
            (Mode::FractionOneDigitTenths | Mode::FractionTwoDigits, Keystroke::Digit(_)) => {
                Outcome::Ignored
            }
        };

        match outcome {
            Outcome::Changed => {
                trace!(from = ?before, to = ?self.mode, key = %key.to_char(), "keystroke accepted")
            }
            Outcome::Ignored => {
                debug!(mode = ?self.mode, key = %key.to_char(), "keystroke ignored")
            }
        }
        outcome
    }

    /// Removes the most recently accepted keystroke.
    pub fn delete_backward(&mut self) -> Outcome {
        let before = self.mode;
        match self.mode {
            Mode::Whole => {
                if self.whole == 0 {
                    return Outcome::Ignored;
                }
                self.whole /= 10;
            }
            Mode::FractionNoDigits => {
                self.mode = Mode::Whole;
            }
            Mode::FractionOneDigit => {
                self.mode = Mode::FractionNoDigits;
                self.fraction /= 10;
            }
            Mode::FractionOneDigitTenths => {
                // back to the typed "0"
                self.mode = Mode::FractionOneDigit;
                self.fraction /= 10;
            }
            Mode::FractionTwoDigits => {
                self.mode = Mode::FractionOneDigit;
                self.fraction /= 10;
            }
        }
        trace!(from = ?before, to = ?self.mode, "backspace");
        Outcome::Changed
    }

    /// Resets to an empty amount.
    pub fn clear(&mut self) -> Outcome {
        if self.is_empty() {
            return Outcome::Ignored;
        }
        *self = Self::default();
        trace!("cleared");
        Outcome::Changed
    }

    /// Applies a host input event.
    ///
    /// Characters insert, Backspace deletes and Esc clears. Key presses with
    /// CTRL, ALT or META held are treated as shortcuts and ignored.
    pub fn handle_event(&mut self, input: InputEvent) -> Outcome {
        match input {
            InputEvent::ReceivedChar(ch) => match Keystroke::from_char(ch) {
                Some(key) => self.insert(key),
                None => Outcome::Ignored,
            },
            InputEvent::Key(ke) if ke.mods.intersects(Modifiers::SHORTCUT) => Outcome::Ignored,
            InputEvent::Key(ke) => match ke.code {
                KeyCode::Char(ch) => match Keystroke::from_char(ch) {
                    Some(key) => self.insert(key),
                    None => Outcome::Ignored,
                },
                KeyCode::Backspace => self.delete_backward(),
                KeyCode::Esc => self.clear(),
                KeyCode::Enter => Outcome::Ignored,
            },
        }
    }

    /// The amount currently displayed.
    pub fn amount(&self) -> Amount {
        let cents = match self.mode {
            Mode::Whole | Mode::FractionNoDigits => return self.whole_amount(),
            // the lone digit sits in the tenths place
            Mode::FractionOneDigit => combine(self.whole, self.fraction).saturating_mul(10),
            Mode::FractionOneDigitTenths => {
                return Amount::from_parts(self.whole, self.fraction).unwrap_or(Amount::MAX);
            }
            Mode::FractionTwoDigits => combine(self.whole, self.fraction),
        };
        Amount::from_cents(cents)
    }

    fn whole_amount(&self) -> Amount {
        Amount::from_parts(self.whole, 0).unwrap_or(Amount::MAX)
    }

    pub fn formatted_amount(&self) -> String {
        let display = match self.mode {
            Mode::Whole => FractionDisplay::Hidden,
            _ => FractionDisplay::TwoDigits,
        };
        format_currency(self.amount(), display)
    }

    /// Range of filler digits in [`formatted_amount`](Self::formatted_amount),
    /// or `None` when every shown digit was typed.
    pub fn placeholder_range(&self) -> Option<PlaceholderRange> {
        // symbol, grouped whole digits, decimal point
        let fraction_start = SYMBOL_WIDTH
            + separator_count(self.whole)
            + digit_count(self.whole) as usize
            + DECIMAL_WIDTH;

        match self.mode {
            Mode::Whole if self.whole == 0 => Some(PlaceholderRange {
                start: SYMBOL_WIDTH,
                end: SYMBOL_WIDTH + 1,
            }),
            Mode::Whole => None,
            Mode::FractionNoDigits => Some(PlaceholderRange {
                start: fraction_start,
                end: fraction_start + 2,
            }),
            Mode::FractionOneDigit => Some(PlaceholderRange {
                start: fraction_start + 1,
                end: fraction_start + 2,
            }),
            Mode::FractionOneDigitTenths | Mode::FractionTwoDigits => None,
        }
    }

    /// Pushes the current display state to a host view.
    pub fn present<V: AmountView>(&self, view: &mut V) {
        view.render(&self.formatted_amount(), self.placeholder_range());
    }
}
