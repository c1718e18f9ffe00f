pub mod amount;
pub mod engine;
pub mod format;
pub mod key;
pub mod traits;
pub mod types;

pub use crate::amount::{Amount, ParseAmountError};
pub use crate::engine::{AmountEditor, EditorBuilder, EditorSnapshot, MAX_WHOLE};
pub use crate::format::{FractionDisplay, combine, digit_count, format_currency};
pub use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers};
pub use crate::traits::AmountView;
pub use crate::types::{Keystroke, Mode, Outcome, PlaceholderRange};
