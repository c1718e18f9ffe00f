/// Key codes representing individual keys on a keypad or keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key. Only `'0'..='9'` and `'.'` affect the amount.
    Char(char),
    /// The Escape key, clears the amount.
    Esc,
    /// The Enter/Return key. The editor ignores it; hosts usually commit on it.
    Enter,
    /// The Backspace key, removes the last entered digit or decimal point.
    Backspace,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Modifiers that turn a key press into a shortcut rather than text.
    pub const SHORTCUT: Modifiers = Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::META);
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::empty(),
        }
    }
}

/// Input events that can be processed by the amount editor.
///
/// Hosts with a text input channel (IME, on-screen keypads) can forward
/// characters as `ReceivedChar`; raw key presses go through `Key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press event.
    Key(KeyEvent),
    /// A character received from the host's text input channel.
    ReceivedChar(char),
}
