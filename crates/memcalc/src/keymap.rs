//! Key dispatch table
//!
//! Maps browser `KeyboardEvent.key` names to controller [`Action`]s. Keys not
//! in [`KEY_BINDINGS`] are ignored by every front-end.

use serde::{Deserialize, Serialize};

/// A single controller operation triggered by a key or a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Append a character to the display
    Append(char),
    /// Evaluate the display (`=`)
    Evaluate,
    /// Remove the last display character (DEL)
    DeleteLast,
    /// Empty the display (C)
    Clear,
    /// Square root of the display value (√)
    SquareRoot,
    /// Display value divided by 100 (%)
    Percentage,
    /// Display value squared (x²)
    Square,
    /// MC
    MemoryClear,
    /// MR
    MemoryRecall,
    /// M+
    MemoryAdd,
    /// M-
    MemorySubtract,
}

impl Action {
    /// Short label used by keypads and logs
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Append(ch) => ch.to_string(),
            Self::Evaluate => "=".into(),
            Self::DeleteLast => "DEL".into(),
            Self::Clear => "C".into(),
            Self::SquareRoot => "√".into(),
            Self::Percentage => "%".into(),
            Self::Square => "x²".into(),
            Self::MemoryClear => "MC".into(),
            Self::MemoryRecall => "MR".into(),
            Self::MemoryAdd => "M+".into(),
            Self::MemorySubtract => "M-".into(),
        }
    }
}

/// Keyboard bindings, keyed by `KeyboardEvent.key`
pub const KEY_BINDINGS: &[(&str, Action)] = &[
    ("0", Action::Append('0')),
    ("1", Action::Append('1')),
    ("2", Action::Append('2')),
    ("3", Action::Append('3')),
    ("4", Action::Append('4')),
    ("5", Action::Append('5')),
    ("6", Action::Append('6')),
    ("7", Action::Append('7')),
    ("8", Action::Append('8')),
    ("9", Action::Append('9')),
    ("+", Action::Append('+')),
    ("-", Action::Append('-')),
    ("*", Action::Append('*')),
    ("/", Action::Append('/')),
    ("(", Action::Append('(')),
    (")", Action::Append(')')),
    (".", Action::Append('.')),
    ("Enter", Action::Evaluate),
    ("Backspace", Action::DeleteLast),
    ("Escape", Action::Clear),
    ("s", Action::SquareRoot),
    ("S", Action::SquareRoot),
    ("%", Action::Percentage),
];

/// Button grid shared by every keypad, row by row.
///
/// ```text
/// [MC] [MR] [M+] [M-]
/// [ C] [DEL] [ %] [ /]
/// [ 7] [ 8] [ 9] [ *]
/// [ 4] [ 5] [ 6] [ -]
/// [ 1] [ 2] [ 3] [ +]
/// [ 0] [ .] [ (] [ )]
/// [ √] [x²] [ =]
/// ```
pub const KEYPAD_ROWS: &[&[Action]] = &[
    &[
        Action::MemoryClear,
        Action::MemoryRecall,
        Action::MemoryAdd,
        Action::MemorySubtract,
    ],
    &[
        Action::Clear,
        Action::DeleteLast,
        Action::Percentage,
        Action::Append('/'),
    ],
    &[
        Action::Append('7'),
        Action::Append('8'),
        Action::Append('9'),
        Action::Append('*'),
    ],
    &[
        Action::Append('4'),
        Action::Append('5'),
        Action::Append('6'),
        Action::Append('-'),
    ],
    &[
        Action::Append('1'),
        Action::Append('2'),
        Action::Append('3'),
        Action::Append('+'),
    ],
    &[
        Action::Append('0'),
        Action::Append('.'),
        Action::Append('('),
        Action::Append(')'),
    ],
    &[Action::SquareRoot, Action::Square, Action::Evaluate],
];

/// Lookup over [`KEY_BINDINGS`]
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMap;

impl KeyMap {
    /// Returns the action bound to `key`, if any
    #[must_use]
    pub fn lookup(key: &str) -> Option<Action> {
        KEY_BINDINGS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, action)| *action)
    }

    /// Whether the browser's default handling of `key` must be suppressed.
    ///
    /// Enter would otherwise submit the surrounding form.
    #[must_use]
    pub fn prevents_default(key: &str) -> bool {
        key == "Enter"
    }
}
