//! Browser keypad
//!
//! One `<button>` per entry of [`KEYPAD_ROWS`], each with a stable element id
//! (`btn-7`, `btn-plus`, `btn-mc`, ...) that click handlers resolve back to an
//! [`Action`].

use super::dom::{DomElement, MockDom};
use crate::keymap::{Action, KEYPAD_ROWS};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: Action,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    #[must_use]
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        Self {
            action,
            id: button_id(action),
            row,
            col,
        }
    }

    /// Creates the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.action.label())
            .with_class("keypad-btn")
            .with_class(&format!("keypad-row-{}", self.row))
            .with_class(&format!("keypad-col-{}", self.col))
            .with_attr("data-action", &format!("{:?}", self.action))
    }
}

/// Element ID for the button bound to `action`
#[must_use]
pub fn button_id(action: Action) -> String {
    let name = match action {
        Action::Append(ch) if ch.is_ascii_digit() => return format!("btn-{ch}"),
        Action::Append('+') => "plus",
        Action::Append('-') => "minus",
        Action::Append('*') => "times",
        Action::Append('/') => "divide",
        Action::Append('.') => "decimal",
        Action::Append('(') => "open-paren",
        Action::Append(')') => "close-paren",
        Action::Append(_) => "char",
        Action::Evaluate => "equals",
        Action::DeleteLast => "del",
        Action::Clear => "clear",
        Action::SquareRoot => "sqrt",
        Action::Percentage => "percent",
        Action::Square => "square",
        Action::MemoryClear => "mc",
        Action::MemoryRecall => "mr",
        Action::MemoryAdd => "mplus",
        Action::MemorySubtract => "mminus",
    };
    format!("btn-{name}")
}

/// Browser keypad layout
#[derive(Debug, Clone)]
pub struct WebKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WebKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WebKeypad {
    /// Creates the standard memory calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_ROWS
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButtonDef::new(*action, row, col))
            })
            .collect();
        Self { buttons }
    }

    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn find_button_by_action(&self, action: Action) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Resolves a clicked element ID to its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Action> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Registers every button element in `dom`
    pub fn mount(&self, dom: &mut MockDom) {
        for btn in &self.buttons {
            dom.register_element(btn.to_element());
        }
    }
}

impl MockDom {
    /// Builds the calculator page: `input#display`, `div#memoryDisplay` and
    /// one button per keypad entry
    #[must_use]
    pub fn calculator(keypad: &WebKeypad) -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("input")
                .with_id(super::DISPLAY_ID)
                .with_attr("type", "text")
                .with_attr("readonly", "true"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(super::MEMORY_DISPLAY_ID)
                .with_text("M: 0"),
        );
        keypad.mount(&mut dom);
        dom
    }
}
