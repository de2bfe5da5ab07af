//! Terminal front-end
//!
//! A ratatui view over the controller, driven by crossterm key and mouse
//! events.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, TuiView};
pub use input::{key_name, InputHandler, KeyAction, FUNCTION_KEYS};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{memory_style, render, CalculatorUI, UiLayout, HELP_SHORTCUTS};
