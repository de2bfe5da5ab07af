//! Unified calculator driver
//!
//! Every front-end implements [`CalculatorDriver`], so one set of behaviour
//! checks (`verify_*`) runs against the terminal and the browser keypad alike.

use crate::keymap::Action;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust,ignore
/// fn verify_square<D: CalculatorDriver>(driver: &mut D) {
///     driver.type_keys("5");
///     driver.click_button(Action::Square);
///     assert_eq!(driver.display(), "25");
/// }
/// ```
pub trait CalculatorDriver {
    /// Presses a key, named like `KeyboardEvent.key` (`"7"`, `"Enter"`)
    fn press_key(&mut self, key: &str);

    /// Clicks the keypad button bound to `action`
    fn click_button(&mut self, action: Action);

    /// Text currently shown in the display
    fn display(&self) -> String;

    /// Text of the memory indicator
    fn memory_label(&self) -> String;

    /// Whether the memory indicator is emphasised
    fn memory_active(&self) -> bool;

    /// Presses one key per character of `keys`
    fn type_keys(&mut self, keys: &str) {
        let mut buf = [0; 4];
        for ch in keys.chars() {
            self.press_key(ch.encode_utf8(&mut buf));
        }
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::CalculatorDriver;
    use crate::keymap::Action;
    use crate::tui::CalculatorApp;

    /// TUI-specific driver feeding crossterm key events into the app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    /// Converts a `KeyboardEvent.key` name into the terminal key code
    fn key_code(key: &str) -> Option<KeyCode> {
        match key {
            "Enter" => Some(KeyCode::Enter),
            "Backspace" => Some(KeyCode::Backspace),
            "Escape" => Some(KeyCode::Esc),
            "Tab" => Some(KeyCode::Tab),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(KeyCode::Char(ch)),
                    _ => key
                        .strip_prefix('F')
                        .and_then(|n| n.parse().ok())
                        .map(KeyCode::F),
                }
            }
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_key(&mut self, key: &str) {
            if let Some(code) = key_code(key) {
                self.app
                    .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
            }
        }

        fn click_button(&mut self, action: Action) {
            self.app.press_button(action);
        }

        fn display(&self) -> String {
            self.app.view().display.clone()
        }

        fn memory_label(&self) -> String {
            self.app.view().memory.label.clone()
        }

        fn memory_active(&self) -> bool {
            self.app.view().memory.is_active()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_key_code_names() {
            assert_eq!(key_code("Enter"), Some(KeyCode::Enter));
            assert_eq!(key_code("Escape"), Some(KeyCode::Esc));
            assert_eq!(key_code("7"), Some(KeyCode::Char('7')));
            assert_eq!(key_code("F4"), Some(KeyCode::F(4)));
            assert_eq!(key_code("Fx"), None);
            assert_eq!(key_code(""), None);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====
// These checks work with ANY CalculatorDriver implementation

/// Resets the display between checks
fn reset<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    assert_eq!(driver.display(), "");
}

/// Verifies typing an expression and evaluating it with Enter and `=`
pub fn verify_evaluation<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("2+3*4");
    assert_eq!(driver.display(), "2+3*4");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "14");

    reset(driver);
    driver.type_keys("(1+2)/4");
    driver.click_button(Action::Evaluate);
    assert_eq!(driver.display(), "0.75");
    reset(driver);
}

/// Verifies that failed evaluations show `Error` and later input appends to it
pub fn verify_error_display<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("5/0");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "Error");

    reset(driver);
    driver.type_keys("2+");
    driver.press_key("Enter");
    assert_eq!(driver.display(), "Error");
    driver.type_keys("5");
    assert_eq!(driver.display(), "Error5");
    reset(driver);
}

/// Verifies √, %, x²
pub fn verify_unary_operations<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("25");
    driver.press_key("s");
    assert_eq!(driver.display(), "5");

    reset(driver);
    driver.type_keys("-4");
    driver.click_button(Action::SquareRoot);
    assert_eq!(driver.display(), "Error");

    reset(driver);
    driver.type_keys("50");
    driver.press_key("%");
    assert_eq!(driver.display(), "0.5");

    reset(driver);
    driver.type_keys("5");
    driver.click_button(Action::Square);
    assert_eq!(driver.display(), "25");
    reset(driver);
}

/// Verifies the memory register and its indicator
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.click_button(Action::MemoryClear);
    assert_eq!(driver.memory_label(), "M: 0");
    assert!(!driver.memory_active());

    driver.type_keys("5");
    driver.click_button(Action::MemoryAdd);
    assert_eq!(driver.memory_label(), "M: 5");
    assert!(driver.memory_active());

    reset(driver);
    driver.type_keys("3");
    driver.click_button(Action::MemorySubtract);
    assert_eq!(driver.memory_label(), "M: 2");

    reset(driver);
    driver.click_button(Action::MemoryRecall);
    assert_eq!(driver.display(), "2");

    driver.click_button(Action::MemoryClear);
    assert_eq!(driver.memory_label(), "M: 0");
    assert!(!driver.memory_active());
    reset(driver);
}

/// Verifies DEL, C and Backspace editing
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_key("Backspace");
    assert_eq!(driver.display(), "");

    driver.type_keys("12");
    driver.press_key("Backspace");
    assert_eq!(driver.display(), "1");

    driver.type_keys("34");
    driver.click_button(Action::DeleteLast);
    assert_eq!(driver.display(), "13");

    driver.click_button(Action::Clear);
    assert_eq!(driver.display(), "");
}

/// Verifies that keys outside the binding table change nothing
pub fn verify_unknown_keys_ignored<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("7");
    for key in ["a", "x", "^", "=", "Tab", "F1"] {
        driver.press_key(key);
    }
    assert_eq!(driver.display(), "7");
    reset(driver);
}

/// Complete verification suite - runs all checks
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_evaluation(driver);
    verify_error_display(driver);
    verify_unary_operations(driver);
    verify_memory(driver);
    verify_editing(driver);
    verify_unknown_keys_ignored(driver);
}
