//! Property-based tests for the keypad and key dispatch table
//!
//! Both front-ends build their keypads from the same grid, so every button
//! must map to exactly one action and every bound key must reach the same
//! action through the browser and the terminal.

use memcalc::keymap::{Action, KeyMap, KEYPAD_ROWS, KEY_BINDINGS};
use memcalc::prelude::*;
use memcalc::web::{button_id, WebKeypad};
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Any button on the keypad
fn keypad_action_strategy() -> impl Strategy<Value = Action> {
    let actions: Vec<Action> = KEYPAD_ROWS.iter().flat_map(|row| row.iter().copied()).collect();
    proptest::sample::select(actions)
}

/// Any key name bound in the dispatch table
fn bound_key_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(KEY_BINDINGS.iter().map(|(key, _)| *key).collect::<Vec<_>>())
}

/// Valid grid positions, including the empty last cell
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..KEYPAD_ROWS.len(), 0usize..4usize)
}

// ===== Keypad =====

proptest! {
    /// Every keypad button has a non-empty label and a unique element id
    #[test]
    fn prop_button_id_round_trip(action in keypad_action_strategy()) {
        let keypad = WebKeypad::new();
        prop_assert!(!action.label().is_empty());
        let id = button_id(action);
        prop_assert_eq!(keypad.handle_click(&id), Some(action));
    }

    /// Grid lookup agrees with the shared layout table
    #[test]
    fn prop_grid_position_matches_layout((row, col) in grid_position_strategy()) {
        let keypad = WebKeypad::new();
        let expected = KEYPAD_ROWS.get(row).and_then(|r| r.get(col)).copied();
        prop_assert_eq!(keypad.get_button_at(row, col).map(|b| b.action), expected);
    }

    /// Clicking a button through the web driver matches applying its action
    #[test]
    fn prop_click_matches_apply(
        prefix in "[0-9]{1,3}",
        action in keypad_action_strategy(),
    ) {
        let mut driver = WebDriver::new();
        driver.type_keys(&prefix);
        driver.click_button(action);

        let mut controller = CalculatorController::new();
        controller.append_to_display(&prefix);
        controller.apply(action);

        prop_assert_eq!(driver.display(), controller.display());
        prop_assert_eq!(driver.memory_label(), controller.indicator().label);
    }
}

// ===== Dispatch table =====

proptest! {
    /// Bound keys resolve to their table entry
    #[test]
    fn prop_bound_keys_resolve(key in bound_key_strategy()) {
        let expected = KEY_BINDINGS.iter().find(|(k, _)| *k == key).map(|(_, a)| *a);
        prop_assert_eq!(KeyMap::lookup(key), expected);
    }

    /// Only Enter suppresses the browser default
    #[test]
    fn prop_prevent_default_only_enter(key in "[A-Za-z0-9]{1,10}") {
        prop_assert_eq!(KeyMap::prevents_default(&key), key == "Enter");
    }

    /// Keys outside the table never change the display
    #[test]
    fn prop_unbound_keys_ignored(key in "[a-rt-zA-RT-Z]{2,8}") {
        prop_assume!(KeyMap::lookup(&key).is_none());
        let mut driver = WebDriver::new();
        driver.type_keys("12");
        driver.press_key(&key);
        prop_assert_eq!(driver.display(), "12");
    }
}

#[cfg(feature = "tui")]
proptest! {
    /// The terminal and the browser agree on every bound key sequence
    #[test]
    fn prop_tui_and_web_agree(keys in proptest::collection::vec(bound_key_strategy(), 0..12)) {
        let mut web = WebDriver::new();
        let mut tui = TuiDriver::new();
        for key in &keys {
            web.press_key(key);
            tui.press_key(key);
        }
        prop_assert_eq!(web.display(), tui.display());
        prop_assert_eq!(web.memory_label(), tui.memory_label());
    }
}

#[test]
fn test_keypad_layout_rows() {
    let keypad = WebKeypad::new();
    assert_eq!(keypad.button_count(), 27);
    assert_eq!(
        keypad.get_button_at(6, 2).map(|b| b.action),
        Some(Action::Evaluate)
    );
    assert!(keypad.get_button_at(6, 3).is_none());
}
