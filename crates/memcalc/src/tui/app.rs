//! TUI application state
//!
//! The controller renders into a [`TuiView`] after every action, so the
//! widgets only ever draw what the controller last pushed.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use crate::config::TuiConfig;
use crate::controller::{CalculatorController, RenderSurface};
use crate::core::MemoryIndicator;
use crate::keymap::Action;

/// What the terminal currently shows
#[derive(Debug, Clone, PartialEq)]
pub struct TuiView {
    /// Display text
    pub display: String,
    /// Memory indicator
    pub memory: MemoryIndicator,
}

impl Default for TuiView {
    fn default() -> Self {
        Self {
            display: String::new(),
            memory: MemoryIndicator::for_value(0.0),
        }
    }
}

impl RenderSurface for TuiView {
    fn render_display(&mut self, text: &str) {
        text.clone_into(&mut self.display);
    }

    fn render_memory(&mut self, indicator: &MemoryIndicator) {
        self.memory = indicator.clone();
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    controller: CalculatorController,
    view: TuiView,
    keypad: Keypad,
    input: InputHandler,
    config: TuiConfig,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TuiConfig::default())
    }

    /// Creates an app with the given presentation settings
    #[must_use]
    pub fn with_config(config: TuiConfig) -> Self {
        let controller = CalculatorController::new();
        let mut view = TuiView::default();
        controller.render_to(&mut view);
        Self {
            controller,
            view,
            keypad: Keypad::new(),
            input: InputHandler::new(),
            config,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &CalculatorController {
        &self.controller
    }

    /// Last state rendered by the controller
    #[must_use]
    pub fn view(&self) -> &TuiView {
        &self.view
    }

    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    #[must_use]
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles a terminal key event
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        match self.input.handle_key(event) {
            KeyAction::Calculator(action) => self.press_button(action),
            KeyAction::Quit => {
                tracing::info!("quit requested");
                self.quit();
            }
            KeyAction::None => tracing::trace!(?event, "key ignored"),
        }
    }

    /// Runs `action` and highlights its keypad button
    pub fn press_button(&mut self, action: Action) {
        self.controller.apply_and_render(action, &mut self.view);
        self.keypad.highlight(action);
    }

    /// Handles a mouse click at (`x`, `y`) on a keypad drawn in `area`.
    ///
    /// Returns the action that was run, if the click hit a button.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> Option<Action> {
        let action = self.keypad.hit_test(area, x, y)?;
        self.press_button(action);
        Some(action)
    }
}
