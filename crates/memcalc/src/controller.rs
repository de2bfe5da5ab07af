//! Calculator controller
//!
//! Owns the display text and the memory register. Every operation maps
//! `(display, memory)` to a new `(display, memory)` and never fails: problems
//! surface as the `"Error"` display text or are swallowed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::evaluator::{Evaluator, ExpressionEvaluator};
use crate::core::{format_number, parse_display, MemoryIndicator, MemoryRegister, ERROR_TEXT};
use crate::keymap::Action;

/// A place the controller's state is drawn into
pub trait RenderSurface {
    /// Shows the display text
    fn render_display(&mut self, text: &str);
    /// Shows the memory indicator
    fn render_memory(&mut self, indicator: &MemoryIndicator);
}

/// Serialisable view of the controller state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    /// Display text
    pub display: String,
    /// Memory register value
    pub memory: f64,
    /// Derived memory indicator
    pub indicator: MemoryIndicator,
}

/// Display + memory state machine with an injected expression evaluator
#[derive(Debug, Clone)]
pub struct CalculatorController<E = Evaluator> {
    display: String,
    memory: MemoryRegister,
    evaluator: E,
}

impl Default for CalculatorController {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorController {
    /// Creates a controller using the built-in [`Evaluator`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }
}

impl<E: ExpressionEvaluator> CalculatorController<E> {
    /// Creates a controller with an empty display, zero memory and `evaluator`
    #[must_use]
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            display: String::new(),
            memory: MemoryRegister::new(),
            evaluator,
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory.value()
    }

    #[must_use]
    pub fn indicator(&self) -> MemoryIndicator {
        self.memory.indicator()
    }

    /// Concatenates `token` onto the display, unvalidated
    pub fn append_to_display(&mut self, token: &str) {
        self.display.push_str(token);
        debug!(token, display = %self.display, "append");
    }

    pub fn clear_display(&mut self) {
        self.display.clear();
        debug!("clear display");
    }

    /// Removes the last character; no-op on an empty display
    pub fn delete_last_char(&mut self) {
        self.display.pop();
        debug!(display = %self.display, "delete last char");
    }

    /// Evaluates the display as an expression.
    ///
    /// Evaluator failures and non-finite results leave `"Error"` on the display.
    pub fn evaluate(&mut self) {
        let outcome = self.evaluator.evaluate(&self.display);
        self.display = match outcome {
            Ok(value) if value.is_finite() => format_number(value),
            Ok(value) => {
                debug!(expression = %self.display, %value, "non-finite result");
                ERROR_TEXT.to_string()
            }
            Err(err) => {
                debug!(expression = %self.display, error = %err, "evaluation failed");
                ERROR_TEXT.to_string()
            }
        };
        debug!(display = %self.display, "evaluate");
    }

    /// Replaces the display with its square root; negative values show `"Error"`
    pub fn square_root(&mut self) {
        let value = parse_display(&self.display);
        self.display = if value < 0.0 {
            debug!(value, "square root of negative number");
            ERROR_TEXT.to_string()
        } else {
            format_number(value.sqrt())
        };
        debug!(display = %self.display, "square root");
    }

    /// Replaces the display with its value divided by 100
    pub fn percentage(&mut self) {
        let value = parse_display(&self.display);
        self.display = format_number(value / 100.0);
        debug!(display = %self.display, "percentage");
    }

    /// Replaces the display with its value squared (overflow shows `Infinity`)
    pub fn square(&mut self) {
        let value = parse_display(&self.display);
        self.display = format_number(value * value);
        debug!(display = %self.display, "square");
    }

    pub fn memory_clear(&mut self) {
        self.memory.clear();
        debug!("memory clear");
    }

    /// Shows the memory value on the display
    pub fn memory_recall(&mut self) {
        self.display = format_number(self.memory.value());
        debug!(display = %self.display, "memory recall");
    }

    /// Adds the display value to memory
    pub fn memory_add(&mut self) {
        let value = parse_display(&self.display);
        if self.memory.add(value) {
            debug!(memory = self.memory.value(), "memory add");
        } else {
            debug!(value, "memory add ignored: sum not finite");
        }
    }

    /// Subtracts the display value from memory
    pub fn memory_subtract(&mut self) {
        let value = parse_display(&self.display);
        if self.memory.subtract(value) {
            debug!(memory = self.memory.value(), "memory subtract");
        } else {
            debug!(value, "memory subtract ignored: difference not finite");
        }
    }

    /// Runs the operation bound to `action`
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Append(ch) => {
                let mut buf = [0; 4];
                self.append_to_display(ch.encode_utf8(&mut buf));
            }
            Action::Evaluate => self.evaluate(),
            Action::DeleteLast => self.delete_last_char(),
            Action::Clear => self.clear_display(),
            Action::SquareRoot => self.square_root(),
            Action::Percentage => self.percentage(),
            Action::Square => self.square(),
            Action::MemoryClear => self.memory_clear(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
        }
    }

    /// Draws the display and memory indicator into `surface`
    pub fn render_to<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        surface.render_display(&self.display);
        surface.render_memory(&self.indicator());
    }

    /// [`apply`](Self::apply) followed by [`render_to`](Self::render_to)
    pub fn apply_and_render<S: RenderSurface + ?Sized>(&mut self, action: Action, surface: &mut S) {
        self.apply(action);
        self.render_to(surface);
    }

    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            display: self.display.clone(),
            memory: self.memory.value(),
            indicator: self.indicator(),
        }
    }
}
