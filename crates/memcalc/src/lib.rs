//! Memory Calculator
//!
//! A display-string calculator with a single memory register, shared by a
//! terminal front-end and a browser front-end.
//!
//! The [`CalculatorController`](controller::CalculatorController) owns the
//! display text and the memory register and delegates expression evaluation
//! to an injectable [`ExpressionEvaluator`](core::evaluator::ExpressionEvaluator).
//! Front-ends translate keys and button clicks into
//! [`Action`](keymap::Action)s and repaint through a
//! [`RenderSurface`](controller::RenderSurface).
//!
//! # Example
//!
//! ```rust
//! use memcalc::prelude::*;
//!
//! let mut calc = CalculatorController::new();
//! calc.append_to_display("6*7");
//! calc.evaluate();
//! assert_eq!(calc.display(), "42");
//!
//! calc.memory_add();
//! assert_eq!(calc.indicator().label, "M: 42");
//!
//! calc.append_to_display("/0");
//! calc.evaluate();
//! assert_eq!(calc.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod keymap;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser front-end; the mock DOM is always available for testing
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, IndicatorConfig, TuiConfig};
    pub use crate::controller::{CalculatorController, ControllerSnapshot, RenderSurface};
    pub use crate::core::evaluator::{Evaluator, ExpressionEvaluator};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        CalcError, CalcResult, Emphasis, MemoryIndicator, MemoryRegister, Operation,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keymap::{Action, KeyMap};

    #[cfg(feature = "tui")]
    pub use crate::driver::tui_driver::TuiDriver;

    pub use crate::web::{DomElement, DomEvent, MockDom, WebDriver};
}
