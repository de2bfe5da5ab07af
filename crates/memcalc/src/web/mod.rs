//! Browser front-end
//!
//! The mock DOM and [`WebDriver`] run natively so the page behaviour is
//! testable without a browser. `BrowserCalculator` is the real wasm-bindgen
//! entry point and needs the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::{DomRenderer, WebDriver};
pub use keypad::{button_id, KeypadButtonDef, WebKeypad};

/// ID of the display `<input>`
pub const DISPLAY_ID: &str = "display";
/// ID of the memory indicator element
pub const MEMORY_DISPLAY_ID: &str = "memoryDisplay";
/// Class set on the memory indicator while memory is non-zero
pub const MEMORY_ACTIVE_CLASS: &str = "memory-active";
