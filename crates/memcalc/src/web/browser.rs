//! Browser bindings for the calculator
//!
//! JavaScript owns the event listeners and forwards `keydown` keys and button
//! ids here, then calls [`BrowserCalculator::render`] to repaint the page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlElement, HtmlInputElement};

use super::keypad::WebKeypad;
use super::{DISPLAY_ID, MEMORY_ACTIVE_CLASS, MEMORY_DISPLAY_ID};
use crate::config::{CalculatorConfig, IndicatorConfig};
use crate::controller::{CalculatorController, RenderSurface};
use crate::core::MemoryIndicator;
use crate::keymap::KeyMap;

/// Renders into the live document; missing elements are skipped
#[derive(Debug)]
struct DocumentSurface {
    document: Document,
    indicator: IndicatorConfig,
}

impl RenderSurface for DocumentSurface {
    fn render_display(&mut self, text: &str) {
        if let Some(input) = self
            .document
            .get_element_by_id(DISPLAY_ID)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value(text);
        }
    }

    fn render_memory(&mut self, indicator: &MemoryIndicator) {
        let Some(element) = self
            .document
            .get_element_by_id(MEMORY_DISPLAY_ID)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let active = indicator.is_active();
        element.set_text_content(Some(&indicator.label));
        let opacity = self.indicator.opacity(active).to_string();
        if let Err(err) = element.style().set_property("opacity", &opacity) {
            tracing::debug!(?err, "failed to set memory opacity");
        }
        if let Err(err) = element
            .class_list()
            .toggle_with_force(MEMORY_ACTIVE_CLASS, active)
        {
            tracing::debug!(?err, "failed to toggle memory class");
        }
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    controller: CalculatorController,
    keypad: WebKeypad,
    indicator: IndicatorConfig,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::from_config(&CalculatorConfig::default())
    }

    /// Create a calculator from a JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config =
            CalculatorConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(&config))
    }

    /// Handle a `keydown` key.
    ///
    /// Returns true when the caller must call `preventDefault()`.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        if let Some(action) = KeyMap::lookup(key) {
            self.controller.apply(action);
        }
        KeyMap::prevents_default(key)
    }

    /// Handle a keypad button click by element ID
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) {
        if let Some(action) = self.keypad.handle_click(button_id) {
            self.controller.apply(action);
        }
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.controller.display().to_string()
    }

    /// Memory indicator label
    #[wasm_bindgen(getter, js_name = memoryLabel)]
    pub fn memory_label(&self) -> String {
        self.controller.indicator().label
    }

    /// Whether memory holds a non-zero value
    #[wasm_bindgen(getter, js_name = memoryActive)]
    pub fn memory_active(&self) -> bool {
        self.controller.indicator().is_active()
    }

    /// Opacity for the memory indicator
    #[wasm_bindgen(getter, js_name = memoryOpacity)]
    pub fn memory_opacity(&self) -> f64 {
        self.indicator.opacity(self.memory_active())
    }

    /// Controller state as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.controller.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Repaint `#display` and `#memoryDisplay` in the current document
    pub fn render(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let mut surface = DocumentSurface {
            document,
            indicator: self.indicator,
        };
        self.controller.render_to(&mut surface);
    }
}

impl BrowserCalculator {
    fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            controller: CalculatorController::new(),
            keypad: WebKeypad::new(),
            indicator: config.indicator,
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Memory calculator initialized".into());
}
