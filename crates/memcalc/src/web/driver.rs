//! Web driver over the mock DOM
//!
//! Dispatches key-down and click events the way the page's listeners do and
//! re-renders the controller into the DOM after each one.

use super::dom::{DomEvent, MockDom};
use super::keypad::WebKeypad;
use super::{DISPLAY_ID, MEMORY_ACTIVE_CLASS, MEMORY_DISPLAY_ID};
use crate::config::IndicatorConfig;
use crate::controller::{CalculatorController, RenderSurface};
use crate::core::MemoryIndicator;
use crate::driver::CalculatorDriver;
use crate::keymap::{Action, KeyMap};

/// Renders controller state into a [`MockDom`]
#[derive(Debug)]
pub struct DomRenderer<'a> {
    dom: &'a mut MockDom,
    indicator: IndicatorConfig,
}

impl<'a> DomRenderer<'a> {
    #[must_use]
    pub fn new(dom: &'a mut MockDom, indicator: IndicatorConfig) -> Self {
        Self { dom, indicator }
    }
}

impl RenderSurface for DomRenderer<'_> {
    fn render_display(&mut self, text: &str) {
        if let Some(display) = self.dom.get_element_mut(DISPLAY_ID) {
            display.set_value(text);
        }
    }

    fn render_memory(&mut self, indicator: &MemoryIndicator) {
        let active = indicator.is_active();
        let opacity = self.indicator.opacity(active).to_string();
        if let Some(memory) = self.dom.get_element_mut(MEMORY_DISPLAY_ID) {
            memory.set_text(&indicator.label);
            memory.set_style("opacity", &opacity);
            memory.toggle_class(MEMORY_ACTIVE_CLASS, active);
        }
    }
}

/// Web driver wrapping a controller and the mock calculator page
#[derive(Debug)]
pub struct WebDriver {
    controller: CalculatorController,
    keypad: WebKeypad,
    dom: MockDom,
    indicator: IndicatorConfig,
}

impl Default for WebDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::with_indicator(IndicatorConfig::default())
    }

    /// Creates a driver whose memory indicator uses the given opacities
    #[must_use]
    pub fn with_indicator(indicator: IndicatorConfig) -> Self {
        let keypad = WebKeypad::new();
        let dom = MockDom::calculator(&keypad);
        let mut driver = Self {
            controller: CalculatorController::new(),
            keypad,
            dom,
            indicator,
        };
        driver.sync_dom();
        driver
    }

    #[must_use]
    pub fn controller(&self) -> &CalculatorController {
        &self.controller
    }

    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Simulates a document keydown.
    ///
    /// Returns whether the listener suppressed the default action.
    pub fn key_down(&mut self, key: &str) -> bool {
        let prevented = KeyMap::prevents_default(key);
        self.dom.dispatch_event(DomEvent::key_down(key, prevented));
        if let Some(action) = KeyMap::lookup(key) {
            self.controller.apply(action);
        }
        self.sync_dom();
        prevented
    }

    /// Simulates a click on the element with `element_id`
    pub fn click(&mut self, element_id: &str) {
        self.dom.dispatch_event(DomEvent::click(element_id));
        if let Some(action) = self.keypad.handle_click(element_id) {
            self.controller.apply(action);
        }
        self.sync_dom();
    }

    /// Synchronizes DOM state with controller state
    fn sync_dom(&mut self) {
        let mut renderer = DomRenderer::new(&mut self.dom, self.indicator);
        self.controller.render_to(&mut renderer);
    }

    /// Value of `input#display`
    #[must_use]
    pub fn display_value(&self) -> Option<&str> {
        self.dom.get_element(DISPLAY_ID).map(|e| e.value.as_str())
    }

    /// Inline opacity of `div#memoryDisplay`
    #[must_use]
    pub fn memory_opacity(&self) -> Option<&str> {
        self.dom
            .get_element(MEMORY_DISPLAY_ID)
            .and_then(|e| e.get_style("opacity"))
    }
}

impl CalculatorDriver for WebDriver {
    fn press_key(&mut self, key: &str) {
        self.key_down(key);
    }

    fn click_button(&mut self, action: Action) {
        if let Some(id) = self
            .keypad
            .find_button_by_action(action)
            .map(|btn| btn.id.clone())
        {
            self.click(&id);
        }
    }

    fn display(&self) -> String {
        self.display_value().unwrap_or_default().to_string()
    }

    fn memory_label(&self) -> String {
        self.dom
            .get_element_text(MEMORY_DISPLAY_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn memory_active(&self) -> bool {
        self.dom
            .get_element(MEMORY_DISPLAY_ID)
            .is_some_and(|e| e.has_class(MEMORY_ACTIVE_CLASS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_driver_initial_render() {
        let driver = WebDriver::new();
        assert_eq!(driver.display_value(), Some(""));
        assert_eq!(driver.memory_label(), "M: 0");
        assert_eq!(driver.memory_opacity(), Some("0.5"));
        assert!(!driver.memory_active());
    }

    #[test]
    fn test_key_down_updates_display() {
        let mut driver = WebDriver::new();
        driver.key_down("4");
        driver.key_down("2");
        assert_eq!(driver.display_value(), Some("42"));
        assert_eq!(driver.controller().display(), "42");
    }

    #[test]
    fn test_enter_prevents_default() {
        let mut driver = WebDriver::new();
        driver.key_down("1");
        assert!(!driver.key_down("+"));
        driver.key_down("1");
        assert!(driver.key_down("Enter"));
        assert_eq!(driver.display_value(), Some("2"));
        assert_eq!(
            driver.dom().event_history().last(),
            Some(&DomEvent::key_down("Enter", true))
        );
    }

    #[test]
    fn test_unknown_key_recorded_but_ignored() {
        let mut driver = WebDriver::new();
        assert!(!driver.key_down("q"));
        assert_eq!(driver.display_value(), Some(""));
        assert_eq!(driver.dom().event_history().len(), 1);
    }

    #[test]
    fn test_click_by_element_id() {
        let mut driver = WebDriver::new();
        driver.click("btn-9");
        driver.click("btn-square");
        assert_eq!(driver.display_value(), Some("81"));
    }

    #[test]
    fn test_click_non_button_ignored() {
        let mut driver = WebDriver::new();
        driver.click("display");
        driver.click("btn-nothing");
        assert_eq!(driver.display_value(), Some(""));
        assert_eq!(driver.dom().event_history().len(), 2);
    }

    #[test]
    fn test_memory_indicator_rendering() {
        let mut driver = WebDriver::new();
        driver.key_down("7");
        driver.click("btn-mplus");
        assert_eq!(driver.memory_label(), "M: 7");
        assert_eq!(driver.memory_opacity(), Some("1"));
        assert!(driver.memory_active());

        driver.click("btn-mc");
        assert_eq!(driver.memory_opacity(), Some("0.5"));
        assert!(!driver.memory_active());
    }

    #[test]
    fn test_custom_opacity() {
        let mut driver = WebDriver::with_indicator(IndicatorConfig {
            active_opacity: 0.9,
            inactive_opacity: 0.2,
        });
        assert_eq!(driver.memory_opacity(), Some("0.2"));
        driver.key_down("1");
        driver.click_button(Action::MemoryAdd);
        assert_eq!(driver.memory_opacity(), Some("0.9"));
    }

    #[test]
    fn test_dom_renderer_direct() {
        let keypad = WebKeypad::new();
        let mut dom = MockDom::calculator(&keypad);
        {
            let mut renderer = DomRenderer::new(&mut dom, IndicatorConfig::default());
            renderer.render_display("123");
            renderer.render_memory(&MemoryIndicator::for_value(-2.0));
        }
        let memory = dom.get_element(MEMORY_DISPLAY_ID).unwrap();
        assert_eq!(dom.get_element(DISPLAY_ID).unwrap().value, "123");
        assert_eq!(memory.text_content, "M: -2");
        assert!(memory.has_class(MEMORY_ACTIVE_CLASS));
    }
}
