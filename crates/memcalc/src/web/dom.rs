//! Mock DOM for native testing of the browser front-end
//!
//! Mirrors the handful of DOM features the calculator page touches: element
//! lookup by id, text, input value, CSS classes and inline style.

use std::collections::HashMap;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// `value` property (input elements)
    pub value: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Inline style properties
    pub style: HashMap<String, String>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes `class` depending on `force`, like `classList.toggle`
    pub fn toggle_class(&mut self, class: &str, force: bool) {
        if force {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    #[must_use]
    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Document-level keydown
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
        /// Whether the handler called `preventDefault()`
        default_prevented: bool,
    },
}

impl DomEvent {
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    #[must_use]
    pub fn key_down(key: &str, default_prevented: bool) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            default_prevented,
        }
    }
}

/// Mock DOM for testing the browser calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Element IDs in insertion order
    order: Vec<String>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Elements with the given tag, in insertion order
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a DomElement> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .filter(move |e| e.tag == tag)
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
        assert!(elem.value.is_empty());
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("input")
            .with_id("display")
            .with_text("x")
            .with_class("wide")
            .with_attr("readonly", "true");
        assert_eq!(elem.id, "display");
        assert_eq!(elem.text_content, "x");
        assert!(elem.has_class("wide"));
        assert_eq!(elem.get_attr("readonly"), Some("true"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_dom_element_classes() {
        let mut elem = DomElement::new("div");
        elem.add_class("foo");
        elem.add_class("bar");
        elem.add_class("foo");
        assert_eq!(elem.classes.len(), 2);
        elem.remove_class("foo");
        assert!(!elem.has_class("foo"));
        assert!(elem.has_class("bar"));
    }

    #[test]
    fn test_dom_element_toggle_class() {
        let mut elem = DomElement::new("div");
        elem.toggle_class("memory-active", true);
        elem.toggle_class("memory-active", true);
        assert_eq!(elem.classes, vec!["memory-active".to_string()]);
        elem.toggle_class("memory-active", false);
        assert!(elem.classes.is_empty());
    }

    #[test]
    fn test_dom_element_style_and_value() {
        let mut elem = DomElement::new("input");
        elem.set_value("42");
        elem.set_style("opacity", "0.5");
        assert_eq!(elem.value, "42");
        assert_eq!(elem.get_style("opacity"), Some("0.5"));
        assert_eq!(elem.get_style("color"), None);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("btn-7"),
            DomEvent::Click {
                element_id: "btn-7".into()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter", true),
            DomEvent::KeyDown {
                key: "Enter".into(),
                default_prevented: true
            }
        );
    }

    // ===== MockDom tests =====

    #[test]
    fn test_register_and_lookup() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("a").with_text("first"));
        assert_eq!(dom.get_element_text("a"), Some("first"));
        assert_eq!(dom.get_element_text("b"), None);
    }

    #[test]
    fn test_register_without_id_ignored() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div"));
        assert_eq!(dom.elements_by_tag("div").count(), 0);
    }

    #[test]
    fn test_reregister_replaces_in_place() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("button").with_id("one"));
        dom.register_element(DomElement::new("button").with_id("two"));
        dom.register_element(DomElement::new("button").with_id("one").with_text("again"));
        let ids: Vec<_> = dom.elements_by_tag("button").map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["one", "two"]);
        assert_eq!(dom.get_element_text("one"), Some("again"));
    }

    #[test]
    fn test_get_element_mut() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("memoryDisplay"));
        if let Some(elem) = dom.get_element_mut("memoryDisplay") {
            elem.set_text("M: 3");
        }
        assert_eq!(dom.get_element_text("memoryDisplay"), Some("M: 3"));
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_down("5", false));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }
}
