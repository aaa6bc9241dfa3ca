//! Process-scoped widget and style registries.
//!
//! Both registries are explicit thread-local state behind accessor
//! functions, so tests run against isolated instances (each test thread
//! gets its own) and can reset them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;

use crate::widget::GridCore;

/// One entry of the host's style map.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleMapEntry {
    pub class: String,
    pub declarations: Vec<String>,
}

/// Class → joined CSS declaration string. Last registration wins.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    classes: HashMap<String, String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register declarations for a class, replacing any previous entry.
    /// Declarations are stored pre-joined with `;`, ready to apply to an
    /// element. No validation or merging is performed.
    pub fn set(&mut self, class: &str, declarations: &[String]) {
        self.classes.insert(class.to_string(), declarations.join(";"));
    }

    pub fn get(&self, class: &str) -> Option<String> {
        self.classes.get(class).cloned()
    }

    pub fn clear(&mut self) {
        self.classes.clear();
    }
}

thread_local! {
    static WIDGETS: RefCell<HashMap<String, Rc<RefCell<GridCore>>>> =
        RefCell::new(HashMap::new());
    static STYLES: RefCell<StyleRegistry> = RefCell::new(StyleRegistry::new());
}

/// Register a widget under its external id for host-initiated calls.
pub fn register_widget(id: &str, core: Rc<RefCell<GridCore>>) {
    WIDGETS.with(|widgets| {
        widgets.borrow_mut().insert(id.to_string(), core);
    });
}

/// Look up a widget by external id.
pub fn widget(id: &str) -> Option<Rc<RefCell<GridCore>>> {
    WIDGETS.with(|widgets| widgets.borrow().get(id).cloned())
}

pub fn remove_widget(id: &str) -> Option<Rc<RefCell<GridCore>>> {
    WIDGETS.with(|widgets| widgets.borrow_mut().remove(id))
}

/// Drop every registered widget. Intended for test teardown.
pub fn clear_widgets() {
    WIDGETS.with(|widgets| widgets.borrow_mut().clear());
}

pub fn set_style_class(class: &str, declarations: &[String]) {
    STYLES.with(|styles| styles.borrow_mut().set(class, declarations));
}

pub fn style_for_class(class: &str) -> Option<String> {
    STYLES.with(|styles| styles.borrow().get(class))
}

/// Drop every registered style class. Intended for test teardown.
pub fn clear_styles() {
    STYLES.with(|styles| styles.borrow_mut().clear());
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn declarations_join_with_semicolons() {
        let mut registry = StyleRegistry::new();
        registry.set(
            "grid",
            &["border: 1px solid".to_string(), "margin: 0".to_string()],
        );
        assert_eq!(
            registry.get("grid").as_deref(),
            Some("border: 1px solid;margin: 0")
        );
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = StyleRegistry::new();
        registry.set("grid", &["color: red".to_string()]);
        registry.set("grid", &["color: blue".to_string()]);
        assert_eq!(registry.get("grid").as_deref(), Some("color: blue"));
    }

    #[test]
    fn unknown_class_is_none() {
        let registry = StyleRegistry::new();
        assert!(registry.get("missing").is_none());
    }
}
