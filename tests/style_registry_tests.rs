//! Process registry tests
//!
//! Style-class registration and the id → widget table, exercised the way
//! the host-facing exports drive them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::grid;
use gridcanvas::registry;
use gridcanvas::Address;

// =============================================================================
// STYLE CLASSES
// =============================================================================

#[test]
fn style_classes_replace_on_re_registration() {
    registry::clear_styles();
    registry::set_style_class("sheet", &["color: red".to_string()]);
    registry::set_style_class(
        "sheet",
        &["color: blue".to_string(), "margin: 0".to_string()],
    );
    assert_eq!(
        registry::style_for_class("sheet").as_deref(),
        Some("color: blue;margin: 0")
    );
}

#[test]
fn unknown_style_class_is_none() {
    registry::clear_styles();
    assert!(registry::style_for_class("missing").is_none());
}

// =============================================================================
// WIDGET TABLE
// =============================================================================

#[test]
fn widgets_are_reachable_by_id() {
    registry::clear_widgets();
    let g = grid();
    registry::register_widget("g1", Rc::new(RefCell::new(g.core)));

    let core = registry::widget("g1").unwrap();
    core.borrow_mut().add_data(0, 1, "B1");
    core.borrow_mut().draw();

    let cell = core.borrow().store.get(Address::new(0, 1)).unwrap();
    assert_eq!(cell.borrow().value, "B1");
    assert_eq!((cell.borrow().x, cell.borrow().y), (50, 0));
    assert!(registry::widget("g2").is_none());
}

#[test]
fn removed_widgets_disappear_from_the_table() {
    registry::clear_widgets();
    let g = grid();
    registry::register_widget("g1", Rc::new(RefCell::new(g.core)));
    assert!(registry::remove_widget("g1").is_some());
    assert!(registry::widget("g1").is_none());
    assert!(registry::remove_widget("g1").is_none());
}

#[test]
fn instances_are_independent() {
    registry::clear_widgets();
    let a = grid();
    let b = grid();
    registry::register_widget("a", Rc::new(RefCell::new(a.core)));
    registry::register_widget("b", Rc::new(RefCell::new(b.core)));

    registry::widget("a")
        .unwrap()
        .borrow_mut()
        .add_data(0, 0, "only-a");

    let b_core = registry::widget("b").unwrap();
    assert_eq!(b_core.borrow().store.committed_len(), 0);
}
