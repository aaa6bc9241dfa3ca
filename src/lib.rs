//! gridcanvas - embeddable spreadsheet-style grid widget for the web
//!
//! Renders a scrollable, editable matrix of addressable cells via
//! WebAssembly and Canvas 2D:
//! - Sparse cell model: records exist only where selected or written
//! - Seamless infinite panning over a pre-rendered background tile
//! - Click/drag selection, double-click edit sessions, Tab commit
//! - Held and flung scrolling via affordances, arrow keys and the wheel
//! - Optional host styling hooks per cell
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { create_grid, add_data, set_style_map } from 'gridcanvas';
//! await init();
//! set_style_map([{ class: 'sheet', declarations: ['border: 1px solid gray'] }]);
//! const grid = create_grid({
//!   id: 'main', visualClass: 'sheet',
//!   width: 500, height: 300, cellWidth: 50, cellHeight: 25,
//!   scrollSpeed: 100,
//! });
//! document.body.appendChild(grid.root_element());
//! add_data('main', 0, 0, 'hello');
//! ```

pub mod collaborator;
pub mod error;
pub mod layout;
pub mod registry;
pub mod render;
pub mod scroll;
pub mod store;
pub mod task;
pub mod types;
pub mod widget;

use wasm_bindgen::prelude::*;

pub use error::GridError;
pub use types::{Address, CellRecord, CellRef, GridConfig};
pub use widget::GridCore;
#[cfg(target_arch = "wasm32")]
pub use widget::GridWidget;

/// Create a grid widget from a host config object.
///
/// Equivalent to `new GridWidget(config)`; returns the handle whose
/// `root_element()` the host inserts into the page.
///
/// # Errors
/// Returns an error when the config is malformed or describes an invalid
/// grid geometry.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn create_grid(config: JsValue) -> Result<GridWidget, JsValue> {
    GridWidget::new(config)
}

/// Create a grid widget from a JSON config string.
///
/// # Errors
/// Returns an error on malformed JSON or invalid grid geometry.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn create_grid_from_json(config: &str) -> Result<GridWidget, JsValue> {
    let config = GridConfig::from_json(config).map_err(JsValue::from)?;
    GridWidget::with_config(config)
}

/// Write a committed value into the grid registered under `id` and
/// redraw it.
///
/// # Errors
/// Returns an error when no grid is registered under `id`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn add_data(id: &str, row: u32, col: u32, value: &str) -> Result<(), JsValue> {
    let core = registry::widget(id)
        .ok_or_else(|| JsValue::from(GridError::UnknownGrid(id.to_string())))?;
    let mut core = core
        .try_borrow_mut()
        .map_err(|_| JsValue::from(GridError::Other(format!("grid {id} is busy"))))?;
    core.add_data(row, col, value);
    core.draw();
    Ok(())
}

/// Register style declaration lists by class, replacing prior entries.
///
/// Accepts a list of `{class, declarations}` objects; declarations are
/// joined with `;` and applied verbatim to widgets created afterwards.
///
/// # Errors
/// Returns an error when the entry list cannot be deserialized.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set_style_map(entries: JsValue) -> Result<(), JsValue> {
    let entries: Vec<registry::StyleMapEntry> =
        serde_wasm_bindgen::from_value(entries).map_err(|e| JsValue::from_str(&e.to_string()))?;
    for entry in entries {
        registry::set_style_class(&entry.class, &entry.declarations);
    }
    Ok(())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
