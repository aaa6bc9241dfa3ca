//! Structured error types for gridcanvas.
//!
//! Everything host-facing surfaces failures as a `GridError`; the wasm
//! exports convert to `JsValue` at the boundary.

/// All errors that can occur while building or driving a grid widget.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Invalid or incomplete widget configuration.
    #[error("Invalid config: {0}")]
    Config(String),

    /// No widget registered under the given id.
    #[error("Unknown grid id: {0}")]
    UnknownGrid(String),

    /// Drawing-surface construction or operation failure.
    #[error("Surface error: {0}")]
    Surface(String),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
