use serde::Deserialize;

use crate::error::{GridError, Result};

/// Host-facing grid settings, as passed from JavaScript.
///
/// Every field defaults to its zero value when missing; `normalized`
/// rejects geometry the grid math cannot run on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// External identifier the widget registers under.
    pub id: String,
    /// Style class looked up in the process style registry.
    pub visual_class: String,
    /// Viewport width in pixels (floor-rounded to a cell multiple).
    pub width: i32,
    /// Viewport height in pixels (floor-rounded to a cell multiple).
    pub height: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    /// Scroll tick interval in milliseconds.
    pub scroll_speed: u32,
}

impl GridConfig {
    /// Validate the geometry and floor-normalize `width`/`height` to exact
    /// cell multiples, which keeps the background-tile recycle math exact.
    ///
    /// # Errors
    /// Returns `GridError::Config` when the cell size is zero or negative,
    /// or when the viewport is smaller than a single cell. Rejecting these
    /// here is what keeps every later division by the cell size safe.
    pub fn normalized(mut self) -> Result<Self> {
        if self.cell_width <= 0 || self.cell_height <= 0 {
            return Err(GridError::Config(format!(
                "cell size must be positive, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.width < self.cell_width || self.height < self.cell_height {
            return Err(GridError::Config(format!(
                "viewport {}x{} smaller than one {}x{} cell",
                self.width, self.height, self.cell_width, self.cell_height
            )));
        }
        self.width = self.width / self.cell_width * self.cell_width;
        self.height = self.height / self.cell_height * self.cell_height;
        Ok(self)
    }

    /// Parse and normalize a config from a JSON string.
    ///
    /// # Errors
    /// Returns `GridError::Config` on malformed JSON or invalid geometry.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GridError::Config(e.to_string()))?;
        config.normalized()
    }
}
