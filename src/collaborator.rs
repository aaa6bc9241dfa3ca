//! Optional host styling and notification hooks.

use crate::types::CellRecord;

/// Font override returned by a collaborator for a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStyle {
    /// CSS font shorthand, e.g. `"bold 15px arial"`.
    pub font: String,
    /// CSS color for the glyphs.
    pub color: String,
}

/// Styling and notification hooks a host may attach to a grid.
///
/// Every method has a no-op default, so a host implements only what it
/// needs. The widget is constructed with `NoopCollaborator` when the host
/// supplies nothing, which keeps the draw pipeline free of null checks.
pub trait GridCollaborator {
    /// A committed record was created or overwritten.
    fn on_cell_added(&mut self, _cell: &CellRecord) {}

    /// An edit session was committed with Tab.
    fn on_edit_batch_complete(&mut self) {}

    /// Background fill override for a cell; `None` keeps the default
    /// white, which matches the background tile and skips the fill.
    fn cell_background(&self, _row: u32, _col: u32) -> Option<String> {
        None
    }

    /// Font override for a cell; `None` keeps black `15px arial`.
    fn cell_font(&self, _row: u32, _col: u32) -> Option<FontStyle> {
        None
    }

    /// Identifier of the widget this collaborator is attached to.
    fn owner_id(&self) -> Option<&str> {
        None
    }
}

/// The default, do-nothing collaborator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCollaborator;

impl GridCollaborator for NoopCollaborator {}
