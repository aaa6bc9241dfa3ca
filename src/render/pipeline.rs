//! The frame pipeline: fixed render order over background, cells,
//! selection and scroll affordances.

use std::rc::Rc;

use crate::collaborator::{FontStyle, GridCollaborator};
use crate::layout::Viewport;
use crate::store::CellStore;
use crate::types::CellRecord;

use super::surface::{DrawSurface, PaintState, DEFAULT_FONT};

const DEFAULT_CELL_FILL: &str = "white";
const DEFAULT_TEXT_COLOR: &str = "black";
const CELL_BORDER: &str = "lightgray";
const SELECT_SHADOW: &str = "blue";
const SELECT_BORDER: &str = "lightblue";
const EDIT_SHADOW: &str = "green";
const EDIT_BORDER: &str = "lightgreen";
const AFFORDANCE_FILL: &str = "lightgray";
const AFFORDANCE_BORDER: &str = "gray";

/// Text baseline offset from the cell top, matching the default font size.
const TEXT_BASELINE: i32 = 15;

/// Render one frame.
///
/// Order is fixed: the background tile blit, every committed cell except
/// the edit cell, the edit cell (unclipped, so in-progress edits are never
/// truncated), the selection outlines, and finally the four scroll
/// affordances.
pub fn draw_frame(
    surface: &mut dyn DrawSurface,
    viewport: &Viewport,
    store: &CellStore,
    collaborator: &dyn GridCollaborator,
) {
    surface.blit_background(viewport.sx, viewport.sy, viewport.width, viewport.height);

    let edit_cell = store.edit_cell();
    for cell in store.committed_cells() {
        // The edit cell may already be committed; it is drawn once, last.
        if edit_cell.as_ref().is_some_and(|e| Rc::ptr_eq(e, cell)) {
            continue;
        }
        draw_cell(surface, viewport, collaborator, &cell.borrow(), true);
    }
    if let Some(edit) = &edit_cell {
        draw_cell(surface, viewport, collaborator, &edit.borrow(), false);
    }

    draw_selection(surface, viewport, store);
    draw_affordances(surface, viewport);
}

fn draw_cell(
    surface: &mut dyn DrawSurface,
    viewport: &Viewport,
    collaborator: &dyn GridCollaborator,
    cell: &CellRecord,
    clip: bool,
) {
    let screen_x = cell.x - viewport.x;
    let screen_y = cell.y - viewport.y;

    let fill = collaborator
        .cell_background(cell.row, cell.col)
        .unwrap_or_else(|| DEFAULT_CELL_FILL.to_string());
    // A white background matches the tile; skip the fill and keep the
    // pre-rendered grid lines visible.
    if !matches!(fill.as_str(), "white" | "#ffffff") {
        surface.set_paint(&PaintState {
            fill,
            stroke: CELL_BORDER.to_string(),
            ..PaintState::default()
        });
        surface.fill_rect(screen_x, screen_y, viewport.cell_width, viewport.cell_height);
        surface.stroke_rect(screen_x, screen_y, viewport.cell_width, viewport.cell_height);
    }

    let font = collaborator
        .cell_font(cell.row, cell.col)
        .unwrap_or_else(|| FontStyle {
            font: DEFAULT_FONT.to_string(),
            color: DEFAULT_TEXT_COLOR.to_string(),
        });
    surface.set_paint(&PaintState {
        fill: font.color,
        font: font.font,
        ..PaintState::default()
    });
    let text = if clip {
        clip_text(surface, &cell.value, viewport.cell_width)
    } else {
        cell.value.clone()
    };
    surface.fill_text(&text, screen_x, screen_y + TEXT_BASELINE);
}

/// Drop trailing characters until the text fits the cell width.
fn clip_text(surface: &mut dyn DrawSurface, value: &str, cell_width: i32) -> String {
    let mut text = value.to_string();
    while !text.is_empty() && surface.measure_text(&text) > f64::from(cell_width) {
        text.pop();
    }
    text
}

fn draw_selection(surface: &mut dyn DrawSurface, viewport: &Viewport, store: &CellStore) {
    for cell in store.selected_cells() {
        let cell = cell.borrow();
        let (shadow, border) = if cell.editing {
            (EDIT_SHADOW, EDIT_BORDER)
        } else {
            (SELECT_SHADOW, SELECT_BORDER)
        };
        surface.set_paint(&PaintState {
            stroke: border.to_string(),
            shadow_color: Some(shadow.to_string()),
            shadow_blur: 2.0,
            ..PaintState::default()
        });
        surface.stroke_rect(
            cell.x - viewport.x + 2,
            cell.y - viewport.y + 2,
            viewport.cell_width - 2,
            viewport.cell_height - 2,
        );
    }
}

/// The four scroll hot-zones: left/right along the bottom edge, up/down
/// stacked on the right edge, each half a cell wide.
fn draw_affordances(surface: &mut dyn DrawSurface, viewport: &Viewport) {
    let w = viewport.width;
    let h = viewport.height;
    let cw = viewport.cell_width;
    let ch = viewport.cell_height;

    surface.set_paint(&PaintState {
        fill: AFFORDANCE_FILL.to_string(),
        stroke: AFFORDANCE_BORDER.to_string(),
        ..PaintState::default()
    });
    let corners = [
        (0, h - ch),
        (w - cw / 2, h - ch),
        (w - cw / 2, 0),
        (w - cw / 2, h - ch * 2),
    ];
    for (x, y) in corners {
        surface.fill_rect(x, y, cw / 2, ch);
        surface.stroke_rect(x, y, cw / 2, ch);
    }
}
