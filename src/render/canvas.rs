//! Canvas 2D drawing surface.
//!
//! Owns the foreground context plus the double-sized background-tile
//! canvas whose grid lines are pre-rendered once at construction; panning
//! only re-blits a window of the tile.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::{GridError, Result};

use super::surface::{DrawSurface, PaintState};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    tile: HtmlCanvasElement,
}

impl CanvasSurface {
    /// Bind the view canvas, size it, and pre-render the background tile.
    ///
    /// # Errors
    /// Returns `GridError::Surface` when a 2D context cannot be created.
    pub fn new(
        document: &Document,
        view: &HtmlCanvasElement,
        width: i32,
        height: i32,
        cell_width: i32,
        cell_height: i32,
    ) -> Result<Self> {
        view.set_width(u32::try_from(width).unwrap_or(0));
        view.set_height(u32::try_from(height).unwrap_or(0));
        let ctx = context_2d(view)?;
        let tile = paint_tile(document, width, height, cell_width, cell_height)?;
        Ok(Self { ctx, tile })
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|_| GridError::Surface("2d context request failed".to_string()))?
        .ok_or_else(|| GridError::Surface("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GridError::Surface("context is not 2d".to_string()))
}

/// Pre-render the grid-line tile at twice the viewport size.
fn paint_tile(
    document: &Document,
    width: i32,
    height: i32,
    cell_width: i32,
    cell_height: i32,
) -> Result<HtmlCanvasElement> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| GridError::Surface("canvas creation failed".to_string()))?
        .dyn_into()
        .map_err(|_| GridError::Surface("element is not a canvas".to_string()))?;
    let tile_w = width * 2;
    let tile_h = height * 2;
    canvas.set_width(u32::try_from(tile_w).unwrap_or(0));
    canvas.set_height(u32::try_from(tile_h).unwrap_or(0));

    let ctx = context_2d(&canvas)?;
    ctx.set_fill_style_str("white");
    ctx.fill_rect(0.0, 0.0, f64::from(tile_w), f64::from(tile_h));
    ctx.set_line_width(0.25);
    ctx.begin_path();
    let cols = tile_w / cell_width + 1;
    let rows = tile_h / cell_height + 1;
    for i in 0..cols {
        ctx.move_to(f64::from(i * cell_width), 0.0);
        ctx.line_to(f64::from(i * cell_width), f64::from(tile_h));
    }
    for i in 0..rows {
        ctx.move_to(0.0, f64::from(i * cell_height));
        ctx.line_to(f64::from(tile_w), f64::from(i * cell_height));
    }
    ctx.stroke();
    Ok(canvas)
}

impl DrawSurface for CanvasSurface {
    fn blit_background(&mut self, sx: i32, sy: i32, width: i32, height: i32) {
        let _ = self
            .ctx
            .draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.tile,
                f64::from(sx),
                f64::from(sy),
                f64::from(width),
                f64::from(height),
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            );
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ctx
            .fill_rect(f64::from(x), f64::from(y), f64::from(width), f64::from(height));
    }

    fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ctx
            .stroke_rect(f64::from(x), f64::from(y), f64::from(width), f64::from(height));
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width())
            .unwrap_or_default()
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32) {
        let _ = self.ctx.fill_text(text, f64::from(x), f64::from(y));
    }

    fn set_paint(&mut self, paint: &PaintState) {
        self.ctx.set_fill_style_str(&paint.fill);
        self.ctx.set_stroke_style_str(&paint.stroke);
        self.ctx.set_line_width(paint.line_width);
        self.ctx.set_font(&paint.font);
        match &paint.shadow_color {
            Some(color) => {
                self.ctx.set_shadow_color(color);
                self.ctx.set_shadow_blur(paint.shadow_blur);
            }
            None => {
                self.ctx.set_shadow_color("transparent");
                self.ctx.set_shadow_blur(0.0);
            }
        }
    }
}
