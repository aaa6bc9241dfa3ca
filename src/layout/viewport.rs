//! Viewport state: world origin, background-tile offsets and grid math.

use crate::types::Address;

/// The visible window into the world-coordinate grid.
///
/// `(x, y)` is the viewport origin in world pixels. `(sx, sy)` are offsets
/// into the background tile surface, which is twice the viewport size; they
/// are recycled at tile boundaries so panning never has to redraw the grid
/// lines.
///
/// `width`/`height` are exact multiples of the cell size and the cell size
/// is positive — both enforced by `GridConfig::normalized` before a
/// viewport is built.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub sx: i32,
    pub sy: i32,
    pub width: i32,
    pub height: i32,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32, cell_width: i32, cell_height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            sx: 0,
            sy: 0,
            width,
            height,
            cell_width,
            cell_height,
        }
    }

    /// World coordinates of a cell address.
    pub fn address_to_coords(&self, row: u32, col: u32) -> (i32, i32) {
        let x = i64::from(col) * i64::from(self.cell_width);
        let y = i64::from(row) * i64::from(self.cell_height);
        (
            i32::try_from(x).unwrap_or(i32::MAX),
            i32::try_from(y).unwrap_or(i32::MAX),
        )
    }

    /// Grid location containing the given world coordinates.
    pub fn location_at(&self, x: i32, y: i32) -> (u32, u32) {
        let row = u32::try_from((y / self.cell_height).max(0)).unwrap_or(0);
        let col = u32::try_from((x / self.cell_width).max(0)).unwrap_or(0);
        (row, col)
    }

    /// Convert element-local screen coordinates to a cell address plus its
    /// snapped world coordinates.
    ///
    /// The caller has already removed the host element's bounding offset
    /// and the host scroll offset; this adds the viewport origin and
    /// truncates to the cell grid.
    pub fn screen_to_address(&self, local_x: i32, local_y: i32) -> (Address, i32, i32) {
        let world_x = (local_x + self.x).max(0);
        let world_y = (local_y + self.y).max(0);
        let (row, col) = self.location_at(world_x, world_y);
        let (snapped_x, snapped_y) = self.address_to_coords(row, col);
        (Address::new(row, col), snapped_x, snapped_y)
    }

    /// Pan the viewport by `(dx, dy)`.
    ///
    /// A move that would take an axis below the world origin clamps that
    /// axis to zero, resets its tile offset and reports failure; the
    /// caller is responsible for cancelling any scroll task. Otherwise the
    /// origin and tile offsets advance together, and a tile offset is
    /// recycled whenever the origin crosses a tile boundary: moving right
    /// resets `sx` to 0, moving left to `width`; moving down resets `sy`
    /// to 0, moving up to `height`.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        if dx < 0 && self.x + dx < 0 {
            self.x = 0;
            self.sx = 0;
            return false;
        }
        if dy < 0 && self.y + dy < 0 {
            self.y = 0;
            self.sy = 0;
            return false;
        }

        self.x += dx;
        self.y += dy;
        self.sx += dx;
        self.sy += dy;

        if dx != 0 && self.x % self.width == 0 {
            self.sx = if dx > 0 { 0 } else { self.width };
        }
        if dy != 0 && self.y % self.height == 0 {
            self.sy = if dy > 0 { 0 } else { self.height };
        }

        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(100, 100, 50, 50)
    }

    #[test]
    fn location_inverts_address_to_coords() {
        let vp = viewport();
        for row in 0..20 {
            for col in 0..20 {
                let (x, y) = vp.address_to_coords(row, col);
                assert_eq!(vp.location_at(x, y), (row, col));
            }
        }
    }

    #[test]
    fn screen_to_address_snaps_to_the_cell_grid() {
        let vp = viewport();
        let (addr, sx, sy) = vp.screen_to_address(60, 10);
        assert_eq!(addr, Address::new(0, 1));
        assert_eq!((sx, sy), (50, 0));
    }

    #[test]
    fn screen_to_address_includes_the_viewport_origin() {
        let mut vp = viewport();
        assert!(vp.move_by(50, 0));
        let (addr, sx, _) = vp.screen_to_address(10, 10);
        assert_eq!(addr, Address::new(0, 1));
        assert_eq!(sx, 50);
    }

    #[test]
    fn move_past_the_origin_fails_and_clamps() {
        let mut vp = viewport();
        assert!(!vp.move_by(-10, 0));
        assert_eq!((vp.x, vp.y, vp.sx, vp.sy), (0, 0, 0, 0));
        assert!(!vp.move_by(0, -5));
        assert_eq!((vp.x, vp.y, vp.sx, vp.sy), (0, 0, 0, 0));
    }

    #[test]
    fn move_clamps_a_mid_tile_origin_back_to_zero() {
        let mut vp = viewport();
        assert!(vp.move_by(3, 0));
        assert!(!vp.move_by(-5, 0));
        assert_eq!((vp.x, vp.sx), (0, 0));
    }

    #[test]
    fn tile_offset_recycles_to_zero_moving_right() {
        let mut vp = viewport();
        for _ in 0..20 {
            assert!(vp.move_by(5, 0));
        }
        assert_eq!(vp.x, 100);
        assert_eq!(vp.sx, 0);
    }

    #[test]
    fn tile_offset_recycles_to_width_moving_left() {
        let mut vp = viewport();
        for _ in 0..20 {
            assert!(vp.move_by(5, 0));
        }
        for _ in 0..20 {
            assert!(vp.move_by(-5, 0));
        }
        assert_eq!(vp.x, 0);
        assert_eq!(vp.sx, 100);
    }

    #[test]
    fn tile_offset_recycles_vertically() {
        let mut vp = viewport();
        for _ in 0..20 {
            assert!(vp.move_by(0, 5));
        }
        assert_eq!((vp.y, vp.sy), (100, 0));
        for _ in 0..20 {
            assert!(vp.move_by(0, -5));
        }
        assert_eq!((vp.y, vp.sy), (0, 100));
    }

    #[test]
    fn tile_offset_is_untouched_mid_tile() {
        let mut vp = viewport();
        assert!(vp.move_by(5, 0));
        assert_eq!(vp.sx, 5);
        assert!(vp.move_by(5, 0));
        assert_eq!(vp.sx, 10);
    }
}
