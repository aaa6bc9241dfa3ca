//! Pointer and keyboard handlers — the interaction state machine.
//!
//! Handlers are named methods on `GridCore`, operating on explicit state
//! rather than captured variables. Every handler returns whether visible
//! state changed, so the caller knows to redraw; pure cancellations
//! return `false`.

use crate::scroll::Direction;
use crate::types::CellRef;

use super::GridCore;

/// What an element-local point hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// One of the four scroll affordances.
    Affordance(Direction),
    /// The cell grid.
    Cell,
}

impl GridCore {
    /// Classify an element-local point against the scroll affordances.
    ///
    /// Hot zones match the drawn rectangles: left/right half-cells along
    /// the bottom edge, up at the top right, down stacked above right.
    pub fn hit_test(&self, x: i32, y: i32) -> HitTarget {
        let w = self.viewport.width;
        let h = self.viewport.height;
        let cw = self.viewport.cell_width;
        let ch = self.viewport.cell_height;
        let half = cw / 2;

        if y >= h - ch && y < h {
            if (0..half).contains(&x) {
                return HitTarget::Affordance(Direction::Left);
            }
            if (w - half..w).contains(&x) {
                return HitTarget::Affordance(Direction::Right);
            }
        }
        if (w - half..w).contains(&x) {
            if (0..ch).contains(&y) {
                return HitTarget::Affordance(Direction::Up);
            }
            if (h - ch * 2..h - ch).contains(&y) {
                return HitTarget::Affordance(Direction::Down);
            }
        }
        HitTarget::Cell
    }

    /// Primary button press at element-local `(x, y)`.
    ///
    /// An affordance press starts a held scroll. Anywhere else, the click
    /// abandons any edit session, rebuilds the selection from scratch and
    /// selects the clicked cell.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) -> bool {
        if let HitTarget::Affordance(direction) = self.hit_test(x, y) {
            return self
                .scroll
                .start_held(direction, &mut self.viewport, &mut *self.scheduler);
        }

        self.store.clear_selection();
        self.store.set_edit_cell(None);
        let (addr, _, _) = self.viewport.screen_to_address(x, y);
        self.select_address(addr);
        self.pointer_down = true;
        true
    }

    /// Primary button release: cancel scrolling, end drag-selection.
    pub fn on_pointer_up(&mut self) -> bool {
        self.pointer_down = false;
        self.scroll.stop(&mut *self.scheduler);
        false
    }

    /// Drag with the primary button held: extend the selection.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> bool {
        if !self.active || !self.pointer_down {
            return false;
        }
        let (addr, _, _) = self.viewport.screen_to_address(x, y);
        if self.store.is_selected(addr) {
            return false;
        }
        self.select_address(addr);
        true
    }

    /// Double click: open an edit session on the cell. The previous edit
    /// record, if any, is demoted; the next printable keystroke replaces
    /// the value instead of appending.
    pub fn on_double_click(&mut self, x: i32, y: i32) -> bool {
        let (addr, _, _) = self.viewport.screen_to_address(x, y);
        let cell = self.select_address(addr);
        self.store.set_edit_cell(Some(cell));
        self.replace_on_input = true;
        true
    }

    /// Keyboard input: arrow-key scrolling first, then edit-session keys.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        if self.active && !self.scroll.is_scrolling() {
            let direction = match key {
                "ArrowRight" => Some(Direction::Right),
                "ArrowLeft" => Some(Direction::Left),
                "ArrowDown" => Some(Direction::Down),
                "ArrowUp" => Some(Direction::Up),
                _ => None,
            };
            if let Some(direction) = direction {
                return self
                    .scroll
                    .start_held(direction, &mut self.viewport, &mut *self.scheduler);
            }
        }

        let Some(edit) = self.store.edit_cell() else {
            return false;
        };
        match key {
            "Tab" => {
                self.commit_edit(&edit);
                true
            }
            "Backspace" => edit.borrow_mut().value.pop().is_some(),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => {
                        let mut cell = edit.borrow_mut();
                        if self.replace_on_input {
                            cell.value.clear();
                            self.replace_on_input = false;
                        }
                        cell.value.push(ch);
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Key release: stop keyboard or affordance scrolling.
    pub fn on_key_up(&mut self) -> bool {
        if self.scroll.is_scrolling() {
            self.scroll.stop(&mut *self.scheduler);
        }
        false
    }

    pub fn on_pointer_enter(&mut self) -> bool {
        self.active = true;
        false
    }

    /// Pointer left the widget (or the host window lost focus).
    pub fn on_pointer_leave(&mut self) -> bool {
        self.scroll.stop(&mut *self.scheduler);
        self.active = false;
        self.pointer_down = false;
        false
    }

    /// A host scroll event arrived. Returns whether the caller should
    /// sample the scroll position on the next frame tick; at most one
    /// sample is in flight at a time.
    pub fn on_scroll_event(&mut self) -> bool {
        if !self.active || self.scroll.is_scrolling() || self.raf_pending {
            return false;
        }
        self.raf_pending = true;
        true
    }

    /// Next-frame sample of the host scroll position: infer the direction
    /// from the last recorded value and start a flung scroll.
    pub fn on_host_scroll(&mut self, scroll_top: i32) -> bool {
        self.raf_pending = false;
        if self.scroll.is_scrolling() {
            return false;
        }
        let direction = if scroll_top > self.last_scroll {
            Direction::Down
        } else {
            Direction::Up
        };
        self.last_scroll = scroll_top;
        self.scroll
            .start_flung(direction, &mut self.viewport, &mut *self.scheduler)
    }

    /// Tab: commit the edit value, close the session, notify the host.
    fn commit_edit(&mut self, edit: &CellRef) {
        let (addr, value) = {
            let cell = edit.borrow();
            (cell.address(), cell.value.clone())
        };
        self.store.remove_selected(addr);
        self.add_data(addr.row, addr.col, &value);
        self.store.set_edit_cell(None);
        self.collaborator.on_edit_batch_complete();
    }
}
