//! Sparse cell storage: committed records, the transient selection and the
//! single edit reference.
//!
//! Records are shared `Rc` handles so the selection can alias committed
//! records instead of forking copies; mutating a value through one handle
//! is visible through every map that holds it.

use std::collections::HashMap;
use std::rc::Rc;

use crate::types::{Address, CellRecord, CellRef};

/// Committed and selected cell records for one widget.
#[derive(Default)]
pub struct CellStore {
    committed: HashMap<Address, CellRef>,
    selected: HashMap<Address, CellRef>,
    edit_cell: Option<CellRef>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed record at `addr`, if any.
    pub fn get(&self, addr: Address) -> Option<CellRef> {
        self.committed.get(&addr).map(Rc::clone)
    }

    /// Create or overwrite the committed record at `addr`.
    ///
    /// `x`/`y` are the world coordinates of the address; they are only
    /// used when the record does not exist yet. Committed records are
    /// never removed.
    pub fn upsert_committed(&mut self, addr: Address, value: &str, x: i32, y: i32) -> CellRef {
        if let Some(cell) = self.committed.get(&addr) {
            cell.borrow_mut().value = value.to_string();
            return Rc::clone(cell);
        }
        let cell = CellRecord::new(addr, x, y, value).shared();
        self.committed.insert(addr, Rc::clone(&cell));
        cell
    }

    /// Register `addr` in the selection and return its record: the
    /// committed record when one exists, an already-selected provisional
    /// record second, a fresh blank provisional record last.
    pub fn select(&mut self, addr: Address, x: i32, y: i32) -> CellRef {
        if let Some(cell) = self.committed.get(&addr) {
            let cell = Rc::clone(cell);
            self.selected.insert(addr, Rc::clone(&cell));
            return cell;
        }
        if let Some(cell) = self.selected.get(&addr) {
            return Rc::clone(cell);
        }
        let cell = CellRecord::new(addr, x, y, "").shared();
        self.selected.insert(addr, Rc::clone(&cell));
        cell
    }

    pub fn is_selected(&self, addr: Address) -> bool {
        self.selected.contains_key(&addr)
    }

    pub fn remove_selected(&mut self, addr: Address) {
        self.selected.remove(&addr);
    }

    /// Drop the whole selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Make `cell` the single edit record, demoting any previous one.
    /// Passing `None` just closes the current edit session.
    pub fn set_edit_cell(&mut self, cell: Option<CellRef>) {
        if let Some(prev) = self.edit_cell.take() {
            prev.borrow_mut().editing = false;
        }
        if let Some(cell) = cell {
            cell.borrow_mut().editing = true;
            self.edit_cell = Some(cell);
        }
    }

    pub fn edit_cell(&self) -> Option<CellRef> {
        self.edit_cell.as_ref().map(Rc::clone)
    }

    pub fn committed_cells(&self) -> impl Iterator<Item = &CellRef> {
        self.committed.values()
    }

    pub fn selected_cells(&self) -> impl Iterator<Item = &CellRef> {
        self.selected.values()
    }

    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }

    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }
}
