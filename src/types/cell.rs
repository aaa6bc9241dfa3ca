use std::cell::RefCell;
use std::rc::Rc;

use super::Address;

/// A single cell: world position, grid address, value and edit flag.
///
/// `x`/`y` are derived from the address (`x = col * cell_width`,
/// `y = row * cell_height`) and never change independently of it.
#[derive(Debug, Clone)]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,
    pub row: u32,
    pub col: u32,
    pub value: String,
    pub editing: bool,
}

/// Shared handle to a cell record.
///
/// The selection map may alias committed records; `Rc` identity is what
/// "same record" means throughout the widget.
pub type CellRef = Rc<RefCell<CellRecord>>;

impl CellRecord {
    pub fn new(address: Address, x: i32, y: i32, value: &str) -> Self {
        Self {
            x,
            y,
            row: address.row,
            col: address.col,
            value: value.to_string(),
            editing: false,
        }
    }

    pub fn address(&self) -> Address {
        Address::new(self.row, self.col)
    }

    /// Wrap into the shared handle form used by the store.
    pub fn shared(self) -> CellRef {
        Rc::new(RefCell::new(self))
    }
}
