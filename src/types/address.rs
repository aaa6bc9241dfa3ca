use serde::{Deserialize, Serialize};

/// The address of a cell: a `(row, col)` grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub row: u32,
    pub col: u32,
}

impl Address {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}
