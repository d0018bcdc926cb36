//! Cell storage implementation
//!
//! Sparse storage for spreadsheet cells. Only cells that have been set are
//! stored; an identifier with no entry simply does not exist.

use ahash::AHashMap;

use super::{CellId, CellValue, Formula};

/// Complete data for a single cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// For constants, the authoritative value. For `Sum` cells, the value
    /// computed when the formula was set; it is never read during evaluation.
    pub content: CellValue,
    /// The cell's formula (`Formula::None` for constants)
    pub formula: Formula,
}

impl Cell {
    /// Create a constant cell
    pub fn constant(value: f64) -> Self {
        Self {
            content: CellValue::Number(value),
            formula: Formula::None,
        }
    }

    /// Create a `Sum` cell with the snapshot computed when it was set
    pub fn sum(snapshot: CellValue, references: Vec<CellId>) -> Self {
        Self {
            content: snapshot,
            formula: Formula::Sum(references),
        }
    }

    /// Check if this cell holds a formula
    pub fn is_formula(&self) -> bool {
        self.formula.is_sum()
    }
}

/// Sparse cell storage keyed by [`CellId`]
///
/// Inserting at an existing identifier replaces the old cell outright.
/// Iteration order of [`iter`](Self::iter) is unspecified;
/// [`ids`](Self::ids) returns identifiers in row-major order.
#[derive(Debug, Default, Clone)]
pub struct CellStore {
    cells: AHashMap<CellId, Cell>,
}

impl CellStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the cell at `id`, returning the previous cell
    pub fn insert(&mut self, id: CellId, cell: Cell) -> Option<Cell> {
        self.cells.insert(id, cell)
    }

    /// Get the cell at `id`
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(&id)
    }

    /// Check if a cell exists at `id`
    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains_key(&id)
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of stored `Sum` cells
    pub fn formula_count(&self) -> usize {
        self.cells.values().filter(|c| c.is_formula()).count()
    }

    /// All stored identifiers, sorted row-major
    pub fn ids(&self) -> Vec<CellId> {
        let mut ids: Vec<CellId> = self.cells.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over stored cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.cells.iter().map(|(id, cell)| (*id, cell))
    }
}
