//! The sheet: cell store plus mutation and evaluation entry points

use std::collections::HashMap;

use sumgrid_core::{Cell, CellId, CellStore, CellValue};
use sumgrid_eval::{DependencyGraph, Evaluator};
use tracing::debug;

use crate::calculation::{CalculationOptions, CalculationStats};
use crate::display;

/// A spreadsheet of constant and `Sum` cells
///
/// Mutation takes `&mut self` and evaluation takes `&self`; to share a sheet
/// between threads, wrap it in a lock.
///
/// # Example
///
/// ```rust
/// use sumgrid::prelude::*;
///
/// let mut sheet = Sheet::new();
/// sheet.set_constant(CellId::new(0, 0), 5.0);
/// sheet.set_constant(CellId::new(0, 1), 10.0);
/// sheet.set_sum_cell(CellId::new(0, 2), vec![CellId::new(0, 0), CellId::new(0, 1)]);
///
/// assert_eq!(sheet.evaluate(CellId::new(0, 2)), CellValue::Number(15.0));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Sheet {
    store: CellStore,
}

impl Sheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `id` to a constant, replacing whatever was there
    pub fn set_constant(&mut self, id: CellId, value: f64) {
        debug!(cell = %id, value, "set constant");
        self.store.insert(id, Cell::constant(value));
    }

    /// Set `id` to the sum of `arguments`, replacing whatever was there
    ///
    /// The sum is computed immediately against the current sheet and stored
    /// as the cell's snapshot, which is also returned. The first argument that
    /// evaluates to `RefError` makes the snapshot `RefError` and the remaining
    /// arguments are not evaluated. Arguments may name cells that do not exist
    /// yet. Later evaluations recompute from the formula, so the snapshot never
    /// goes stale in results.
    pub fn set_sum_cell(&mut self, id: CellId, arguments: Vec<CellId>) -> CellValue {
        let snapshot = self.sum_snapshot(&arguments);
        debug!(cell = %id, args = arguments.len(), %snapshot, "set sum");
        self.store.insert(id, Cell::sum(snapshot, arguments));
        snapshot
    }

    fn sum_snapshot(&self, arguments: &[CellId]) -> CellValue {
        let mut evaluator = Evaluator::new(&self.store);
        let mut total = 0.0;
        for &arg in arguments {
            match evaluator.evaluate(arg) {
                CellValue::Number(n) => total += n,
                CellValue::RefError => return CellValue::RefError,
            }
        }
        CellValue::Number(total)
    }

    /// Evaluate a single cell from its current formula graph
    pub fn evaluate(&self, id: CellId) -> CellValue {
        Evaluator::new(&self.store).evaluate(id)
    }

    /// Evaluate every cell independently, without collecting statistics
    pub fn evaluate_all(&self) -> HashMap<CellId, CellValue> {
        sumgrid_eval::evaluate_all(&self.store)
    }

    /// Evaluate every cell and collect statistics about the run
    pub fn calculate(
        &self,
        options: &CalculationOptions,
    ) -> (HashMap<CellId, CellValue>, CalculationStats) {
        crate::calculation::calculate(&self.store, options)
    }

    /// Render every cell as `"<row>,<column>: <value>"`, sorted row-major
    pub fn render(&self) -> Vec<String> {
        display::render_results(&self.evaluate_all())
    }

    /// Get the stored cell at `id`
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.store.get(id)
    }

    /// Cells whose value can change when `id` changes, sorted row-major
    pub fn dependents_of(&self, id: CellId) -> Vec<CellId> {
        DependencyGraph::from_store(&self.store).transitive_dependents(id)
    }

    /// The underlying cell store
    pub fn store(&self) -> &CellStore {
        &self.store
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the sheet has no cells
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
