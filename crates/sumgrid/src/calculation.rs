//! Sheet-level calculation
//!
//! Evaluates every cell of a store and reports statistics about the run.
//!
//! # Example
//!
//! ```rust
//! use sumgrid::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! sheet.set_sum_cell(CellId::new(0, 0), vec![CellId::new(0, 1)]);
//! sheet.set_sum_cell(CellId::new(0, 1), vec![CellId::new(0, 0)]);
//!
//! let (values, stats) = sheet.calculate(&CalculationOptions::default());
//! assert_eq!(values[&CellId::new(0, 0)], CellValue::RefError);
//! assert_eq!(stats.circular_references, 2);
//! ```

use std::collections::HashMap;

use sumgrid_core::{CellId, CellStore, CellValue};
use sumgrid_eval::{evaluate_all, evaluate_all_memoized, DependencyGraph};
use tracing::debug;

/// Options for sheet calculation
#[derive(Debug, Clone)]
pub struct CalculationOptions {
    /// Reuse values of cells already evaluated in the same run.
    /// Results are identical either way; only the amount of work differs.
    pub memoize: bool,
    /// Build the dependency graph to count cells on circular references
    pub detect_circular: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            memoize: false,
            detect_circular: true,
        }
    }
}

/// Statistics from a calculation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationStats {
    /// Total number of cells evaluated
    pub cell_count: usize,
    /// Number of `Sum` cells
    pub formula_count: usize,
    /// Number of cells that evaluated to `RefError`
    pub ref_errors: usize,
    /// Number of cells lying on a circular reference (0 when detection is off)
    pub circular_references: usize,
}

pub(crate) fn calculate(
    store: &CellStore,
    options: &CalculationOptions,
) -> (HashMap<CellId, CellValue>, CalculationStats) {
    let values = if options.memoize {
        evaluate_all_memoized(store)
    } else {
        evaluate_all(store)
    };

    let circular_references = if options.detect_circular {
        DependencyGraph::from_store(store).circular_cells().len()
    } else {
        0
    };

    let stats = CalculationStats {
        cell_count: values.len(),
        formula_count: store.formula_count(),
        ref_errors: values.values().filter(|v| v.is_error()).count(),
        circular_references,
    };

    debug!(?stats, memoize = options.memoize, "calculation finished");
    (values, stats)
}
