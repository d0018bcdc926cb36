//! # sumgrid
//!
//! An in-memory evaluation engine for a minimal spreadsheet model.
//!
//! Cells are addressed by `(row, column)` and hold either a constant number
//! or a `Sum` formula over other cells. Values are computed on demand from
//! the current formulas. A reference to a missing cell, to a cell in error,
//! or around a cycle evaluates to [`CellValue::RefError`] instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use sumgrid::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! sheet.set_constant(CellId::new(0, 0), 5.0);
//! sheet.set_sum_cell(CellId::new(0, 1), vec![CellId::new(0, 0)]);
//! sheet.set_sum_cell(CellId::new(0, 2), vec![CellId::new(0, 1), CellId::new(0, 2)]);
//!
//! assert_eq!(
//!     sheet.render(),
//!     vec!["0,0: 5", "0,1: 5", "0,2: REFERROR"],
//! );
//! ```

pub mod calculation;
pub mod display;
pub mod prelude;
mod sheet;

pub use calculation::{CalculationOptions, CalculationStats};
pub use sheet::Sheet;

// Re-export core types
pub use sumgrid_core::{Cell, CellId, CellStore, CellValue, Error, Formula, Result};

// Re-export evaluator types
pub use sumgrid_eval::{
    evaluate, evaluate_all, evaluate_all_memoized, evaluate_with_path, DependencyGraph, Evaluator,
};
