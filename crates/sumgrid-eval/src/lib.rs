//! # sumgrid-eval
//!
//! Formula evaluator for sumgrid.
//!
//! This crate provides:
//! - Cycle-safe evaluation of a single cell ([`evaluate`])
//! - Whole-store evaluation, with or without memoization ([`evaluate_all`],
//!   [`evaluate_all_memoized`])
//! - Dependency tracking between formula cells ([`DependencyGraph`])
//!
//! ## Example
//!
//! ```rust
//! use sumgrid_core::{Cell, CellId, CellStore, CellValue};
//! use sumgrid_eval::evaluate;
//!
//! let mut store = CellStore::new();
//! store.insert(CellId::new(0, 0), Cell::constant(5.0));
//! store.insert(
//!     CellId::new(0, 1),
//!     Cell::sum(CellValue::Number(5.0), vec![CellId::new(0, 0)]),
//! );
//!
//! assert_eq!(evaluate(&store, CellId::new(0, 1)), CellValue::Number(5.0));
//! ```

pub mod dependency;
pub mod evaluator;

pub use dependency::DependencyGraph;
pub use evaluator::{evaluate, evaluate_all, evaluate_all_memoized, evaluate_with_path, Evaluator};
