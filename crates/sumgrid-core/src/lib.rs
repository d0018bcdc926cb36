//! # sumgrid-core
//!
//! Core data structures for the sumgrid evaluation engine.
//!
//! This crate provides the fundamental types used throughout sumgrid:
//! - [`CellId`] - A cell's `(row, column)` address
//! - [`CellValue`] - The result of evaluating a cell (a number or `RefError`)
//! - [`Formula`] - How a cell derives its value
//! - [`Cell`] and [`CellStore`] - The stored cells
//!
//! ## Example
//!
//! ```rust
//! use sumgrid_core::{Cell, CellId, CellStore, CellValue};
//!
//! let mut store = CellStore::new();
//! store.insert(CellId::new(0, 0), Cell::constant(5.0));
//!
//! let cell = store.get(CellId::new(0, 0)).unwrap();
//! assert_eq!(cell.content, CellValue::Number(5.0));
//! ```

pub mod cell;
pub mod error;

// Re-exports for convenience
pub use cell::{Cell, CellId, CellStore, CellValue, Formula};
pub use error::{Error, Result};
