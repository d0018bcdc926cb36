//! Cell-related types
//!
//! This module contains:
//! - [`CellId`] - A cell's location, `(row, column)`
//! - [`CellValue`] - The evaluated value of a cell
//! - [`Formula`] - The rule a cell uses to derive its value
//! - [`Cell`] and [`CellStore`] - Stored cell records and their container

mod address;
mod formula;
mod storage;
mod value;

pub use address::CellId;
pub use formula::Formula;
pub use storage::{Cell, CellStore};
pub use value::CellValue;
