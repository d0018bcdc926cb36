//! Prelude module - common imports for sumgrid users
//!
//! ```rust
//! use sumgrid::prelude::*;
//! ```

pub use crate::{
    // Calculation types
    CalculationOptions,
    CalculationStats,
    // Cell types
    CellId,
    CellValue,
    // Error types
    Error,
    Formula,
    Result,
    // Main types
    Sheet,
};
