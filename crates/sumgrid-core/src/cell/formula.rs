//! Formula representation

use super::CellId;

/// How a cell derives its value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Formula {
    /// Arithmetic sum of the referenced cells, in reference order
    Sum(Vec<CellId>),

    /// No formula: the cell holds a constant
    #[default]
    None,
}

impl Formula {
    /// Check if this is a `Sum` formula
    pub fn is_sum(&self) -> bool {
        matches!(self, Formula::Sum(_))
    }

    /// Get the cells this formula references (empty for constants)
    pub fn references(&self) -> &[CellId] {
        match self {
            Formula::Sum(refs) => refs,
            Formula::None => &[],
        }
    }
}
