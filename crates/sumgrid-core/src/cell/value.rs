//! Cell value types

use std::fmt;

/// The result of evaluating a cell
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Numeric value. NaN and infinities are carried through unchanged.
    Number(f64),

    /// The value cannot be determined: a missing cell, an error in a
    /// referenced cell, or a circular reference.
    RefError,
}

impl CellValue {
    /// Display token for [`CellValue::RefError`]
    pub const REF_ERROR_TOKEN: &'static str = "REFERROR";

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::RefError => None,
        }
    }

    /// Check if the value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::RefError)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::RefError => f.write_str(Self::REF_ERROR_TOKEN),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(3.5), CellValue::Number(3.5));
    }

    #[test]
    fn test_cell_value_as_number() {
        assert_eq!(CellValue::Number(42.0).as_number(), Some(42.0));
        assert_eq!(CellValue::RefError.as_number(), None);
        assert!(CellValue::RefError.is_error());
        assert!(!CellValue::Number(0.0).is_error());
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Number(15.0).to_string(), "15");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Number(-0.125).to_string(), "-0.125");
        assert_eq!(CellValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(CellValue::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(CellValue::RefError.to_string(), "REFERROR");
    }
}
