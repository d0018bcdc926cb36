//! Cell identifier type

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell identifier (e.g., `0,2`)
///
/// Identifiers are plain `(row, column)` pairs compared and hashed by value.
/// Any integer is accepted, including negative ones. Ordering is row-major,
/// which is the order used when results are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId {
    /// Row index
    pub row: i64,
    /// Column index
    pub col: i64,
}

impl CellId {
    /// Create a new cell identifier
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Parse an identifier from `row,column` notation
    ///
    /// # Examples
    /// ```
    /// use sumgrid_core::CellId;
    ///
    /// let id = CellId::parse("3,4").unwrap();
    /// assert_eq!(id.row, 3);
    /// assert_eq!(id.col, 4);
    ///
    /// let id = CellId::parse(" -1 , 7 ").unwrap();
    /// assert_eq!(id, CellId::new(-1, 7));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidCellId("empty identifier".into()));
        }

        let (row_str, col_str) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidCellId(format!("missing ',' in '{}'", s)))?;

        let row: i64 = row_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCellId(format!("invalid row in '{}'", s)))?;
        let col: i64 = col_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCellId(format!("invalid column in '{}'", s)))?;

        Ok(Self { row, col })
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for CellId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(i64, i64)> for CellId {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cell_id_parse() {
        assert_eq!(CellId::parse("0,0").unwrap(), CellId::new(0, 0));
        assert_eq!(CellId::parse("12,345").unwrap(), CellId::new(12, 345));
        assert_eq!(CellId::parse("  2 ,  9 ").unwrap(), CellId::new(2, 9));
        assert_eq!(CellId::parse("-3,-4").unwrap(), CellId::new(-3, -4));
    }

    #[test]
    fn test_cell_id_parse_errors() {
        assert!(CellId::parse("").is_err());
        assert!(CellId::parse("   ").is_err());
        assert!(CellId::parse("1").is_err());
        assert!(CellId::parse("1,").is_err());
        assert!(CellId::parse(",1").is_err());
        assert!(CellId::parse("a,1").is_err());
        assert!(CellId::parse("1,2,3").is_err());
        assert!(CellId::parse("A1").is_err());
    }

    #[test]
    fn test_cell_id_display() {
        assert_eq!(CellId::new(0, 2).to_string(), "0,2");
        assert_eq!(CellId::new(-1, 10).to_string(), "-1,10");
    }

    #[test]
    fn test_cell_id_structural_equality() {
        let mut set = HashSet::new();
        set.insert(CellId::new(1, 2));
        assert!(set.contains(&CellId::from((1, 2))));
        assert!(!set.contains(&CellId::new(2, 1)));
    }

    #[test]
    fn test_cell_id_row_major_order() {
        let mut ids = vec![
            CellId::new(1, 0),
            CellId::new(0, 5),
            CellId::new(0, 1),
            CellId::new(-1, 9),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                CellId::new(-1, 9),
                CellId::new(0, 1),
                CellId::new(0, 5),
                CellId::new(1, 0),
            ]
        );
    }
}
