//! Error types for sumgrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sumgrid-core
///
/// These are API errors (bad input to a parser or constructor). An
/// unresolvable cell is not an error here; it evaluates to
/// [`CellValue::RefError`](crate::CellValue::RefError).
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell identifier text
    #[error("Invalid cell identifier: {0}")]
    InvalidCellId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCellId("x,y".into());
        assert_eq!(err.to_string(), "Invalid cell identifier: x,y");
    }
}
