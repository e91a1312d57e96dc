/// Recoverable errors.
///
/// Broken preconditions are not reported here; see [`fmv_assert!`](crate::fmv_assert).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot size a dimension fixed at {fixed} to {requested}")]
    FixedResize { fixed: usize, requested: usize },

    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is not symmetric at ({row}, {col})")]
    NotSymmetric { row: usize, col: usize },

    #[error("matrix is not diagonal at ({row}, {col})")]
    NotDiagonal { row: usize, col: usize },

    #[error("row {row} has {found} entries, but the first row has {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },

    #[error("expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("could not parse matrix: {0}")]
    Parse(String),

    #[error("invalid CSR data: {0}")]
    InvalidCsr(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
