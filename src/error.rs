use thiserror::Error;

/// Top-level error type for the planform geometry core.
#[derive(Debug, Error)]
pub enum PlanformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when building or addressing geometric values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("index {index} is out of range for a point (expected 0 or 1)")]
    IndexOutOfRange { index: usize },

    #[error("cannot build a point from a null array")]
    NullInput,

    #[error("expected an array of {expected} values, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`PlanformError`].
pub type Result<T> = std::result::Result<T, PlanformError>;
