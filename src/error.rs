use thiserror::Error;

/// Top-level error type for dynamic topography computations.
#[derive(Debug, Error)]
pub enum DtError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Transect(#[from] TransectError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors related to planar geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("cannot shorten segment to {length}: only {available} available")]
    ShortenTooLong { length: f64, available: f64 },
}

/// Terminal conditions for a single cut.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransectError {
    #[error("no flow observations found near the cut")]
    EmptyNeighborhood,

    #[error("not enough data to integrate: {found} samples, {required} required")]
    InsufficientSamples { found: usize, required: usize },
}

/// Errors related to flat input records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field {field}: invalid number {value:?}")]
    InvalidNumber { field: usize, value: String },
}

/// Convenience type alias for results using [`DtError`].
pub type Result<T> = std::result::Result<T, DtError>;
