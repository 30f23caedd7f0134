use thiserror::Error;

/// Top-level error type for the Extremis outline kernel.
#[derive(Debug, Error)]
pub enum ExtremisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Outline(#[from] OutlineError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("split parameters must be strictly increasing in (0, 1)")]
    UnorderedSplitParameters,
}

/// Errors related to the outline entity store.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid contour: {0}")]
    InvalidContour(String),

    #[error("point index {index} out of range for contour with {len} points")]
    PointIndexOutOfRange { index: usize, len: usize },
}

/// Errors related to outline operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`ExtremisError`].
pub type Result<T> = std::result::Result<T, ExtremisError>;
