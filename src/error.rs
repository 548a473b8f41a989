use thiserror::Error;

/// Top-level error type for the box editor.
#[derive(Debug, Error)]
pub enum BoxwrightError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors raised while validating the dimension form.
///
/// This is the only error class surfaced to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("please enter all dimensions ({field} is missing)")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got {value:?}")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },
}

impl InputError {
    /// Name of the form field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotNumeric { field, .. }
            | Self::NotPositive { field, .. }
            | Self::TooLarge { field, .. } => field,
        }
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the scene arenas.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("no box has been created yet")]
    NoBox,
}

/// Convenience type alias for results using [`BoxwrightError`].
pub type Result<T> = std::result::Result<T, BoxwrightError>;
