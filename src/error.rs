use std::fmt;

/// Failures reported by the validating entry points. The permissive
/// generators never produce one.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Non-positive or non-finite geometry, or an empty grid.
    InvalidInput(String),
    /// Two grids that must be combined pixel by pixel differ in shape.
    ShapeMismatch(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (kind, detail) = match self {
            GridError::InvalidInput(detail) => ("invalid grid parameter", detail),
            GridError::ShapeMismatch(detail) => ("grid shape mismatch", detail),
        };
        write!(f, "{}: {}", kind, detail)
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(feature = "python")]
impl From<GridError> for pyo3::PyErr {
    fn from(err: GridError) -> pyo3::PyErr {
        pyo3::exceptions::PyRuntimeError::new_err(err.to_string())
    }
}

/// `Err(GridError::<Kind>(format!(...)))`.
#[macro_export]
macro_rules! grid_err {
    ($kind:ident, $($fmt:tt)+) => {
        Err($crate::error::GridError::$kind(format!($($fmt)+)))
    };
}

/// Rejects values that are not finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        grid_err!(InvalidInput, "{} must be positive and finite, got {}", name, value)
    }
}
