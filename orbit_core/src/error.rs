//! Error types for the simulation engine

use crate::body::BodyId;
use thiserror::Error;

/// Errors reported by engine operations
///
/// All variants are recoverable: the failing call leaves the registry as it
/// was (or, for [`SimError::NumericDivergence`], reports on a step that has
/// already been applied).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A construction parameter was non-positive or non-finite
    #[error("invalid {parameter}: {value} (must be positive and finite)")]
    InvalidParameter {
        /// Parameter name, e.g. "mass" or "trail capacity"
        parameter: &'static str,
        /// Offending value
        value: f64,
    },

    /// A colour string could not be parsed as `#rrggbb` or `#rgb`
    #[error("invalid colour {0:?}: expected #rrggbb or #rgb")]
    InvalidColor(String),

    /// The handle does not name a body in the registry
    #[error("body {0} not found")]
    NotFound(BodyId),

    /// A step left one or more bodies with non-finite position or velocity
    #[error("numeric divergence: non-finite state in {bodies:?}")]
    NumericDivergence {
        /// Bodies whose state is no longer finite
        bodies: Vec<BodyId>,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Checks that `value` is strictly positive and finite
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { parameter, value })
    }
}
