//! Three-dimensional vector type used throughout the engine
//!
//! `glam::DVec3` provides addition, subtraction, scaling and length. The only
//! operation that needs care is normalisation, which is undefined for a zero
//! vector.

pub type Vector3 = glam::DVec3;

/// Unit vector along `v`, or the zero vector when `v` has zero length
///
/// Two bodies at the same position would otherwise produce NaN and poison
/// every later step.
pub fn direction(v: Vector3) -> Vector3 {
    v.normalize_or_zero()
}

/// True when all three components are finite
pub fn is_finite_vector(v: Vector3) -> bool {
    v.is_finite()
}
