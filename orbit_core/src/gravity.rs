//! Direct-summation Newtonian gravity
//!
//! Every pair is evaluated exactly: O(n²) per step with no tree or grid
//! approximation. That is fine for the handful of bodies a user places by
//! hand and becomes the bottleneck for large scenes.

use crate::vector::{direction, Vector3};

/// Force exerted on body `i` by body `j`
///
/// Returns `None` for coincident bodies, which do not interact.
pub fn pair_force(
    position_i: Vector3,
    mass_i: f64,
    position_j: Vector3,
    mass_j: f64,
    g: f64,
) -> Option<Vector3> {
    let separation = position_j - position_i;
    let distance = separation.length();
    if distance > 0.0 {
        let magnitude = g * mass_i * mass_j / (distance * distance);
        Some(direction(separation) * magnitude)
    } else {
        None
    }
}

/// Net acceleration on every body from all the others
///
/// `positions` and `masses` are one consistent snapshot, so the result does
/// not depend on the order bodies are later updated in. Contributions are
/// summed over `j` in slice order, which keeps the result bit-for-bit
/// reproducible.
///
/// The acceleration is `F / mass_i`, so a body with zero mass gets a
/// non-finite acceleration. That is left visible rather than clamped.
pub fn pairwise_accelerations(positions: &[Vector3], masses: &[f64], g: f64) -> Vec<Vector3> {
    debug_assert_eq!(positions.len(), masses.len());
    let n = positions.len();
    let mut accelerations = vec![Vector3::ZERO; n];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if let Some(force) = pair_force(positions[i], masses[i], positions[j], masses[j], g) {
                accelerations[i] += force / masses[i];
            }
        }
    }

    accelerations
}

/// Pairwise potential energy `-G m_i m_j / r`, skipping coincident pairs
pub fn potential_energy(positions: &[Vector3], masses: &[f64], g: f64) -> f64 {
    let mut potential = 0.0;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let r = (positions[j] - positions[i]).length();
            if r > 0.0 {
                potential -= g * masses[i] * masses[j] / r;
            }
        }
    }
    potential
}
