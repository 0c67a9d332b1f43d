use approx::assert_relative_eq;

use crate::gravity::{pair_force, pairwise_accelerations, potential_energy};
use crate::vector::Vector3;

#[test]
fn test_pair_force_points_toward_other_body() {
    let force = pair_force(Vector3::ZERO, 2.0, Vector3::new(0.0, 4.0, 0.0), 8.0, 1.0).unwrap();
    // F = 1 * 2 * 8 / 16
    assert_relative_eq!(force.length(), 1.0);
    assert_relative_eq!(force.y, 1.0);
    assert_eq!(force.x, 0.0);
}

#[test]
fn test_pair_force_is_antisymmetric() {
    let pi = Vector3::new(1.0, -2.0, 0.5);
    let pj = Vector3::new(-3.0, 4.0, 2.0);
    let on_i = pair_force(pi, 3.0, pj, 7.0, 1.5).unwrap();
    let on_j = pair_force(pj, 7.0, pi, 3.0, 1.5).unwrap();

    assert_relative_eq!(on_i.length(), on_j.length(), max_relative = 1e-12);
    let sum = on_i + on_j;
    assert!(sum.length() < 1e-12, "forces not opposite: {on_i:?} vs {on_j:?}");
}

#[test]
fn test_coincident_bodies_do_not_interact() {
    let p = Vector3::new(5.0, 5.0, 5.0);
    assert!(pair_force(p, 1.0, p, 1.0, 1.0).is_none());

    let acc = pairwise_accelerations(&[p, p], &[1.0, 1.0], 1.0);
    assert_eq!(acc, vec![Vector3::ZERO, Vector3::ZERO]);
}

#[test]
fn test_single_body_feels_nothing() {
    let acc = pairwise_accelerations(&[Vector3::new(1.0, 2.0, 3.0)], &[50.0], 1.0);
    assert_eq!(acc, vec![Vector3::ZERO]);
}

#[test]
fn test_newton_third_law() {
    let positions = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(3.0, 1.0, 0.0),
        Vector3::new(-2.0, 4.0, 1.0),
    ];
    let masses = [5.0, 2.0, 9.0];
    let acc = pairwise_accelerations(&positions, &masses, 1.0);

    let net: Vector3 = acc
        .iter()
        .zip(masses.iter())
        .map(|(a, m)| *a * *m)
        .sum();
    assert!(net.length() < 1e-12, "net force not zero: {net:?}");
}

#[test]
fn test_acceleration_independent_of_own_mass() {
    let positions = [Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0)];
    let light = pairwise_accelerations(&positions, &[1.0, 100.0], 1.0);
    let heavy = pairwise_accelerations(&positions, &[50.0, 100.0], 1.0);
    // a = G m_j / r^2 = 1
    assert_relative_eq!(light[0].x, 1.0, max_relative = 1e-12);
    assert_relative_eq!(heavy[0].x, 1.0, max_relative = 1e-12);
}

#[test]
fn test_zero_mass_gives_non_finite_acceleration() {
    let positions = [Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)];
    let acc = pairwise_accelerations(&positions, &[0.0, 10.0], 1.0);
    assert!(!acc[0].is_finite());
    // The massive body feels nothing from a massless one
    assert_eq!(acc[1], Vector3::ZERO);
}

#[test]
fn test_potential_energy() {
    let positions = [Vector3::ZERO, Vector3::new(2.0, 0.0, 0.0)];
    assert_relative_eq!(potential_energy(&positions, &[4.0, 3.0], 1.0), -6.0);
    assert_eq!(potential_energy(&[Vector3::ZERO, Vector3::ZERO], &[1.0, 1.0], 1.0), 0.0);
}
