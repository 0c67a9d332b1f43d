use crate::error::SimError;
use crate::trail::Trail;
use crate::vector::Vector3;

fn point(i: usize) -> Vector3 {
    Vector3::new(i as f64, 0.0, 0.0)
}

#[test]
fn test_new_trail_is_empty() {
    let trail = Trail::new(10).unwrap();
    assert!(trail.is_empty());
    assert_eq!(trail.capacity(), 10);
    assert_eq!(trail.latest(), None);
}

#[test]
fn test_zero_capacity_rejected() {
    let err = Trail::new(0).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidParameter {
            parameter: "trail capacity",
            ..
        }
    ));
}

#[test]
fn test_push_below_capacity_keeps_everything() {
    let mut trail = Trail::new(5).unwrap();
    for i in 1..=3 {
        trail.push(point(i));
    }
    assert_eq!(trail.snapshot(), vec![point(1), point(2), point(3)]);
    assert_eq!(trail.latest(), Some(point(3)));
}

#[test]
fn test_length_never_exceeds_capacity() {
    let mut trail = Trail::new(7).unwrap();
    for i in 1..=100 {
        trail.push(point(i));
        assert!(trail.len() <= 7);
    }
    assert_eq!(trail.len(), 7);
}

#[test]
fn test_oldest_surviving_point_after_overflow() {
    let capacity = 4;
    let total = 11;
    let mut trail = Trail::new(capacity).unwrap();
    for i in 1..=total {
        trail.push(point(i));
    }

    // Oldest survivor is the (total - capacity + 1)-th push
    let snapshot = trail.snapshot();
    assert_eq!(snapshot.first(), Some(&point(total - capacity + 1)));
    assert_eq!(snapshot.last(), Some(&point(total)));
    assert_eq!(snapshot, (8..=11).map(point).collect::<Vec<_>>());
}

#[test]
fn test_capacity_one_holds_latest_only() {
    let mut trail = Trail::new(1).unwrap();
    trail.push(point(1));
    trail.push(point(2));
    assert_eq!(trail.snapshot(), vec![point(2)]);
}

#[test]
fn test_snapshot_has_no_side_effect() {
    let mut trail = Trail::new(3).unwrap();
    trail.push(point(1));
    let first = trail.snapshot();
    let second = trail.snapshot();
    assert_eq!(first, second);
    assert_eq!(trail.len(), 1);
}

#[test]
fn test_clear() {
    let mut trail = Trail::new(3).unwrap();
    trail.push(point(1));
    trail.clear();
    assert!(trail.is_empty());
    assert_eq!(trail.capacity(), 3);
}
