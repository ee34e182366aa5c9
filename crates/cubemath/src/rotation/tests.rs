use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI, TAU};

use cgmath::{Quaternion, Vector3, Zero};

use super::*;
use crate::EPSILON;

fn assert_vector_approx_eq(expected: Vector3<Float>, actual: Vector3<Float>) {
    assert_approx_eq!(expected.x, actual.x);
    assert_approx_eq!(expected.y, actual.y);
    assert_approx_eq!(expected.z, actual.z);
}

#[test]
fn test_identity_decomposition() {
    let r = Rotation::identity();
    assert_eq!(r.angle(), 0.0);
    assert_eq!(r.decomposition().axis, Vector3::zero());
    assert_eq!(r, Rotation::default());
}

#[test]
fn test_zero_angle() {
    let mut r = Rotation::identity();
    r.apply_axis_angle(Vector3::new(0.0, 1.0, 0.0), 0.0);
    let AxisAngle { axis, angle } = r.decomposition();
    assert_eq!(angle, 0.0);
    assert!(axis.x.is_finite() && axis.y.is_finite() && axis.z.is_finite());
    assert_eq!(axis, Vector3::zero());
}

#[test]
fn test_zero_axis_is_ignored() {
    let mut r = Rotation::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), 0.5);
    let before = r;
    r.apply_axis_angle(Vector3::zero(), 1.0);
    assert_eq!(r, before);
    assert!(!r.angle().is_nan());
}

#[test]
fn test_axis_is_normalized() {
    let mut r = Rotation::identity();
    r.apply(AxisAngle::new(Vector3::new(2.0, 2.0, 0.0), FRAC_PI_2));
    assert_approx_eq!(r.angle(), FRAC_PI_2);
    assert_vector_approx_eq(Vector3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0), r.decomposition().axis);
    assert_approx_eq!(r.axis_x(), FRAC_1_SQRT_2);
    assert_approx_eq!(r.axis_y(), FRAC_1_SQRT_2);
    assert_approx_eq!(r.axis_z(), 0.0);
}

#[test]
fn test_half_turn_decomposition() {
    let r = Rotation::from_axis_angle(Vector3::new(0.0, 0.0, 3.0), PI);
    assert_approx_eq!(r.angle(), PI);
    assert_vector_approx_eq(Vector3::new(0.0, 0.0, 1.0), r.decomposition().axis);
}

#[test]
fn test_opposite_half_turns_cancel() {
    let axis = Vector3::new(1.0, -2.0, 0.5);
    let mut r = Rotation::identity();
    r.apply_axis_angle(axis, PI).apply_axis_angle(axis, -PI);
    assert!(r.angle().abs() < EPSILON);
    assert!(!r.axis_x().is_nan());
}

#[test]
fn test_same_half_turns_make_full_turn() {
    let axis = Vector3::new(0.0, 1.0, 0.0);
    let mut r = Rotation::identity();
    r.apply_axis_angle(axis, PI).apply_axis_angle(axis, PI);
    // A full turn is the quaternion -1, which decomposes to 2π.
    assert_approx_eq!(r.angle(), TAU);
    assert!(!r.axis_y().is_nan());
}

#[test]
fn test_premultiply_order() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    let z = Vector3::new(0.0, 0.0, 1.0);

    let mut r = Rotation::identity();
    r.apply_axis_angle(z, FRAC_PI_2);
    assert_vector_approx_eq(y, r.rotate_vector(x));

    // The second rotation happens in world space after the first, so X goes
    // to Y and then to Z. Postmultiplying would leave X at Y.
    r.apply_axis_angle(x, FRAC_PI_2);
    assert_vector_approx_eq(z, r.rotate_vector(x));
}

#[test]
fn test_decomposition_stays_in_sync() {
    let mut r = Rotation::identity();
    r.set_from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 1.0);
    assert_approx_eq!(r.angle(), 1.0);

    r.set_from_quaternion(Quaternion::new(2.0, 0.0, 0.0, 0.0));
    assert_eq!(r.angle(), 0.0);

    r.set_from_quaternion(Quaternion::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(r, Rotation::identity());

    let mut r = Rotation::identity();
    for _ in 0..8 {
        r.apply_axis_angle(Vector3::new(1.0, 1.0, 1.0), TAU / 24.0);
    }
    assert_approx_eq!(r.angle(), TAU / 3.0);
    let k = 1.0 / 3.0_f64.sqrt();
    assert_vector_approx_eq(Vector3::new(k, k, k), r.decomposition().axis);
}
