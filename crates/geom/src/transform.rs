//! Affine transforms about a pivot point.
//!
//! All transforms are expressed in device space. `euclid` uses the row vector
//! convention, so `a.then(&b)` applies `a` first and `b` second.

use crate::math::{Angle, Point, Transform, Vector};

/// A translation by `offset`.
#[inline]
pub fn translation(offset: Vector) -> Transform {
    Transform::translation(offset.x, offset.y)
}

/// A rotation by `angle` around `pivot`.
///
/// Positive angles go from the positive x axis toward the positive y axis, which
/// appears clockwise in device space.
pub fn rotation_about(pivot: Point, angle: Angle) -> Transform {
    Transform::translation(-pivot.x, -pivot.y)
        .then_rotate(angle)
        .then_translate(pivot.to_vector())
}

/// A uniform scale by `factor` around `pivot`.
pub fn scale_about(pivot: Point, factor: f32) -> Transform {
    Transform::translation(-pivot.x, -pivot.y)
        .then_scale(factor, factor)
        .then_translate(pivot.to_vector())
}

/// A shear around `pivot`.
///
/// `angle_x` tilts vertical lines (x moves by `tan(angle_x) * dy`) and `angle_y`
/// tilts horizontal lines (y moves by `tan(angle_y) * dx`).
pub fn shear_about(pivot: Point, angle_x: Angle, angle_y: Angle) -> Transform {
    let tx = angle_x.radians.tan();
    let ty = angle_y.radians.tan();
    let shear = Transform::new(1.0, ty, tx, 1.0, 0.0, 0.0);

    Transform::translation(-pivot.x, -pivot.y)
        .then(&shear)
        .then_translate(pivot.to_vector())
}

/// Composes two transforms so that `inner` applies first.
///
/// This is how nested transforms combine: the most recently pushed one is the
/// inner one.
#[inline]
pub fn compose(inner: &Transform, outer: &Transform) -> Transform {
    inner.then(outer)
}

#[cfg(test)]
use crate::math::{point, vector};
#[cfg(test)]
use std::f32::consts::PI;

#[cfg(test)]
fn assert_close(a: Point, b: Point) {
    assert!((a - b).length() < 1e-3, "{:?} != {:?}", a, b);
}

#[test]
fn rotation_keeps_pivot() {
    let pivot = point(100.0, 50.0);
    let t = rotation_about(pivot, Angle::radians(PI / 2.0));
    assert_close(t.transform_point(pivot), pivot);
    assert_close(t.transform_point(point(110.0, 50.0)), point(100.0, 60.0));
}

#[test]
fn scale_keeps_pivot() {
    let pivot = point(10.0, 10.0);
    let t = scale_about(pivot, 3.0);
    assert_close(t.transform_point(pivot), pivot);
    assert_close(t.transform_point(point(11.0, 12.0)), point(13.0, 16.0));
}

#[test]
fn shear() {
    let pivot = point(0.0, 0.0);
    let t = shear_about(pivot, Angle::radians(PI / 4.0), Angle::radians(0.0));
    assert_close(t.transform_point(point(0.0, 10.0)), point(10.0, 10.0));
    assert_close(t.transform_point(point(10.0, 0.0)), point(10.0, 0.0));

    let pivot = point(5.0, 5.0);
    let t = shear_about(pivot, Angle::radians(0.0), Angle::radians(PI / 4.0));
    assert_close(t.transform_point(pivot), pivot);
    assert_close(t.transform_point(point(7.0, 5.0)), point(7.0, 7.0));
}

#[test]
fn compose_applies_inner_first() {
    let inner = translation(vector(10.0, 0.0));
    let outer = scale_about(point(0.0, 0.0), 2.0);
    let t = compose(&inner, &outer);
    assert_close(t.transform_point(point(1.0, 1.0)), point(22.0, 2.0));
}
