//! Polar to cartesian conversion with aspect ratio compensation.
//!
//! In percentage space one unit along x and one unit along y do not have the same
//! length unless the surface is square. Multiplying the y component by the
//! `width / height` ratio makes a sweep of angles at a fixed radius look like a
//! circle instead of an ellipse once mapped to the device.

use crate::math::{point, Angle, Point, Size};

/// Returns `width / height`.
///
/// A surface with a zero height (a minimized window) has no meaningful ratio;
/// `1.0` is returned so that polar layouts stay finite.
#[inline]
pub fn aspect_ratio(surface: Size) -> f32 {
    let ratio = surface.width / surface.height;
    if ratio.is_finite() {
        ratio
    } else {
        1.0
    }
}

/// Returns the point at `angle` on a circle of a given center and radius.
///
/// The y offset is scaled by `aspect` (see `aspect_ratio`). Pass `1.0` for a
/// plain polar conversion.
#[inline]
pub fn polar(center: Point, radius: f32, angle: Angle, aspect: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    point(
        center.x + radius * cos,
        center.y + radius * sin * aspect,
    )
}

/// Same as `polar` with an angle in degrees.
#[inline]
pub fn polar_degrees(center: Point, radius: f32, degrees: f32, aspect: f32) -> Point {
    polar(center, radius, Angle::degrees(degrees), aspect)
}

#[cfg(test)]
use crate::math::size;
#[cfg(test)]
use std::f32::consts::PI;

#[test]
fn polar_on_square_surface() {
    let aspect = aspect_ratio(size(600.0, 600.0));
    assert_eq!(aspect, 1.0);

    let p = polar(point(50.0, 50.0), 10.0, Angle::radians(0.0), aspect);
    assert_eq!(p, point(60.0, 50.0));

    let center = point(50.0, 50.0);
    for i in 0..64 {
        let theta = i as f32 * 2.0 * PI / 64.0;
        let p = polar(center, 10.0, Angle::radians(theta), aspect);
        assert!(((p - center).length() - 10.0).abs() < 1e-4);
    }
}

#[test]
fn polar_compensates_aspect_ratio() {
    let surface = size(1000.0, 500.0);
    let aspect = aspect_ratio(surface);
    assert_eq!(aspect, 2.0);

    let center = point(50.0, 50.0);
    let r = 20.0;
    for i in 0..90 {
        let theta = i as f32 * 2.0 * PI / 90.0;
        let p = polar(center, r, Angle::radians(theta), aspect);
        // Undo the y stretch: the points lie on a circle of radius r.
        let dx = p.x - center.x;
        let dy = (p.y - center.y) / aspect;
        assert!(((dx * dx + dy * dy).sqrt() - r).abs() < 1e-3);

        // In device units the horizontal and vertical offsets have the same length.
        let dev_dx = dx / 100.0 * surface.width;
        let dev_dy = (p.y - center.y) / 100.0 * surface.height;
        let dev_r = r / 100.0 * surface.width;
        assert!(((dev_dx * dev_dx + dev_dy * dev_dy).sqrt() - dev_r).abs() < 1e-2);
    }
}

#[test]
fn degenerate_surface_aspect() {
    assert_eq!(aspect_ratio(size(800.0, 0.0)), 1.0);
    assert_eq!(aspect_ratio(size(0.0, 0.0)), 1.0);
    assert_eq!(aspect_ratio(size(0.0, 600.0)), 0.0);

    let aspect = aspect_ratio(size(800.0, 0.0));
    for &deg in &[0.0, 90.0, 180.0, 270.0] {
        let p = polar_degrees(point(50.0, 50.0), 30.0, deg, aspect);
        assert!(p.x.is_finite() && p.y.is_finite(), "{:?} at {}", p, deg);
    }
}

#[test]
fn polar_degrees_matches_radians() {
    let center = point(10.0, 20.0);
    for &deg in &[0.0, 30.0, 45.0, 90.0, 135.0, 270.0, 359.0] {
        let a = polar_degrees(center, 5.0, deg, 1.5);
        let b = polar(center, 5.0, Angle::radians(deg * PI / 180.0), 1.5);
        assert!((a - b).length() < 1e-4);
    }
}
