//! Conversions between percentage space and device space.
//!
//! Percentage coordinates go from 0 to 100 on both axes, with the origin at the
//! bottom-left corner of the surface and y pointing up. Device coordinates have
//! their origin at the top-left corner and y pointing down.
//!
//! All functions in this module are total: values outside of `[0, 100]` are
//! extrapolated linearly, which lets callers draw slightly off-canvas.
//!
//! Magnitudes (lengths, radii, stroke widths) are converted against a single
//! extent. By convention horizontal magnitudes use the width of the surface and
//! vertical ones (including the side of a square, which must look square) use
//! the height.

use crate::math::{point, Point, Size};

/// Converts a position from percentage space to device space.
///
/// ```
/// use pctdraw_geom::{percent, point, size};
///
/// let p = percent::to_device(point(50.0, 50.0), size(1000.0, 800.0));
/// assert_eq!(p, point(500.0, 400.0));
/// ```
#[inline]
pub fn to_device(p: Point, surface: Size) -> Point {
    point(
        (p.x / 100.0) * surface.width,
        ((100.0 - p.y) / 100.0) * surface.height,
    )
}

/// Converts a position from device space to percentage space.
///
/// This is the inverse of `to_device`. The result is not finite if the surface
/// has a zero width or height.
#[inline]
pub fn to_percent(p: Point, surface: Size) -> Point {
    point(
        (p.x / surface.width) * 100.0,
        100.0 - (p.y / surface.height) * 100.0,
    )
}

/// Converts a percentage magnitude into device units along an extent.
#[inline]
pub fn magnitude(m: f32, extent: f32) -> f32 {
    (m / 100.0) * extent
}

/// Converts a device magnitude into a percentage of an extent.
#[inline]
pub fn to_percent_magnitude(m: f32, extent: f32) -> f32 {
    (m / extent) * 100.0
}

/// The percentage coordinate system of a surface of a given size.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PercentSpace {
    pub size: Size,
}

impl PercentSpace {
    #[inline]
    pub fn new(size: Size) -> Self {
        PercentSpace { size }
    }

    /// Converts a percentage position into device space.
    #[inline]
    pub fn point(&self, x: f32, y: f32) -> Point {
        to_device(point(x, y), self.size)
    }

    /// Converts a device position back into percentage space.
    #[inline]
    pub fn inverse(&self, p: Point) -> Point {
        to_percent(p, self.size)
    }

    /// Converts a horizontal percentage magnitude into device units.
    #[inline]
    pub fn width_extent(&self, m: f32) -> f32 {
        magnitude(m, self.size.width)
    }

    /// Converts a vertical percentage magnitude into device units.
    #[inline]
    pub fn height_extent(&self, m: f32) -> f32 {
        magnitude(m, self.size.height)
    }
}

#[cfg(test)]
use crate::math::size;

#[cfg(test)]
fn assert_close(a: Point, b: Point) {
    let d = (a - b).length();
    assert!(d < 1e-3, "{:?} != {:?} (distance {})", a, b, d);
}

#[test]
fn canvas_center_and_corners() {
    let s = size(1000.0, 800.0);
    assert_eq!(to_device(point(50.0, 50.0), s), point(500.0, 400.0));
    assert_eq!(to_device(point(0.0, 100.0), s), point(0.0, 0.0));
    assert_eq!(to_device(point(0.0, 0.0), s), point(0.0, 800.0));
    assert_eq!(to_device(point(100.0, 0.0), s), point(1000.0, 800.0));
}

#[test]
fn out_of_range_values_extrapolate() {
    let s = size(200.0, 100.0);
    assert_close(to_device(point(-10.0, 110.0), s), point(-20.0, -10.0));
    assert_close(to_device(point(150.0, -50.0), s), point(300.0, 150.0));
}

#[test]
fn round_trip() {
    for &(w, h) in &[(1000.0, 800.0), (640.0, 480.0), (1.0, 3.0), (1920.0, 1080.0)] {
        let s = size(w, h);
        let mut x = 0.0;
        while x <= 100.0 {
            let mut y = 0.0;
            while y <= 100.0 {
                let p = point(x, y);
                assert_close(to_percent(to_device(p, s), s), p);
                y += 7.5;
            }
            x += 6.25;
        }
    }
}

#[test]
fn magnitudes() {
    assert_eq!(magnitude(10.0, 1000.0), 100.0);
    assert_eq!(magnitude(50.0, 800.0), 400.0);
    assert_eq!(magnitude(-5.0, 200.0), -10.0);
    assert_eq!(to_percent_magnitude(400.0, 800.0), 50.0);

    let space = PercentSpace::new(size(1000.0, 500.0));
    assert_eq!(space.width_extent(10.0), 100.0);
    assert_eq!(space.height_extent(10.0), 50.0);
    assert_eq!(space.point(25.0, 75.0), point(250.0, 125.0));
    assert_close(space.inverse(point(250.0, 125.0)), point(25.0, 75.0));
}
