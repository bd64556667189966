//! Curve approximations for closed shapes, polygons and bézier pass-through.
//!
//! Circles and ellipses use exactly four cubic bézier segments, one per quadrant.
//! There is no adaptive refinement: the radial error of the approximation is a
//! small constant fraction of the radius (about 0.02%).

use crate::builder::PathBuilder;
use crate::error::{GeometryError, GeometryResult};
use crate::math::*;
use crate::Path;

/// Distance from an endpoint to its control point, relative to the radius, for a
/// quarter circle approximated with a cubic bézier curve.
///
/// See <https://spencermortensen.com/articles/bezier-circle/>.
pub const ELLIPSE_CONTROL_FACTOR: f32 = 0.55191502449;

/// Adds a closed sub-path approximating an axis-aligned ellipse.
///
/// The sub-path starts at `center + (radii.x, 0)` and goes through
/// `center + (0, radii.y)` first. Control points are expressed relative to the
/// start of each quadrant.
pub fn add_ellipse<Builder: PathBuilder>(builder: &mut Builder, center: Point, radii: Vector) {
    let w = radii.x;
    let h = radii.y;
    let k = ELLIPSE_CONTROL_FACTOR;

    builder.reserve(6);
    builder.begin(center + vector(w, 0.0));

    builder.relative_cubic_bezier_to(vector(0.0, h * k), vector(-w + w * k, h), vector(-w, h));
    builder.relative_cubic_bezier_to(vector(-w * k, 0.0), vector(-w, -h + h * k), vector(-w, -h));
    builder.relative_cubic_bezier_to(vector(0.0, -h * k), vector(w - w * k, -h), vector(w, -h));
    builder.relative_cubic_bezier_to(vector(w * k, 0.0), vector(w, h - h * k), vector(w, h));

    builder.close();
}

/// Adds a closed polygon.
///
/// Each vertex after the first is added as an offset from the previous one, then
/// an explicit line back to the first vertex precedes the `Close`. Nothing is
/// added for an empty slice.
pub fn add_polygon<Builder: PathBuilder>(builder: &mut Builder, points: &[Point]) {
    let first = match points.first() {
        Some(p) => *p,
        None => return,
    };

    builder.reserve(points.len() + 2);
    builder.begin(first);
    for pair in points.windows(2) {
        builder.relative_line_to(pair[1] - pair[0]);
    }
    builder.line_to(first);
    builder.close();
}

/// Zips parallel coordinate lists into points.
///
/// Fails if the lists have different lengths or fewer than `min_points` entries.
pub fn polygon_points(xs: &[f32], ys: &[f32], min_points: usize) -> GeometryResult<Vec<Point>> {
    if xs.len() != ys.len() {
        log::debug!(
            "rejecting polygon with {} x and {} y coordinates",
            xs.len(),
            ys.len()
        );
        return Err(GeometryError::MismatchedCoordinates {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let min = min_points.max(1);
    if xs.len() < min {
        log::debug!("rejecting polygon with {} points", xs.len());
        return Err(GeometryError::TooFewPoints {
            count: xs.len(),
            min,
        });
    }

    Ok(xs.iter().zip(ys).map(|(&x, &y)| point(x, y)).collect())
}

/// Builds a closed polygon path from parallel coordinate lists.
///
/// See `polygon_points`.
pub fn polygon_path(xs: &[f32], ys: &[f32], min_points: usize) -> GeometryResult<Path> {
    let points = polygon_points(xs, ys, min_points)?;
    let mut builder = crate::Builder::with_capacity(points.len() + 2);
    add_polygon(&mut builder, &points);

    Ok(builder.build())
}

/// Builds a closed ellipse path.
pub fn ellipse_path(center: Point, radii: Vector) -> Path {
    let mut builder = crate::Builder::with_capacity(6);
    add_ellipse(&mut builder, center, radii);
    builder.build()
}

/// Builds a closed circle path.
pub fn circle_path(center: Point, radius: f32) -> Path {
    ellipse_path(center, vector(radius, radius))
}

/// Builds a path with a single quadratic bézier curve.
///
/// The control and end points are given in the same space as `from` and are
/// emitted relative to it.
pub fn quadratic_curve_path(from: Point, ctrl: Point, to: Point, close: bool) -> Path {
    let mut builder = Path::builder();
    builder.begin(from);
    builder.relative_quadratic_bezier_to(ctrl - from, to - from);
    builder.end(close);

    builder.build()
}

/// Builds a path with a single cubic bézier curve.
///
/// See `quadratic_curve_path`.
pub fn cubic_curve_path(from: Point, ctrl1: Point, ctrl2: Point, to: Point, close: bool) -> Path {
    let mut builder = Path::builder();
    builder.begin(from);
    builder.relative_cubic_bezier_to(ctrl1 - from, ctrl2 - from, to - from);
    builder.end(close);

    builder.build()
}

/// Builds an open path with a single line segment.
pub fn line_path(from: Point, to: Point) -> Path {
    let mut builder = Path::builder();
    builder.begin(from);
    builder.line_to(to);
    builder.end(false);

    builder.build()
}

/// Builds a closed axis-aligned rectangle.
pub fn rectangle_path(rect: &Box2D) -> Path {
    let mut builder = Path::builder();
    add_polygon(
        &mut builder,
        &[
            rect.min,
            point(rect.max.x, rect.min.y),
            rect.max,
            point(rect.min.x, rect.max.y),
        ],
    );

    builder.build()
}

#[cfg(test)]
use crate::PathSegment;

#[cfg(test)]
fn max_radial_error(path: &Path, center: Point, radii: Vector) -> f32 {
    let mut max_error: f32 = 0.0;
    for segment in path.sample_segments() {
        for i in 0..=100 {
            let p = segment.sample(i as f32 / 100.0) - center;
            // Distance to the unit circle after normalizing the ellipse.
            let n = vector(p.x / radii.x, p.y / radii.y);
            max_error = max_error.max((n.length() - 1.0).abs());
        }
    }

    max_error
}

#[test]
fn circle_has_four_cubic_segments() {
    let path = circle_path(point(10.0, 20.0), 5.0);
    let segments = path.segments();
    assert_eq!(segments.len(), 6);
    assert_eq!(segments[0], PathSegment::MoveTo(point(15.0, 20.0)));
    for segment in &segments[1..5] {
        match segment {
            PathSegment::CubeTo { .. } => {}
            _ => panic!("unexpected segment {:?}", segment),
        }
    }
    assert_eq!(segments[5], PathSegment::Close);
    assert!(path.is_closed());
}

#[test]
fn circle_passes_through_quadrant_points() {
    let center = point(100.0, 100.0);
    let path = circle_path(center, 50.0);
    let ends: Vec<Point> = path.iter().filter_map(|s| s.to()).collect();
    let expected = [
        point(150.0, 100.0),
        point(100.0, 150.0),
        point(50.0, 100.0),
        point(100.0, 50.0),
        point(150.0, 100.0),
    ];
    for (a, b) in ends.iter().zip(expected.iter()) {
        assert!((*a - *b).length() < 1e-3, "{:?} != {:?}", a, b);
    }
}

#[test]
fn circle_radial_error_is_small() {
    for &r in &[1.0, 10.0, 100.0, 1000.0] {
        let center = point(r * 2.0, r * 3.0);
        let path = circle_path(center, r);
        let error = max_radial_error(&path, center, vector(r, r));
        assert!(error < 3e-4, "radius {}: relative error {}", r, error);
    }
}

#[test]
fn ellipse_radial_error_is_small() {
    let center = point(0.0, 0.0);
    let radii = vector(300.0, 40.0);
    let path = ellipse_path(center, radii);
    assert!(max_radial_error(&path, center, radii) < 3e-4);
}

#[test]
fn polygon_relative_vertices() {
    let path = polygon_path(&[0.0, 10.0, 10.0], &[0.0, 0.0, 5.0], 3).unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::MoveTo(point(0.0, 0.0)),
            PathSegment::LineTo(point(10.0, 0.0)),
            PathSegment::LineTo(point(10.0, 5.0)),
            PathSegment::LineTo(point(0.0, 0.0)),
            PathSegment::Close,
        ][..]
    );
}

#[cfg(test)]
#[test_log::test]
fn polygon_mismatched_lengths() {
    assert_eq!(
        polygon_path(&[0.0, 1.0, 2.0], &[0.0, 1.0], 3),
        Err(GeometryError::MismatchedCoordinates { xs: 3, ys: 2 })
    );

    let mut builder = Path::builder();
    if let Ok(points) = polygon_points(&[0.0, 1.0], &[0.0], 1) {
        add_polygon(&mut builder, &points);
    }
    assert!(builder.build().is_empty());
}

#[cfg(test)]
#[test_log::test]
fn polygon_too_few_points() {
    assert_eq!(
        polygon_path(&[0.0, 1.0], &[0.0, 1.0], 3),
        Err(GeometryError::TooFewPoints { count: 2, min: 3 })
    );
    assert_eq!(
        polygon_path(&[], &[], 0),
        Err(GeometryError::TooFewPoints { count: 0, min: 1 })
    );
    assert!(polygon_path(&[1.0], &[1.0], 1).is_ok());
}

#[test]
fn bezier_pass_through() {
    let open = quadratic_curve_path(point(1.0, 1.0), point(2.0, 0.0), point(3.0, 1.0), false);
    assert_eq!(
        open.segments(),
        &[
            PathSegment::MoveTo(point(1.0, 1.0)),
            PathSegment::QuadTo {
                ctrl: point(2.0, 0.0),
                to: point(3.0, 1.0)
            },
        ][..]
    );
    assert!(!open.is_closed());

    let closed = cubic_curve_path(
        point(0.0, 0.0),
        point(0.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 0.0),
        true,
    );
    assert_eq!(closed.len(), 3);
    assert!(closed.is_closed());
    assert_eq!(
        closed.segments()[1],
        PathSegment::CubeTo {
            ctrl1: point(0.0, 1.0),
            ctrl2: point(1.0, 1.0),
            to: point(1.0, 0.0)
        }
    );
}

#[test]
fn rectangle() {
    let path = rectangle_path(&rect(1.0, 2.0, 3.0, 4.0));
    let ends: Vec<Point> = path.iter().filter_map(|s| s.to()).collect();
    assert_eq!(
        ends,
        vec![
            point(1.0, 2.0),
            point(4.0, 2.0),
            point(4.0, 6.0),
            point(1.0, 6.0),
            point(1.0, 2.0)
        ]
    );
}
