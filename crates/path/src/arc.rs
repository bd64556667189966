//! Circular arcs approximated with quadratic bézier segments.
//!
//! Unlike full circles, arcs of arbitrary sweep are split into segments whose
//! arc length does not exceed `ArcOptions::max_segment_length`. The control point
//! of each quadratic segment is the intersection of the tangents to the circle
//! at both ends of the segment.
//!
//! Angles are in radians, going from the positive x axis toward the positive y
//! axis. The sweep can go in either direction.

use crate::builder::PathBuilder;
use crate::math::*;
use crate::Path;

use std::f32::consts::{FRAC_PI_2, PI};

/// Below this value the tangents at both ends of a segment are considered
/// parallel and the segment is emitted as a straight line.
const TANGENT_EPSILON: f32 = 1e-6;

/// Maximum number of segments emitted for a single arc.
pub const MAX_ARC_SEGMENTS: u32 = 1 << 16;

/// Parameters for the arc approximation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcOptions {
    /// Maximum arc length of each emitted segment, in device units.
    ///
    /// Smaller values produce more segments. Non-positive values fall back to the
    /// default.
    ///
    /// Default value: `ArcOptions::DEFAULT_MAX_SEGMENT_LENGTH`.
    pub max_segment_length: f32,
}

impl ArcOptions {
    /// Default maximum segment length.
    pub const DEFAULT_MAX_SEGMENT_LENGTH: f32 = 20.0;

    pub const DEFAULT: Self = ArcOptions {
        max_segment_length: Self::DEFAULT_MAX_SEGMENT_LENGTH,
    };

    #[inline]
    pub fn max_segment_length(length: f32) -> Self {
        Self::DEFAULT.with_max_segment_length(length)
    }

    #[inline]
    pub const fn with_max_segment_length(mut self, length: f32) -> Self {
        self.max_segment_length = length;
        self
    }

    /// The angle covered by each segment for a given radius.
    ///
    /// Computed as `max_segment_length / (radius * π)` and clamped to `π / 2`, past
    /// which the tangent intersection would not make a reasonable control point.
    pub fn angle_per_segment(&self, radius: f32) -> f32 {
        let length = if self.max_segment_length > 0.0 {
            self.max_segment_length
        } else {
            Self::DEFAULT_MAX_SEGMENT_LENGTH
        };

        let angle = length / (radius.abs() * PI);
        if angle.is_nan() {
            return FRAC_PI_2;
        }

        angle.min(FRAC_PI_2)
    }
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How the arc sub-path is shaped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ArcStyle {
    /// Starts at the center, goes out to the circle, follows the arc and closes
    /// back to the center. Used for filled arcs.
    Pie,
    /// Starts on the circle and follows the arc without closing. Used for stroked
    /// arcs.
    Open,
}

/// Iterator over the `(start, end)` angles of the segments of an arc.
///
/// The last segment always ends exactly on the requested end angle.
#[derive(Clone, Debug)]
pub struct ArcSegments {
    start: f32,
    end: f32,
    step: f32,
    count: u32,
    index: u32,
}

impl ArcSegments {
    /// Number of segments left to produce.
    pub fn count_remaining(&self) -> u32 {
        self.count - self.index
    }
}

impl Iterator for ArcSegments {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<(f32, f32)> {
        if self.index >= self.count {
            return None;
        }

        let a1 = self.start + self.step * self.index as f32;
        self.index += 1;
        let a2 = if self.index == self.count {
            self.end
        } else {
            self.start + self.step * self.index as f32
        };

        Some((a1, a2))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count_remaining() as usize;
        (n, Some(n))
    }
}

/// Splits the sweep from `start` to `end` into segments.
///
/// Produces `ceil(|end - start| / angle_per_segment)` segments, at most
/// `MAX_ARC_SEGMENTS`. Past that limit the sweep is divided evenly between
/// `MAX_ARC_SEGMENTS` segments. A zero or non finite sweep produces none.
pub fn arc_segments(start: Angle, end: Angle, radius: f32, options: &ArcOptions) -> ArcSegments {
    let start = start.radians;
    let end = end.radians;
    let sweep = end - start;
    let angle_per_segment = options.angle_per_segment(radius);

    if !sweep.is_finite() || !start.is_finite() {
        return ArcSegments {
            start,
            end,
            step: 0.0,
            count: 0,
            index: 0,
        };
    }

    let mut count = (sweep.abs() / angle_per_segment).ceil();
    let mut step = angle_per_segment.copysign(sweep);
    if count > MAX_ARC_SEGMENTS as f32 {
        log::warn!(
            "arc of radius {} and sweep {} needs {} segments, capped to {}",
            radius,
            sweep,
            count,
            MAX_ARC_SEGMENTS
        );
        count = MAX_ARC_SEGMENTS as f32;
        step = sweep / count;
    }

    ArcSegments {
        start,
        end,
        step,
        count: count as u32,
        index: 0,
    }
}

/// The control point of the quadratic curve approximating the unit circle
/// between angles `a1` and `a2`, relative to the center.
///
/// Returns `None` when the tangents at both angles are parallel (the angles are
/// equal modulo π), in which case there is no intersection.
pub fn arc_control_point(a1: f32, a2: f32) -> Option<Vector> {
    let (sin1, cos1) = a1.sin_cos();
    let (sin2, cos2) = a2.sin_cos();
    let det = cos1 * sin2 - cos2 * sin1;
    if det.abs() < TANGENT_EPSILON {
        return None;
    }

    let div = 1.0 / det;
    Some(vector((sin2 - sin1) * div, -(cos2 - cos1) * div))
}

#[inline]
fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    center + vector(cos * radius, sin * radius)
}

/// Adds a sub-path approximating a circular arc.
///
/// There must be no sub-path in progress when this function is called.
/// When `start == end` no curve is emitted: a `Pie` arc degenerates to the line
/// between the center and the start point.
pub fn add_arc<Builder: PathBuilder>(
    builder: &mut Builder,
    center: Point,
    radius: f32,
    start: Angle,
    end: Angle,
    style: ArcStyle,
    options: &ArcOptions,
) {
    let segments = arc_segments(start, end, radius, options);
    builder.reserve(segments.count_remaining() as usize + 3);

    let first = point_on_circle(center, radius, start.radians);
    match style {
        ArcStyle::Pie => {
            builder.begin(center);
            builder.line_to(first);
        }
        ArcStyle::Open => {
            builder.begin(first);
        }
    }

    for (a1, a2) in segments {
        let to = point_on_circle(center, radius, a2);
        match arc_control_point(a1, a2) {
            Some(ctrl) => {
                builder.quadratic_bezier_to(center + ctrl * radius, to);
            }
            None => {
                builder.line_to(to);
            }
        }
    }

    builder.end(style == ArcStyle::Pie);
}

/// Builds a path containing a single arc.
///
/// See `add_arc`.
pub fn arc_path(
    center: Point,
    radius: f32,
    start: Angle,
    end: Angle,
    style: ArcStyle,
    options: &ArcOptions,
) -> Path {
    let mut builder = Path::builder();
    add_arc(&mut builder, center, radius, start, end, style, options);
    builder.build()
}

#[cfg(test)]
use crate::PathSegment;

#[test]
fn segment_count() {
    let options = ArcOptions::DEFAULT;
    let radius = 100.0;
    let step = options.angle_per_segment(radius);
    assert_eq!(step, 20.0 / (100.0 * PI));

    for &(start, end) in &[(0.0, 1.0), (0.0, PI), (0.5, 2.0 * PI), (-1.0, 0.25), (0.0, step * 3.0)] {
        let n = arc_segments(Angle::radians(start), Angle::radians(end), radius, &options).count();
        assert_eq!(n as f32, ((end - start) / step).ceil());
    }
}

#[test]
fn last_point_is_exact() {
    let options = ArcOptions::DEFAULT;
    let r = 150.0;
    for &(start, end) in &[(0.0f32, 1.0f32), (0.3, 2.9), (1.0, 6.0), (2.0, -1.0)] {
        let path = arc_path(
            point(0.0, 0.0),
            r,
            Angle::radians(start),
            Angle::radians(end),
            ArcStyle::Open,
            &options,
        );
        let (sin, cos) = end.sin_cos();
        assert_eq!(path.last_point(), Some(point(cos * r, sin * r)));
        assert_eq!(path.first_point(), Some(point(start.cos() * r, start.sin() * r)));
        assert!(!path.is_closed());
    }
}

#[test]
fn segments_stay_on_circle() {
    let center = point(200.0, 100.0);
    let r = 80.0;
    let path = arc_path(
        center,
        r,
        Angle::radians(0.2),
        Angle::radians(5.0),
        ArcStyle::Open,
        &ArcOptions::DEFAULT,
    );

    for segment in path.sample_segments() {
        for i in 0..=20 {
            let d = (segment.sample(i as f32 / 20.0) - center).length();
            assert!((d - r).abs() / r < 2e-3, "distance {} for radius {}", d, r);
        }
    }
}

#[test]
fn pie_starts_at_center_and_closes() {
    let center = point(10.0, 10.0);
    let path = arc_path(
        center,
        50.0,
        Angle::radians(0.0),
        Angle::radians(FRAC_PI_2),
        ArcStyle::Pie,
        &ArcOptions::DEFAULT,
    );
    let segments = path.segments();
    assert_eq!(segments[0], PathSegment::MoveTo(center));
    assert_eq!(segments[1], PathSegment::LineTo(point(60.0, 10.0)));
    assert_eq!(*segments.last().unwrap(), PathSegment::Close);
    // 1 move, 1 line, n curves, 1 close
    let n = ((FRAC_PI_2) / ArcOptions::DEFAULT.angle_per_segment(50.0)).ceil() as usize;
    assert_eq!(segments.len(), n + 3);
}

#[test]
fn zero_sweep_degenerates_to_radius() {
    let center = point(0.0, 0.0);
    let path = arc_path(
        center,
        10.0,
        Angle::radians(0.0),
        Angle::radians(0.0),
        ArcStyle::Pie,
        &ArcOptions::DEFAULT,
    );
    assert_eq!(
        path.segments(),
        &[
            PathSegment::MoveTo(center),
            PathSegment::LineTo(point(10.0, 0.0)),
            PathSegment::Close,
        ][..]
    );
}

#[test]
fn control_point_quarter_circle() {
    let ctrl = arc_control_point(0.0, FRAC_PI_2).unwrap();
    assert!((ctrl - vector(1.0, 1.0)).length() < 1e-5);

    // Going the other way around gives the same intersection.
    let ctrl = arc_control_point(FRAC_PI_2, 0.0).unwrap();
    assert!((ctrl - vector(1.0, 1.0)).length() < 1e-5);
}

#[test]
fn control_point_coincident_angles() {
    assert_eq!(arc_control_point(1.0, 1.0), None);
    assert_eq!(arc_control_point(0.0, PI), None);
}

#[test]
fn no_nan_for_tiny_segments() {
    let path = arc_path(
        point(0.0, 0.0),
        1.0e6,
        Angle::radians(0.0),
        Angle::radians(1e-7),
        ArcStyle::Open,
        &ArcOptions::DEFAULT,
    );
    for segment in path.iter() {
        if let PathSegment::QuadTo { ctrl, to } = segment {
            assert!(ctrl.x.is_finite() && ctrl.y.is_finite());
            assert!(to.x.is_finite() && to.y.is_finite());
        }
    }
    assert_eq!(path.len(), 2);
}

#[test]
fn small_radius_is_clamped() {
    let options = ArcOptions::DEFAULT;
    assert_eq!(options.angle_per_segment(1.0), FRAC_PI_2);
    assert_eq!(options.angle_per_segment(0.0), FRAC_PI_2);
    assert_eq!(arc_segments(Angle::radians(0.0), Angle::radians(PI), 1.0, &options).count(), 2);
}

#[test]
fn options() {
    let options = ArcOptions::max_segment_length(5.0);
    assert_eq!(options.max_segment_length, 5.0);
    assert!(options.angle_per_segment(100.0) < ArcOptions::DEFAULT.angle_per_segment(100.0));
    assert_eq!(
        ArcOptions::max_segment_length(-1.0).angle_per_segment(100.0),
        ArcOptions::DEFAULT.angle_per_segment(100.0)
    );
    assert_eq!(ArcOptions::default(), ArcOptions::DEFAULT);
}

#[cfg(test)]
#[test_log::test]
fn huge_arcs_are_capped() {
    let options = ArcOptions::DEFAULT;
    let (start, end) = (0.0, 1.0e6);
    let segments = arc_segments(Angle::radians(start), Angle::radians(end), 1.0e6, &options);
    assert_eq!(segments.count_remaining(), MAX_ARC_SEGMENTS);

    let step = (end - start) / MAX_ARC_SEGMENTS as f32;
    let pairs: Vec<(f32, f32)> = segments.collect();
    assert_eq!(pairs.len(), MAX_ARC_SEGMENTS as usize);
    assert_eq!(pairs[0], (0.0, step));
    assert_eq!(pairs.last().unwrap().1, end);
    // No segment covers more than its share of the sweep.
    for &(a1, a2) in &pairs {
        assert!((a2 - a1 - step).abs() < 1.0, "{} {}", a1, a2);
    }
}
