use crate::geom::{CubicBezierSegment, QuadraticBezierSegment};
use crate::math::{Point, Vector};
use crate::traits::Transformation;

/// One command of a path, with all positions in absolute coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubeTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathSegment {
    /// The pen position after this segment, if the segment moves it to a known position.
    ///
    /// `Close` returns `None` since it moves the pen back to the start of the sub-path.
    pub fn to(&self) -> Option<Point> {
        match *self {
            PathSegment::MoveTo(to)
            | PathSegment::LineTo(to)
            | PathSegment::QuadTo { to, .. }
            | PathSegment::CubeTo { to, .. } => Some(to),
            PathSegment::Close => None,
        }
    }

    pub fn transformed<T: Transformation>(&self, mat: &T) -> Self {
        match *self {
            PathSegment::MoveTo(at) => PathSegment::MoveTo(mat.transform_point(at)),
            PathSegment::LineTo(to) => PathSegment::LineTo(mat.transform_point(to)),
            PathSegment::QuadTo { ctrl, to } => PathSegment::QuadTo {
                ctrl: mat.transform_point(ctrl),
                to: mat.transform_point(to),
            },
            PathSegment::CubeTo { ctrl1, ctrl2, to } => PathSegment::CubeTo {
                ctrl1: mat.transform_point(ctrl1),
                ctrl2: mat.transform_point(ctrl2),
                to: mat.transform_point(to),
            },
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// A path command expressed as offsets from the previous pen position.
///
/// Some backends consume paths in this form. `MoveTo` stays absolute.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum RelativeSegment {
    MoveTo(Point),
    LineTo(Vector),
    QuadTo { ctrl: Vector, to: Vector },
    CubeTo { ctrl1: Vector, ctrl2: Vector, to: Vector },
    Close,
}

/// A geometric segment of a path, with its start point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Segment {
    Line { from: Point, to: Point },
    Quadratic(QuadraticBezierSegment),
    Cubic(CubicBezierSegment),
}

impl Segment {
    /// Sample the segment at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f32) -> Point {
        match self {
            Segment::Line { from, to } => from.lerp(*to, t),
            Segment::Quadratic(curve) => curve.sample(t),
            Segment::Cubic(curve) => curve.sample(t),
        }
    }
}
