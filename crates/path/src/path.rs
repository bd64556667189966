//! The default path data structure.
//!

use crate::builder::PathBuilder;
use crate::geom::{CubicBezierSegment, QuadraticBezierSegment};
use crate::math::*;
use crate::private::DebugValidator;
use crate::traits::Transformation;
use crate::{PathSegment, RelativeSegment, Segment};

use std::fmt;
use std::iter::{FromIterator, IntoIterator};

/// A simple path data structure.
///
/// A path is a sequence of sub-paths, each starting with a `MoveTo` and
/// optionally terminated by a `Close`. Positions are stored in absolute
/// coordinates; see `relative_segments` for the delta encoding.
///
/// ```ascii
///  _______________________________________________________
/// |           |           |                |       |
/// | MoveTo(p) | LineTo(p) | QuadTo(c, p)   | Close | ...
/// |___________|___________|________________|_______|_
/// ```
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    segments: Box<[PathSegment]>,
}

impl Path {
    /// Creates a [Builder](struct.Builder.html) to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates an Empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            segments: Box::new([]),
        }
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Iterates over the segments of the path.
    pub fn iter(&self) -> Iter {
        Iter {
            segments: self.segments.iter(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if the last sub-path is terminated by a `Close`.
    pub fn is_closed(&self) -> bool {
        self.segments.last() == Some(&PathSegment::Close)
    }

    /// Returns a path with a `Close` appended if the last sub-path is open.
    ///
    /// Filled shapes must form closed contours.
    pub fn closed(self) -> Self {
        if self.is_empty() || self.is_closed() {
            return self;
        }

        let mut segments = self.segments.into_vec();
        segments.push(PathSegment::Close);

        Path {
            segments: segments.into_boxed_slice(),
        }
    }

    /// The position of the first `MoveTo`.
    pub fn first_point(&self) -> Option<Point> {
        match self.segments.first() {
            Some(PathSegment::MoveTo(at)) => Some(*at),
            _ => None,
        }
    }

    /// The pen position at the end of the path.
    pub fn last_point(&self) -> Option<Point> {
        let mut first = None;
        let mut current = None;
        for segment in self.iter() {
            match *segment {
                PathSegment::MoveTo(at) => {
                    first = Some(at);
                    current = first;
                }
                PathSegment::Close => {
                    current = first;
                }
                _ => {
                    current = segment.to();
                }
            }
        }

        current
    }

    /// Applies a transform to all endpoints and control points of this path and
    /// returns the result.
    pub fn transformed<T: Transformation>(mut self, transform: &T) -> Self {
        for segment in self.segments.iter_mut() {
            *segment = segment.transformed(transform);
        }

        self
    }

    /// Iterates over the segments with each position expressed as an offset from
    /// the previous pen position.
    pub fn relative_segments(&self) -> RelativeSegments {
        RelativeSegments {
            segments: self.segments.iter(),
            first: point(0.0, 0.0),
            current: point(0.0, 0.0),
        }
    }

    /// Iterates over the geometric segments of the path.
    ///
    /// A `Close` yields the line back to the start of the sub-path, unless the pen
    /// is already there.
    pub fn sample_segments(&self) -> SampleSegments {
        SampleSegments {
            segments: self.segments.iter(),
            first: point(0.0, 0.0),
            current: point(0.0, 0.0),
        }
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l PathSegment;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<T: IntoIterator<Item = PathSegment>>(iter: T) -> Path {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.x, formatter)?;
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.y, formatter)
        }

        write!(formatter, "\"")?;
        for segment in self.iter() {
            match *segment {
                PathSegment::MoveTo(at) => {
                    write!(formatter, " M")?;
                    write_point(formatter, at)?;
                }
                PathSegment::LineTo(to) => {
                    write!(formatter, " L")?;
                    write_point(formatter, to)?;
                }
                PathSegment::QuadTo { ctrl, to } => {
                    write!(formatter, " Q")?;
                    write_point(formatter, ctrl)?;
                    write_point(formatter, to)?;
                }
                PathSegment::CubeTo { ctrl1, ctrl2, to } => {
                    write!(formatter, " C")?;
                    write_point(formatter, ctrl1)?;
                    write_point(formatter, ctrl2)?;
                    write_point(formatter, to)?;
                }
                PathSegment::Close => {
                    write!(formatter, " Z")?;
                }
            }
        }
        write!(formatter, "\"")
    }
}

/// Builds path objects.
///
/// See the [PathBuilder](../builder/trait.PathBuilder.html) trait.
#[derive(Clone, Default)]
pub struct Builder {
    segments: Vec<PathSegment>,
    first: Point,
    current: Point,
    validator: DebugValidator,
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    pub fn with_capacity(segments: usize) -> Self {
        Builder {
            segments: Vec::with_capacity(segments),
            ..Builder::default()
        }
    }

    /// Returns true if nothing was added to the builder.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn build(self) -> Path {
        self.validator.build();
        Path {
            segments: self.segments.into_boxed_slice(),
        }
    }
}

impl PathBuilder for Builder {
    fn begin(&mut self, at: Point) {
        self.validator.begin();
        nan_check(at);

        self.first = at;
        self.current = at;
        self.segments.push(PathSegment::MoveTo(at));
    }

    fn end(&mut self, close: bool) {
        self.validator.end();

        if close {
            self.segments.push(PathSegment::Close);
            self.current = self.first;
        }
    }

    fn line_to(&mut self, to: Point) {
        self.validator.edge();
        nan_check(to);

        self.current = to;
        self.segments.push(PathSegment::LineTo(to));
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.validator.edge();
        nan_check(ctrl);
        nan_check(to);

        self.current = to;
        self.segments.push(PathSegment::QuadTo { ctrl, to });
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.validator.edge();
        nan_check(ctrl1);
        nan_check(ctrl2);
        nan_check(to);

        self.current = to;
        self.segments.push(PathSegment::CubeTo { ctrl1, ctrl2, to });
    }

    fn current_position(&self) -> Point {
        self.current
    }

    fn reserve(&mut self, segments: usize) {
        self.segments.reserve(segments);
    }
}

#[inline]
fn nan_check(p: Point) {
    debug_assert!(p.x.is_finite());
    debug_assert!(p.y.is_finite());
}

/// An iterator over the segments of a `Path`.
#[derive(Clone)]
pub struct Iter<'l> {
    segments: std::slice::Iter<'l, PathSegment>,
}

impl<'l> Iterator for Iter<'l> {
    type Item = &'l PathSegment;

    #[inline]
    fn next(&mut self) -> Option<&'l PathSegment> {
        self.segments.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.segments.size_hint()
    }
}

/// An iterator of `RelativeSegment`.
#[derive(Clone)]
pub struct RelativeSegments<'l> {
    segments: std::slice::Iter<'l, PathSegment>,
    first: Point,
    current: Point,
}

impl<'l> Iterator for RelativeSegments<'l> {
    type Item = RelativeSegment;

    fn next(&mut self) -> Option<RelativeSegment> {
        let from = self.current;
        let segment = match *self.segments.next()? {
            PathSegment::MoveTo(at) => {
                self.first = at;
                self.current = at;
                RelativeSegment::MoveTo(at)
            }
            PathSegment::LineTo(to) => {
                self.current = to;
                RelativeSegment::LineTo(to - from)
            }
            PathSegment::QuadTo { ctrl, to } => {
                self.current = to;
                RelativeSegment::QuadTo {
                    ctrl: ctrl - from,
                    to: to - from,
                }
            }
            PathSegment::CubeTo { ctrl1, ctrl2, to } => {
                self.current = to;
                RelativeSegment::CubeTo {
                    ctrl1: ctrl1 - from,
                    ctrl2: ctrl2 - from,
                    to: to - from,
                }
            }
            PathSegment::Close => {
                self.current = self.first;
                RelativeSegment::Close
            }
        };

        Some(segment)
    }
}

/// An iterator of the geometric segments of a `Path`.
#[derive(Clone)]
pub struct SampleSegments<'l> {
    segments: std::slice::Iter<'l, PathSegment>,
    first: Point,
    current: Point,
}

impl<'l> Iterator for SampleSegments<'l> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let from = self.current;
            match *self.segments.next()? {
                PathSegment::MoveTo(at) => {
                    self.first = at;
                    self.current = at;
                }
                PathSegment::LineTo(to) => {
                    self.current = to;
                    return Some(Segment::Line { from, to });
                }
                PathSegment::QuadTo { ctrl, to } => {
                    self.current = to;
                    return Some(Segment::Quadratic(QuadraticBezierSegment { from, ctrl, to }));
                }
                PathSegment::CubeTo { ctrl1, ctrl2, to } => {
                    self.current = to;
                    return Some(Segment::Cubic(CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    }));
                }
                PathSegment::Close => {
                    self.current = self.first;
                    if from != self.first {
                        return Some(Segment::Line {
                            from,
                            to: self.first,
                        });
                    }
                }
            }
        }
    }
}

#[test]
fn test_path_builder_1() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
    builder.cubic_bezier_to(point(2.0, 2.0), point(0.0, 2.0), point(0.0, 1.0));
    builder.close();

    builder.begin(point(10.0, 0.0));
    builder.line_to(point(11.0, 0.0));
    builder.end(false);

    let path = builder.build();
    assert_eq!(path.len(), 7);
    assert!(!path.is_closed());
    assert_eq!(path.first_point(), Some(point(0.0, 0.0)));
    assert_eq!(path.last_point(), Some(point(11.0, 0.0)));

    let mut it = path.iter();
    assert_eq!(it.next(), Some(&PathSegment::MoveTo(point(0.0, 0.0))));
    assert_eq!(it.next(), Some(&PathSegment::LineTo(point(1.0, 0.0))));
    assert_eq!(
        it.next(),
        Some(&PathSegment::QuadTo {
            ctrl: point(2.0, 0.0),
            to: point(2.0, 1.0)
        })
    );
    assert_eq!(
        it.next(),
        Some(&PathSegment::CubeTo {
            ctrl1: point(2.0, 2.0),
            ctrl2: point(0.0, 2.0),
            to: point(0.0, 1.0)
        })
    );
    assert_eq!(it.next(), Some(&PathSegment::Close));
    assert_eq!(it.next(), Some(&PathSegment::MoveTo(point(10.0, 0.0))));
    assert_eq!(it.next(), Some(&PathSegment::LineTo(point(11.0, 0.0))));
    assert_eq!(it.next(), None);
}

#[test]
fn test_path_builder_empty() {
    let path = Path::builder().build();
    assert!(path.is_empty());
    assert!(!path.is_closed());
    assert_eq!(path.first_point(), None);
    assert_eq!(path.last_point(), None);
    assert_eq!(path.sample_segments().count(), 0);
}

#[test]
fn test_closed_appends_close_once() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.line_to(point(1.0, 1.0));
    builder.end(false);

    let path = builder.build().closed();
    assert!(path.is_closed());
    assert_eq!(path.len(), 4);

    let path = path.closed();
    assert_eq!(path.len(), 4);

    assert!(Path::new().closed().is_empty());
}

#[test]
fn test_relative_segments() {
    let mut builder = Path::builder();
    builder.begin(point(1.0, 1.0));
    builder.line_to(point(3.0, 1.0));
    builder.quadratic_bezier_to(point(4.0, 1.0), point(4.0, 2.0));
    builder.close();
    builder.begin(point(10.0, 10.0));
    builder.cubic_bezier_to(point(11.0, 10.0), point(12.0, 11.0), point(12.0, 12.0));
    builder.end(false);
    let path = builder.build();

    let relative: Vec<RelativeSegment> = path.relative_segments().collect();
    assert_eq!(
        relative,
        vec![
            RelativeSegment::MoveTo(point(1.0, 1.0)),
            RelativeSegment::LineTo(vector(2.0, 0.0)),
            RelativeSegment::QuadTo {
                ctrl: vector(1.0, 0.0),
                to: vector(1.0, 1.0)
            },
            RelativeSegment::Close,
            RelativeSegment::MoveTo(point(10.0, 10.0)),
            RelativeSegment::CubeTo {
                ctrl1: vector(1.0, 0.0),
                ctrl2: vector(2.0, 1.0),
                to: vector(2.0, 2.0)
            },
        ]
    );
}

#[test]
fn test_sample_segments_close() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(4.0, 0.0));
    builder.line_to(point(4.0, 3.0));
    builder.close();
    let path = builder.build();

    let segments: Vec<Segment> = path.sample_segments().collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(
        segments[2],
        Segment::Line {
            from: point(4.0, 3.0),
            to: point(0.0, 0.0)
        }
    );
    assert_eq!(segments[2].sample(0.5), point(2.0, 1.5));
}

#[test]
fn test_transformed() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.quadratic_bezier_to(point(1.0, 0.0), point(1.0, 1.0));
    builder.end(false);

    let path = builder
        .build()
        .transformed(&Transform::translation(10.0, 20.0));

    assert_eq!(
        path.segments(),
        &[
            PathSegment::MoveTo(point(10.0, 20.0)),
            PathSegment::QuadTo {
                ctrl: point(11.0, 20.0),
                to: point(11.0, 21.0)
            },
        ][..]
    );
}

#[test]
fn test_debug_format() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 2.0));
    builder.close();
    let path = builder.build();

    assert_eq!(format!("{:?}", path), "\" M 0.0 0.0 L 1.0 2.0 Z\"");
}
