//! Path building utilities.
//!
//! ## `PathBuilder`
//!
//! [PathBuilder](trait.PathBuilder.html) is a simple interface which strictly
//! requires sub-paths to be started with `begin` and finished with `end` or
//! `close`. Positions are absolute, and the `relative_*` methods express the
//! next points as offsets from the current pen position.
//!
//! Implementors of the trait get the curve approximations for free: ellipses,
//! circles, arcs and polygons are added through provided methods that forward
//! to the [shapes](../shapes/index.html) and [arc](../arc/index.html) modules.
//!
//! ## Examples
//!
//! ```
//! use pctdraw_path::{Path, ArcOptions, ArcStyle};
//! use pctdraw_path::builder::PathBuilder;
//! use pctdraw_path::math::{point, vector, Angle};
//!
//! let mut builder = Path::builder();
//!
//! // All sub-paths *must* be contained in a begin/end pair.
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(1.0, 0.0));
//! builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
//! builder.end(false);
//!
//! // Shapes start and end their own sub-path.
//! builder.add_circle(point(10.0, 10.0), 5.0);
//! builder.add_arc(
//!     point(50.0, 50.0),
//!     20.0,
//!     Angle::radians(0.0),
//!     Angle::radians(1.5),
//!     ArcStyle::Pie,
//!     &ArcOptions::DEFAULT,
//! );
//!
//! let path = builder.build();
//! assert!(path.is_closed());
//! ```

use crate::arc::{self, ArcOptions, ArcStyle};
use crate::math::*;
use crate::shapes;

/// The base path building interface.
///
/// All positions are provided in absolute coordinates, unless the method name
/// starts with `relative_`.
pub trait PathBuilder {
    /// Starts a new sub-path at a given position.
    ///
    /// There must be no sub-path in progress when this method is called.
    /// `at` becomes the current position of the sub-path.
    fn begin(&mut self, at: Point);

    /// Ends the current sub path.
    ///
    /// A sub-path must be in progress when this method is called.
    /// After this method is called, there is no sub-path in progress until
    /// `begin` is called again.
    fn end(&mut self, close: bool);

    /// Closes the current sub path.
    ///
    /// Shorthand for `builder.end(true)`.
    fn close(&mut self) {
        self.end(true)
    }

    /// Adds a line segment to the current sub-path.
    ///
    /// A sub-path must be in progress when this method is called.
    fn line_to(&mut self, to: Point);

    /// Adds a quadratic bézier curve to the current sub-path.
    ///
    /// A sub-path must be in progress when this method is called.
    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point);

    /// Adds a cubic bézier curve to the current sub-path.
    ///
    /// A sub-path must be in progress when this method is called.
    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    /// Returns the current pen position.
    fn current_position(&self) -> Point;

    /// Adds a line segment to the current sub-path, `to` being relative to the
    /// current position.
    fn relative_line_to(&mut self, to: Vector) {
        let from = self.current_position();
        self.line_to(from + to);
    }

    /// Adds a quadratic bézier curve to the current sub-path, all points being
    /// relative to the current position.
    fn relative_quadratic_bezier_to(&mut self, ctrl: Vector, to: Vector) {
        let from = self.current_position();
        self.quadratic_bezier_to(from + ctrl, from + to);
    }

    /// Adds a cubic bézier curve to the current sub-path, all points being
    /// relative to the current position.
    fn relative_cubic_bezier_to(&mut self, ctrl1: Vector, ctrl2: Vector, to: Vector) {
        let from = self.current_position();
        self.cubic_bezier_to(from + ctrl1, from + ctrl2, from + to);
    }

    /// Hints at the builder that a certain number of segments will be added.
    ///
    /// The Builder implementation may use this information to pre-allocate
    /// memory as an optimization.
    fn reserve(&mut self, _segments: usize) {}

    /// Adds a closed sub-path from a sequence of vertices.
    ///
    /// There must be no sub-path in progress when this method is called.
    /// No sub-path is in progress after the method is called. Nothing is added
    /// for an empty slice.
    fn add_polygon(&mut self, points: &[Point])
    where
        Self: Sized,
    {
        shapes::add_polygon(self, points);
    }

    /// Adds a closed sub-path containing an axis-aligned ellipse.
    ///
    /// There must be no sub-path in progress when this method is called.
    /// No sub-path is in progress after the method is called.
    fn add_ellipse(&mut self, center: Point, radii: Vector)
    where
        Self: Sized,
    {
        shapes::add_ellipse(self, center, radii);
    }

    /// Adds a closed sub-path containing a circle.
    ///
    /// There must be no sub-path in progress when this method is called.
    /// No sub-path is in progress after the method is called.
    fn add_circle(&mut self, center: Point, radius: f32)
    where
        Self: Sized,
    {
        shapes::add_ellipse(self, center, vector(radius, radius));
    }

    /// Adds a sub-path containing a circular arc.
    ///
    /// There must be no sub-path in progress when this method is called.
    /// No sub-path is in progress after the method is called.
    fn add_arc(
        &mut self,
        center: Point,
        radius: f32,
        start: Angle,
        end: Angle,
        style: ArcStyle,
        options: &ArcOptions,
    ) where
        Self: Sized,
    {
        arc::add_arc(self, center, radius, start, end, style, options);
    }
}

#[cfg(test)]
use crate::{Path, PathSegment};

#[test]
fn relative_commands() {
    let mut builder = Path::builder();
    builder.begin(point(1.0, 1.0));
    builder.relative_line_to(vector(1.0, 0.0));
    builder.relative_quadratic_bezier_to(vector(1.0, 0.0), vector(1.0, 1.0));
    builder.relative_cubic_bezier_to(vector(0.0, 1.0), vector(-1.0, 1.0), vector(-1.0, 2.0));
    builder.end(false);

    let path = builder.build();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::MoveTo(point(1.0, 1.0)),
            PathSegment::LineTo(point(2.0, 1.0)),
            PathSegment::QuadTo {
                ctrl: point(3.0, 1.0),
                to: point(3.0, 2.0)
            },
            PathSegment::CubeTo {
                ctrl1: point(3.0, 3.0),
                ctrl2: point(2.0, 3.0),
                to: point(2.0, 4.0)
            },
        ][..]
    );
}

#[test]
fn relative_commands_after_close() {
    let mut builder = Path::builder();
    builder.begin(point(5.0, 5.0));
    builder.line_to(point(10.0, 5.0));
    builder.close();

    // After closing, the pen is back at the start of the sub-path.
    assert_eq!(builder.current_position(), point(5.0, 5.0));
}
