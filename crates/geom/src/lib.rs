#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric helpers on top of euclid.
//!
//! This crate is reexported in [pctdraw](https://docs.rs/pctdraw/).
//!
//! # Overview.
//!
//! Two coordinate systems are used throughout the pctdraw crates:
//!
//! - *device space*, the native units of the drawing surface, with the origin
//!   at the top-left corner and y increasing downward,
//! - *percentage space*, where both axes range from 0 to 100, with the origin at
//!   the bottom-left corner and y increasing upward.
//!
//! This crate implements the maths to go from one to the other:
//!
//! - the percentage mapper (see the [percent](percent/index.html) module),
//! - polar to cartesian conversion with aspect ratio compensation (see the
//!   [polar](polar/index.html) module),
//! - affine transforms about a pivot point (see the [transform](transform/index.html)
//!   module),
//! - sampling of quadratic and cubic bézier segments.
//!
//! # Percentage space
//!
//! ```ascii
//!  (0,100)          (100,100)        (0,0)             (w,0)
//!     +----------------+                +----------------+
//!     |                |                |                |
//!     |   percentage   |    ------>     |     device     |
//!     |                |                |                |
//!     +----------------+                +----------------+
//!  (0,0)            (100,0)          (0,h)             (w,h)
//! ```
//!
//! Positions in percentage space scale with the size of the surface, which means
//! that a shape described with a single percentage magnitude (a circle radius for
//! example) does not stay isotropic on a non-square surface. Functions that care
//! about this take the aspect ratio explicitly.

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod bezier;
pub mod percent;
pub mod polar;
pub mod range;
pub mod transform;

#[doc(inline)]
pub use crate::bezier::{CubicBezierSegment, QuadraticBezierSegment};
#[doc(inline)]
pub use crate::percent::PercentSpace;
#[doc(inline)]
pub use crate::polar::{aspect_ratio, polar, polar_degrees};
#[doc(inline)]
pub use crate::range::map_range;

pub use crate::math::*;

pub mod math {
    //! f32 version of the euclid types used everywhere. The other pctdraw crates
    //! reexport them.

    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for ```euclid::default::Vector2D<f32>```.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Alias for ```euclid::default::Size2D<f32>```.
    pub type Size = euclid::default::Size2D<f32>;

    /// Alias for ```euclid::default::Box2D<f32>```
    pub type Box2D = euclid::default::Box2D<f32>;

    /// Alias for ```euclid::default::Transform2D<f32>```
    pub type Transform = euclid::default::Transform2D<f32>;

    /// An angle in radians (f32).
    pub type Angle = euclid::Angle<f32>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(w, h)`.
    #[inline]
    pub fn size(w: f32, h: f32) -> Size {
        Size::new(w, h)
    }

    /// Shorthand for `Box2D::new(point(x, y), point(x + w, y + h))`.
    #[inline]
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Box2D {
        Box2D::new(point(x, y), point(x + w, y + h))
    }
}

pub mod traits {
    use crate::math::{Point, Transform, Vector};

    pub trait Transformation {
        fn transform_point(&self, p: Point) -> Point;
        fn transform_vector(&self, v: Vector) -> Vector;
    }

    impl Transformation for Transform {
        fn transform_point(&self, p: Point) -> Point {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector) -> Vector {
            self.transform_vector(v)
        }
    }

    // Automatically implement Transformation for all &Transformation.
    impl<'l, T: Transformation> Transformation for &'l T {
        #[inline]
        fn transform_point(&self, p: Point) -> Point {
            (*self).transform_point(p)
        }

        #[inline]
        fn transform_vector(&self, v: Vector) -> Vector {
            (*self).transform_vector(v)
        }
    }
}
