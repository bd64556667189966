#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures and traits to build paths (vector graphics) and approximate
//! circles, ellipses and arcs with bézier curves.
//!
//! To build paths, see the [builder](builder/index.html) module. The curve
//! approximations live in the [shapes](shapes/index.html) and [arc](arc/index.html)
//! modules.
//!
//! This crate is reexported in [pctdraw](https://docs.rs/pctdraw/).
//!
//! # Examples
//!
//! ```
//! # extern crate pctdraw_path;
//! # fn main() {
//! use pctdraw_path::Path;
//! use pctdraw_path::math::{point, vector};
//! use pctdraw_path::builder::*;
//!
//! // Create a builder object to build the path.
//! let mut builder = Path::builder();
//!
//! // Build a simple path.
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(1.0, 2.0));
//! builder.relative_line_to(vector(1.0, -2.0));
//! builder.line_to(point(1.0, 1.0));
//! builder.close();
//!
//! // Generate the actual path object.
//! let path = builder.build();
//!
//! for segment in &path {
//!     println!("{:?}", segment);
//! }
//! # }
//! ```
//!

pub use pctdraw_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod builder;
mod error;
pub mod path;
mod segment;
pub mod shapes;

#[doc(hidden)]
pub mod private;

#[doc(inline)]
pub use crate::arc::{ArcOptions, ArcStyle};
pub use crate::error::{GeometryError, GeometryResult};
#[doc(inline)]
pub use crate::path::{Builder, Path};
pub use crate::segment::*;

pub mod traits {
    //! `pctdraw_path` traits reexported here for convenience.

    pub use crate::builder::PathBuilder;
    pub use crate::geom::traits::Transformation;
}

pub mod math {
    //! f32 version of the pctdraw_geom types used everywhere. The other pctdraw
    //! crates reexport them.

    pub use crate::geom::math::*;
}
