#![deny(bare_trait_objects)]

//! 2D vector drawing in device or percentage coordinates.
//!
//! Shapes, text and images are described against a surface of arbitrary size,
//! either directly in device units or in percentage space where both axes go
//! from 0 to 100 with the origin at the bottom-left corner. Drawing produces a
//! list of path and paint operations that an external rasterizer consumes.
//!
//! # Crates
//!
//! This meta-crate (`pctdraw`) reexports the following sub-crates for convenience:
//!
//! * **pctdraw_geom** - Math types, percentage and polar coordinate conversions,
//!   affine transforms and bézier curve sampling.
//! * **pctdraw_path** - Paths, the path builder and the curve approximations of
//!   circles, ellipses, arcs and polygons.
//! * **pctdraw_canvas** - The drawing context: surfaces, the transform stack,
//!   drawing primitives and the backend seam.
//!
//! Each `pctdraw_<name>` crate is reexported as a `<name>` module in `pctdraw`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled with the `serialization` feature flag
//! (disabled by default).
//!
//! # Examples
//!
//! ## Drawing in percentage space
//!
//! ```
//! use pctdraw::canvas::{Color, DrawContext, DrawOp, Surface};
//!
//! let mut ctx = DrawContext::new(Surface::new(1000.0, 800.0));
//! ctx.background(Color::WHITE);
//!
//! // Concentric dots around the center, kept circular despite the aspect ratio.
//! for i in 0..12 {
//!     let p = ctx.polar_degrees(50.0, 50.0, 30.0, i as f32 * 30.0);
//!     ctx.circle(p.x, p.y, 2.0, Color::rgb(40, 90, 200));
//! }
//!
//! let frame = ctx.finish().unwrap();
//! assert_eq!(frame.ops().len(), 13);
//! assert!(matches!(frame.ops()[1], DrawOp::Fill { .. }));
//! ```
//!
//! ## Building a path
//!
//! ```
//! use pctdraw::math::point;
//! use pctdraw::path::{ArcOptions, ArcStyle, Path};
//! use pctdraw::path::traits::PathBuilder;
//! use pctdraw::math::Angle;
//!
//! let mut builder = Path::builder();
//! builder.add_circle(point(0.0, 0.0), 10.0);
//! builder.add_arc(
//!     point(50.0, 0.0),
//!     20.0,
//!     Angle::degrees(0.0),
//!     Angle::degrees(120.0),
//!     ArcStyle::Open,
//!     &ArcOptions::DEFAULT,
//! );
//! let path = builder.build();
//!
//! assert!(!path.is_closed());
//! ```

pub use pctdraw_canvas as canvas;
pub use pctdraw_geom as geom;
pub use pctdraw_path as path;

pub use pctdraw_geom::math;
