#![deny(bare_trait_objects)]
#![allow(clippy::too_many_arguments)]

//! A drawing context that records path and paint operations.
//!
//! A [DrawContext](struct.DrawContext.html) is created for each frame from a
//! [Surface](struct.Surface.html) describing the size of the drawing area. Shapes,
//! text and images are described either in device units (methods prefixed with
//! `abs_`) or in percentage space, where both axes go from 0 to 100 with the
//! origin at the bottom-left corner. Either way the context only records
//! [DrawOp](enum.DrawOp.html)s; an external [Backend](trait.Backend.html) does
//! the actual rendering when the finished [Frame](struct.Frame.html) is replayed.
//!
//! This crate is reexported in [pctdraw](https://docs.rs/pctdraw/).
//!
//! # Transforms
//!
//! Transforms are scoped: pushing one returns a guard that pops it when dropped,
//! so a transform cannot leak past the block that pushed it.
//!
//! ```
//! use pctdraw_canvas::{Color, DrawContext, Surface};
//! use pctdraw_canvas::math::Angle;
//!
//! let mut ctx = DrawContext::new(Surface::new(800.0, 600.0));
//!
//! ctx.circle(50.0, 50.0, 10.0, Color::BLACK);
//! {
//!     // Rotate everything drawn in this block around the center of the surface.
//!     let mut rotated = ctx.rotate(50.0, 50.0, Angle::degrees(30.0));
//!     rotated.center_rect(50.0, 50.0, 20.0, 10.0, Color::rgb(200, 0, 0));
//! }
//! assert_eq!(ctx.depth(), 0);
//!
//! let frame = ctx.finish().unwrap();
//! assert!(!frame.ops().is_empty());
//! ```

pub use pctdraw_path as path;
pub use pctdraw_path::geom;
pub use pctdraw_path::math;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod abs;
mod backend;
mod context;
mod error;
mod image;
mod pct;
mod surface;
mod text;
mod transform;

pub use crate::backend::{replay, Backend};
pub use crate::context::{CanvasOptions, DrawContext, DrawOp, Frame};
pub use crate::error::{CanvasError, CanvasResult, TransformError};
pub use crate::image::{ImageKey, ImageOp, ImagePlacement, ImageSource};
pub use crate::surface::{Color, Surface};
pub use crate::text::{place, Alignment, FaceId, TextLayout, TextRun};
pub use crate::transform::{TransformGuard, TransformHandle};
