//! Image placement.
//!
//! Decoding is the job of an external image decoder; the context only needs the
//! pixel size of the image to compute where it goes.

use crate::math::{vector, Box2D, Point, Size};

/// Identifies a decoded image owned by the backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ImageKey(pub u64);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ImageSource {
    /// An image file that the backend loads by name.
    Named(String),
    /// An image that was already decoded.
    Decoded(ImageKey),
}

/// Where an image is drawn, in device units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ImagePlacement {
    /// The destination rectangle.
    pub rect: Box2D,
    /// Device units per image pixel.
    pub scale: f32,
}

impl ImagePlacement {
    /// Centers an image of `pixel_size` on `center`, scaled by `scale_percent`
    /// (100 draws one pixel per device unit).
    pub fn centered(center: Point, pixel_size: Size, scale_percent: f32) -> Self {
        let scale = scale_percent / 100.0;
        let half = vector(pixel_size.width * scale, pixel_size.height * scale) / 2.0;

        ImagePlacement {
            rect: Box2D::new(center - half, center + half),
            scale,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ImageOp {
    pub source: ImageSource,
    pub pixel_size: Size,
    pub placement: ImagePlacement,
}

#[cfg(test)]
use crate::math::{point, size};

#[test]
fn centered_placement() {
    let placement = ImagePlacement::centered(point(500.0, 400.0), size(200.0, 100.0), 50.0);
    assert_eq!(placement.scale, 0.5);
    assert_eq!(placement.rect, Box2D::new(point(450.0, 375.0), point(550.0, 425.0)));
    assert_eq!(placement.rect.width(), 100.0);
}
