use crate::geom::{aspect_ratio, PercentSpace};
use crate::math::{size, Size};

/// An opaque RGBA color, handed as is to the backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Color::rgb(0, 0, 0);
    pub const WHITE: Self = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

/// The drawing area of a frame.
///
/// A new surface is created for every frame from the current size of the host
/// window; it is never resized in place.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Surface {
    /// Width in device units.
    pub width: f32,
    /// Height in device units.
    pub height: f32,
    /// Default color for text.
    pub text_color: Color,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Surface {
            width,
            height,
            text_color: Color::BLACK,
        }
    }

    #[inline]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[inline]
    pub fn size(&self) -> Size {
        size(self.width, self.height)
    }

    /// `width / height`, used to keep polar layouts circular.
    ///
    /// `1.0` for a surface with a zero height.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.size())
    }

    #[inline]
    pub fn percent_space(&self) -> PercentSpace {
        PercentSpace::new(self.size())
    }
}

#[test]
fn surface_accessors() {
    let surface = Surface::new(1000.0, 800.0).with_text_color(Color::rgb(10, 20, 30));
    assert_eq!(surface.size(), size(1000.0, 800.0));
    assert_eq!(surface.aspect_ratio(), 1.25);
    assert_eq!(surface.text_color, Color::rgb(10, 20, 30));
    assert_eq!(surface.percent_space().width_extent(50.0), 500.0);
    assert_eq!(Color::WHITE.a, 255);
    assert_eq!(Color::TRANSPARENT.a, 0);
}
