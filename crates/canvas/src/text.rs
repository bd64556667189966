//! Text anchoring.
//!
//! Shaping, measuring and rendering glyphs is the job of an external text layout
//! engine. The context only computes where a pre-shaped run of text goes.

use crate::math::{point, Point};
use crate::Color;

/// Identifies a font face in the text layout engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FaceId(pub u32);

/// How the x origin of a run of text is computed from its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Alignment {
    /// The text starts at the anchor.
    Start,
    /// The text is centered on the anchor.
    Middle,
    /// The text ends at the anchor.
    End,
}

/// Computes the origin of a run of text.
///
/// `measured_width` is the advance of the whole run as measured by the text
/// layout engine. The y coordinate is shifted up by `size` so that `y` designates
/// the top of the text.
///
/// ```
/// use pctdraw_canvas::{place, Alignment};
/// use pctdraw_canvas::math::point;
///
/// assert_eq!(place(Alignment::Middle, 100.0, 50.0, 40.0, 12.0), point(80.0, 38.0));
/// ```
pub fn place(alignment: Alignment, x: f32, y: f32, measured_width: f32, size: f32) -> Point {
    let x = match alignment {
        Alignment::Start => x,
        Alignment::Middle => x - measured_width / 2.0,
        Alignment::End => x - measured_width,
    };

    point(x, y - size)
}

/// The measuring half of an external text layout engine.
pub trait TextLayout {
    /// Returns the advance width of `text` in device units.
    fn measure(&self, face: FaceId, size: f32, text: &str) -> f32;
}

impl<F> TextLayout for F
where
    F: Fn(FaceId, f32, &str) -> f32,
{
    fn measure(&self, face: FaceId, size: f32, text: &str) -> f32 {
        self(face, size, text)
    }
}

/// A run of text to be shaped and rendered by the backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct TextRun {
    /// Origin computed by `place`, in device units.
    pub origin: Point,
    /// Font size in device units.
    pub size: f32,
    pub face: FaceId,
    pub text: String,
    pub color: Color,
    pub alignment: Alignment,
    /// When set, the layout engine wraps lines at this width.
    pub wrap_width: Option<f32>,
}

#[test]
fn place_alignments() {
    assert_eq!(place(Alignment::Start, 100.0, 50.0, 40.0, 10.0), point(100.0, 40.0));
    assert_eq!(place(Alignment::Middle, 100.0, 50.0, 40.0, 10.0), point(80.0, 40.0));
    assert_eq!(place(Alignment::End, 100.0, 50.0, 40.0, 10.0), point(60.0, 40.0));
}

#[test]
fn closure_layout() {
    let layout = |_: FaceId, size: f32, text: &str| size * 0.5 * text.chars().count() as f32;
    assert_eq!(layout.measure(FaceId(0), 10.0, "abcd"), 20.0);
}
