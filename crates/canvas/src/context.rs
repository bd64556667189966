use crate::math::{point, Point, Transform};
use crate::path::{ArcOptions, Path};
use crate::{
    Alignment, Backend, CanvasError, CanvasResult, Color, FaceId, ImageOp, Surface, TextLayout,
    TextRun, TransformError,
};

use std::fmt;

/// Parameters of a drawing context.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CanvasOptions {
    /// How arcs are split into curve segments.
    ///
    /// Default value: `ArcOptions::DEFAULT`.
    pub arc: ArcOptions,

    /// Face used for text.
    ///
    /// Default value: `FaceId(0)`.
    pub text_face: FaceId,

    /// Whether each transform push is preceded by a `DrawOp::Invalidate`, telling
    /// the host that the frame depends on values that may change (animations).
    ///
    /// Default value: `true`.
    pub invalidate_on_push: bool,
}

impl CanvasOptions {
    pub const DEFAULT: Self = CanvasOptions {
        arc: ArcOptions::DEFAULT,
        text_face: FaceId(0),
        invalidate_on_push: true,
    };

    #[inline]
    pub const fn with_arc_options(mut self, arc: ArcOptions) -> Self {
        self.arc = arc;
        self
    }

    #[inline]
    pub const fn with_text_face(mut self, face: FaceId) -> Self {
        self.text_face = face;
        self
    }

    #[inline]
    pub const fn with_invalidation(mut self, invalidate: bool) -> Self {
        self.invalidate_on_push = invalidate;
        self
    }
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum DrawOp {
    /// The output depends on values that may change between frames.
    Invalidate,
    /// Applies a transform to the operations up to the matching `PopTransform`.
    PushTransform(Transform),
    PopTransform,
    /// Fills a closed path.
    Fill { path: Path, color: Color },
    /// Strokes a path with a given line width.
    Stroke { path: Path, color: Color, width: f32 },
    Text(TextRun),
    Image(ImageOp),
}

/// Records the drawing operations of a frame.
///
/// All drawing happens through a mutable reference to the context; there is no
/// global state, so independent contexts (off-screen composition, tests) can
/// coexist.
pub struct DrawContext {
    pub(crate) surface: Surface,
    pub(crate) options: CanvasOptions,
    pub(crate) ops: Vec<DrawOp>,
    // The composed transform after each push.
    pub(crate) transforms: Vec<Transform>,
    text_layout: Option<Box<dyn TextLayout>>,
}

impl DrawContext {
    pub fn new(surface: Surface) -> Self {
        Self::with_options(surface, CanvasOptions::DEFAULT)
    }

    pub fn with_options(surface: Surface, options: CanvasOptions) -> Self {
        DrawContext {
            surface,
            options,
            ops: Vec::new(),
            transforms: Vec::new(),
            text_layout: None,
        }
    }

    /// Sets the engine used to measure centered and end-aligned text.
    pub fn set_text_layout(&mut self, layout: Box<dyn TextLayout>) {
        self.text_layout = Some(layout);
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    /// The operations recorded so far.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of transforms currently pushed.
    #[inline]
    pub fn depth(&self) -> usize {
        self.transforms.len()
    }

    /// The composition of all pushed transforms.
    pub fn current_transform(&self) -> Transform {
        self.transforms
            .last()
            .cloned()
            .unwrap_or_else(Transform::identity)
    }

    /// Fills a path, closing its last sub-path if needed. Empty paths are skipped.
    pub fn fill(&mut self, path: Path, color: Color) {
        if path.is_empty() {
            return;
        }

        self.ops.push(DrawOp::Fill {
            path: path.closed(),
            color,
        });
    }

    /// Strokes a path. Empty paths are skipped.
    pub fn stroke(&mut self, path: Path, color: Color, width: f32) {
        if path.is_empty() {
            return;
        }

        self.ops.push(DrawOp::Stroke { path, color, width });
    }

    /// Records a run of text anchored at `(x, y)` in device units.
    pub(crate) fn push_text(
        &mut self,
        alignment: Alignment,
        x: f32,
        y: f32,
        size: f32,
        text: &str,
        color: Color,
        wrap_width: Option<f32>,
    ) -> CanvasResult {
        let face = self.options.text_face;
        let measured_width = match (alignment, &self.text_layout) {
            (Alignment::Start, _) => 0.0,
            (_, Some(layout)) => layout.measure(face, size, text),
            (_, None) => {
                log::debug!("cannot align {:?} without a text layout", text);
                return Err(CanvasError::MissingTextLayout);
            }
        };

        self.ops.push(DrawOp::Text(TextRun {
            origin: crate::place(alignment, x, y, measured_width, size),
            size,
            face,
            text: text.to_string(),
            color,
            alignment,
            wrap_width,
        }));

        Ok(())
    }

    pub(crate) fn push_image(&mut self, image: ImageOp) {
        self.ops.push(DrawOp::Image(image));
    }

    /// Maps a percentage position to device units.
    #[inline]
    pub(crate) fn device_point(&self, x: f32, y: f32) -> Point {
        self.surface.percent_space().point(x, y)
    }

    /// Returns the center of the surface in device units.
    #[inline]
    pub fn center(&self) -> Point {
        point(self.surface.width / 2.0, self.surface.height / 2.0)
    }

    /// Ends the frame.
    ///
    /// Fails if transforms are still pushed, in which case the recorded operations
    /// are discarded.
    pub fn finish(mut self) -> Result<Frame, TransformError> {
        let depth = self.depth();
        if depth > 0 {
            log::warn!("frame finished with {} transform(s) still pushed", depth);
            self.transforms.clear();
            return Err(TransformError::Unbalanced(depth));
        }

        Ok(Frame {
            surface: self.surface,
            ops: std::mem::take(&mut self.ops),
        })
    }
}

impl Drop for DrawContext {
    fn drop(&mut self) {
        if !self.transforms.is_empty() {
            log::warn!(
                "drawing context dropped with {} transform(s) still pushed",
                self.transforms.len()
            );
        }
    }
}

impl fmt::Debug for DrawContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DrawContext")
            .field("surface", &self.surface)
            .field("options", &self.options)
            .field("ops", &self.ops.len())
            .field("depth", &self.transforms.len())
            .field("text_layout", &self.text_layout.is_some())
            .finish()
    }
}

/// The finished operations of a frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Frame {
    surface: Surface,
    ops: Vec<DrawOp>,
}

impl Frame {
    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Hands the operations to a backend, in order.
    pub fn replay(&self, backend: &mut dyn Backend) {
        crate::replay(&self.ops, backend);
    }
}

#[cfg(test)]
use crate::path::shapes;

#[test]
fn fill_closes_paths() {
    let mut ctx = DrawContext::new(Surface::new(100.0, 100.0));
    let open = shapes::quadratic_curve_path(point(0.0, 0.0), point(5.0, 5.0), point(10.0, 0.0), false);
    ctx.fill(open.clone(), Color::BLACK);
    ctx.stroke(open, Color::BLACK, 2.0);
    ctx.fill(Path::new(), Color::BLACK);
    ctx.stroke(Path::new(), Color::BLACK, 1.0);

    assert_eq!(ctx.ops().len(), 2);
    match &ctx.ops()[0] {
        DrawOp::Fill { path, .. } => assert!(path.is_closed()),
        op => panic!("unexpected {:?}", op),
    }
    match &ctx.ops()[1] {
        DrawOp::Stroke { path, width, .. } => {
            assert!(!path.is_closed());
            assert_eq!(*width, 2.0);
        }
        op => panic!("unexpected {:?}", op),
    }
}

#[test]
fn finish_returns_ops() {
    let mut ctx = DrawContext::new(Surface::new(100.0, 50.0));
    ctx.fill(shapes::circle_path(point(10.0, 10.0), 5.0), Color::WHITE);
    let frame = ctx.finish().unwrap();
    assert_eq!(frame.ops().len(), 1);
    assert_eq!(frame.surface().width, 100.0);
    assert_eq!(frame.into_ops().len(), 1);
}

#[test]
fn options() {
    let options = CanvasOptions::default()
        .with_arc_options(ArcOptions::max_segment_length(4.0))
        .with_text_face(FaceId(3))
        .with_invalidation(false);
    let ctx = DrawContext::with_options(Surface::new(10.0, 10.0), options);
    assert_eq!(ctx.options().arc.max_segment_length, 4.0);
    assert_eq!(ctx.options().text_face, FaceId(3));
    assert!(!ctx.options().invalidate_on_push);
    assert_eq!(ctx.center(), point(5.0, 5.0));
}
