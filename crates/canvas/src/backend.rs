use crate::math::Transform;
use crate::path::Path;
use crate::{Color, DrawOp, ImageOp, TextRun};

/// The rendering half of the drawing layer.
///
/// Implemented by the rasterizer that consumes recorded frames. Operations are
/// received in recording order.
pub trait Backend {
    /// Fills a closed path.
    fn fill(&mut self, path: &Path, color: Color);

    /// Strokes a path.
    fn stroke(&mut self, path: &Path, color: Color, width: f32);

    /// Applies `transform` to everything up to the matching `pop_transform`.
    fn push_transform(&mut self, transform: &Transform);

    fn pop_transform(&mut self);

    /// The output depends on values that may change between frames.
    fn invalidate(&mut self) {}

    fn text(&mut self, _run: &TextRun) {}

    fn image(&mut self, _image: &ImageOp) {}
}

/// Forwards a sequence of operations to a backend.
pub fn replay(ops: &[DrawOp], backend: &mut dyn Backend) {
    for op in ops {
        match op {
            DrawOp::Invalidate => backend.invalidate(),
            DrawOp::PushTransform(transform) => backend.push_transform(transform),
            DrawOp::PopTransform => backend.pop_transform(),
            DrawOp::Fill { path, color } => backend.fill(path, *color),
            DrawOp::Stroke { path, color, width } => backend.stroke(path, *color, *width),
            DrawOp::Text(run) => backend.text(run),
            DrawOp::Image(image) => backend.image(image),
        }
    }
}

#[cfg(test)]
#[derive(Default)]
struct Recorder {
    log: Vec<String>,
    depth: i32,
}

#[cfg(test)]
impl Backend for Recorder {
    fn fill(&mut self, path: &Path, _color: Color) {
        self.log.push(format!("fill {}", path.len()));
    }

    fn stroke(&mut self, path: &Path, _color: Color, width: f32) {
        self.log.push(format!("stroke {} {}", path.len(), width));
    }

    fn push_transform(&mut self, _transform: &Transform) {
        self.depth += 1;
        self.log.push("push".to_string());
    }

    fn pop_transform(&mut self) {
        self.depth -= 1;
        self.log.push("pop".to_string());
    }

    fn text(&mut self, run: &TextRun) {
        self.log.push(format!("text {}", run.text));
    }
}

#[test]
fn replay_in_order() {
    use crate::{DrawContext, Surface};

    let mut ctx = DrawContext::new(Surface::new(100.0, 100.0));
    ctx.abs_circle(50.0, 50.0, 10.0, Color::BLACK);
    {
        let mut guard = ctx.abs_translate(10.0, 0.0);
        guard.abs_line(0.0, 0.0, 10.0, 10.0, 2.0, Color::BLACK);
        guard.abs_text(0.0, 20.0, 12.0, "hi", Color::BLACK).unwrap();
    }
    let frame = ctx.finish().unwrap();

    let mut recorder = Recorder::default();
    frame.replay(&mut recorder);

    assert_eq!(recorder.depth, 0);
    // The invalidation marker is ignored by the default implementation.
    assert_eq!(
        recorder.log,
        vec!["fill 6", "push", "stroke 2 2", "text hi", "pop"]
    );
}
