//! Drawing primitives in device units.
//!
//! Positions and sizes are used as is. The origin is the top-left corner of the
//! surface and y points down.

use crate::math::{point, size, vector, Angle, Box2D, Size};
use crate::path::arc::arc_path;
use crate::path::shapes;
use crate::path::{ArcStyle, GeometryError, GeometryResult};
use crate::{
    Alignment, CanvasResult, Color, DrawContext, ImageKey, ImageOp, ImagePlacement, ImageSource,
};

impl DrawContext {
    /// Fills the whole surface.
    pub fn background(&mut self, color: Color) {
        let rect = Box2D::from_size(self.surface.size());
        self.fill(shapes::rectangle_path(&rect), color);
    }

    /// Strokes a line from `(x1, y1)` to `(x2, y2)`.
    pub fn abs_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, size: f32, color: Color) {
        let path = shapes::line_path(point(x1, y1), point(x2, y2));
        self.stroke(path, color, size);
    }

    /// Strokes a horizontal line going right from `(x, y)`.
    pub fn abs_hline(&mut self, x: f32, y: f32, length: f32, size: f32, color: Color) {
        self.abs_line(x, y, x + length, y, size, color);
    }

    /// Strokes a vertical line going down from `(x, y)`.
    pub fn abs_vline(&mut self, x: f32, y: f32, length: f32, size: f32, color: Color) {
        self.abs_line(x, y, x, y + length, size, color);
    }

    /// Fills a rectangle with its top-left corner at `(x, y)`.
    pub fn abs_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let rect = Box2D::new(point(x, y), point(x + w, y + h));
        self.fill(shapes::rectangle_path(&rect), color);
    }

    /// Fills a rectangle centered on `(x, y)`.
    pub fn abs_center_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.abs_rect(x - w / 2.0, y - h / 2.0, w, h, color);
    }

    /// Fills a square centered on `(x, y)`.
    pub fn abs_square(&mut self, x: f32, y: f32, side: f32, color: Color) {
        self.abs_center_rect(x, y, side, side, color);
    }

    pub fn abs_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.fill(shapes::circle_path(point(x, y), radius), color);
    }

    /// Fills an axis-aligned ellipse with radii `w` and `h`.
    pub fn abs_ellipse(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.fill(shapes::ellipse_path(point(x, y), vector(w, h)), color);
    }

    /// Fills the pie slice between two angles.
    ///
    /// Angles go from the positive x axis toward the positive y axis.
    pub fn abs_arc(&mut self, x: f32, y: f32, radius: f32, start: Angle, end: Angle, color: Color) {
        let path = arc_path(point(x, y), radius, start, end, ArcStyle::Pie, &self.options.arc);
        self.fill(path, color);
    }

    /// Strokes the arc between two angles.
    pub fn abs_arc_line(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start: Angle,
        end: Angle,
        size: f32,
        color: Color,
    ) {
        let path = arc_path(point(x, y), radius, start, end, ArcStyle::Open, &self.options.arc);
        self.stroke(path, color, size);
    }

    /// Fills the shape closed by a quadratic bézier curve.
    pub fn abs_quad_curve(
        &mut self,
        x: f32,
        y: f32,
        cx: f32,
        cy: f32,
        ex: f32,
        ey: f32,
        color: Color,
    ) {
        let path = shapes::quadratic_curve_path(point(x, y), point(cx, cy), point(ex, ey), true);
        self.fill(path, color);
    }

    pub fn abs_quad_stroked_curve(
        &mut self,
        x: f32,
        y: f32,
        cx: f32,
        cy: f32,
        ex: f32,
        ey: f32,
        size: f32,
        color: Color,
    ) {
        let path = shapes::quadratic_curve_path(point(x, y), point(cx, cy), point(ex, ey), false);
        self.stroke(path, color, size);
    }

    /// Fills the shape closed by a cubic bézier curve.
    pub fn abs_cubic_curve(
        &mut self,
        x: f32,
        y: f32,
        cx1: f32,
        cy1: f32,
        cx2: f32,
        cy2: f32,
        ex: f32,
        ey: f32,
        color: Color,
    ) {
        let path = shapes::cubic_curve_path(
            point(x, y),
            point(cx1, cy1),
            point(cx2, cy2),
            point(ex, ey),
            true,
        );
        self.fill(path, color);
    }

    pub fn abs_cubic_stroked_curve(
        &mut self,
        x: f32,
        y: f32,
        cx1: f32,
        cy1: f32,
        cx2: f32,
        cy2: f32,
        ex: f32,
        ey: f32,
        size: f32,
        color: Color,
    ) {
        let path = shapes::cubic_curve_path(
            point(x, y),
            point(cx1, cy1),
            point(cx2, cy2),
            point(ex, ey),
            false,
        );
        self.stroke(path, color, size);
    }

    /// Fills a polygon given parallel lists of coordinates.
    ///
    /// Nothing is drawn if the lists are empty or have different lengths.
    pub fn abs_polygon(&mut self, xs: &[f32], ys: &[f32], color: Color) -> GeometryResult<()> {
        let path = shapes::polygon_path(xs, ys, 1)?;
        self.fill(path, color);

        Ok(())
    }

    /// Draws text starting at `(x, y)`, the top of the text.
    pub fn abs_text(&mut self, x: f32, y: f32, size: f32, s: &str, color: Color) -> CanvasResult {
        self.push_text(Alignment::Start, x, y, size, s, color, None)
    }

    /// Draws text centered on `x`.
    pub fn abs_text_mid(&mut self, x: f32, y: f32, size: f32, s: &str, color: Color) -> CanvasResult {
        self.push_text(Alignment::Middle, x, y, size, s, color, None)
    }

    /// Draws text ending at `x`.
    pub fn abs_text_end(&mut self, x: f32, y: f32, size: f32, s: &str, color: Color) -> CanvasResult {
        self.push_text(Alignment::End, x, y, size, s, color, None)
    }

    /// Draws text starting at `(x, y)`, wrapped at `width`.
    pub fn abs_text_wrap(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        width: f32,
        s: &str,
        color: Color,
    ) -> CanvasResult {
        self.push_text(Alignment::Start, x, y, size, s, color, Some(width))
    }

    /// Draws the named image file centered on `(x, y)`.
    ///
    /// `w` and `h` are the pixel size of the image and `scale` a percentage of it.
    pub fn abs_image(&mut self, name: &str, x: f32, y: f32, w: u32, h: u32, scale: f32) {
        let pixel_size = size(w as f32, h as f32);
        self.abs_image_op(ImageSource::Named(name.to_string()), x, y, pixel_size, scale);
    }

    /// Draws a decoded image centered on `(x, y)`.
    pub fn abs_img(&mut self, key: ImageKey, x: f32, y: f32, pixel_size: Size, scale: f32) {
        self.abs_image_op(ImageSource::Decoded(key), x, y, pixel_size, scale);
    }

    fn abs_image_op(&mut self, source: ImageSource, x: f32, y: f32, pixel_size: Size, scale: f32) {
        self.push_image(ImageOp {
            source,
            pixel_size,
            placement: ImagePlacement::centered(point(x, y), pixel_size, scale),
        });
    }

    /// Strokes a grid covering the rectangle with its top-left corner at
    /// `(left, top)`, with a line every `interval` units.
    pub fn abs_grid(
        &mut self,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        size: f32,
        interval: f32,
        color: Color,
    ) -> CanvasResult {
        check_interval(interval)?;

        for x in grid_steps(left, width, interval) {
            self.abs_vline(x, top, height, size, color);
        }
        for y in grid_steps(top, height, interval) {
            self.abs_hline(left, y, width, size, color);
        }

        Ok(())
    }
}

pub(crate) fn check_interval(interval: f32) -> GeometryResult<()> {
    if interval > 0.0 && interval.is_finite() {
        return Ok(());
    }

    log::debug!("rejecting grid interval {}", interval);
    Err(GeometryError::InvalidInterval(interval))
}

/// Positions from `start` to `start + extent` (inclusive) every `interval`.
pub(crate) fn grid_steps(start: f32, extent: f32, interval: f32) -> impl Iterator<Item = f32> {
    let count = (extent / interval).floor().max(0.0) as u32;
    (0..=count).map(move |i| start + interval * i as f32)
}

#[cfg(test)]
use crate::path::PathSegment;
#[cfg(test)]
use crate::{CanvasError, DrawOp, FaceId, Surface};

#[cfg(test)]
fn context() -> DrawContext {
    DrawContext::new(Surface::new(200.0, 100.0))
}

#[cfg(test)]
fn fills(ctx: &DrawContext) -> Vec<crate::path::Path> {
    ctx.ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill { path, .. } => Some(path.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn rectangles() {
    let mut ctx = context();
    ctx.abs_rect(10.0, 20.0, 30.0, 40.0, Color::BLACK);
    ctx.abs_center_rect(25.0, 40.0, 30.0, 40.0, Color::BLACK);
    ctx.abs_square(50.0, 50.0, 10.0, Color::BLACK);

    let paths = fills(&ctx);
    assert_eq!(paths[0], paths[1]);
    assert_eq!(paths[0].first_point(), Some(point(10.0, 20.0)));
    assert_eq!(paths[2].first_point(), Some(point(45.0, 45.0)));
    assert!(paths.iter().all(|p| p.is_closed()));
}

#[test]
fn background_covers_surface() {
    let mut ctx = context();
    ctx.background(Color::WHITE);
    let ends: Vec<_> = fills(&ctx)[0].iter().filter_map(|s| s.to()).collect();
    assert!(ends.contains(&point(0.0, 0.0)));
    assert!(ends.contains(&point(200.0, 100.0)));
}

#[test]
fn lines() {
    let mut ctx = context();
    ctx.abs_hline(10.0, 10.0, 50.0, 1.0, Color::BLACK);
    ctx.abs_vline(10.0, 10.0, 50.0, 1.0, Color::BLACK);

    match &ctx.ops()[..] {
        [DrawOp::Stroke { path: h, .. }, DrawOp::Stroke { path: v, width, .. }] => {
            assert_eq!(h.last_point(), Some(point(60.0, 10.0)));
            assert_eq!(v.last_point(), Some(point(10.0, 60.0)));
            assert_eq!(*width, 1.0);
        }
        ops => panic!("unexpected {:?}", ops),
    }
}

#[test]
fn arcs() {
    let mut ctx = context();
    ctx.abs_arc(50.0, 50.0, 20.0, Angle::zero(), Angle::frac_pi_2(), Color::BLACK);
    ctx.abs_arc_line(50.0, 50.0, 20.0, Angle::zero(), Angle::frac_pi_2(), 2.0, Color::BLACK);

    match &ctx.ops()[..] {
        [DrawOp::Fill { path: pie, .. }, DrawOp::Stroke { path: open, .. }] => {
            assert_eq!(pie.first_point(), Some(point(50.0, 50.0)));
            assert!(pie.is_closed());
            assert_eq!(open.first_point(), Some(point(70.0, 50.0)));
            assert!(!open.is_closed());
        }
        ops => panic!("unexpected {:?}", ops),
    }
}

#[test]
fn curves() {
    let mut ctx = context();
    ctx.abs_quad_curve(0.0, 0.0, 5.0, 10.0, 10.0, 0.0, Color::BLACK);
    ctx.abs_quad_stroked_curve(0.0, 0.0, 5.0, 10.0, 10.0, 0.0, 1.0, Color::BLACK);
    ctx.abs_cubic_curve(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, Color::BLACK);
    ctx.abs_cubic_stroked_curve(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, 1.0, Color::BLACK);

    let closed: Vec<bool> = ctx
        .ops()
        .iter()
        .map(|op| match op {
            DrawOp::Fill { path, .. } | DrawOp::Stroke { path, .. } => path.is_closed(),
            _ => panic!("unexpected {:?}", op),
        })
        .collect();
    assert_eq!(closed, vec![true, false, true, false]);
}

#[cfg(test)]
#[test_log::test]
fn polygon_input_is_checked() {
    let mut ctx = context();
    assert_eq!(
        ctx.abs_polygon(&[0.0, 1.0], &[0.0], Color::BLACK),
        Err(GeometryError::MismatchedCoordinates { xs: 2, ys: 1 })
    );
    assert_eq!(
        ctx.abs_polygon(&[], &[], Color::BLACK),
        Err(GeometryError::TooFewPoints { count: 0, min: 1 })
    );
    assert!(ctx.ops().is_empty());

    ctx.abs_polygon(&[0.0, 10.0], &[0.0, 10.0], Color::BLACK).unwrap();
    assert_eq!(
        fills(&ctx)[0].segments(),
        &[
            PathSegment::MoveTo(point(0.0, 0.0)),
            PathSegment::LineTo(point(10.0, 10.0)),
            PathSegment::LineTo(point(0.0, 0.0)),
            PathSegment::Close,
        ][..]
    );
}

#[test]
fn text_alignment() {
    let mut ctx = context();
    assert_eq!(
        ctx.abs_text_mid(100.0, 50.0, 10.0, "abcd", Color::BLACK),
        Err(CanvasError::MissingTextLayout)
    );
    assert!(ctx.ops().is_empty());

    ctx.set_text_layout(Box::new(|_: FaceId, size: f32, text: &str| {
        size * text.len() as f32
    }));
    ctx.abs_text(100.0, 50.0, 10.0, "abcd", Color::BLACK).unwrap();
    ctx.abs_text_mid(100.0, 50.0, 10.0, "abcd", Color::BLACK).unwrap();
    ctx.abs_text_end(100.0, 50.0, 10.0, "abcd", Color::BLACK).unwrap();
    ctx.abs_text_wrap(100.0, 50.0, 10.0, 30.0, "abcd", Color::BLACK).unwrap();

    let runs: Vec<_> = ctx
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text(run) => Some(run.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(runs[0].origin, point(100.0, 40.0));
    assert_eq!(runs[1].origin, point(80.0, 40.0));
    assert_eq!(runs[2].origin, point(60.0, 40.0));
    assert_eq!(runs[3].origin, point(100.0, 40.0));
    assert_eq!(runs[3].wrap_width, Some(30.0));
    assert_eq!(runs[2].alignment, Alignment::End);
}

#[test]
fn images() {
    let mut ctx = context();
    ctx.abs_image("logo.png", 100.0, 50.0, 40, 20, 50.0);
    ctx.abs_img(ImageKey(7), 100.0, 50.0, size(40.0, 20.0), 100.0);

    match &ctx.ops()[..] {
        [DrawOp::Image(named), DrawOp::Image(decoded)] => {
            assert_eq!(named.source, ImageSource::Named("logo.png".to_string()));
            assert_eq!(
                named.placement.rect,
                Box2D::new(point(90.0, 45.0), point(110.0, 55.0))
            );
            assert_eq!(decoded.source, ImageSource::Decoded(ImageKey(7)));
            assert_eq!(decoded.placement.rect.width(), 40.0);
        }
        ops => panic!("unexpected {:?}", ops),
    }
}

#[cfg(test)]
#[test_log::test]
fn grid() {
    let mut ctx = context();
    ctx.abs_grid(0.0, 0.0, 100.0, 50.0, 1.0, 25.0, Color::BLACK).unwrap();
    // 5 vertical and 3 horizontal lines.
    assert_eq!(ctx.ops().len(), 8);

    assert_eq!(
        ctx.abs_grid(0.0, 0.0, 100.0, 50.0, 1.0, 0.0, Color::BLACK),
        Err(CanvasError::Geometry(GeometryError::InvalidInterval(0.0)))
    );
    assert!(ctx
        .abs_grid(0.0, 0.0, 100.0, 50.0, 1.0, f32::NAN, Color::BLACK)
        .is_err());
    assert_eq!(ctx.ops().len(), 8);
}
