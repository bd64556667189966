//! Drawing primitives in percentage space.
//!
//! Both axes go from 0 to 100 with the origin at the bottom-left corner of the
//! surface. Every primitive maps its position and size arguments to device units
//! and delegates to its `abs_` counterpart.
//!
//! Horizontal magnitudes (widths, circle radii) are relative to the width of the
//! surface. Vertical magnitudes (heights, font and stroke sizes, square sides)
//! are relative to its height.

use crate::geom;
use crate::math::{Angle, Point, Size};
use crate::path::shapes::{add_polygon, polygon_points};
use crate::path::{GeometryResult, Path};
use crate::{CanvasResult, Color, DrawContext, ImageKey};

impl DrawContext {
    #[inline]
    fn pct_w(&self, m: f32) -> f32 {
        self.surface.percent_space().width_extent(m)
    }

    #[inline]
    fn pct_h(&self, m: f32) -> f32 {
        self.surface.percent_space().height_extent(m)
    }

    /// Strokes a line from `(x1, y1)` to `(x2, y2)`.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, size: f32, color: Color) {
        let from = self.device_point(x1, y1);
        let to = self.device_point(x2, y2);
        let size = self.pct_h(size);
        self.abs_line(from.x, from.y, to.x, to.y, size, color);
    }

    /// Strokes a horizontal line going right from `(x, y)`.
    pub fn hline(&mut self, x: f32, y: f32, length: f32, size: f32, color: Color) {
        let p = self.device_point(x, y);
        let (length, size) = (self.pct_w(length), self.pct_h(size));
        self.abs_hline(p.x, p.y, length, size, color);
    }

    /// Strokes a vertical line going up from `(x, y)`.
    pub fn vline(&mut self, x: f32, y: f32, length: f32, size: f32, color: Color) {
        let p = self.device_point(x, y);
        let (length, size) = (self.pct_h(length), self.pct_h(size));
        self.abs_vline(p.x, p.y, -length, size, color);
    }

    /// Fills a rectangle with its top-left corner at `(x, y)`.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let p = self.device_point(x, y);
        let (w, h) = (self.pct_w(w), self.pct_h(h));
        self.abs_rect(p.x, p.y, w, h, color);
    }

    /// Fills a rectangle centered on `(x, y)`.
    pub fn center_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let p = self.device_point(x, y);
        let (w, h) = (self.pct_w(w), self.pct_h(h));
        self.abs_center_rect(p.x, p.y, w, h, color);
    }

    /// Fills a square centered on `(x, y)`.
    ///
    /// The side is relative to the height of the surface.
    pub fn square(&mut self, x: f32, y: f32, side: f32, color: Color) {
        let p = self.device_point(x, y);
        let side = self.pct_h(side);
        self.abs_square(p.x, p.y, side, color);
    }

    /// Fills a circle. The radius is relative to the width of the surface.
    pub fn circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        let p = self.device_point(x, y);
        let radius = self.pct_w(radius);
        self.abs_circle(p.x, p.y, radius, color);
    }

    /// Fills an axis-aligned ellipse with radii `w` and `h`.
    pub fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let p = self.device_point(x, y);
        let (w, h) = (self.pct_w(w), self.pct_h(h));
        self.abs_ellipse(p.x, p.y, w, h, color);
    }

    /// Fills the pie slice between two angles, counter-clockwise.
    pub fn arc(&mut self, x: f32, y: f32, radius: f32, start: Angle, end: Angle, color: Color) {
        let p = self.device_point(x, y);
        let radius = self.pct_w(radius);
        self.abs_arc(p.x, p.y, radius, -start, -end, color);
    }

    /// Strokes the arc between two angles, counter-clockwise.
    pub fn arc_line(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start: Angle,
        end: Angle,
        size: f32,
        color: Color,
    ) {
        let p = self.device_point(x, y);
        let (radius, size) = (self.pct_w(radius), self.pct_h(size));
        self.abs_arc_line(p.x, p.y, radius, -start, -end, size, color);
    }

    /// Fills the shape closed by a quadratic bézier curve.
    pub fn quad_curve(
        &mut self,
        x: f32,
        y: f32,
        cx: f32,
        cy: f32,
        ex: f32,
        ey: f32,
        color: Color,
    ) {
        let (from, ctrl, to) = (
            self.device_point(x, y),
            self.device_point(cx, cy),
            self.device_point(ex, ey),
        );
        self.abs_quad_curve(from.x, from.y, ctrl.x, ctrl.y, to.x, to.y, color);
    }

    pub fn quad_stroked_curve(
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
        let (from, ctrl, to) = (
            self.device_point(x, y),
            self.device_point(cx, cy),
            self.device_point(ex, ey),
        );
        let size = self.pct_h(size);
        self.abs_quad_stroked_curve(from.x, from.y, ctrl.x, ctrl.y, to.x, to.y, size, color);
    }

    /// Fills the shape closed by a cubic bézier curve.
    pub fn cubic_curve(
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
        let (from, c1, c2, to) = (
            self.device_point(x, y),
            self.device_point(cx1, cy1),
            self.device_point(cx2, cy2),
            self.device_point(ex, ey),
        );
        self.abs_cubic_curve(from.x, from.y, c1.x, c1.y, c2.x, c2.y, to.x, to.y, color);
    }

    pub fn cubic_stroked_curve(
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
        let (from, c1, c2, to) = (
            self.device_point(x, y),
            self.device_point(cx1, cy1),
            self.device_point(cx2, cy2),
            self.device_point(ex, ey),
        );
        let size = self.pct_h(size);
        self.abs_cubic_stroked_curve(
            from.x, from.y, c1.x, c1.y, c2.x, c2.y, to.x, to.y, size, color,
        );
    }

    /// Fills a polygon of at least three points given parallel lists of
    /// coordinates.
    ///
    /// Nothing is drawn if the input is rejected.
    pub fn polygon(&mut self, xs: &[f32], ys: &[f32], color: Color) -> GeometryResult<()> {
        let points = polygon_points(xs, ys, 3)?;
        let space = self.surface.percent_space();

        let mut builder = Path::builder();
        let device: Vec<Point> = points.iter().map(|p| space.point(p.x, p.y)).collect();
        add_polygon(&mut builder, &device);
        self.fill(builder.build(), color);

        Ok(())
    }

    /// Draws text starting at `(x, y)`, the top of the text.
    pub fn text(&mut self, x: f32, y: f32, size: f32, s: &str, color: Color) -> CanvasResult {
        let p = self.device_point(x, y);
        let size = self.pct_h(size);
        self.abs_text(p.x, p.y, size, s, color)
    }

    /// Draws text centered on `x`.
    pub fn text_mid(&mut self, x: f32, y: f32, size: f32, s: &str, color: Color) -> CanvasResult {
        let p = self.device_point(x, y);
        let size = self.pct_h(size);
        self.abs_text_mid(p.x, p.y, size, s, color)
    }

    /// Draws text ending at `x`.
    pub fn text_end(&mut self, x: f32, y: f32, size: f32, s: &str, color: Color) -> CanvasResult {
        let p = self.device_point(x, y);
        let size = self.pct_h(size);
        self.abs_text_end(p.x, p.y, size, s, color)
    }

    /// Draws text starting at `(x, y)`, wrapped at `width`.
    pub fn text_wrap(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        width: f32,
        s: &str,
        color: Color,
    ) -> CanvasResult {
        let p = self.device_point(x, y);
        let (size, width) = (self.pct_h(size), self.pct_w(width));
        self.abs_text_wrap(p.x, p.y, size, width, s, color)
    }

    /// Draws the named image file centered on `(x, y)`.
    ///
    /// `w` and `h` are the pixel size of the image and `scale` a percentage of it.
    pub fn image(&mut self, name: &str, x: f32, y: f32, w: u32, h: u32, scale: f32) {
        let p = self.device_point(x, y);
        self.abs_image(name, p.x, p.y, w, h, scale);
    }

    /// Draws a decoded image centered on `(x, y)`.
    pub fn img(&mut self, key: ImageKey, x: f32, y: f32, pixel_size: Size, scale: f32) {
        let p = self.device_point(x, y);
        self.abs_img(key, p.x, p.y, pixel_size, scale);
    }

    /// Strokes a grid covering the rectangle with its bottom-left corner at
    /// `(left, bottom)`, with a line every `interval` percent.
    pub fn grid(
        &mut self,
        left: f32,
        bottom: f32,
        width: f32,
        height: f32,
        size: f32,
        interval: f32,
        color: Color,
    ) -> CanvasResult {
        crate::abs::check_interval(interval)?;

        for x in crate::abs::grid_steps(left, width, interval) {
            self.line(x, bottom, x, bottom + height, size, color);
        }
        for y in crate::abs::grid_steps(bottom, height, interval) {
            self.line(left, y, left + width, y, size, color);
        }

        Ok(())
    }

    /// Marks the point `(x, y)` with a dot and its coordinates.
    ///
    /// The coordinates are written centered above the dot, and `label` above them
    /// in the text color of the surface.
    pub fn coord(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        label: Option<&str>,
        color: Color,
    ) -> CanvasResult {
        self.circle(x, y, size / 4.0, color);
        self.text_mid(x, y + size, size, &format!("({}, {})", x, y), color)?;
        if let Some(label) = label {
            let text_color = self.surface.text_color;
            self.text_mid(x, y + size * 2.2, size * 1.2, label, text_color)?;
        }

        Ok(())
    }

    /// Returns the percentage point at `angle` on a circle around `(x, y)`.
    ///
    /// The y offset is corrected by the aspect ratio of the surface so that points
    /// at a fixed radius look circular.
    pub fn polar(&self, x: f32, y: f32, radius: f32, angle: Angle) -> Point {
        geom::polar(crate::math::point(x, y), radius, angle, self.surface.aspect_ratio())
    }

    /// Same as `polar` with an angle in degrees.
    pub fn polar_degrees(&self, x: f32, y: f32, radius: f32, degrees: f32) -> Point {
        geom::polar_degrees(crate::math::point(x, y), radius, degrees, self.surface.aspect_ratio())
    }
}

#[cfg(test)]
use crate::math::{point, size};
#[cfg(test)]
use crate::path::GeometryError;
#[cfg(test)]
use crate::{CanvasError, DrawOp, FaceId, Surface};

#[cfg(test)]
fn pair() -> (DrawContext, DrawContext) {
    let surface = Surface::new(1000.0, 800.0);
    (DrawContext::new(surface), DrawContext::new(surface))
}

#[test]
fn shapes_match_absolute_mirror() {
    let (mut pct, mut abs) = pair();

    pct.circle(50.0, 50.0, 10.0, Color::BLACK);
    abs.abs_circle(500.0, 400.0, 100.0, Color::BLACK);

    pct.ellipse(25.0, 75.0, 10.0, 10.0, Color::BLACK);
    abs.abs_ellipse(250.0, 200.0, 100.0, 80.0, Color::BLACK);

    pct.rect(10.0, 90.0, 20.0, 10.0, Color::BLACK);
    abs.abs_rect(100.0, 80.0, 200.0, 80.0, Color::BLACK);

    pct.center_rect(50.0, 50.0, 20.0, 10.0, Color::BLACK);
    abs.abs_center_rect(500.0, 400.0, 200.0, 80.0, Color::BLACK);

    pct.square(50.0, 50.0, 10.0, Color::BLACK);
    abs.abs_square(500.0, 400.0, 80.0, Color::BLACK);

    pct.line(0.0, 0.0, 100.0, 100.0, 1.0, Color::BLACK);
    abs.abs_line(0.0, 800.0, 1000.0, 0.0, 8.0, Color::BLACK);

    pct.quad_curve(0.0, 0.0, 50.0, 100.0, 100.0, 0.0, Color::BLACK);
    abs.abs_quad_curve(0.0, 800.0, 500.0, 0.0, 1000.0, 800.0, Color::BLACK);

    pct.cubic_stroked_curve(0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0, 1.0, Color::BLACK);
    abs.abs_cubic_stroked_curve(
        0.0, 800.0, 0.0, 0.0, 1000.0, 0.0, 1000.0, 800.0, 8.0, Color::BLACK,
    );

    assert_eq!(pct.ops(), abs.ops());
}

#[test]
fn lines_follow_y_up() {
    let (mut ctx, _) = pair();
    ctx.hline(10.0, 10.0, 50.0, 1.0, Color::BLACK);
    ctx.vline(10.0, 10.0, 50.0, 1.0, Color::BLACK);

    match &ctx.ops()[..] {
        [DrawOp::Stroke { path: h, .. }, DrawOp::Stroke { path: v, .. }] => {
            assert_eq!(h.first_point(), Some(point(100.0, 720.0)));
            assert_eq!(h.last_point(), Some(point(600.0, 720.0)));
            // Going up the surface is going toward device y = 0.
            assert_eq!(v.last_point(), Some(point(100.0, 320.0)));
        }
        ops => panic!("unexpected {:?}", ops),
    }
}

#[test]
fn arcs_are_counter_clockwise() {
    let (mut ctx, _) = pair();
    ctx.arc_line(50.0, 50.0, 10.0, Angle::zero(), Angle::frac_pi_2(), 1.0, Color::BLACK);

    match &ctx.ops()[0] {
        DrawOp::Stroke { path, .. } => {
            let end = path.last_point().unwrap();
            // A quarter turn counter-clockwise from the right ends at the top.
            assert!((end - point(500.0, 300.0)).length() < 1e-3, "{:?}", end);
        }
        op => panic!("unexpected {:?}", op),
    }

    ctx.arc(50.0, 50.0, 10.0, Angle::zero(), Angle::frac_pi_2(), Color::BLACK);
    match &ctx.ops()[1] {
        DrawOp::Fill { path, .. } => assert_eq!(path.first_point(), Some(point(500.0, 400.0))),
        op => panic!("unexpected {:?}", op),
    }
}

#[cfg(test)]
#[test_log::test]
fn polygon_needs_three_points() {
    let (mut ctx, _) = pair();
    assert_eq!(
        ctx.polygon(&[10.0, 20.0, 30.0], &[10.0, 20.0], Color::BLACK),
        Err(GeometryError::MismatchedCoordinates { xs: 3, ys: 2 })
    );
    assert_eq!(
        ctx.polygon(&[10.0, 20.0], &[10.0, 20.0], Color::BLACK),
        Err(GeometryError::TooFewPoints { count: 2, min: 3 })
    );
    assert!(ctx.ops().is_empty());

    ctx.polygon(&[0.0, 100.0, 100.0], &[0.0, 0.0, 100.0], Color::BLACK)
        .unwrap();
    match &ctx.ops()[0] {
        DrawOp::Fill { path, .. } => {
            let ends: Vec<_> = path.iter().filter_map(|s| s.to()).collect();
            assert_eq!(
                ends,
                vec![
                    point(0.0, 800.0),
                    point(1000.0, 800.0),
                    point(1000.0, 0.0),
                    point(0.0, 800.0)
                ]
            );
            assert!(path.is_closed());
        }
        op => panic!("unexpected {:?}", op),
    }
}

#[test]
fn text_is_mapped() {
    let (mut ctx, _) = pair();
    ctx.text(10.0, 50.0, 5.0, "hello", Color::BLACK).unwrap();
    ctx.text_wrap(10.0, 50.0, 5.0, 50.0, "hello", Color::BLACK).unwrap();

    match &ctx.ops()[..] {
        [DrawOp::Text(run), DrawOp::Text(wrapped)] => {
            assert_eq!(run.size, 40.0);
            assert_eq!(run.origin, point(100.0, 360.0));
            assert_eq!(wrapped.wrap_width, Some(500.0));
        }
        ops => panic!("unexpected {:?}", ops),
    }
}

#[test]
fn coord_marks_point() {
    let surface = Surface::new(1000.0, 800.0).with_text_color(Color::rgb(1, 2, 3));
    let mut ctx = DrawContext::new(surface);
    assert_eq!(
        ctx.coord(50.0, 50.0, 4.0, None, Color::BLACK),
        Err(CanvasError::MissingTextLayout)
    );

    let mut ctx = DrawContext::new(surface);
    ctx.set_text_layout(Box::new(|_: FaceId, _: f32, _: &str| 0.0));
    ctx.coord(50.0, 50.0, 4.0, Some("center"), Color::BLACK).unwrap();

    match &ctx.ops()[..] {
        [DrawOp::Fill { .. }, DrawOp::Text(coords), DrawOp::Text(label)] => {
            assert_eq!(coords.text, "(50, 50)");
            assert_eq!(coords.color, Color::BLACK);
            assert_eq!(label.text, "center");
            assert_eq!(label.color, Color::rgb(1, 2, 3));
            assert!(label.origin.y < coords.origin.y);
        }
        ops => panic!("unexpected {:?}", ops),
    }
}

#[test]
fn images_are_centered_on_mapped_point() {
    let (mut ctx, _) = pair();
    ctx.image("a.png", 50.0, 50.0, 100, 100, 100.0);
    ctx.img(ImageKey(1), 50.0, 50.0, size(100.0, 100.0), 100.0);

    for op in ctx.ops() {
        match op {
            DrawOp::Image(image) => assert_eq!(image.placement.rect.center(), point(500.0, 400.0)),
            op => panic!("unexpected {:?}", op),
        }
    }
}

#[test]
fn grid_lines() {
    let (mut ctx, _) = pair();
    ctx.grid(0.0, 0.0, 100.0, 100.0, 0.1, 10.0, Color::BLACK).unwrap();
    assert_eq!(ctx.ops().len(), 22);
    assert_eq!(
        ctx.grid(0.0, 0.0, 100.0, 100.0, 0.1, -1.0, Color::BLACK),
        Err(CanvasError::Geometry(GeometryError::InvalidInterval(-1.0)))
    );
}

#[test]
fn polar_is_aspect_corrected() {
    let (ctx, _) = pair();
    let p = ctx.polar(50.0, 50.0, 10.0, Angle::frac_pi_2());
    let q = ctx.polar_degrees(50.0, 50.0, 10.0, 0.0);
    assert!((p - point(50.0, 62.5)).length() < 1e-4);
    assert_eq!(q, point(60.0, 50.0));

    // Both points are 100 device units away from the center.
    let space = ctx.surface().percent_space();
    let center = space.point(50.0, 50.0);
    assert!(((space.point(p.x, p.y) - center).length() - 100.0).abs() < 1e-2);
    assert!(((space.point(q.x, q.y) - center).length() - 100.0).abs() < 1e-2);
}

#[test]
fn polar_on_zero_height_surface() {
    // A minimized window.
    let mut ctx = DrawContext::new(Surface::new(800.0, 0.0));
    assert_eq!(ctx.surface().aspect_ratio(), 1.0);

    for &deg in &[0.0, 90.0, 180.0, 270.0] {
        let p = ctx.polar_degrees(50.0, 50.0, 30.0, deg);
        assert!(p.x.is_finite() && p.y.is_finite(), "{:?} at {}", p, deg);
        ctx.circle(p.x, p.y, 2.0, Color::BLACK);
    }

    assert_eq!(ctx.ops().len(), 4);
    for op in ctx.ops() {
        match op {
            DrawOp::Fill { path, .. } => {
                for p in path.iter().filter_map(|s| s.to()) {
                    assert!(p.x.is_finite() && p.y.is_finite());
                }
            }
            op => panic!("unexpected {:?}", op),
        }
    }
}
