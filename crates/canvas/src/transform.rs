//! The transform stack.
//!
//! Transforms nest: the most recently pushed one applies first to the positions
//! of subsequent operations. Popping restores the exact previous state.
//!
//! There are two ways to scope a transform:
//!
//! - `DrawContext::scoped` and the helpers built on it (`rotate`, `abs_scale`...)
//!   return a [TransformGuard](struct.TransformGuard.html) which pops the transform
//!   when dropped, including on early returns.
//! - `DrawContext::push_transform` returns a [TransformHandle](struct.TransformHandle.html)
//!   that must be given back to `DrawContext::end_transform`. The depth of the
//!   stack is checked so that out of order pops are reported instead of silently
//!   corrupting the stack.

use crate::geom::transform::{compose, rotation_about, scale_about, shear_about, translation};
use crate::math::{vector, Angle, Transform};
use crate::{DrawContext, DrawOp, TransformError};

use std::ops::{Deref, DerefMut};

/// Proof of a transform push, to be given back to `DrawContext::end_transform`.
#[must_use = "the transform must be popped with DrawContext::end_transform"]
#[derive(Debug, PartialEq, Eq)]
pub struct TransformHandle {
    depth: usize,
}

impl TransformHandle {
    /// The depth of the stack right after the push.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Pops its transform when dropped.
///
/// Dereferences to the drawing context so that drawing continues through the
/// guard.
pub struct TransformGuard<'l> {
    ctx: &'l mut DrawContext,
    handle: Option<TransformHandle>,
}

impl<'l> TransformGuard<'l> {
    /// Pops the transform now.
    pub fn end(mut self) -> Result<(), TransformError> {
        match self.handle.take() {
            Some(handle) => self.ctx.end_transform(handle),
            None => Ok(()),
        }
    }
}

impl<'l> Deref for TransformGuard<'l> {
    type Target = DrawContext;
    fn deref(&self) -> &DrawContext {
        self.ctx
    }
}

impl<'l> DerefMut for TransformGuard<'l> {
    fn deref_mut(&mut self) -> &mut DrawContext {
        self.ctx
    }
}

impl<'l> Drop for TransformGuard<'l> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.ctx.end_transform(handle) {
                log::warn!("transform guard could not pop: {}", e);
            }
        }
    }
}

impl DrawContext {
    /// Pushes a transform in device space.
    pub fn push_transform(&mut self, transform: Transform) -> TransformHandle {
        if self.options.invalidate_on_push {
            self.ops.push(DrawOp::Invalidate);
        }

        let current = compose(&transform, &self.current_transform());
        self.transforms.push(current);
        self.ops.push(DrawOp::PushTransform(transform));

        log::trace!("push transform (depth {}): {:?}", self.transforms.len(), transform);

        TransformHandle {
            depth: self.transforms.len(),
        }
    }

    /// Pops the transform pushed by the call that returned `handle`.
    ///
    /// The handle must belong to the innermost transform.
    pub fn end_transform(&mut self, handle: TransformHandle) -> Result<(), TransformError> {
        let depth = self.transforms.len();
        if depth == 0 {
            log::warn!("end_transform called on an empty stack");
            return Err(TransformError::Empty);
        }
        if handle.depth != depth {
            log::warn!(
                "end_transform out of order (stack depth {}, handle depth {})",
                depth,
                handle.depth
            );
            return Err(TransformError::OutOfOrder {
                expected: depth,
                found: handle.depth,
            });
        }

        self.transforms.pop();
        self.ops.push(DrawOp::PopTransform);

        log::trace!("pop transform (depth {})", self.transforms.len());

        Ok(())
    }

    /// Pushes a transform that is popped when the returned guard is dropped.
    pub fn scoped(&mut self, transform: Transform) -> TransformGuard {
        let handle = self.push_transform(transform);
        TransformGuard {
            ctx: self,
            handle: Some(handle),
        }
    }

    /// Runs `f` with a transform pushed.
    pub fn with_transform<R>(
        &mut self,
        transform: Transform,
        f: impl FnOnce(&mut DrawContext) -> R,
    ) -> R {
        let mut guard = self.scoped(transform);
        f(&mut guard)
    }

    /// Translates subsequent drawing by `(dx, dy)` device units.
    pub fn abs_translate(&mut self, dx: f32, dy: f32) -> TransformGuard {
        self.scoped(translation(vector(dx, dy)))
    }

    /// Rotates subsequent drawing around the device point `(x, y)`.
    ///
    /// Positive angles appear clockwise since the y axis points down.
    pub fn abs_rotate(&mut self, x: f32, y: f32, angle: Angle) -> TransformGuard {
        self.scoped(rotation_about(crate::math::point(x, y), angle))
    }

    /// Scales subsequent drawing uniformly around the device point `(x, y)`.
    pub fn abs_scale(&mut self, x: f32, y: f32, factor: f32) -> TransformGuard {
        self.scoped(scale_about(crate::math::point(x, y), factor))
    }

    /// Shears subsequent drawing around the device point `(x, y)`.
    pub fn abs_shear(&mut self, x: f32, y: f32, angle_x: Angle, angle_y: Angle) -> TransformGuard {
        self.scoped(shear_about(crate::math::point(x, y), angle_x, angle_y))
    }

    /// Translates subsequent drawing by a percentage of the surface size.
    ///
    /// Positive `dy` moves up.
    pub fn translate(&mut self, dx: f32, dy: f32) -> TransformGuard {
        let space = self.surface.percent_space();
        let offset = vector(space.width_extent(dx), -space.height_extent(dy));
        self.scoped(translation(offset))
    }

    /// Rotates subsequent drawing around the percentage point `(x, y)`.
    ///
    /// Positive angles are counter-clockwise, matching the y-up convention.
    pub fn rotate(&mut self, x: f32, y: f32, angle: Angle) -> TransformGuard {
        let pivot = self.device_point(x, y);
        self.scoped(rotation_about(pivot, -angle))
    }

    /// Scales subsequent drawing uniformly around the percentage point `(x, y)`.
    pub fn scale(&mut self, x: f32, y: f32, factor: f32) -> TransformGuard {
        let pivot = self.device_point(x, y);
        self.scoped(scale_about(pivot, factor))
    }

    /// Shears subsequent drawing around the percentage point `(x, y)`.
    ///
    /// Angles follow the y-up convention, like `rotate`.
    pub fn shear(&mut self, x: f32, y: f32, angle_x: Angle, angle_y: Angle) -> TransformGuard {
        let pivot = self.device_point(x, y);
        self.scoped(shear_about(pivot, -angle_x, -angle_y))
    }
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::{Color, Surface};

#[cfg(test)]
fn context() -> DrawContext {
    DrawContext::new(Surface::new(1000.0, 800.0))
}

#[test]
fn nested_pushes_restore_state() {
    let mut ctx = context();
    let before = ctx.current_transform();

    let t1 = ctx.push_transform(Transform::translation(10.0, 0.0));
    let t2 = ctx.push_transform(Transform::scale(2.0, 2.0));
    assert_eq!(ctx.depth(), 2);
    // The innermost transform applies first.
    assert_eq!(
        ctx.current_transform().transform_point(point(1.0, 1.0)),
        point(12.0, 2.0)
    );

    ctx.end_transform(t2).unwrap();
    assert_eq!(ctx.current_transform(), Transform::translation(10.0, 0.0));
    ctx.end_transform(t1).unwrap();

    assert_eq!(ctx.depth(), 0);
    assert_eq!(ctx.current_transform(), before);
    assert_eq!(
        ctx.ops(),
        &[
            DrawOp::Invalidate,
            DrawOp::PushTransform(Transform::translation(10.0, 0.0)),
            DrawOp::Invalidate,
            DrawOp::PushTransform(Transform::scale(2.0, 2.0)),
            DrawOp::PopTransform,
            DrawOp::PopTransform,
        ][..]
    );
}

#[test]
fn out_of_order_pop_is_rejected() {
    let mut ctx = context();
    let t1 = ctx.push_transform(Transform::translation(1.0, 0.0));
    let t2 = ctx.push_transform(Transform::translation(2.0, 0.0));

    assert_eq!(
        ctx.end_transform(t1),
        Err(TransformError::OutOfOrder {
            expected: 2,
            found: 1
        })
    );
    // The stack is untouched.
    assert_eq!(ctx.depth(), 2);

    ctx.end_transform(t2).unwrap();
    assert_eq!(ctx.depth(), 1);
}

#[cfg(test)]
#[test_log::test]
fn pop_on_empty_stack() {
    let mut ctx = context();
    let handle = ctx.push_transform(Transform::identity());
    ctx.transforms.clear();
    assert_eq!(ctx.end_transform(handle), Err(TransformError::Empty));
}

#[test]
fn guard_pops_on_drop() {
    let mut ctx = context();
    {
        let mut guard = ctx.abs_translate(5.0, 5.0);
        assert_eq!(guard.depth(), 1);
        {
            let mut inner = guard.abs_scale(0.0, 0.0, 3.0);
            assert_eq!(inner.depth(), 2);
            inner.abs_circle(0.0, 0.0, 1.0, Color::BLACK);
        }
        assert_eq!(guard.depth(), 1);
    }
    assert_eq!(ctx.depth(), 0);
    assert_eq!(ctx.current_transform(), Transform::identity());
}

#[test]
fn guard_pops_on_early_return() {
    fn draw(ctx: &mut DrawContext, bail: bool) -> Result<(), ()> {
        let mut guard = ctx.rotate(50.0, 50.0, Angle::degrees(45.0));
        if bail {
            return Err(());
        }
        guard.circle(50.0, 50.0, 5.0, Color::BLACK);
        Ok(())
    }

    let mut ctx = context();
    assert!(draw(&mut ctx, true).is_err());
    assert_eq!(ctx.depth(), 0);
    assert!(draw(&mut ctx, false).is_ok());
    assert_eq!(ctx.depth(), 0);
    assert_eq!(*ctx.ops().last().unwrap(), DrawOp::PopTransform);
}

#[test]
fn guard_end() {
    let mut ctx = context();
    let guard = ctx.scoped(Transform::translation(1.0, 1.0));
    guard.end().unwrap();
    assert_eq!(ctx.depth(), 0);

    let count = ctx.with_transform(Transform::scale(2.0, 2.0), |ctx| {
        ctx.abs_circle(1.0, 1.0, 1.0, Color::BLACK);
        ctx.depth()
    });
    assert_eq!(count, 1);
    assert_eq!(ctx.depth(), 0);
}

#[cfg(test)]
#[test_log::test]
fn finish_with_pushed_transform_fails() {
    let mut ctx = context();
    let _handle = ctx.push_transform(Transform::identity());
    assert_eq!(ctx.finish().unwrap_err(), TransformError::Unbalanced(1));
}

#[test]
fn percentage_transforms() {
    let mut ctx = context();
    {
        let guard = ctx.translate(10.0, 10.0);
        let p = guard.current_transform().transform_point(point(0.0, 0.0));
        assert!((p - point(100.0, -80.0)).length() < 1e-3);
    }
    {
        // A quarter turn counter-clockwise around the center of the surface.
        let guard = ctx.rotate(50.0, 50.0, Angle::degrees(90.0));
        let p = guard.current_transform().transform_point(point(600.0, 400.0));
        assert!((p - point(500.0, 300.0)).length() < 1e-3);
    }
    {
        let guard = ctx.scale(50.0, 50.0, 2.0);
        let p = guard.current_transform().transform_point(point(510.0, 400.0));
        assert!((p - point(520.0, 400.0)).length() < 1e-3);
    }
    {
        // Vertical lines lean right going up.
        let guard = ctx.shear(0.0, 0.0, Angle::degrees(45.0), Angle::zero());
        let p = guard.current_transform().transform_point(point(0.0, 700.0));
        assert!((p - point(100.0, 700.0)).length() < 1e-2);
    }
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn invalidation_can_be_disabled() {
    let options = crate::CanvasOptions::DEFAULT.with_invalidation(false);
    let mut ctx = DrawContext::with_options(Surface::new(10.0, 10.0), options);
    ctx.abs_translate(1.0, 1.0).end().unwrap();
    assert_eq!(
        ctx.ops(),
        &[
            DrawOp::PushTransform(Transform::translation(1.0, 1.0)),
            DrawOp::PopTransform,
        ][..]
    );
}
