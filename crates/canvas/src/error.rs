use crate::path::GeometryError;

use thiserror::Error;

/// The result type of drawing calls that can reject their input.
pub type CanvasResult<T = ()> = Result<T, CanvasError>;

/// Misuse of the transform stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum TransformError {
    #[error("no transform to pop")]
    Empty,
    #[error("transform popped out of order: stack depth is {expected}, handle depth is {found}")]
    OutOfOrder { expected: usize, found: usize },
    #[error("{0} transform(s) still pushed at the end of the frame")]
    Unbalanced(usize),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CanvasError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("aligned text requires a text layout to measure it")]
    MissingTextLayout,
}
