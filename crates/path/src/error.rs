use thiserror::Error;

/// The result type of operations that validate their geometric input.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Rejected geometric input.
///
/// Nothing is drawn when one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("mismatched coordinates: {xs} x values for {ys} y values")]
    MismatchedCoordinates { xs: usize, ys: usize },
    #[error("too few points: got {count}, need at least {min}")]
    TooFewPoints { count: usize, min: usize },
    #[error("invalid interval: {0}")]
    InvalidInterval(f32),
}

#[test]
fn error_messages() {
    use std::string::ToString;

    assert_eq!(
        GeometryError::MismatchedCoordinates { xs: 3, ys: 2 }.to_string(),
        "mismatched coordinates: 3 x values for 2 y values"
    );
    assert_eq!(
        GeometryError::TooFewPoints { count: 2, min: 3 }.to_string(),
        "too few points: got 2, need at least 3"
    );
}
