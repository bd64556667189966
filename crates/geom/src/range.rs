use num_traits::Float;

/// Linearly maps `value` from the range `[low1, high1]` to `[low2, high2]`.
///
/// Values outside of the input range are extrapolated. A degenerate input range
/// maps everything to `low2`.
///
/// ```
/// use pctdraw_geom::map_range;
///
/// assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(map_range(2020.0, 2000.0, 2040.0, 10.0, 90.0), 50.0);
/// ```
pub fn map_range<S: Float>(value: S, low1: S, high1: S, low2: S, high2: S) -> S {
    let span = high1 - low1;
    if span == S::zero() {
        return low2;
    }

    low2 + (high2 - low2) * ((value - low1) / span)
}

#[test]
fn map_range_inverted_output() {
    assert_eq!(map_range(0.0f32, 0.0, 10.0, 100.0, 0.0), 100.0);
    assert_eq!(map_range(10.0f32, 0.0, 10.0, 100.0, 0.0), 0.0);
    assert_eq!(map_range(15.0f64, 0.0, 10.0, 0.0, 100.0), 150.0);
}

#[test]
fn map_range_degenerate_input() {
    assert_eq!(map_range(3.0f32, 1.0, 1.0, 7.0, 9.0), 7.0);
}
