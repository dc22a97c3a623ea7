//! Formatting helpers for axis bounds and captions.

/// Shortest exact rendering of a bound, without a trailing `.0` for whole
/// numbers (`3.0` -> `3`, `0.0001` -> `0.0001`).
pub fn format_bound(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Fixed two-decimal rendering used for SVG coordinates.
pub fn format_coord(value: f64) -> String {
    format!("{value:.2}")
}
