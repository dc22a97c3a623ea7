//! Numeric sample series and the highlighted sub-range drawn over them.

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A named, ordered run of samples plotted as a single trace.
///
/// Construction validates that the series is non-empty, that every value is
/// finite and that `x` is strictly increasing, so downstream renderers never
/// see a corrupted trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>, xs: &[f64], ys: &[f64]) -> Result<Self> {
        let name = name.into();
        if xs.len() != ys.len() {
            return Err(DashboardError::malformed(
                &name,
                format!("{} x values but {} y values", xs.len(), ys.len()),
            ));
        }
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point { x, y })
            .collect();
        Self::from_points(name, points)
    }

    pub fn from_points(name: impl Into<String>, points: Vec<Point>) -> Result<Self> {
        let name = name.into();
        if points.is_empty() {
            return Err(DashboardError::malformed(&name, "no samples"));
        }
        if let Some(idx) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(DashboardError::malformed(
                &name,
                format!("non-finite value at index {idx}"),
            ));
        }
        if let Some(idx) = points.windows(2).position(|w| w[1].x <= w[0].x) {
            return Err(DashboardError::malformed(
                &name,
                format!(
                    "x not strictly increasing at index {} ({} after {})",
                    idx + 1,
                    points[idx + 1].x,
                    points[idx].x
                ),
            ));
        }
        Ok(Self { name, points })
    }

    /// Same samples under a different trace name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: self.points.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Inclusive `(min, max)` of the x values.
    pub fn x_range(&self) -> (f64, f64) {
        let first = self.points.first().map_or(0.0, |p| p.x);
        let last = self.points.last().map_or(0.0, |p| p.x);
        (first, last)
    }

    /// Inclusive `(min, max)` of the y values.
    pub fn y_range(&self) -> (f64, f64) {
        self.points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            })
    }
}

/// Half-open interval `[start, end)` on the x-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightBand {
    start: f64,
    end: f64,
}

impl HighlightBand {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DashboardError::InvalidBand {
                start,
                end,
                reason: "bounds must be finite",
            });
        }
        if start >= end {
            return Err(DashboardError::InvalidBand {
                start,
                end,
                reason: "start must be below end",
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x < self.end
    }

    /// True when both bounds fall inside the series' x-range.
    pub fn within(&self, series: &Series) -> bool {
        let (lo, hi) = series.x_range();
        self.start >= lo && self.end <= hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let err = Series::new("s", &[1.0, 2.0], &[0.1]).unwrap_err();
        assert!(matches!(err, DashboardError::MalformedSeries { .. }));
    }

    #[test]
    fn rejects_empty_series() {
        assert!(Series::new("s", &[], &[]).is_err());
    }

    #[test]
    fn rejects_non_monotonic_x() {
        let err = Series::new("s", &[1.0, 3.0, 2.0], &[0.0, 0.0, 0.0]).unwrap_err();
        assert!(err.to_string().contains("index 2"));
        assert!(Series::new("s", &[1.0, 1.0], &[0.0, 0.0]).is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Series::new("s", &[1.0, 2.0], &[0.0, f64::NAN]).is_err());
    }

    #[test]
    fn ranges_follow_samples() {
        let s = Series::new("s", &[1.0, 2.0, 5.0], &[0.3, -0.1, 0.2]).unwrap();
        assert_eq!(s.x_range(), (1.0, 5.0));
        assert_eq!(s.y_range(), (-0.1, 0.3));
        assert_eq!(s.renamed("t").name(), "t");
    }

    #[test]
    fn band_is_half_open() {
        let band = HighlightBand::new(3.0, 6.0).unwrap();
        assert!(band.contains(3.0));
        assert!(band.contains(5.0));
        assert!(!band.contains(6.0));
        assert!(!band.contains(2.9));
    }

    #[test]
    fn band_requires_ordered_finite_bounds() {
        assert!(HighlightBand::new(6.0, 3.0).is_err());
        assert!(HighlightBand::new(3.0, 3.0).is_err());
        assert!(HighlightBand::new(f64::NEG_INFINITY, 3.0).is_err());
    }
}
