//! Hard-coded placeholder data shown until a real data source is wired in.

use crate::core::series::Series;
use crate::error::Result;

/// Reading per sample index `1..=15`.
pub const SAMPLE_READINGS: [f64; 15] = [
    0.05, 0.08, 0.06, 0.10, 0.32, 0.30, 0.07, 0.12, 0.05, 0.02, 0.09, 0.03, 0.01, 0.05, 0.06,
];

pub const SAMPLE_BAND: (f64, f64) = (3.0, 6.0);

/// `(label, value)` pairs offered by the data path dropdown.
pub const DATA_PATHS: [(&str, &str); 2] = [
    (r"C:\Users\project\data1.csv", "data1.csv"),
    (r"C:\Users\project\data2.csv", "data2.csv"),
];

/// The placeholder readings indexed from 1.
pub fn sample_series(name: &str) -> Result<Series> {
    let xs: Vec<f64> = (1..=SAMPLE_READINGS.len()).map(|i| i as f64).collect();
    Series::new(name, &xs, &SAMPLE_READINGS)
}
