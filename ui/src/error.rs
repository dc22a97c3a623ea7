//! Error taxonomy for building the dashboard document.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// The page was assembled from inconsistent parts (wrong chart count,
    /// unknown selection, ...). Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("malformed series '{series}': {reason}")]
    MalformedSeries { series: String, reason: String },
    #[error("invalid highlight band [{start}, {end}): {reason}")]
    InvalidBand {
        start: f64,
        end: f64,
        reason: &'static str,
    },
    #[error("locale '{tag}' unavailable: {reason}")]
    Locale { tag: String, reason: String },
}

impl DashboardError {
    pub(crate) fn malformed(series: &str, reason: impl Into<String>) -> Self {
        Self::MalformedSeries {
            series: series.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
