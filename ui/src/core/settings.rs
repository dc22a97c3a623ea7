//! Build-time settings for the dashboard page.

use crate::core::sample::{DATA_PATHS, SAMPLE_BAND};

/// Inputs to [`crate::page::build_page_with`]. `Default` reproduces the
/// stock PHM page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Fluent locale tag for every visible string.
    pub locale: String,
    pub band_start: f64,
    pub band_end: f64,
    /// `(label, value)` pairs for the data path dropdown.
    pub data_paths: Vec<(String, String)>,
    pub selected_path: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            locale: crate::i18n::FALLBACK_LANGUAGE.to_string(),
            band_start: SAMPLE_BAND.0,
            band_end: SAMPLE_BAND.1,
            data_paths: DATA_PATHS
                .iter()
                .map(|(label, value)| (label.to_string(), value.to_string()))
                .collect(),
            selected_path: DATA_PATHS[0].1.to_string(),
        }
    }
}
