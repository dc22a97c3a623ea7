//! Data model shared by the chart builders and the page composer.

pub mod format;
pub mod sample;
pub mod series;
pub mod settings;

pub use series::{HighlightBand, Point, Series};
pub use settings::PageSettings;
