//! Builders turning sample series into chart configurations.

use crate::charts::config::{BandLayer, ChartConfig, DisplayOptions};
use crate::core::{HighlightBand, Series};

/// Plain line+marker chart of a single series.
pub struct ChartFactory;

impl ChartFactory {
    pub fn build(series: Series, title: impl Into<String>, options: DisplayOptions) -> ChartConfig {
        ChartConfig::new(title.into(), vec![series], options)
    }
}

/// The main chart: a [`ChartFactory`] chart with the sampling band drawn
/// beneath the trace across the full plot height.
pub struct MainChartBuilder;

impl MainChartBuilder {
    pub fn build_with_band(
        series: Series,
        title: impl Into<String>,
        band: HighlightBand,
        options: DisplayOptions,
    ) -> ChartConfig {
        if !band.within(&series) {
            let (lo, hi) = series.x_range();
            tracing::warn!(
                start = band.start(),
                end = band.end(),
                series_start = lo,
                series_end = hi,
                "sampling band extends past the series; it will be clipped"
            );
        }
        ChartFactory::build(series, title, options).with_band(BandLayer::sampling(band))
    }
}
