//! Page assembly: charts and widgets slotted into the layout tree.

use crate::charts::{ChartConfig, ChartFactory, DisplayOptions, MainChartBuilder};
use crate::core::sample::sample_series;
use crate::core::{HighlightBand, PageSettings};
use crate::error::{DashboardError, Result};
use crate::i18n::Localizer;
use crate::layout::{self, LayoutNode, Slot, SMALL_CHART_COUNT};
use crate::page::widgets::{
    DropdownOption, DropdownState, TextFieldState, DATA_PATH_DROPDOWN_ID, DIAGNOSIS_INPUT_ID,
};

pub const MAIN_CHART_ID: &str = "main-chart";

/// Everything needed to render the dashboard. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub locale: String,
    pub title: String,
    pub layout: LayoutNode,
    pub main_chart: ChartConfig,
    pub small_charts: Vec<ChartConfig>,
    pub dropdown: DropdownState,
    pub text_field: TextFieldState,
    /// Sampling-range caption derived from the main chart's band.
    pub caption: String,
}

impl Document {
    /// Chart shown in `slot`, with the DOM id it is mounted under.
    pub fn chart(&self, slot: Slot) -> Option<(String, &ChartConfig)> {
        match slot {
            Slot::MainChart => Some((MAIN_CHART_ID.to_string(), &self.main_chart)),
            Slot::SmallChart(idx) => self
                .small_charts
                .get(idx)
                .map(|chart| (format!("aux-chart-{idx}"), chart)),
            _ => None,
        }
    }
}

/// Combines the layout tree with chart configs and widget states.
pub struct PageRoot<'a> {
    l10n: &'a Localizer,
    layout: LayoutNode,
}

impl<'a> PageRoot<'a> {
    pub fn new(l10n: &'a Localizer) -> Self {
        Self {
            l10n,
            layout: layout::describe(),
        }
    }

    /// `charts` holds the main chart first, then the auxiliary charts in
    /// panel order.
    pub fn render(
        &self,
        charts: Vec<ChartConfig>,
        dropdown: DropdownState,
        text_field: TextFieldState,
    ) -> Result<Document> {
        let expected = 1 + SMALL_CHART_COUNT;
        if charts.len() != expected {
            return Err(DashboardError::Configuration(format!(
                "expected {expected} charts (1 main + {SMALL_CHART_COUNT} small), got {}",
                charts.len()
            )));
        }

        let mut charts = charts.into_iter();
        let Some(main_chart) = charts.next() else {
            return Err(DashboardError::Configuration("main chart missing".into()));
        };
        let small_charts: Vec<ChartConfig> = charts.collect();

        let caption = match main_chart.band() {
            Some(layer) => self.l10n.sampling_caption(&layer.band),
            None => {
                return Err(DashboardError::Configuration(
                    "main chart carries no sampling band".into(),
                ))
            }
        };

        Ok(Document {
            locale: self.l10n.language(),
            title: self.l10n.page_title(),
            layout: self.layout.clone(),
            main_chart,
            small_charts,
            dropdown,
            text_field,
            caption,
        })
    }
}

/// Build the stock dashboard.
pub fn build_page() -> Result<Document> {
    build_page_with(&PageSettings::default())
}

pub fn build_page_with(settings: &PageSettings) -> Result<Document> {
    let l10n = Localizer::new(&settings.locale)?;
    let band = HighlightBand::new(settings.band_start, settings.band_end)?;

    let mut charts = Vec::with_capacity(1 + SMALL_CHART_COUNT);
    charts.push(MainChartBuilder::build_with_band(
        sample_series(&l10n.main_series_name())?,
        l10n.main_chart_title(),
        band,
        DisplayOptions::main(),
    ));
    for title in l10n.auxiliary_titles() {
        let series = sample_series(&title)?;
        charts.push(ChartFactory::build(series, title, DisplayOptions::compact()));
    }

    let options = settings
        .data_paths
        .iter()
        .map(|(label, value)| DropdownOption {
            label: label.clone(),
            value: value.clone(),
        })
        .collect();
    let dropdown = DropdownState::new(
        DATA_PATH_DROPDOWN_ID,
        l10n.data_path_label(),
        options,
        settings.selected_path.clone(),
    )?;
    let text_field = TextFieldState::new(
        DIAGNOSIS_INPUT_ID,
        l10n.diagnosis_label(),
        l10n.diagnosis_placeholder(),
    );

    let document = PageRoot::new(&l10n).render(charts, dropdown, text_field)?;
    tracing::debug!(
        locale = %document.locale,
        small_charts = document.small_charts.len(),
        "dashboard document built"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::FALLBACK_LANGUAGE;

    fn parts() -> (Vec<ChartConfig>, DropdownState, TextFieldState) {
        let doc = build_page().unwrap();
        let mut charts = vec![doc.main_chart];
        charts.extend(doc.small_charts);
        (charts, doc.dropdown, doc.text_field)
    }

    #[test]
    fn stock_page_matches_original_dashboard() {
        let doc = build_page().unwrap();
        assert_eq!(doc.title, "PHM預診系統");
        assert_eq!(doc.main_chart.title(), "圖表標題");
        assert_eq!(doc.main_chart.series()[0].name(), "測試數據");
        let titles: Vec<_> = doc.small_charts.iter().map(|c| c.title()).collect();
        assert_eq!(titles, ["油門", "缸壓", "溫度", "震動"]);
        assert!(doc.small_charts.iter().all(|c| c.band().is_none()));
        assert_eq!(doc.caption, "取樣範圍: 3 ~ 6 (可自訂)");
        assert_eq!(doc.dropdown.selected, "data1.csv");
        assert_eq!(doc.dropdown.options.len(), 2);
        assert_eq!(doc.text_field.placeholder, "請輸入預診結果");
    }

    #[test]
    fn main_band_overlaps_samples_three_to_five() {
        let doc = build_page().unwrap();
        let band = doc.main_chart.band().unwrap().band;
        let covered: Vec<f64> = doc.main_chart.series()[0]
            .points()
            .iter()
            .map(|p| p.x)
            .filter(|&x| band.contains(x))
            .collect();
        assert_eq!(covered, [3.0, 4.0, 5.0]);
        assert_eq!(band.end(), 6.0);
    }

    #[test]
    fn render_rejects_four_charts() {
        let l10n = Localizer::new(FALLBACK_LANGUAGE).unwrap();
        let (mut charts, dropdown, text_field) = parts();
        charts.pop();
        let err = PageRoot::new(&l10n)
            .render(charts, dropdown, text_field)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(_)));
        assert!(err.to_string().contains("got 4"));
    }

    #[test]
    fn render_rejects_six_charts() {
        let l10n = Localizer::new(FALLBACK_LANGUAGE).unwrap();
        let (mut charts, dropdown, text_field) = parts();
        charts.push(charts[1].clone());
        let err = PageRoot::new(&l10n)
            .render(charts, dropdown, text_field)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(_)));
        assert!(err.to_string().contains("got 6"));
    }

    #[test]
    fn render_rejects_unbanded_main_chart() {
        let l10n = Localizer::new(FALLBACK_LANGUAGE).unwrap();
        let (mut charts, dropdown, text_field) = parts();
        charts.swap(0, 1);
        let err = PageRoot::new(&l10n)
            .render(charts, dropdown, text_field)
            .unwrap_err();
        assert!(err.to_string().contains("sampling band"));
    }

    #[test]
    fn caption_follows_configured_band() {
        let settings = PageSettings {
            band_start: 2.5,
            band_end: 9.0,
            ..PageSettings::default()
        };
        let doc = build_page_with(&settings).unwrap();
        assert_eq!(doc.caption, "取樣範圍: 2.5 ~ 9 (可自訂)");
    }

    #[test]
    fn caption_keeps_fine_band_bounds() {
        let settings = PageSettings {
            band_start: 0.0001,
            band_end: 0.0004,
            ..PageSettings::default()
        };
        let doc = build_page_with(&settings).unwrap();
        assert_eq!(doc.caption, "取樣範圍: 0.0001 ~ 0.0004 (可自訂)");
    }

    #[test]
    fn inverted_band_fails_the_build() {
        let settings = PageSettings {
            band_start: 6.0,
            band_end: 3.0,
            ..PageSettings::default()
        };
        assert!(matches!(
            build_page_with(&settings),
            Err(DashboardError::InvalidBand { .. })
        ));
    }

    #[test]
    fn english_locale_translates_everything() {
        let settings = PageSettings {
            locale: "en-US".into(),
            ..PageSettings::default()
        };
        let doc = build_page_with(&settings).unwrap();
        assert_eq!(doc.locale, "en-US");
        assert_eq!(doc.small_charts[0].title(), "Throttle");
        assert_eq!(doc.caption, "Sampling range: 3 ~ 6 (adjustable)");
    }

    #[test]
    fn chart_lookup_by_slot() {
        let doc = build_page().unwrap();
        let (id, chart) = doc.chart(Slot::SmallChart(3)).unwrap();
        assert_eq!(id, "aux-chart-3");
        assert_eq!(chart.title(), "震動");
        assert_eq!(doc.chart(Slot::MainChart).unwrap().0, MAIN_CHART_ID);
        assert!(doc.chart(Slot::SmallChart(4)).is_none());
        assert!(doc.chart(Slot::Title).is_none());
    }
}
