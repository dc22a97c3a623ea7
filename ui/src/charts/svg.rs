//! Static SVG rendition of a chart.
//!
//! Server-rendered pages embed this inside each chart container so the
//! dashboard is legible before plotly.js takes over the element.

use std::fmt::Write;

use crate::charts::config::{BandLayer, ChartConfig, Decoration, LayerOrder};
use crate::core::format::format_coord;

const PREVIEW_WIDTH: f64 = 600.0;
const PREVIEW_HEIGHT: f64 = 360.0;
const TRACE_COLOR: &str = "#636efa";

/// Plot area in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

struct Scale {
    area: PlotArea,
    x: (f64, f64),
    y: (f64, f64),
}

impl Scale {
    fn for_chart(chart: &ChartConfig, area: PlotArea) -> Self {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for series in chart.series() {
            let (x_lo, x_hi) = series.x_range();
            let (y_lo, y_hi) = series.y_range();
            x = (x.0.min(x_lo), x.1.max(x_hi));
            y = (y.0.min(y_lo), y.1.max(y_hi));
        }
        if !x.0.is_finite() {
            x = (0.0, 1.0);
            y = (0.0, 1.0);
        }
        // Headroom so markers at the extremes are not cut by the frame.
        let pad = ((y.1 - y.0) * 0.08).max(1e-9);
        Self {
            area,
            x: widen(x),
            y: (y.0 - pad, y.1 + pad),
        }
    }

    fn px(&self, x: f64) -> f64 {
        let t = (x - self.x.0) / (self.x.1 - self.x.0);
        self.area.left + t * (self.area.right - self.area.left)
    }

    fn py(&self, y: f64) -> f64 {
        let t = (y - self.y.0) / (self.y.1 - self.y.0);
        self.area.bottom - t * (self.area.bottom - self.area.top)
    }

    /// Horizontal pixel span of `layer`, clipped to the plot area.
    /// `None` when the band lies entirely outside it.
    fn band_span(&self, layer: &BandLayer) -> Option<(f64, f64)> {
        let x0 = self
            .px(layer.band.start())
            .clamp(self.area.left, self.area.right);
        let x1 = self
            .px(layer.band.end())
            .clamp(self.area.left, self.area.right);
        (x1 > x0).then_some((x0, x1))
    }

    /// Vertical pixel span of paper coordinates `(y0, y1)`.
    fn paper_span(&self, (y0, y1): (f64, f64)) -> (f64, f64) {
        let height = self.area.bottom - self.area.top;
        let top = self.area.bottom - y1.clamp(0.0, 1.0) * height;
        let bottom = self.area.bottom - y0.clamp(0.0, 1.0) * height;
        (top, bottom)
    }
}

fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

/// Render `chart` as a self-contained `<svg>` element.
pub fn render_preview(chart: &ChartConfig) -> String {
    let options = chart.options();
    let width = PREVIEW_WIDTH;
    let height = options.height.map_or(PREVIEW_HEIGHT, f64::from);
    let margin = options.margin;
    let area = PlotArea {
        left: f64::from(margin.left),
        right: (width - f64::from(margin.right)).max(f64::from(margin.left) + 1.0),
        top: f64::from(margin.top),
        bottom: (height - f64::from(margin.bottom)).max(f64::from(margin.top) + 1.0),
    };
    let scale = Scale::for_chart(chart, area);
    let title = escape_xml(chart.title());

    let mut below = String::new();
    let mut above = String::new();
    for decoration in chart.decorations() {
        match decoration {
            Decoration::Band(layer) => {
                if let Some((x0, x1)) = scale.band_span(layer) {
                    let (top, bottom) = scale.paper_span(layer.y_extent);
                    let target = match layer.layer {
                        LayerOrder::Below => &mut below,
                        LayerOrder::Above => &mut above,
                    };
                    let _ = write!(
                        target,
                        "<rect class='chart__band' x='{}' y='{}' width='{}' height='{}' fill='{}' fill-opacity='{}'/>",
                        format_coord(x0),
                        format_coord(top),
                        format_coord(x1 - x0),
                        format_coord(bottom - top),
                        layer.fill,
                        layer.opacity
                    );
                }
            }
        }
    }

    let mut traces = String::new();
    for series in chart.series() {
        let points = series
            .points()
            .iter()
            .map(|p| format!("{},{}", format_coord(scale.px(p.x)), format_coord(scale.py(p.y))))
            .collect::<Vec<_>>();
        let _ = write!(
            traces,
            "<polyline fill='none' stroke='{TRACE_COLOR}' stroke-width='2' points='{}'/>",
            points.join(" ")
        );
        for point in &points {
            if let Some((cx, cy)) = point.split_once(',') {
                let _ = write!(
                    traces,
                    "<circle cx='{cx}' cy='{cy}' r='3.5' fill='{TRACE_COLOR}'/>"
                );
            }
        }
    }

    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' class='chart__preview' viewBox='0 0 {w} {h}' role='img' aria-label='{title}'>\
<rect width='{w}' height='{h}' fill='#ffffff'/>\
<rect x='{ax}' y='{ay}' width='{aw}' height='{ah}' fill='{bg}'/>\
{below}{traces}{above}\
<text x='{tx}' y='{ty}' text-anchor='middle' font-family='Arial, sans-serif' font-size='16' fill='#2a3f5f'>{title}</text>\
</svg>",
        w = width,
        h = height,
        ax = format_coord(area.left),
        ay = format_coord(area.top),
        aw = format_coord(area.right - area.left),
        ah = format_coord(area.bottom - area.top),
        bg = options.plot_background,
        tx = format_coord(width / 2.0),
        ty = format_coord((area.top * 0.6).max(16.0)),
    )
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
