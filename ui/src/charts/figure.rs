//! Plotly figure schema.
//!
//! A [`ChartConfig`] is lowered into the subset of the plotly.js figure JSON
//! this dashboard uses; the browser hands it straight to `Plotly.newPlot`.

use serde::Serialize;

use crate::charts::config::{ChartConfig, Decoration, LayerOrder};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    pub margin: FigureMargin,
    pub plot_bgcolor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub autosize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigureMargin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

/// A `rect` layout shape. `x*` are in data units, `y*` in paper units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub fillcolor: &'static str,
    pub opacity: f64,
    pub line: ShapeLine,
    pub layer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeLine {
    pub width: u32,
}

impl From<&ChartConfig> for Figure {
    fn from(chart: &ChartConfig) -> Self {
        let options = chart.options();
        let data = chart
            .series()
            .iter()
            .map(|series| Trace {
                kind: "scatter",
                mode: "lines+markers",
                name: series.name().to_string(),
                x: series.xs(),
                y: series.ys(),
            })
            .collect();

        let shapes = chart
            .decorations()
            .iter()
            .map(|decoration| match decoration {
                Decoration::Band(layer) => Shape {
                    kind: "rect",
                    xref: "x",
                    yref: "paper",
                    x0: layer.band.start(),
                    x1: layer.band.end(),
                    y0: layer.y_extent.0,
                    y1: layer.y_extent.1,
                    fillcolor: layer.fill,
                    opacity: layer.opacity,
                    line: ShapeLine { width: 0 },
                    layer: match layer.layer {
                        LayerOrder::Below => "below",
                        LayerOrder::Above => "above",
                    },
                },
            })
            .collect();

        Figure {
            data,
            layout: FigureLayout {
                title: Title {
                    text: chart.title().to_string(),
                },
                shapes,
                margin: FigureMargin {
                    l: options.margin.left,
                    r: options.margin.right,
                    t: options.margin.top,
                    b: options.margin.bottom,
                },
                plot_bgcolor: options.plot_background.to_string(),
                height: options.height,
                autosize: options.height.is_none(),
            },
        }
    }
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
