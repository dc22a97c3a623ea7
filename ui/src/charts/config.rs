//! Typed chart configuration: what to plot and how to dress the plot area.

use std::fmt;

use crate::core::{HighlightBand, Series};

/// An RGBA colour rendered in CSS `rgba()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Light plot area so the green sampling band stands out.
pub const PLOT_BACKGROUND: Rgba = Rgba::new(240, 240, 240, 1.0);

/// Pixel margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margins {
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            right: px,
            top: px,
            bottom: px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayOptions {
    /// Fixed pixel height; `None` lets the chart fill its container.
    pub height: Option<u32>,
    pub margin: Margins,
    pub plot_background: Rgba,
}

impl DisplayOptions {
    /// Full-size chart that stretches to its panel.
    pub fn main() -> Self {
        Self {
            height: None,
            margin: Margins::uniform(50),
            plot_background: PLOT_BACKGROUND,
        }
    }

    /// Fixed-height thumbnail for the preview column.
    pub fn compact() -> Self {
        Self {
            height: Some(200),
            margin: Margins::uniform(40),
            plot_background: PLOT_BACKGROUND,
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::main()
    }
}

/// Stacking order of a decoration relative to the data traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOrder {
    Below,
    Above,
}

/// Translucent rectangle over `[band.start, band.end)` in data units and
/// `y_extent` in paper units (0 = bottom of plot area, 1 = top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandLayer {
    pub band: HighlightBand,
    pub y_extent: (f64, f64),
    pub fill: &'static str,
    pub opacity: f64,
    pub layer: LayerOrder,
}

impl BandLayer {
    pub fn sampling(band: HighlightBand) -> Self {
        Self {
            band,
            y_extent: (0.0, 1.0),
            fill: "green",
            opacity: 0.2,
            layer: LayerOrder::Below,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    Band(BandLayer),
}

/// Immutable description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    title: String,
    series: Vec<Series>,
    decorations: Vec<Decoration>,
    options: DisplayOptions,
}

impl ChartConfig {
    pub(crate) fn new(title: String, series: Vec<Series>, options: DisplayOptions) -> Self {
        Self {
            title,
            series,
            decorations: Vec::new(),
            options,
        }
    }

    /// Attach `layer`, replacing any band already present.
    pub(crate) fn with_band(mut self, layer: BandLayer) -> Self {
        self.decorations.retain(|d| !matches!(d, Decoration::Band(_)));
        self.decorations.push(Decoration::Band(layer));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn band(&self) -> Option<&BandLayer> {
        self.decorations.iter().find_map(|d| match d {
            Decoration::Band(layer) => Some(layer),
        })
    }
}
