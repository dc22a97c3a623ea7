//! Chart configuration, builders and renderers.

pub mod config;
pub mod factory;
pub mod figure;
pub mod svg;

mod view;
pub use view::{Chart, PLOTLY_JS};

pub use config::{BandLayer, ChartConfig, Decoration, DisplayOptions, LayerOrder, Margins, Rgba};
pub use factory::{ChartFactory, MainChartBuilder};
pub use figure::Figure;
