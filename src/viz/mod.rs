mod bar_plot;
mod color;
mod heatmap_plot;
mod params;
mod ticks;

pub use bar_plot::{plot_entropy, BarData};
pub use color::Color;
pub use heatmap_plot::{plot_mutinfo, HeatData};
pub use params::{BarParams, HeatmapParams};
