use super::color::Color;
use gridplot::{Interpolation, Origin};

/// Rendering options for the entropy bar plot. Unset fields get defaults
/// when the plot is built; set fields are never overwritten.
#[derive(Debug, Default)]
pub struct BarParams {
    pub color: Option<Color>,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
}

/// Rendering options for the mutual information heatmap.
#[derive(Debug, Default)]
pub struct HeatmapParams {
    pub interpolation: Option<Interpolation>,
    pub origin: Option<Origin>,
    pub title: Option<String>,
}
