/*!
This crate provides functionality to generate grid-based plots: bar charts
laid out over integer positions and square matrix heatmaps built from
pre-colored cells. Plots can be annotated with axes, tick labels, titles, and
a gradient colorbar. The crate supports rendering of grid plots as SVG, PNG,
and PDF images.

Grid plots are useful for visualizing per-position and pairwise scores over
sequence alignments.
*/

mod common;
mod gridplot;
mod image;
mod pdf;
mod png;
mod svg;

pub use common::prepare_svg_tree;
pub use gridplot::{
    Axis, Bar, Color, Colorbar, GridPlot, Interpolation, MatrixPanel, Origin, Panel, Tick,
};
pub use image::generate as generate_image;
