use super::color::Color;
use super::params::HeatmapParams;
use super::ticks::index_ticks;
use crate::analysis::mutinfo_matrix;
use crate::msa::Msa;
use crate::utils::Result;
use gridplot::{Axis, Colorbar, GridPlot, Interpolation, MatrixPanel, Origin, Panel};
use itertools::{iproduct, Itertools};

/// Input to the mutual information heatmap: a precomputed matrix or an
/// alignment the matrix is derived from.
pub enum HeatData<'a> {
    Matrix(&'a [Vec<f64>]),
    Alignment(&'a Msa),
}

impl<'a> From<&'a [Vec<f64>]> for HeatData<'a> {
    fn from(matrix: &'a [Vec<f64>]) -> Self {
        HeatData::Matrix(matrix)
    }
}

impl<'a> From<&'a Vec<Vec<f64>>> for HeatData<'a> {
    fn from(matrix: &'a Vec<Vec<f64>>) -> Self {
        HeatData::Matrix(matrix)
    }
}

impl<'a> From<&'a Msa> for HeatData<'a> {
    fn from(msa: &'a Msa) -> Self {
        HeatData::Alignment(msa)
    }
}

/// Builds a heatmap of pairwise mutual information.
///
/// Axis labels are 1-based matrix indices: the display extent runs from 0.5
/// to `dim + 0.5` on both axes. Interpolation defaults to nearest and origin
/// to lower unless the caller set them.
pub fn plot_mutinfo<'a>(data: impl Into<HeatData<'a>>, params: &HeatmapParams) -> Result<GridPlot> {
    let computed;
    let matrix: &[Vec<f64>] = match data.into() {
        HeatData::Matrix(matrix) => matrix,
        HeatData::Alignment(msa) => {
            computed = mutinfo_matrix(msa);
            &computed
        }
    };

    let dim = matrix.len();
    if dim == 0 {
        return Err("Mutual information matrix is empty".to_string());
    }
    if matrix.iter().any(|row| row.len() != matrix[0].len()) {
        return Err("Mutual information data must be a 2D matrix".to_string());
    }
    if matrix[0].len() != dim {
        return Err(format!(
            "Mutual information matrix must be square, got {}x{}",
            dim,
            matrix[0].len()
        ));
    }

    let interpolation = params.interpolation.unwrap_or(Interpolation::Nearest);
    let origin = params.origin.unwrap_or(Origin::Lower);

    let (low, high) = value_range(matrix);
    let span = high - low;
    let normalize = |value: f64| {
        if span > 0.0 {
            (value - low) / span
        } else {
            0.0
        }
    };
    let cells = iproduct!(0..dim, 0..dim)
        .map(|(row, col)| Color::Grad(normalize(matrix[row][col])).to_string())
        .collect_vec();

    // Indices start at 1: cell centers sit at 1..=dim over a
    // 0.5 ..= dim + 0.5 extent
    let indices = (1..=dim as i64).collect_vec();
    let x_ticks = index_ticks(&indices, |slot| (slot as f64 + 0.5) / dim as f64);
    let y_ticks = match origin {
        Origin::Lower => index_ticks(&indices, |slot| (slot as f64 + 0.5) / dim as f64),
        Origin::Upper => index_ticks(&indices, |slot| 1.0 - (slot as f64 + 0.5) / dim as f64),
    };

    let colorbar = Colorbar {
        stops: (0..=4)
            .map(|step| {
                let offset = step as f64 / 4.0;
                (offset, Color::Grad(offset).to_string())
            })
            .collect(),
        low_label: format!("{:.2}", low),
        high_label: format!("{:.2}", high),
    };

    Ok(GridPlot {
        panel: Panel::Matrix(MatrixPanel {
            dim,
            cells,
            interpolation,
            origin,
        }),
        x_axis: Axis {
            title: "Indices".to_string(),
            ticks: x_ticks,
        },
        y_axis: Axis {
            title: "Indices".to_string(),
            ticks: y_ticks,
        },
        colorbar: Some(colorbar),
        title: params.title.clone(),
    })
}

fn value_range(matrix: &[Vec<f64>]) -> (f64, f64) {
    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for value in matrix.iter().flatten() {
        low = low.min(*value);
        high = high.max(*value);
    }
    (low, high)
}
