use super::color::Color;
use super::params::BarParams;
use super::ticks::{index_ticks, value_ticks};
use crate::analysis::shannon_entropy;
use crate::msa::Msa;
use crate::utils::Result;
use gridplot::{Axis, Bar, GridPlot, Panel};
use itertools::Itertools;

/// Input to the entropy bar plot: precomputed per-position scores or an
/// alignment the scores are derived from.
pub enum BarData<'a> {
    Scores(&'a [f64]),
    Alignment(&'a Msa),
}

impl<'a> From<&'a [f64]> for BarData<'a> {
    fn from(scores: &'a [f64]) -> Self {
        BarData::Scores(scores)
    }
}

impl<'a> From<&'a Vec<f64>> for BarData<'a> {
    fn from(scores: &'a Vec<f64>) -> Self {
        BarData::Scores(scores)
    }
}

impl<'a> From<&'a Msa> for BarData<'a> {
    fn from(msa: &'a Msa) -> Self {
        BarData::Alignment(msa)
    }
}

/// Builds a bar plot of per-position Shannon entropy.
///
/// `indices` may hold residue numbers to label the positions; without them
/// positions are numbered from 1. Rendering options set in `params` are
/// forwarded as given.
pub fn plot_entropy<'a>(
    data: impl Into<BarData<'a>>,
    indices: Option<&[i64]>,
    params: &BarParams,
) -> Result<GridPlot> {
    let computed;
    let entropy: &[f64] = match data.into() {
        BarData::Scores(scores) => scores,
        BarData::Alignment(msa) => {
            computed = shannon_entropy(msa, true);
            &computed
        }
    };
    if entropy.is_empty() {
        return Err("Entropy must be a non-empty 1D array".to_string());
    }

    let default_indices;
    let indices: &[i64] = match indices {
        Some(given) => {
            if given.len() != entropy.len() {
                return Err(format!(
                    "Expected {} position labels, got {}",
                    entropy.len(),
                    given.len()
                ));
            }
            given
        }
        None => {
            default_indices = (1..=entropy.len() as i64).collect_vec();
            &default_indices
        }
    };

    let y_max = nice_ceiling(entropy.iter().cloned().fold(0.0, f64::max));
    let color = params.color.clone().unwrap_or(Color::Blue).to_string();
    let bars = entropy
        .iter()
        .enumerate()
        .map(|(pos, &value)| Bar {
            pos: pos as u32,
            frac: (value / y_max).clamp(0.0, 1.0),
            color: color.clone(),
        })
        .collect_vec();

    let count = entropy.len();
    let x_axis = Axis {
        title: params.xlabel.clone().unwrap_or_else(|| "Position".to_string()),
        // Bars are centered on their slots
        ticks: index_ticks(indices, |slot| (slot as f64 + 0.5) / count as f64),
    };
    let y_axis = Axis {
        title: params
            .ylabel
            .clone()
            .unwrap_or_else(|| "Entropy (nats)".to_string()),
        ticks: value_ticks(y_max),
    };

    Ok(GridPlot {
        panel: Panel::Bars(bars),
        x_axis,
        y_axis,
        colorbar: None,
        title: params.title.clone(),
    })
}

/// Rounds up to the next 1-2-5 value so the axis ends on a clean number
fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powf(value.log10().floor());
    for mult in [1.0, 2.0, 5.0] {
        if value <= mult * base + f64::EPSILON {
            return mult * base;
        }
    }
    10.0 * base
}
