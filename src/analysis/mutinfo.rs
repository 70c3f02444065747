use crate::msa::Msa;
use crate::utils::Result;
use itertools::Itertools;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Pairwise mutual information between alignment columns, in nats.
///
/// Gaps count as a regular symbol. The matrix is symmetric and its diagonal
/// is set to 0. Column pairs are independent, so rows are computed in
/// parallel.
pub fn mutinfo_matrix(msa: &Msa) -> Vec<Vec<f64>> {
    let width = msa.width();
    let columns: Vec<Vec<u8>> = (0..width)
        .map(|pos| msa.column(pos).collect())
        .collect();

    let mut matrix: Vec<Vec<f64>> = (0..width)
        .into_par_iter()
        .map(|i| {
            let mut row = vec![0.0; width];
            for j in i + 1..width {
                row[j] = pair_mutinfo(&columns[i], &columns[j]);
            }
            row
        })
        .collect();

    for i in 0..width {
        for j in i + 1..width {
            matrix[j][i] = matrix[i][j];
        }
    }
    matrix
}

fn pair_mutinfo(col_a: &[u8], col_b: &[u8]) -> f64 {
    let depth = col_a.len() as f64;
    let joint = col_a
        .iter()
        .copied()
        .zip(col_b.iter().copied())
        .counts();
    let counts_a = col_a.iter().copied().counts();
    let counts_b = col_b.iter().copied().counts();

    let mut mutinfo = 0.0;
    for ((a, b), count) in joint {
        let pxy = count as f64 / depth;
        let px = counts_a[&a] as f64 / depth;
        let py = counts_b[&b] as f64 / depth;
        mutinfo += pxy * (pxy / (px * py)).ln();
    }
    // Rounding can push an independent pair a hair below zero
    mutinfo.max(0.0)
}

/// Average product correction of a mutual information matrix:
/// `corr[i][j] = mi[i][j] - rowmean[i] * rowmean[j] / mean`, with means taken
/// over off-diagonal entries and the diagonal left at 0.
pub fn apply_apc(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let dim = matrix.len();
    if matrix.iter().any(|row| row.len() != dim) {
        return Err("Average product correction requires a square matrix".to_string());
    }
    if dim < 2 {
        return Ok(matrix.to_vec());
    }

    let row_means: Vec<f64> = (0..dim)
        .map(|i| {
            let sum: f64 = matrix[i]
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, value)| value)
                .sum();
            sum / (dim - 1) as f64
        })
        .collect();
    let mean = row_means.iter().sum::<f64>() / dim as f64;
    if mean == 0.0 {
        return Ok(matrix.to_vec());
    }

    let corrected = (0..dim)
        .map(|i| {
            (0..dim)
                .map(|j| {
                    if i == j {
                        0.0
                    } else {
                        matrix[i][j] - row_means[i] * row_means[j] / mean
                    }
                })
                .collect()
        })
        .collect();
    Ok(corrected)
}
