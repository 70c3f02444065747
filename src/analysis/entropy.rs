use crate::msa::{Msa, GAP};

/// Per-position Shannon entropy of an alignment, in nats.
///
/// With `omit_gaps` set, gap symbols are excluded from the column
/// distribution; a column of nothing but gaps scores 0.
pub fn shannon_entropy(msa: &Msa, omit_gaps: bool) -> Vec<f64> {
    (0..msa.width())
        .map(|pos| column_entropy(msa, pos, omit_gaps))
        .collect()
}

fn column_entropy(msa: &Msa, pos: usize, omit_gaps: bool) -> f64 {
    let mut counts = [0u32; 256];
    let mut total = 0u32;
    for residue in msa.column(pos) {
        if omit_gaps && residue == GAP {
            continue;
        }
        counts[residue as usize] += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msa::read_fasta;
    use rand::seq::SliceRandom;
    use std::io::Cursor;

    const TOLERANCE: f64 = 1e-12;

    fn msa_from_columns(seqs: &[&str]) -> Msa {
        let fasta: String = seqs
            .iter()
            .enumerate()
            .map(|(i, seq)| format!(">seq{}\n{}\n", i + 1, seq))
            .collect();
        read_fasta(Cursor::new(fasta)).unwrap()
    }

    #[test]
    fn conserved_column_has_zero_entropy() {
        let msa = msa_from_columns(&["A", "A", "A", "A"]);
        assert!(shannon_entropy(&msa, true)[0].abs() < TOLERANCE);
    }

    #[test]
    fn uniform_column_has_log_k_entropy() {
        let msa = msa_from_columns(&["A", "R", "N", "D"]);
        let entropy = shannon_entropy(&msa, true)[0];
        assert!((entropy - 4.0_f64.ln()).abs() < TOLERANCE);
    }

    #[test]
    fn gaps_are_omitted_by_default_convention() {
        // With gaps omitted the column is fully conserved
        let msa = msa_from_columns(&["A", "A", "-", "-"]);
        assert!(shannon_entropy(&msa, true)[0].abs() < TOLERANCE);
        // Counting gaps makes it a two-symbol uniform column
        let entropy = shannon_entropy(&msa, false)[0];
        assert!((entropy - 2.0_f64.ln()).abs() < TOLERANCE);
    }

    #[test]
    fn all_gap_column_scores_zero() {
        let msa = msa_from_columns(&["-A", "-A", "-A"]);
        let entropy = shannon_entropy(&msa, true);
        assert_eq!(entropy[0], 0.0);
    }

    #[test]
    fn one_value_per_position() {
        let msa = msa_from_columns(&["ARND", "ARNE"]);
        assert_eq!(shannon_entropy(&msa, true).len(), 4);
    }

    #[test]
    fn entropy_is_invariant_under_row_order() {
        let mut seqs = vec!["ARNDA", "CRQDA", "AWNHA", "CRNDE"];
        let expected = shannon_entropy(&msa_from_columns(&seqs), true);
        let mut rng = rand::rng();
        for _ in 0..5 {
            seqs.shuffle(&mut rng);
            assert_eq!(shannon_entropy(&msa_from_columns(&seqs), true), expected);
        }
    }
}
