mod fasta;

pub use fasta::read_fasta;

use crate::utils::Result;

/// Canonical gap symbol; `.` and `~` are normalized to it on input.
pub const GAP: u8 = b'-';

/// A protein multiple sequence alignment. All rows have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Msa {
    names: Vec<String>,
    rows: Vec<Vec<u8>>,
}

impl Msa {
    pub fn new(names: Vec<String>, rows: Vec<Vec<u8>>) -> Result<Self> {
        if names.len() != rows.len() {
            return Err(format!(
                "Expected one name per sequence, got {} names for {} sequences",
                names.len(),
                rows.len()
            ));
        }
        if rows.is_empty() {
            return Err("Alignment contains no sequences".to_string());
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(format!("Sequence {} is empty", names[0]));
        }
        for (name, row) in names.iter().zip(&rows) {
            if row.len() != width {
                return Err(format!(
                    "Aligned sequences must have equal lengths: {} has {} residues, expected {}",
                    name,
                    row.len(),
                    width
                ));
            }
        }
        Ok(Msa { names, rows })
    }

    /// Number of sequences
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Number of alignment positions
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Residues of one alignment column, top to bottom
    pub fn column(&self, pos: usize) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().map(move |row| row[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msa_from(seqs: &[&str]) -> Result<Msa> {
        let names = (0..seqs.len()).map(|i| format!("seq{}", i + 1)).collect();
        let rows = seqs.iter().map(|seq| seq.as_bytes().to_vec()).collect();
        Msa::new(names, rows)
    }

    #[test]
    fn accepts_equal_length_rows() {
        let msa = msa_from(&["ARND", "AR-D"]).unwrap();
        assert_eq!(msa.depth(), 2);
        assert_eq!(msa.width(), 4);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = msa_from(&["ARND", "ARN"]).unwrap_err();
        assert!(err.contains("equal lengths"));
        assert!(err.contains("seq2"));
    }

    #[test]
    fn rejects_name_row_count_mismatch() {
        let err = Msa::new(
            vec!["a".to_string()],
            vec![b"AR".to_vec(), b"ND".to_vec()],
        )
        .unwrap_err();
        assert!(err.contains("one name per sequence"));
    }

    #[test]
    fn rejects_empty_alignments() {
        assert!(msa_from(&[]).is_err());
        assert!(msa_from(&[""]).is_err());
    }

    #[test]
    fn column_returns_residues_in_sequence_order() {
        let msa = msa_from(&["AR", "CR", "DR"]).unwrap();
        assert_eq!(msa.column(0).collect::<Vec<_>>(), vec![b'A', b'C', b'D']);
        assert_eq!(msa.column(1).collect::<Vec<_>>(), vec![b'R', b'R', b'R']);
    }
}
