use super::{Msa, GAP};
use crate::utils::Result;
use std::io::BufRead;

/// Reads an aligned FASTA file. Sequences may span multiple lines; residues
/// are uppercased and `.`, `-`, and `~` are read as gaps.
pub fn read_fasta(reader: impl BufRead) -> Result<Msa> {
    let mut names: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            let name = header.split_whitespace().next().unwrap_or("").to_string();
            if name.is_empty() {
                return Err("FASTA header without a sequence name".to_string());
            }
            names.push(name);
            rows.push(Vec::new());
        } else {
            let row = rows
                .last_mut()
                .ok_or("Sequence data before the first FASTA header".to_string())?;
            for ch in trimmed.bytes() {
                row.push(normalize_residue(ch, names.last().unwrap())?);
            }
        }
    }

    Msa::new(names, rows)
}

fn normalize_residue(ch: u8, name: &str) -> Result<u8> {
    match ch {
        b'A'..=b'Z' => Ok(ch),
        b'a'..=b'z' => Ok(ch.to_ascii_uppercase()),
        b'-' | b'.' | b'~' => Ok(GAP),
        _ => Err(format!(
            "Unexpected character {:?} in sequence {}",
            ch as char, name
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_multi_line_records() {
        let fasta = ">seq1 some description\nARND\nCQEG\n>seq2\narnd\ncqeg\n";
        let msa = read_fasta(Cursor::new(fasta)).unwrap();
        assert_eq!(msa.names(), ["seq1", "seq2"]);
        assert_eq!(msa.width(), 8);
        assert_eq!(msa.column(0).collect::<Vec<_>>(), vec![b'A', b'A']);
    }

    #[test]
    fn normalizes_gap_characters() {
        let msa = read_fasta(Cursor::new(">a\nA.R\n>b\nA~R\n>c\nA-R\n")).unwrap();
        assert_eq!(msa.column(1).collect::<Vec<_>>(), vec![GAP, GAP, GAP]);
    }

    #[test]
    fn rejects_data_before_a_header() {
        let err = read_fasta(Cursor::new("ARND\n")).unwrap_err();
        assert!(err.contains("before the first FASTA header"));
    }

    #[test]
    fn rejects_unexpected_characters() {
        let err = read_fasta(Cursor::new(">a\nAR?D\n")).unwrap_err();
        assert!(err.contains("'?'"));
        assert!(err.contains("sequence a"));
    }

    #[test]
    fn rejects_unequal_sequence_lengths() {
        let err = read_fasta(Cursor::new(">a\nARND\n>b\nARN\n")).unwrap_err();
        assert!(err.contains("equal lengths"));
    }
}
