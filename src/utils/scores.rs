use super::Result;
use std::io::BufRead;

/// Reads a 1D score array: either a single row or a single column of
/// whitespace-separated numbers. Anything two-dimensional is rejected.
pub fn read_scores(reader: impl BufRead) -> Result<Vec<f64>> {
    let rows = parse_rows(reader)?;
    match rows.len() {
        0 => Err("Score file contains no values".to_string()),
        1 => Ok(rows.into_iter().next().unwrap()),
        _ if rows.iter().all(|row| row.len() == 1) => {
            Ok(rows.into_iter().map(|row| row[0]).collect())
        }
        _ => Err("Scores must be a 1D array (a single row or column of numbers)".to_string()),
    }
}

/// Reads rows of whitespace-separated numbers. Shape validation (rectangular,
/// square) is left to the plot builders.
pub fn read_matrix(reader: impl BufRead) -> Result<Vec<Vec<f64>>> {
    let rows = parse_rows(reader)?;
    if rows.is_empty() {
        return Err("Matrix file contains no values".to_string());
    }
    Ok(rows)
}

fn parse_rows(reader: impl BufRead) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| e.to_string())?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let row = trimmed
            .split_whitespace()
            .map(|field| {
                field
                    .parse::<f64>()
                    .map_err(|_| format!("Line {}: could not parse value: {}", index + 1, field))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_scores_from_a_row() {
        let scores = read_scores(Cursor::new("0.1 0.2 0.3\n")).unwrap();
        assert_eq!(scores, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn reads_scores_from_a_column() {
        let scores = read_scores(Cursor::new("0.1\n0.2\n\n0.3\n")).unwrap();
        assert_eq!(scores, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn rejects_two_dimensional_scores() {
        let result = read_scores(Cursor::new("0.1 0.2\n0.3 0.4\n"));
        assert!(result.unwrap_err().contains("1D"));
    }

    #[test]
    fn rejects_empty_score_files() {
        assert!(read_scores(Cursor::new("# only a comment\n")).is_err());
    }

    #[test]
    fn reads_matrix_rows() {
        let matrix = read_matrix(Cursor::new("0 0.5\n0.5 0\n")).unwrap();
        assert_eq!(matrix, vec![vec![0.0, 0.5], vec![0.5, 0.0]]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let matrix = read_matrix(Cursor::new("# header\n\n1 2\n3 4\n")).unwrap();
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn reports_the_offending_line() {
        let result = read_matrix(Cursor::new("1 2\n3 oops\n"));
        assert!(result.unwrap_err().contains("Line 2"));
    }
}
