use crate::core::models::atom::AtomRecord;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Name of the ribose backbone carbon used as each residue's representative
/// position.
pub const REFERENCE_ATOM: &str = "C3'";

// Fixed column windows of an ATOM record (0-indexed, end-exclusive).
const ATOM_NAME_COLUMNS: (usize, usize) = (11, 18);
const NUCLEOTIDE_COLUMNS: (usize, usize) = (19, 20);
const CHAIN_COLUMNS: (usize, usize) = (21, 22);
const RESIDUE_NUMBER_COLUMNS: (usize, usize) = (23, 26);
const X_COLUMNS: (usize, usize) = (27, 37);
const Y_COLUMNS: (usize, usize) = (38, 45);
const Z_COLUMNS: (usize, usize) = (46, 53);

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
}

fn slice_and_trim(line: &str, (start, end): (usize, usize)) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Reads the ordered sequence of reference-atom records from a structure file.
///
/// Only the first structural model contributes: a `MODEL` line numbered 1
/// starts the scoped region (any records seen before it are discarded) and the
/// first `ENDMDL` after it ends parsing. Files without a model-1 marker are
/// treated as single-model files and read in full. ATOM records whose atom
/// name is not [`REFERENCE_ATOM`] are silently skipped.
pub fn read_reference_atoms(reader: &mut impl BufRead) -> Result<Vec<AtomRecord>, PdbError> {
    let mut records = Vec::new();
    let mut in_first_model = false;

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        if line.starts_with("MODEL") {
            if !in_first_model && line.split_whitespace().nth(1) == Some("1") {
                records.clear();
                in_first_model = true;
            }
        } else if line.starts_with("ENDMDL") {
            if in_first_model {
                break;
            }
        } else if line.starts_with("ATOM") {
            if slice_and_trim(&line, ATOM_NAME_COLUMNS) != REFERENCE_ATOM {
                continue;
            }
            records.push(parse_atom_record(&line, line_num)?);
        }
    }

    Ok(records)
}

/// Convenience wrapper around [`read_reference_atoms`] for on-disk files.
pub fn read_reference_atoms_from_path(path: &Path) -> Result<Vec<AtomRecord>, PdbError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_reference_atoms(&mut reader)
}

fn parse_atom_record(line: &str, line_num: usize) -> Result<AtomRecord, PdbError> {
    let atom_name = slice_and_trim(line, ATOM_NAME_COLUMNS).to_string();

    let nucleotide_str = slice_and_trim(line, NUCLEOTIDE_COLUMNS);
    let nucleotide = nucleotide_str.chars().next().ok_or(PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::MissingRequiredField {
            columns: "20-20".into(),
        },
    })?;

    let chain = slice_and_trim(line, CHAIN_COLUMNS).chars().next().unwrap_or('A');

    let residue_str = slice_and_trim(line, RESIDUE_NUMBER_COLUMNS);
    let residue_number: i32 = residue_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "24-26".into(),
            value: residue_str.into(),
        },
    })?;

    let x = parse_coordinate(line, line_num, X_COLUMNS, "28-37")?;
    let y = parse_coordinate(line, line_num, Y_COLUMNS, "39-45")?;
    let z = parse_coordinate(line, line_num, Z_COLUMNS, "47-53")?;

    Ok(AtomRecord {
        atom_name,
        nucleotide,
        chain,
        residue_number,
        position: Point3::new(x, y, z),
    })
}

fn parse_coordinate(
    line: &str,
    line_num: usize,
    window: (usize, usize),
    columns: &str,
) -> Result<f64, PdbError> {
    let field = slice_and_trim(line, window);
    field.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: columns.into(),
            value: field.into(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn atom_line(name: &str, nucleotide: char, chain: char, res: i32, x: f64, y: f64, z: f64) -> String {
        format!(
            "ATOM      1 {:<6} {} {}{:>4}{:>11.3}{:>8.3}{:>8.3}  1.00  0.00",
            name, nucleotide, chain, res, x, y, z
        )
    }

    fn parse(content: &str) -> Result<Vec<AtomRecord>, PdbError> {
        read_reference_atoms(&mut Cursor::new(content))
    }

    #[test]
    fn extracts_only_reference_atoms_in_file_order() {
        let content = [
            atom_line("P", 'A', 'A', 1, 0.0, 0.0, 0.0),
            atom_line("C3'", 'A', 'A', 1, 1.0, 2.0, 3.0),
            atom_line("O3'", 'A', 'A', 1, 4.0, 4.0, 4.0),
            atom_line("C3'", 'U', 'A', 2, 5.0, 6.0, 7.0),
        ]
        .join("\n");

        let records = parse(&content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].nucleotide, 'A');
        assert_eq!(records[0].position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(records[1].nucleotide, 'U');
        assert_eq!(records[1].residue_number, 2);
    }

    #[test]
    fn stops_at_the_end_of_the_first_model() {
        let content = [
            "MODEL        1".to_string(),
            atom_line("C3'", 'G', 'A', 1, 0.0, 0.0, 0.0),
            "ENDMDL".to_string(),
            "MODEL        2".to_string(),
            atom_line("C3'", 'C', 'A', 1, 9.0, 9.0, 9.0),
            "ENDMDL".to_string(),
        ]
        .join("\n");

        let records = parse(&content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].nucleotide, 'G');
    }

    #[test]
    fn discards_records_seen_before_the_model_marker() {
        let content = [
            atom_line("C3'", 'A', 'A', 1, 0.0, 0.0, 0.0),
            "MODEL        1".to_string(),
            atom_line("C3'", 'U', 'A', 2, 1.0, 1.0, 1.0),
            "ENDMDL".to_string(),
        ]
        .join("\n");

        let records = parse(&content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].nucleotide, 'U');
    }

    #[test]
    fn reads_whole_file_when_no_model_marker_exists() {
        let content = [
            atom_line("C3'", 'A', 'A', 1, 0.0, 0.0, 0.0),
            atom_line("C3'", 'U', 'B', 2, 1.0, 1.0, 1.0),
        ]
        .join("\n");

        let records = parse(&content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].chain, 'B');
    }

    #[test]
    fn non_numeric_coordinate_is_a_parse_error_with_line_number() {
        let mut bad = atom_line("C3'", 'A', 'A', 1, 0.0, 0.0, 0.0);
        bad.replace_range(30..35, "abcde");
        let content = [atom_line("C3'", 'A', 'A', 1, 0.0, 0.0, 0.0), bad].join("\n");

        let result = parse(&content);
        assert!(matches!(
            result,
            Err(PdbError::Parse {
                line: 2,
                kind: PdbParseErrorKind::InvalidFloat { .. }
            })
        ));
    }

    #[test]
    fn non_numeric_residue_number_is_a_parse_error() {
        let mut bad = atom_line("C3'", 'A', 'A', 1, 0.0, 0.0, 0.0);
        bad.replace_range(23..26, "xyz");

        let result = parse(&bad);
        assert!(matches!(
            result,
            Err(PdbError::Parse {
                kind: PdbParseErrorKind::InvalidInt { .. },
                ..
            })
        ));
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse("").unwrap().is_empty());
    }
}
