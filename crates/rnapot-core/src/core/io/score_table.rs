use crate::core::models::pair::PairKey;
use crate::core::potential::histogram::BIN_COUNT;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreTableError {
    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid score value on line {line} of '{path}' (value: '{value}')", path = path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("CSV error for '{path}': {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("No score file mapped for pair {pair}")]
    UnmappedPair { pair: PairKey },
    #[error("Score file '{path}' for pair {pair} not found", path = path.display())]
    MissingScoreFile { pair: PairKey, path: PathBuf },
}

/// An ordered sequence of per-bin pseudo-energy scores for one nucleotide pair.
///
/// Freshly derived tables hold exactly [`BIN_COUNT`] entries; tables loaded
/// from disk may legally be shorter, in which case lookups past the end
/// resolve to the out-of-range sentinel rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    values: Vec<f64>,
}

impl ScoreTable {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Loads a table from a plain-text file, one floating-point value per
    /// line. Blank lines are skipped; `inf` entries round-trip as written.
    pub fn load(path: &Path) -> Result<Self, ScoreTableError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScoreTableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut values = Vec::with_capacity(BIN_COUNT);
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value: f64 = line.parse().map_err(|_| ScoreTableError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                value: line.to_string(),
            })?;
            values.push(value);
        }
        Ok(Self { values })
    }

    /// Persists the table with 4-decimal formatting, one value per line.
    pub fn save(&self, path: &Path) -> Result<(), ScoreTableError> {
        let io_err = |e| ScoreTableError::Io {
            path: path.to_path_buf(),
            source: e,
        };
        let mut file = File::create(path).map_err(io_err)?;
        for value in &self.values {
            writeln!(file, "{:.4}", value).map_err(io_err)?;
        }
        Ok(())
    }
}

/// A directory of per-pair score files with a lazy in-memory cache.
///
/// Tables are loaded on first lookup and never reloaded, so the library sees
/// an immutable snapshot of the directory for its whole lifetime.
#[derive(Debug)]
pub struct ScoreLibrary {
    dir: PathBuf,
    cache: HashMap<PairKey, ScoreTable>,
}

impl ScoreLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    /// The score table for `pair`, loading it from disk on first use.
    ///
    /// A pair without a mapped file name, or whose file is absent from the
    /// directory, is a [`ScoreTableError::UnmappedPair`] /
    /// [`ScoreTableError::MissingScoreFile`] condition.
    pub fn table_for(&mut self, pair: PairKey) -> Result<&ScoreTable, ScoreTableError> {
        match self.cache.entry(pair) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let file_name = pair
                    .score_file_name()
                    .ok_or(ScoreTableError::UnmappedPair { pair })?;
                let path = self.dir.join(file_name);
                if !path.exists() {
                    return Err(ScoreTableError::MissingScoreFile { pair, path });
                }
                Ok(entry.insert(ScoreTable::load(&path)?))
            }
        }
    }
}

/// Writes the tabular summary of all derived tables: one row per pair, with
/// header `Nucleotide1,Nucleotide2,Score_1..Score_20`.
pub fn write_summary_csv(
    tables: &BTreeMap<PairKey, ScoreTable>,
    path: &Path,
) -> Result<(), ScoreTableError> {
    let csv_err = |e| ScoreTableError::Csv {
        path: path.to_path_buf(),
        source: e,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;

    let mut header = vec!["Nucleotide1".to_string(), "Nucleotide2".to_string()];
    header.extend((1..=BIN_COUNT).map(|i| format!("Score_{}", i)));
    writer.write_record(&header).map_err(csv_err)?;

    for (pair, table) in tables {
        let mut row = vec![pair.first().to_string(), pair.second().to_string()];
        row.extend(table.values().iter().map(|score| score.to_string()));
        writer.write_record(&row).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ScoreTableError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
