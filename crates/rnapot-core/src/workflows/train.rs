use crate::core::io::score_table::{ScoreTable, ScoreTableError};
use crate::core::models::atom::AtomRecord;
use crate::core::models::pair::PairKey;
use crate::core::potential::derive::derive_tables;
use crate::core::potential::distances::intrachain_distances;
use crate::core::potential::histogram::{group_by_pair, observed_frequencies, reference_frequency};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The derived potential: one score table per nucleotide pair observed in the
/// training corpus.
#[derive(Debug, Clone)]
pub struct TrainingResult {
    pub tables: BTreeMap<PairKey, ScoreTable>,
    /// Total number of qualifying distance samples across the corpus.
    pub sample_count: usize,
}

/// Derives the potential from a training corpus of parsed structures.
///
/// Per-structure distance extraction feeds a single flat sample pool; the
/// aggregation over the pool (grouping, frequency histograms, log-odds
/// derivation) is one serial reduction at the end.
pub fn run<I>(corpus: I) -> TrainingResult
where
    I: IntoIterator<Item = Vec<AtomRecord>>,
{
    let mut all_samples = Vec::new();
    let mut structure_count = 0usize;
    for records in corpus {
        let samples = intrachain_distances(&records);
        debug!(
            structure = structure_count,
            atoms = records.len(),
            samples = samples.len(),
            "Extracted distance samples."
        );
        all_samples.extend(samples);
        structure_count += 1;
    }

    let groups = group_by_pair(&all_samples);
    info!(
        structures = structure_count,
        samples = all_samples.len(),
        pairs = groups.len(),
        "Distance extraction complete; deriving score tables."
    );

    let observed = observed_frequencies(&groups);
    let reference = reference_frequency(&all_samples);
    let tables = derive_tables(&observed, &reference);

    TrainingResult {
        tables,
        sample_count: all_samples.len(),
    }
}

/// Writes one score file per derived pair into `dir`, returning the paths
/// written. Pairs without a mapped file name are logged and skipped.
pub fn write_score_files(
    result: &TrainingResult,
    dir: &Path,
) -> Result<Vec<PathBuf>, ScoreTableError> {
    let mut written = Vec::with_capacity(result.tables.len());
    for (pair, table) in &result.tables {
        let Some(file_name) = pair.score_file_name() else {
            warn!(%pair, "No score file mapped for pair; skipping.");
            continue;
        };
        let path = dir.join(file_name);
        table.save(&path)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::potential::histogram::BIN_COUNT;
    use nalgebra::Point3;
    use tempfile::tempdir;

    fn chain(nucleotides: &str, spacing: f64) -> Vec<AtomRecord> {
        nucleotides
            .chars()
            .enumerate()
            .map(|(i, nucleotide)| AtomRecord {
                atom_name: "C3'".to_string(),
                nucleotide,
                chain: 'A',
                residue_number: i as i32 + 1,
                position: Point3::new(i as f64 * spacing, 0.0, 0.0),
            })
            .collect()
    }

    #[test]
    fn training_covers_exactly_the_observed_pairs() {
        let result = run(vec![chain("AAAAU", 1.0), chain("GGGGG", 1.0)]);
        let pairs: Vec<_> = result.tables.keys().copied().collect();
        assert_eq!(
            pairs,
            vec![PairKey::new('A', 'U'), PairKey::new('G', 'G')]
        );
        assert_eq!(result.sample_count, 2);
    }

    #[test]
    fn every_derived_table_has_the_full_bin_count() {
        let result = run(vec![chain("AUGCAUGCAU", 1.5)]);
        for table in result.tables.values() {
            assert_eq!(table.len(), BIN_COUNT);
        }
    }

    #[test]
    fn a_single_pair_corpus_scores_zero_in_its_populated_bin() {
        // One sample, so the observed and reference distributions coincide.
        let result = run(vec![chain("AAAAU", 1.0)]);
        let table = &result.tables[&PairKey::new('A', 'U')];
        assert_eq!(table.get(4).unwrap(), 0.0);
        assert_eq!(table.get(5).unwrap(), f64::INFINITY);
    }

    #[test]
    fn an_empty_corpus_produces_no_tables() {
        let result = run(Vec::<Vec<AtomRecord>>::new());
        assert!(result.tables.is_empty());
        assert_eq!(result.sample_count, 0);
    }

    #[test]
    fn score_files_land_in_the_output_directory_with_mapped_names() {
        let dir = tempdir().unwrap();
        let result = run(vec![chain("AAAAU", 1.0)]);

        let written = write_score_files(&result, dir.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(dir.path().join("A_U_scores.txt").exists());

        let reloaded = ScoreTable::load(&dir.path().join("A_U_scores.txt")).unwrap();
        assert_eq!(reloaded.len(), BIN_COUNT);
        assert_eq!(reloaded.get(4).unwrap(), 0.0);
    }
}
