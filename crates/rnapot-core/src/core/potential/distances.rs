use crate::core::models::atom::AtomRecord;
use crate::core::models::pair::PairKey;
use nalgebra::distance;

/// Spatial cutoff in Ångström beyond which a pair is not sampled (inclusive).
pub const DISTANCE_CUTOFF: f64 = 20.0;

/// Minimum separation, in record sequence positions, between paired residues.
/// Excludes local backbone-adjacent pairs whose distances carry no pairing
/// signal.
pub const MIN_SEQUENCE_SEPARATION: usize = 4;

/// One qualifying pairwise distance between two reference atoms.
///
/// The two nucleotide fields keep record iteration order and are NOT
/// canonicalized here; canonicalization happens only when a [`PairKey`] is
/// derived from the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample {
    pub nucleotide_a: char,
    pub nucleotide_b: char,
    pub distance: f64,
}

impl DistanceSample {
    /// The unordered pair identity of this sample.
    pub fn pair_key(&self) -> PairKey {
        PairKey::new(self.nucleotide_a, self.nucleotide_b)
    }
}

/// Computes all qualifying pairwise intrachain distances.
///
/// A pair (i, j) qualifies when both records share a chain, j - i is at least
/// [`MIN_SEQUENCE_SEPARATION`] (sequence position, not residue number), and
/// the Euclidean distance does not exceed [`DISTANCE_CUTOFF`]. Output is in
/// deterministic nested increasing-index order, each unordered pair exactly
/// once. O(n²) over the records, which stays cheap at the hundreds of
/// residues typical for one structure.
pub fn intrachain_distances(records: &[AtomRecord]) -> Vec<DistanceSample> {
    let mut samples = Vec::new();

    for i in 0..records.len() {
        for j in (i + MIN_SEQUENCE_SEPARATION)..records.len() {
            if records[i].chain != records[j].chain {
                continue;
            }
            let d = distance(&records[i].position, &records[j].position);
            if d <= DISTANCE_CUTOFF {
                samples.push(DistanceSample {
                    nucleotide_a: records[i].nucleotide,
                    nucleotide_b: records[j].nucleotide,
                    distance: d,
                });
            }
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn record(nucleotide: char, chain: char, x: f64) -> AtomRecord {
        AtomRecord {
            atom_name: "C3'".to_string(),
            nucleotide,
            chain,
            residue_number: 0,
            position: Point3::new(x, 0.0, 0.0),
        }
    }

    #[test]
    fn pairs_closer_than_the_minimum_separation_are_excluded() {
        let records: Vec<_> = (0..4).map(|i| record('A', 'A', i as f64)).collect();
        assert!(intrachain_distances(&records).is_empty());
    }

    #[test]
    fn separation_counts_sequence_positions_not_residue_numbers() {
        let mut records: Vec<_> = (0..5).map(|i| record('A', 'A', i as f64)).collect();
        // Residue numbering far apart must not create extra pairs.
        for (i, r) in records.iter_mut().enumerate() {
            r.residue_number = (i as i32) * 100;
        }
        let samples = intrachain_distances(&records);
        assert_eq!(samples.len(), 1);
        assert!((samples[0].distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn distances_beyond_the_cutoff_are_excluded_and_the_cutoff_is_inclusive() {
        let records = vec![
            record('A', 'A', 0.0),
            record('A', 'A', 1.0),
            record('A', 'A', 2.0),
            record('A', 'A', 3.0),
            record('U', 'A', 20.0),
            record('G', 'A', 25.0),
        ];
        let samples = intrachain_distances(&records);
        // (0,4) at exactly 20.0 qualifies; (0,5) and (1,5) at > 20 do not.
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].nucleotide_b, 'U');
        assert_eq!(samples[0].distance, 20.0);
    }

    #[test]
    fn pairs_across_chains_are_excluded() {
        let mut records: Vec<_> = (0..5).map(|i| record('A', 'A', i as f64)).collect();
        records[4].chain = 'B';
        assert!(intrachain_distances(&records).is_empty());
    }

    #[test]
    fn nucleotide_fields_keep_record_iteration_order() {
        let records = vec![
            record('U', 'A', 0.0),
            record('A', 'A', 1.0),
            record('A', 'A', 2.0),
            record('A', 'A', 3.0),
            record('A', 'A', 4.0),
        ];
        let samples = intrachain_distances(&records);
        assert_eq!(samples.len(), 1);
        assert_eq!((samples[0].nucleotide_a, samples[0].nucleotide_b), ('U', 'A'));
    }

    #[test]
    fn output_is_in_nested_increasing_index_order() {
        let records: Vec<_> = (0..6).map(|i| record('A', 'A', i as f64)).collect();
        let samples = intrachain_distances(&records);
        // Pairs: (0,4), (0,5), (1,5).
        let distances: Vec<f64> = samples.iter().map(|s| s.distance).collect();
        assert_eq!(distances, vec![4.0, 5.0, 4.0]);
    }

    #[test]
    fn reported_distance_matches_recomputed_euclidean_distance() {
        let mut records: Vec<_> = (0..5).map(|i| record('A', 'A', i as f64)).collect();
        records[4].position = Point3::new(3.0, 4.0, 12.0);
        let samples = intrachain_distances(&records);
        assert_eq!(samples.len(), 1);
        assert!((samples[0].distance - 13.0).abs() < 1e-12);
    }
}
