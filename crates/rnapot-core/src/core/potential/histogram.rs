use super::distances::DistanceSample;
use crate::core::models::pair::PairKey;
use std::collections::BTreeMap;

/// Number of unit-width distance bins. Matches the sampling cutoff, so the
/// histogram domain is [0, 20).
pub const BIN_COUNT: usize = 20;

/// Frequencies (or counts normalized to frequencies) over the fixed bins.
pub type Frequencies = [f64; BIN_COUNT];

/// The bin a distance falls in, `floor(d)`, or `None` outside [0, BIN_COUNT).
///
/// Samples at exactly the sampling cutoff pass sampling but lie outside the
/// binned domain; they are left unbinned rather than folded into the last bin.
fn bin_index(distance: f64) -> Option<usize> {
    if distance < 0.0 {
        return None;
    }
    let index = distance.floor() as usize;
    (index < BIN_COUNT).then_some(index)
}

/// Groups sample distances by unordered pair identity in a single pass.
///
/// A sample matches a pair regardless of its own field order; the returned map
/// covers exactly the set of pairs actually observed in the corpus.
pub fn group_by_pair(samples: &[DistanceSample]) -> BTreeMap<PairKey, Vec<f64>> {
    let mut groups: BTreeMap<PairKey, Vec<f64>> = BTreeMap::new();
    for sample in samples {
        groups.entry(sample.pair_key()).or_default().push(sample.distance);
    }
    groups
}

/// Bins a distance list into [`BIN_COUNT`] observed frequencies.
///
/// Each frequency is the bin count divided by the total number of distances;
/// an empty list yields all zeros rather than a division by zero.
pub fn frequency_histogram(distances: &[f64]) -> Frequencies {
    let mut counts = [0usize; BIN_COUNT];
    for &distance in distances {
        if let Some(index) = bin_index(distance) {
            counts[index] += 1;
        }
    }

    let mut frequencies = [0.0; BIN_COUNT];
    if !distances.is_empty() {
        let total = distances.len() as f64;
        for (frequency, count) in frequencies.iter_mut().zip(counts) {
            *frequency = count as f64 / total;
        }
    }
    frequencies
}

/// Per-pair observed frequency histograms for every grouped pair.
pub fn observed_frequencies(
    groups: &BTreeMap<PairKey, Vec<f64>>,
) -> BTreeMap<PairKey, Frequencies> {
    groups
        .iter()
        .map(|(pair, distances)| (*pair, frequency_histogram(distances)))
        .collect()
}

/// The corpus-wide reference frequency histogram over all samples, ungrouped.
pub fn reference_frequency(samples: &[DistanceSample]) -> Frequencies {
    let distances: Vec<f64> = samples.iter().map(|s| s.distance).collect();
    frequency_histogram(&distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(a: char, b: char, distance: f64) -> DistanceSample {
        DistanceSample {
            nucleotide_a: a,
            nucleotide_b: b,
            distance,
        }
    }

    #[test]
    fn distances_are_assigned_to_their_floor_bin() {
        let frequencies = frequency_histogram(&[0.0, 0.99, 1.0, 19.999]);
        assert!((frequencies[0] - 0.5).abs() < 1e-12);
        assert!((frequencies[1] - 0.25).abs() < 1e-12);
        assert!((frequencies[19] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn an_empty_distance_list_yields_all_zero_frequencies() {
        assert_eq!(frequency_histogram(&[]), [0.0; BIN_COUNT]);
    }

    #[test]
    fn frequencies_of_binned_distances_sum_to_one() {
        let distances = [0.5, 3.2, 3.9, 7.7, 12.0, 19.0];
        let sum: f64 = frequency_histogram(&distances).iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn a_distance_at_the_cutoff_is_counted_in_the_total_but_not_binned() {
        let frequencies = frequency_histogram(&[1.5, 20.0]);
        assert!((frequencies[1] - 0.5).abs() < 1e-12);
        let sum: f64 = frequencies.iter().sum();
        assert!((sum - 0.5).abs() < 1e-12);
    }

    #[test]
    fn grouping_matches_samples_regardless_of_field_order() {
        let samples = [
            sample('A', 'U', 1.0),
            sample('U', 'A', 2.0),
            sample('G', 'G', 3.0),
        ];
        let groups = group_by_pair(&samples);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&PairKey::new('A', 'U')], vec![1.0, 2.0]);
        assert_eq!(groups[&PairKey::new('G', 'G')], vec![3.0]);
    }

    #[test]
    fn reference_frequency_pools_all_samples_across_pairs() {
        let samples = [
            sample('A', 'U', 0.5),
            sample('G', 'C', 0.7),
            sample('G', 'G', 5.5),
            sample('U', 'U', 5.9),
        ];
        let reference = reference_frequency(&samples);
        assert!((reference[0] - 0.5).abs() < 1e-12);
        assert!((reference[5] - 0.5).abs() < 1e-12);
    }
}
