use super::histogram::{BIN_COUNT, Frequencies};
use crate::core::io::score_table::ScoreTable;
use crate::core::models::pair::PairKey;
use std::collections::BTreeMap;

/// Converts one pair's observed frequencies into log-odds pseudo-energies.
///
/// score[i] = -ln(observed[i] / reference[i]) when both frequencies are
/// nonzero. A bin with no statistical support on either side scores +∞; the
/// sentinel is part of the table contract and must not be collapsed to 0 or
/// NaN.
pub fn pseudo_energy(observed: &Frequencies, reference: &Frequencies) -> Frequencies {
    let mut scores = [f64::INFINITY; BIN_COUNT];
    for ((score, &obs), &bg) in scores.iter_mut().zip(observed).zip(reference) {
        if obs != 0.0 && bg != 0.0 {
            *score = -(obs / bg).ln();
        }
    }
    scores
}

/// Derives the full mapping from pair identity to persisted-form score table.
pub fn derive_tables(
    observed: &BTreeMap<PairKey, Frequencies>,
    reference: &Frequencies,
) -> BTreeMap<PairKey, ScoreTable> {
    observed
        .iter()
        .map(|(pair, frequencies)| {
            (
                *pair,
                ScoreTable::new(pseudo_energy(frequencies, reference).to_vec()),
            )
        })
        .collect()
}
