use crate::core::io::score_table::{ScoreLibrary, ScoreTableError};
use crate::core::models::atom::AtomRecord;
use crate::core::potential::distances::intrachain_distances;
use crate::core::potential::scoring::ScoringOptions;
use tracing::{debug, info};

/// The estimated Gibbs free energy of one structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyEstimate {
    /// Sum of the per-sample scores that survived the filter policy.
    pub energy: f64,
    /// Samples whose score entered the sum.
    pub samples_scored: usize,
    /// All qualifying distance samples of the structure.
    pub samples_total: usize,
}

/// Scores one structure against a score library.
///
/// Every qualifying distance sample is looked up in its pair's table (loaded
/// lazily from the library) and evaluated under the configured interpolation
/// mode; the filter policy then decides which scores enter the sum. A pair
/// without a usable score file aborts the estimate.
pub fn run(
    records: &[AtomRecord],
    library: &mut ScoreLibrary,
    options: &ScoringOptions,
) -> Result<EnergyEstimate, ScoreTableError> {
    let samples = intrachain_distances(records);

    let mut energy = 0.0;
    let mut samples_scored = 0usize;
    for sample in &samples {
        let table = library.table_for(sample.pair_key())?;
        let score = options.mode.evaluate(sample.distance, table);
        if options.filter.retains(score) {
            energy += score;
            samples_scored += 1;
        } else {
            debug!(
                distance = sample.distance,
                pair = %sample.pair_key(),
                "Sample score filtered out of the energy sum."
            );
        }
    }

    info!(
        samples = samples.len(),
        scored = samples_scored,
        energy,
        "Structure scored."
    );
    Ok(EnergyEstimate {
        energy,
        samples_scored,
        samples_total: samples.len(),
    })
}
