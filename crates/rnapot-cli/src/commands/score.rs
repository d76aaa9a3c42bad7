use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use rnapot::core::io::pdb;
use rnapot::core::io::score_table::ScoreLibrary;
use rnapot::core::potential::scoring::ScoringOptions;
use rnapot::workflows;
use rnapot::workflows::score::EnergyEstimate;
use std::path::{Path, PathBuf};
use tracing::{error, info};

const DEFAULT_SCORES_DIR: &str = "data/scores";

pub fn run(args: ScoreArgs) -> Result<()> {
    let mut options = match &args.config {
        Some(path) => ScoringOptions::load(path)?,
        None => ScoringOptions::default(),
    };
    if let Some(mode) = args.mode {
        options.mode = mode.into();
    }
    if let Some(filter) = args.filter {
        options.filter = filter.into();
    }

    let scores_dir: PathBuf = args
        .scores_dir
        .clone()
        .or_else(|| options.scores_dir.clone())
        .unwrap_or_else(|| DEFAULT_SCORES_DIR.into());
    info!(
        mode = ?options.mode,
        filter = ?options.filter,
        scores_dir = %scores_dir.display(),
        "Scoring configuration resolved."
    );
    let mut library = ScoreLibrary::new(scores_dir);

    match &args.input {
        Some(path) => {
            let estimate = score_file(path, &mut library, &options)?;
            println!("Estimated Gibbs Free Energy: {}", estimate.energy);
        }
        None => {
            for path in super::pdb_files_in(&args.examples_dir)? {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                match score_file(&path, &mut library, &options) {
                    Ok(estimate) => {
                        println!("Gibbs Free Energy for {}: {}", file_name, estimate.energy);
                    }
                    Err(e) => {
                        // One bad example must not abort the rest of the batch.
                        error!("Failed to score {:?}: {}", &path, e);
                        eprintln!("Failed to score '{}': {}", path.display(), e);
                    }
                }
            }
        }
    }

    Ok(())
}

fn score_file(
    path: &Path,
    library: &mut ScoreLibrary,
    options: &ScoringOptions,
) -> Result<EnergyEstimate> {
    let records =
        pdb::read_reference_atoms_from_path(path).map_err(|e| CliError::StructureParsing {
            path: path.to_path_buf(),
            source: e,
        })?;
    info!(structure = ?path, atoms = records.len(), "Structure loaded.");

    Ok(workflows::score::run(&records, library, options)?)
}
