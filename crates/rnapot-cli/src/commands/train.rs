use crate::cli::TrainArgs;
use crate::error::Result;
use rnapot::core::io::pdb;
use rnapot::core::io::score_table::write_summary_csv;
use rnapot::core::models::atom::AtomRecord;
use rnapot::workflows;
use tracing::{info, warn};

pub fn run(args: TrainArgs) -> Result<()> {
    info!("Collecting training structures from {:?}", &args.train_dir);

    let mut corpus: Vec<Vec<AtomRecord>> = Vec::new();
    for path in super::pdb_files_in(&args.train_dir)? {
        match pdb::read_reference_atoms_from_path(&path) {
            Ok(records) => corpus.push(records),
            Err(e) => {
                warn!("Skipping training file {:?}: {}", &path, e);
                eprintln!("Warning: skipping '{}': {}", path.display(), e);
            }
        }
    }
    info!(structures = corpus.len(), "Training corpus parsed.");

    let result = workflows::train::run(corpus);

    std::fs::create_dir_all(&args.output_dir)?;
    let written = workflows::train::write_score_files(&result, &args.output_dir)?;
    for path in &written {
        println!("File '{}' created.", path.display());
    }

    let summary_path = args.output_dir.join(&args.summary);
    write_summary_csv(&result.tables, &summary_path)?;
    println!("CSV file generated.");

    info!(
        tables = result.tables.len(),
        samples = result.sample_count,
        "Training complete."
    );
    println!("Processing complete.");
    Ok(())
}
