use rnapot::core::io::pdb::PdbError;
use rnapot::core::io::score_table::ScoreTableError;
use rnapot::core::potential::scoring::ScoringOptionsError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to parse structure file '{path}': {source}", path = path.display())]
    StructureParsing {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error(transparent)]
    ScoreTable(#[from] ScoreTableError),

    #[error("Configuration error: {0}")]
    Config(#[from] ScoringOptionsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
