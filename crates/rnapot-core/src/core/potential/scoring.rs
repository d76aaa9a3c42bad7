use crate::core::io::score_table::ScoreTable;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Strategy for mapping a distance onto a score-table entry.
///
/// Both variants are deliberately kept: historical revisions of the scoring
/// tool disagreed on which one is canonical, so the choice is explicit
/// configuration rather than a hardcoded behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterpolationMode {
    /// Return the table value of the distance's floor bin unmodified.
    ExactLookup,
    /// Linearly interpolate between the floor bin and the next one, using the
    /// fractional part of the distance as the weight. The last valid bin is
    /// never extrapolated past.
    #[default]
    LinearInterpolation,
}

/// Which per-sample scores survive into the aggregated energy sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPolicy {
    /// Drop NaN scores only; infinite scores propagate into the sum.
    ExcludeNanOnly,
    /// Drop both NaN and infinite scores.
    #[default]
    ExcludeNanAndInf,
}

impl InterpolationMode {
    /// Evaluates `table` at `distance`.
    ///
    /// A distance whose floor index lies outside the table returns the +∞
    /// out-of-range sentinel, never an out-of-bounds failure; this also
    /// covers tables persisted with fewer entries than expected.
    pub fn evaluate(&self, distance: f64, table: &ScoreTable) -> f64 {
        if distance < 0.0 {
            return f64::INFINITY;
        }
        let index = distance.floor() as usize;
        let Some(score) = table.get(index) else {
            return f64::INFINITY;
        };

        match self {
            Self::ExactLookup => score,
            Self::LinearInterpolation => match table.get(index + 1) {
                Some(next) => score + (distance - index as f64) * (next - score),
                None => score,
            },
        }
    }
}

impl FilterPolicy {
    /// Whether a per-sample score participates in the energy sum.
    pub fn retains(&self, score: f64) -> bool {
        match self {
            Self::ExcludeNanOnly => !score.is_nan(),
            Self::ExcludeNanAndInf => score.is_finite(),
        }
    }
}

/// Scoring-path configuration: interpolation strategy, filter policy, and
/// optionally the directory holding the score files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScoringOptions {
    pub mode: InterpolationMode,
    pub filter: FilterPolicy,
    pub scores_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ScoringOptionsError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}", path = path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ScoringOptions {
    /// Loads options from a TOML file; absent keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ScoringOptionsError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScoringOptionsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ScoringOptionsError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
