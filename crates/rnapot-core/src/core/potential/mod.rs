//! # Potential Module
//!
//! The pure mathematics of the statistical potential.
//!
//! ## Overview
//!
//! Training compares how often a given nucleotide pair is observed at a given
//! C3'-C3' distance against how often *any* pair is observed at that distance,
//! and turns the ratio into a log-odds score. Scoring maps the distances of a
//! new structure back through those score tables.
//!
//! ## Key Components
//!
//! - [`distances`] - Qualifying pairwise intrachain distance extraction
//! - [`histogram`] - Per-pair grouping and fixed-width frequency histograms
//! - [`derive`] - Log-odds pseudo-energy derivation from frequency histograms
//! - [`scoring`] - Table lookup and interpolation, with explicit mode and
//!   filter-policy configuration

pub mod derive;
pub mod distances;
pub mod histogram;
pub mod scoring;
