//! # Core Module
//!
//! The computational core of the library: everything needed to go from a raw
//! structure file to pairwise distance samples, and from distance samples to
//! pseudo-energy scores.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Reference-atom records and the
//!   unordered nucleotide-pair key used to index score tables
//! - **File I/O** ([`io`]) - Fixed-column structure parsing and score-table
//!   persistence
//! - **Potential Mathematics** ([`potential`]) - Distance extraction, frequency
//!   histograms, log-odds score derivation, and interpolation-based scoring

pub mod io;
pub mod models;
pub mod potential;
