//! # rnapot Core Library
//!
//! A library for deriving and applying a knowledge-based pairwise pseudo-energy
//! potential for RNA 3D structures.
//!
//! The potential is statistical, not physical: per-nucleotide-pair distance
//! distributions observed in a training corpus of solved structures are compared
//! against the corpus-wide background distribution, and the log-odds ratio of the
//! two becomes the score for each distance interval. Applying those scores to the
//! pairwise distances of a new structure yields an estimate of its Gibbs free
//! energy.
//!
//! ## Architecture
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Stateless data models ([`core::models`]),
//!   structure and score-table I/O ([`core::io`]), and the pure potential
//!   mathematics ([`core::potential`]): distance extraction, distribution
//!   building, score derivation, and interpolation.
//!
//! - **[`workflows`]: The Public API.** End-to-end pipelines that tie the core
//!   pieces together: [`workflows::train`] turns a corpus of structures into
//!   persisted score tables, and [`workflows::score`] turns a structure plus a
//!   score library into an energy estimate.

pub mod core;
pub mod workflows;
