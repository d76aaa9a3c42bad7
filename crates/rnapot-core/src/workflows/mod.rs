//! # Workflows Module
//!
//! The highest-level, user-facing layer: complete pipelines built from the
//! [`crate::core`] pieces.
//!
//! - [`train`] - Derive per-pair score tables from a corpus of structures and
//!   persist them.
//! - [`score`] - Estimate the Gibbs free energy of one structure against a
//!   score library.
//!
//! Both workflows take already-parsed atom records, keeping filesystem
//! traversal and argument handling at the caller's side and the pipelines
//! testable with in-memory fixtures.

pub mod score;
pub mod train;
