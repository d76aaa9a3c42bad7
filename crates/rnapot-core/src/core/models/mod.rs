//! Fundamental data structures shared by the training and scoring pipelines.

pub mod atom;
pub mod pair;
