//! Provides input/output functionality for structure files and score tables.
//!
//! Structure files are fixed-column text in the PDB convention ([`pdb`]);
//! score tables are plain text, one floating-point value per line, named per
//! nucleotide pair ([`score_table`]).

pub mod pdb;
pub mod score_table;
