use nalgebra::Point3;

/// A single reference-atom record extracted from a structure file.
///
/// One record is produced per reference atom (the C3' ribose backbone carbon,
/// which stands in for the whole residue), in file order. Records are immutable
/// once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Atom name as it appears in the file, trimmed (e.g. `C3'`).
    pub atom_name: String,
    /// One-letter nucleotide identity (A, U, G or C in standard structures).
    pub nucleotide: char,
    /// Chain identifier.
    pub chain: char,
    /// Residue sequence number within the chain.
    pub residue_number: i32,
    /// Cartesian coordinates in Ångström.
    pub position: Point3<f64>,
}
