use phf::{Map, phf_map};
use std::fmt;

/// Score file names for the 10 unordered nucleotide pairs, keyed by the
/// canonical (sorted) pair. The directionality baked into each name is fixed:
/// both lookup orders of a pair resolve to the same file.
static SCORE_FILE_NAMES: Map<&'static str, &'static str> = phf_map! {
    "AA" => "A_A_scores.txt",
    "AC" => "A_C_scores.txt",
    "AG" => "A_G_scores.txt",
    "AU" => "A_U_scores.txt",
    "CC" => "C_C_scores.txt",
    "CG" => "C_G_scores.txt",
    "CU" => "C_U_scores.txt",
    "GG" => "G_G_scores.txt",
    "GU" => "G_U_scores.txt",
    "UU" => "U_U_scores.txt",
};

/// An unordered pair of nucleotide identities, used as a score-table index.
///
/// Construction canonicalizes the two nucleotides by sorting them, so
/// `PairKey::new('U', 'A')` and `PairKey::new('A', 'U')` are the same key and
/// resolve to the same score table. `Ord` follows the canonical order, which
/// gives deterministic iteration when keys are collected into a `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: char,
    second: char,
}

impl PairKey {
    pub fn new(a: char, b: char) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The lexicographically smaller nucleotide of the pair.
    pub fn first(&self) -> char {
        self.first
    }

    /// The lexicographically larger nucleotide of the pair.
    pub fn second(&self) -> char {
        self.second
    }

    /// File name holding this pair's persisted score table, or `None` when the
    /// pair lies outside the standard {A, U, G, C} alphabet.
    pub fn score_file_name(&self) -> Option<&'static str> {
        let mut key = String::with_capacity(2);
        key.push(self.first);
        key.push(self.second);
        SCORE_FILE_NAMES.get(key.as_str()).copied()
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
