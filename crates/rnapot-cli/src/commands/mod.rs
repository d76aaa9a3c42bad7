pub mod score;
pub mod train;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// The .pdb files directly inside `dir`, sorted for deterministic processing
/// order. An empty directory is a legal, empty batch.
pub(crate) fn pdb_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdb"))
        {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
