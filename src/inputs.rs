//! Expansion of command-line inputs into DDL files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Expand files, directories and glob patterns into a list of `.sql` files.
///
/// Directories are walked recursively and contribute `*.sql` files in name
/// order. Glob patterns keep every regular file they match. Plain file paths
/// are taken as given, whatever their extension. Duplicates are dropped,
/// keeping the first occurrence.
pub fn collect_sql_files(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if is_glob(input) {
            let paths = glob::glob(input).with_context(|| format!("Invalid glob pattern: {}", input))?;
            let before = files.len();
            for entry in paths.filter_map(|p| p.ok()) {
                if entry.is_file() {
                    files.push(entry);
                }
            }
            if files.len() == before {
                tracing::warn!("pattern {} matched no files", input);
            }
        } else if path.is_dir() {
            files.extend(walk_sql_files(path));
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            bail!("Input not found: {}", input);
        }
    }

    let mut seen = HashSet::new();
    files.retain(|file| seen.insert(file.clone()));
    Ok(files)
}

fn is_glob(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn walk_sql_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
        })
        .collect()
}
