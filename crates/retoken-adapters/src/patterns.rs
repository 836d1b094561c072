//! Expansion of `--files` entries into concrete paths.
//!
//! Entries without glob metacharacters are passed through untouched, even if
//! the file does not exist (the substitution service skips missing files).
//! Glob entries expand to the regular files they match, in glob order; a
//! glob that matches nothing contributes nothing.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, warn};

use retoken_core::{application::ApplicationError, error::RetokenResult};

const GLOB_CHARS: [char; 3] = ['*', '?', '['];

/// Expand file entries, keeping entry order and dropping duplicates.
pub fn expand_file_patterns<S: AsRef<str>>(entries: &[S]) -> RetokenResult<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for entry in entries {
        let entry = entry.as_ref();
        if entry.trim().is_empty() {
            continue;
        }

        if !entry.contains(GLOB_CHARS) {
            if seen.insert(PathBuf::from(entry)) {
                paths.push(PathBuf::from(entry));
            }
            continue;
        }

        let matches = glob::glob(entry).map_err(|e| {
            ApplicationError::ValidationFailed(format!("invalid file pattern '{entry}': {e}"))
        })?;

        let mut matched = 0;
        for found in matches {
            let path = found.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().to_path_buf(),
                reason: format!("Failed to read while expanding '{entry}': {}", e.error()),
            })?;
            if !path.is_file() {
                continue;
            }
            matched += 1;
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }

        if matched == 0 {
            warn!(pattern = entry, "File pattern matched no files");
        } else {
            debug!(pattern = entry, matched, "Expanded file pattern");
        }
    }

    Ok(paths)
}
