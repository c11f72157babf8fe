use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SharpscoreError};

/// True if the file name of `path` ends in `.` plus one of `extensions`,
/// compared case-insensitively.
///
/// Extensions are given without the leading dot; a leading dot is tolerated.
/// A bare dotfile such as `.jpg` counts as a match.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    extensions.iter().any(|want| {
        let suffix = format!(".{}", want.trim_start_matches('.').to_ascii_lowercase());
        name.ends_with(&suffix)
    })
}

/// List the image files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. A directory that cannot be read
/// fails the whole call; there is nothing to score in it.
pub fn discover_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| SharpscoreError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() && !path.is_file() {
            continue;
        }
        if has_extension(&path, extensions) {
            files.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-matching file");
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Try `extensions` one at a time and return the files of the first one that
/// matches anything, so `["jpg", "jpeg"]` only falls back to `.jpeg` files
/// when the directory holds no `.jpg` at all.
pub fn discover_first_match(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    for ext in extensions {
        let files = discover_images(dir, std::slice::from_ref(ext))?;
        if !files.is_empty() {
            debug!(
                directory = %dir.display(),
                extension = %ext,
                files = files.len(),
                "Matched extension"
            );
            return Ok(files);
        }
    }
    Ok(Vec::new())
}
