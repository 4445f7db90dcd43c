//! Directory listing for folder- and file-backed sources.
//!
//! Only the immediate children of the directory are considered; entries are
//! filtered by the supported-extension predicate and sorted by name.

use std::path::Path;

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::error::SourceError;
use crate::models::is_supported_image;

/// Lists the supported image file names directly inside `dir`, sorted.
pub fn list_directory(dir: &Path) -> Result<Vec<String>, SourceError> {
    if !dir.exists() {
        return Err(SourceError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(SourceError::NotADirectory(dir.to_path_buf()));
    }
    // Surface permission problems on the directory itself as a load error
    // rather than an empty listing.
    std::fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut names = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping non UTF-8 file name {:?}", entry.path());
            continue;
        };

        if is_supported_image(name) {
            names.push(name.to_string());
        } else {
            trace!("Ignoring {:?}", entry.path());
        }
    }

    names.sort();
    debug!("Listed {} images in {:?}", names.len(), dir);
    Ok(names)
}
