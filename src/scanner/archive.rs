//! Zip archive access for archive-backed sources.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::ZipArchive;

use crate::error::{DecodeError, SourceError};
use crate::models::is_supported_image;

/// Upper bound on the buffer reserved up front for a member.
const MAX_PREALLOC: u64 = 64 << 20;

/// An open zip archive. The file handle is released when this is dropped.
pub struct ArchiveReader {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl std::fmt::Debug for ArchiveReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveReader")
            .field("path", &self.path)
            .field("members", &self.archive.len())
            .finish()
    }
}

impl ArchiveReader {
    /// Opens and validates a zip archive.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = ZipArchive::new(file).map_err(|source| SourceError::InvalidArchive {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Opened archive {:?} ({} members)", path, archive.len());
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Supported image member names, sorted. Directory members are skipped.
    pub fn image_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .filter(|name| is_supported_image(name))
            .map(str::to_string)
            .collect();
        names.sort();
        debug!("Archive {:?} lists {} images", self.path, names.len());
        names
    }

    /// Reads a member's bytes.
    pub fn read(&mut self, name: &str) -> Result<Vec<u8>, DecodeError> {
        let mut member = self
            .archive
            .by_name(name)
            .map_err(|source| DecodeError::Archive {
                name: name.to_string(),
                source,
            })?;
        // The declared size is untrusted
        let mut bytes = Vec::with_capacity(member.size().min(MAX_PREALLOC) as usize);
        member
            .read_to_end(&mut bytes)
            .map_err(|source| DecodeError::Read {
                name: name.to_string(),
                source,
            })?;
        Ok(bytes)
    }
}
