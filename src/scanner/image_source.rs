//! The active collection of images.
//!
//! An `ImageSource` is built by one of the load operations and replaced
//! wholesale by the next one. It owns the sorted entry names and the backing
//! store they resolve against: a directory, or an open zip archive.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{DecodeError, DeleteError, SourceError};
use crate::image_loader;
use crate::models::{DecodedImage, SourceKind};
use crate::scanner::archive::ArchiveReader;
use crate::scanner::file_scanner::list_directory;

#[derive(Debug)]
enum Backing {
    Directory(PathBuf),
    Archive(ArchiveReader),
}

#[derive(Debug)]
pub struct ImageSource {
    kind: SourceKind,
    backing: Backing,
    entries: Vec<String>,
    initial_index: usize,
}

impl ImageSource {
    /// Loads a source of the given kind from `location`.
    ///
    /// For `File` the location is an image file; its folder becomes the
    /// source and its position the initial index.
    pub fn load(kind: SourceKind, location: &Path) -> Result<Self, SourceError> {
        let source = match kind {
            SourceKind::File => Self::load_file(location)?,
            SourceKind::Folder => Self::load_folder(location)?,
            SourceKind::Archive => Self::load_archive(location)?,
        };
        info!(
            "Loaded {} source {:?}: {} entries",
            kind.label(),
            location,
            source.entries.len()
        );
        Ok(source)
    }

    fn load_file(path: &Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let entries = list_directory(&dir)?;
        let initial_index = entries
            .iter()
            .position(|e| *e == name)
            .ok_or_else(|| SourceError::EntryNotFound {
                dir: dir.clone(),
                name,
            })?;

        Ok(Self {
            kind: SourceKind::File,
            backing: Backing::Directory(dir),
            entries,
            initial_index,
        })
    }

    fn load_folder(dir: &Path) -> Result<Self, SourceError> {
        let entries = list_directory(dir)?;
        Ok(Self {
            kind: SourceKind::Folder,
            backing: Backing::Directory(dir.to_path_buf()),
            entries,
            initial_index: 0,
        })
    }

    fn load_archive(path: &Path) -> Result<Self, SourceError> {
        let reader = ArchiveReader::open(path)?;
        let entries = reader.image_names();
        Ok(Self {
            kind: SourceKind::Archive,
            backing: Backing::Archive(reader),
            entries,
            initial_index: 0,
        })
    }

    /// The start-up source: just the help image if `dir` contains it.
    pub fn help(dir: &Path, help_image: &str) -> Self {
        let entries = if dir.join(help_image).is_file() {
            vec![help_image.to_string()]
        } else {
            Vec::new()
        };
        Self {
            kind: SourceKind::File,
            backing: Backing::Directory(dir.to_path_buf()),
            entries,
            initial_index: 0,
        }
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Folder path or archive path this source reads from.
    pub fn location(&self) -> &Path {
        match &self.backing {
            Backing::Directory(dir) => dir,
            Backing::Archive(reader) => reader.path(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Index the session should start at after this load.
    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    /// Reads and decodes the entry at `index`.
    pub fn decode(&mut self, index: usize) -> Result<DecodedImage, DecodeError> {
        let name = self
            .entries
            .get(index)
            .cloned()
            .ok_or(DecodeError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })?;

        let bytes = match &mut self.backing {
            Backing::Directory(dir) => {
                let path = dir.join(&name);
                std::fs::read(&path).map_err(|source| DecodeError::Read {
                    name: name.clone(),
                    source,
                })?
            }
            Backing::Archive(reader) => reader.read(&name)?,
        };

        let decoded = image_loader::decode_bytes(&name, bytes);
        if let Err(e) = &decoded {
            warn!("Failed to decode {}: {}", name, e);
        }
        decoded
    }

    /// Permanently deletes the entry's file, then drops it from the list.
    ///
    /// The list is only modified once the file is gone.
    pub fn delete_entry(&mut self, index: usize) -> Result<(), DeleteError> {
        let dir = match &self.backing {
            Backing::Archive(_) => return Err(DeleteError::UnsupportedOperation),
            Backing::Directory(dir) => dir,
        };
        let name = self.entries.get(index).ok_or(DeleteError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })?;

        let path = dir.join(name);
        std::fs::remove_file(&path).map_err(|source| DeleteError::Io {
            path: path.clone(),
            source,
        })?;

        self.entries.remove(index);
        info!("Deleted {:?}", path);
        Ok(())
    }

    /// Re-reads the entry names from the backing store.
    pub fn relist(&mut self) -> Result<usize, SourceError> {
        self.entries = match &self.backing {
            Backing::Directory(dir) => list_directory(dir)?,
            Backing::Archive(reader) => reader.image_names(),
        };
        debug!("Relisted {:?}: {} entries", self.location(), self.entries.len());
        Ok(self.entries.len())
    }
}
