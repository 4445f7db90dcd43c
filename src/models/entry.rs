use std::path::Path;

/// Where the entries of an image source come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A single chosen file, browsed together with its folder.
    File,
    Folder,
    /// A zip archive; read-only.
    Archive,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Folder => "Folder",
            Self::Archive => "Archive",
        }
    }
}

/// Extensions the viewer will list, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Returns true if the name ends in one of the supported image extensions.
///
/// Works on archive member names as well as file names, so the name may
/// contain `/` separators.
pub fn is_supported_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
