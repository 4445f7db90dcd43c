//! Image sources: folders, a file's folder, or zip archives.

pub mod archive;
pub mod file_scanner;
pub mod image_source;

pub use image_source::ImageSource;
