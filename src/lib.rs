//! Image viewer core: browse a file's folder, a folder or a zip archive one
//! image or one two-page spread at a time.
//!
//! The crate is shell-agnostic. A shell forwards key presses, resizes and
//! picker results to a [`session::Session`] and renders the
//! [`session::Display`] it gets back.

pub mod config;
pub mod error;
pub mod image_loader;
pub mod layout;
pub mod models;
pub mod navigation;
pub mod scanner;
pub mod session;

pub use config::SessionConfig;
pub use error::{DecodeError, DeleteError, SourceError};
pub use session::{Display, Outcome, Session};
