//! The viewing session: everything between shell events and the frame the
//! canvas draws.

pub mod controller;
pub mod debounce;
pub mod display;
pub mod pan;

pub use controller::{DeleteOutcome, LoadSummary, Outcome, Session, ShellRequest};
pub use debounce::{ResizeDebouncer, TimerHandle};
pub use display::{Content, Display, APP_TITLE};
pub use pan::PanState;
