pub mod keybindings;
pub mod state;

pub use keybindings::{Action, Keybindings};
pub use state::{NavStatus, Navigator, Side, Spread, ViewMode};
