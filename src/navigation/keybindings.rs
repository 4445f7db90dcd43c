// Keybindings for the image viewer
// Maps key names delivered by the shell to viewer actions
//
// Keybindings:
// - a / d: Previous / next image
// - Left / Right: Previous / next image in fit mode, pan in pan mode
// - Up / Down: Pan
// - t: Cycle view mode (single, two pages previous-left, two pages next-left)
// - p: Toggle fit to window / original size
// - i: Toggle image information
// - BackSpace: Delete current file
// - o: Open file, r: Open folder, z: Open zip
// - f: Toggle fullscreen
// - q / Escape: Quit

use std::collections::HashMap;

/// Something the user asked for, independent of how it was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Next,
    Previous,
    /// Arrow keys; meaning depends on the fit mode.
    Left,
    Right,
    Up,
    Down,
    ToggleViewMode,
    ToggleFit,
    ToggleInfo,
    Delete,
    OpenFile,
    OpenFolder,
    OpenArchive,
    ToggleFullscreen,
    Quit,
}

/// Key name to action table.
#[derive(Debug, Clone)]
pub struct Keybindings {
    bindings: HashMap<String, Action>,
}

impl Keybindings {
    pub fn new() -> Self {
        let defaults = [
            ("a", Action::Previous),
            ("d", Action::Next),
            ("Left", Action::Left),
            ("Right", Action::Right),
            ("Up", Action::Up),
            ("Down", Action::Down),
            ("t", Action::ToggleViewMode),
            ("p", Action::ToggleFit),
            ("i", Action::ToggleInfo),
            ("BackSpace", Action::Delete),
            ("o", Action::OpenFile),
            ("r", Action::OpenFolder),
            ("z", Action::OpenArchive),
            ("f", Action::ToggleFullscreen),
            ("q", Action::Quit),
            ("Escape", Action::Quit),
        ];
        Self {
            bindings: defaults
                .into_iter()
                .map(|(key, action)| (key.to_string(), action))
                .collect(),
        }
    }

    /// Binds `key`, replacing any previous binding for it.
    pub fn bind(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    pub fn unbind(&mut self, key: &str) -> Option<Action> {
        self.bindings.remove(key)
    }

    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::new()
    }
}
