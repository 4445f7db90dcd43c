use std::time::Duration;

use crate::layout::Size;

/// Configuration for a viewing session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Quiet period after the last resize before the layout is recomputed.
    pub debounce: Duration,
    /// Resize notifications smaller than this in either axis are ignored.
    pub min_viewport_dimension: i32,
    /// Viewport size used until the shell reports a real one.
    pub initial_viewport: Size,
    /// Whether images start scaled to fit (otherwise native size with pan).
    pub fit_to_window: bool,
    /// Whether the size/name overlay starts visible.
    pub show_info: bool,
    /// Top-left corner of the info overlay.
    pub overlay_origin: (i32, i32),
    /// Image shown at start-up when present in the working directory.
    pub help_image: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(100),
            min_viewport_dimension: 10,
            initial_viewport: Size::new(800, 600),
            fit_to_window: true,
            show_info: true,
            overlay_origin: (10, 10),
            help_image: "HotKeys.png".to_string(),
        }
    }
}
