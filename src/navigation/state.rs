//! Navigation state: which entry is current and how it is shown.
//!
//! The navigator only knows the entry count, never the entries themselves.
//! The session keeps the count in sync with the image source after loads,
//! deletions and re-lists.

use tracing::{debug, warn};

/// How many entries are shown at once, and in which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Single,
    /// Two pages: the previous entry on the left, the current on the right.
    PairedPrevLeft,
    /// Two pages: the current entry on the left, the next on the right.
    PairedNextLeft,
}

impl ViewMode {
    /// Next mode in the toggle cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Single => Self::PairedPrevLeft,
            Self::PairedPrevLeft => Self::PairedNextLeft,
            Self::PairedNextLeft => Self::Single,
        }
    }

    pub fn is_paired(self) -> bool {
        self != Self::Single
    }

    /// Entries advanced per navigation step.
    pub fn stride(self) -> usize {
        if self.is_paired() {
            2
        } else {
            1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStatus {
    /// Nothing to show.
    Empty,
    Valid(usize),
    /// The index went stale against a re-listed source.
    OutOfBounds { index: usize, entry_count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The entries to show for the current index and view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    Single(usize),
    Pair {
        left: usize,
        right: usize,
        /// Which pane holds the current entry.
        primary: Side,
    },
}

impl Spread {
    pub fn primary(&self) -> usize {
        match *self {
            Self::Single(index) => index,
            Self::Pair {
                left,
                right,
                primary,
            } => match primary {
                Side::Left => left,
                Side::Right => right,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    index: usize,
    entry_count: usize,
    view_mode: ViewMode,
    fit_to_window: bool,
    show_info: bool,
}

impl Navigator {
    pub fn new(fit_to_window: bool, show_info: bool) -> Self {
        Self {
            index: 0,
            entry_count: 0,
            view_mode: ViewMode::Single,
            fit_to_window,
            show_info,
        }
    }

    /// Points the navigator at a freshly loaded source.
    pub fn reset(&mut self, entry_count: usize, initial_index: usize) {
        self.entry_count = entry_count;
        self.index = initial_index.min(entry_count.saturating_sub(1));
        debug!(entry_count, index = self.index, "Navigation reset");
    }

    pub fn status(&self) -> NavStatus {
        if self.entry_count == 0 {
            NavStatus::Empty
        } else if self.index < self.entry_count {
            NavStatus::Valid(self.index)
        } else {
            NavStatus::OutOfBounds {
                index: self.index,
                entry_count: self.entry_count,
            }
        }
    }

    /// Raw index, meaningful only when the status is `Valid`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn fit_to_window(&self) -> bool {
        self.fit_to_window
    }

    pub fn show_info(&self) -> bool {
        self.show_info
    }

    /// Panning is only possible at native size.
    pub fn pan_enabled(&self) -> bool {
        !self.fit_to_window
    }

    fn last_index(&self) -> usize {
        self.entry_count.saturating_sub(1)
    }

    /// Advances by the view mode's stride. Returns false when nothing moved.
    pub fn step_next(&mut self) -> bool {
        if self.entry_count == 0 {
            return false;
        }
        let old = self.index;
        self.index = self
            .index
            .saturating_add(self.view_mode.stride())
            .min(self.last_index());
        old != self.index
    }

    /// Retreats by the view mode's stride. Returns false when nothing moved.
    pub fn step_previous(&mut self) -> bool {
        if self.entry_count == 0 {
            return false;
        }
        let old = self.index;
        self.index = self
            .index
            .saturating_sub(self.view_mode.stride())
            .min(self.last_index());
        old != self.index
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.next();
        debug!(mode = ?self.view_mode, "View mode changed");
        self.view_mode
    }

    pub fn toggle_fit(&mut self) -> bool {
        self.fit_to_window = !self.fit_to_window;
        self.fit_to_window
    }

    pub fn toggle_info(&mut self) -> bool {
        self.show_info = !self.show_info;
        self.show_info
    }

    /// Adjusts the index after the entry at `deleted` was removed.
    pub fn on_entry_deleted(&mut self, deleted: usize) {
        if deleted >= self.entry_count {
            warn!(
                deleted,
                entry_count = self.entry_count,
                "Ignoring deletion of unknown entry"
            );
            return;
        }

        self.entry_count -= 1;
        if self.entry_count == 0 {
            self.index = 0;
            return;
        }
        if deleted < self.index {
            self.index -= 1;
        }
        self.index = self.index.min(self.last_index());
    }

    /// Takes a new entry count from an external re-list. The index is kept
    /// as is, so a stale index shows up as `OutOfBounds`.
    pub fn sync_entry_count(&mut self, entry_count: usize) -> NavStatus {
        self.entry_count = entry_count;
        self.status()
    }

    /// Entries to show now; `None` unless the status is `Valid`.
    ///
    /// A pair degrades to a single entry at the edge of the collection.
    pub fn spread(&self) -> Option<Spread> {
        let NavStatus::Valid(index) = self.status() else {
            return None;
        };
        let spread = match self.view_mode {
            ViewMode::Single => Spread::Single(index),
            ViewMode::PairedPrevLeft if index > 0 => Spread::Pair {
                left: index - 1,
                right: index,
                primary: Side::Right,
            },
            ViewMode::PairedNextLeft if index < self.last_index() => Spread::Pair {
                left: index,
                right: index + 1,
                primary: Side::Left,
            },
            ViewMode::PairedPrevLeft | ViewMode::PairedNextLeft => Spread::Single(index),
        };
        Some(spread)
    }
}
