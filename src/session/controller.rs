//! The session controller.
//!
//! Owns the active image source, the navigation state, the layout engine and
//! the viewport bookkeeping (size, resize debounce, pan offset). The shell
//! feeds it events and renders the `Display` it returns; nothing here draws.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use super::debounce::{ResizeDebouncer, TimerHandle};
use super::display::{Content, Display, APP_TITLE};
use super::pan::PanState;
use crate::config::SessionConfig;
use crate::error::{DeleteError, SourceError};
use crate::layout::{LayoutEngine, PlanOptions, RenderPlan, Size};
use crate::models::{DecodedImage, SourceKind};
use crate::navigation::{Action, NavStatus, Navigator, Side, Spread};
use crate::scanner::ImageSource;

/// Something only the shell can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellRequest {
    PickFile,
    PickFolder,
    PickArchive,
    /// Ask the user to confirm deleting the named entry, then call
    /// [`Session::delete_current`].
    ConfirmDelete(String),
    ToggleFullscreen,
    Quit,
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; call [`Session::display`].
    Redraw,
    Unchanged,
    /// A message for the user; state is unchanged.
    Notice(String),
    Shell(ShellRequest),
}

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub kind: SourceKind,
    pub entry_count: usize,
    pub initial_index: usize,
}

impl LoadSummary {
    /// Message to show when the load found nothing to display.
    pub fn notice(&self) -> Option<String> {
        if self.entry_count > 0 {
            return None;
        }
        let place = match self.kind {
            SourceKind::Archive => "the zip archive",
            SourceKind::Folder | SourceKind::File => "the selected folder",
        };
        Some(format!("No supported image files found in {place}."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    NothingToDelete,
    Declined,
    Deleted(String),
}

pub struct Session {
    config: SessionConfig,
    source: ImageSource,
    nav: Navigator,
    engine: LayoutEngine,
    viewport: Size,
    debouncer: ResizeDebouncer,
    pan: PanState,
    /// Scroll region of the last plan shown in pan mode.
    content_extent: Option<Size>,
}

impl Session {
    /// Starts a session showing the help image from `start_dir`, if any.
    pub fn new(config: SessionConfig, start_dir: &Path) -> Self {
        let source = ImageSource::help(start_dir, &config.help_image);
        Self::with_source(config, source)
    }

    pub fn with_source(config: SessionConfig, source: ImageSource) -> Self {
        let mut nav = Navigator::new(config.fit_to_window, config.show_info);
        nav.reset(source.entry_count(), source.initial_index());
        Self {
            engine: LayoutEngine::new(config.overlay_origin),
            viewport: config.initial_viewport,
            debouncer: ResizeDebouncer::new(config.debounce),
            pan: PanState::default(),
            content_extent: None,
            source,
            nav,
            config,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn pan_offset(&self) -> (i32, i32) {
        self.pan.offset()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replaces the active source. On error the session is left as it was.
    pub fn load(&mut self, kind: SourceKind, location: &Path) -> Result<LoadSummary, SourceError> {
        let source = ImageSource::load(kind, location)?;
        let summary = LoadSummary {
            kind,
            entry_count: source.entry_count(),
            initial_index: source.initial_index(),
        };

        let previous = std::mem::replace(&mut self.source, source);
        debug!("Closing previous {} source {:?}", previous.kind().label(), previous.location());
        drop(previous);

        self.nav.reset(summary.entry_count, summary.initial_index);
        self.pan.reset();
        info!(
            "Session now browsing {:?} ({} entries)",
            location, summary.entry_count
        );
        Ok(summary)
    }

    /// Loads a picker result. `None` means the user cancelled: nothing happens.
    pub fn load_selection(
        &mut self,
        kind: SourceKind,
        selection: Option<PathBuf>,
    ) -> Result<Option<LoadSummary>, SourceError> {
        match selection {
            Some(path) => self.load(kind, &path).map(Some),
            None => {
                debug!("{} selection cancelled", kind.label());
                Ok(None)
            }
        }
    }

    /// Re-lists the source after changes made outside the viewer.
    pub fn refresh(&mut self) -> Result<NavStatus, SourceError> {
        let count = self.source.relist()?;
        let status = self.nav.sync_entry_count(count);
        if let NavStatus::OutOfBounds { index, entry_count } = status {
            warn!(index, entry_count, "Current index is stale after re-list");
        }
        Ok(status)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn pan_step(&self) -> (i32, i32) {
        ((self.viewport.width / 10).max(1), (self.viewport.height / 10).max(1))
    }

    fn step(&mut self, forward: bool) -> Outcome {
        let moved = if forward {
            self.nav.step_next()
        } else {
            self.nav.step_previous()
        };
        if moved {
            self.pan.reset();
            debug!(index = self.nav.index(), "Stepped");
            Outcome::Redraw
        } else {
            Outcome::Unchanged
        }
    }

    fn pan_outcome(&mut self, dx: i32, dy: i32) -> Outcome {
        if self.pan_by(dx, dy) {
            Outcome::Redraw
        } else {
            Outcome::Unchanged
        }
    }

    /// Applies a user action.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let (step_x, step_y) = self.pan_step();
        match action {
            Action::Next => self.step(true),
            Action::Previous => self.step(false),
            Action::Left if self.nav.fit_to_window() => self.step(false),
            Action::Right if self.nav.fit_to_window() => self.step(true),
            Action::Left => self.pan_outcome(-step_x, 0),
            Action::Right => self.pan_outcome(step_x, 0),
            Action::Up => self.pan_outcome(0, -step_y),
            Action::Down => self.pan_outcome(0, step_y),
            Action::ToggleViewMode => {
                self.nav.toggle_view_mode();
                self.pan.reset();
                Outcome::Redraw
            }
            Action::ToggleFit => {
                self.nav.toggle_fit();
                self.pan.reset();
                Outcome::Redraw
            }
            Action::ToggleInfo => {
                self.nav.toggle_info();
                Outcome::Redraw
            }
            Action::Delete => self.request_delete(),
            Action::OpenFile => Outcome::Shell(ShellRequest::PickFile),
            Action::OpenFolder => Outcome::Shell(ShellRequest::PickFolder),
            Action::OpenArchive => Outcome::Shell(ShellRequest::PickArchive),
            Action::ToggleFullscreen => Outcome::Shell(ShellRequest::ToggleFullscreen),
            Action::Quit => Outcome::Shell(ShellRequest::Quit),
        }
    }

    fn request_delete(&self) -> Outcome {
        let NavStatus::Valid(index) = self.nav.status() else {
            return Outcome::Unchanged;
        };
        if self.source.kind() == SourceKind::Archive {
            return Outcome::Notice(DeleteError::UnsupportedOperation.to_string());
        }
        match self.source.entry_name(index) {
            Some(name) => Outcome::Shell(ShellRequest::ConfirmDelete(name.to_string())),
            None => Outcome::Unchanged,
        }
    }

    /// Scrolls native-size content. Only possible in pan mode, after a plan
    /// has been displayed.
    pub fn pan_by(&mut self, dx: i32, dy: i32) -> bool {
        if !self.nav.pan_enabled() {
            return false;
        }
        let Some(extent) = self.content_extent else {
            return false;
        };
        self.pan.pan_by(dx, dy, extent, self.viewport)
    }

    /// Deletes the current entry's file after `confirm` approves it.
    ///
    /// Archive entries are rejected before asking. If the file cannot be
    /// removed the entry list and index are left untouched.
    pub fn delete_current(
        &mut self,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<DeleteOutcome, DeleteError> {
        let NavStatus::Valid(index) = self.nav.status() else {
            return Ok(DeleteOutcome::NothingToDelete);
        };
        if self.source.kind() == SourceKind::Archive {
            warn!("Refusing to delete from archive {:?}", self.source.location());
            return Err(DeleteError::UnsupportedOperation);
        }
        let Some(name) = self.source.entry_name(index).map(str::to_string) else {
            return Ok(DeleteOutcome::NothingToDelete);
        };
        if !confirm(&name) {
            debug!("Deletion of {} declined", name);
            return Ok(DeleteOutcome::Declined);
        }

        if let Err(e) = self.source.delete_entry(index) {
            warn!("Could not delete {}: {}", name, e);
            return Err(e);
        }
        self.nav.on_entry_deleted(index);
        self.pan.reset();
        Ok(DeleteOutcome::Deleted(name))
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Records a resize notification. The layout is recomputed by
    /// [`Session::poll`] once resizing settles.
    pub fn on_resize(&mut self, width: i32, height: i32, now: Instant) -> Option<TimerHandle> {
        let min = self.config.min_viewport_dimension;
        if width < min || height < min {
            debug!(width, height, "Ignoring tiny resize");
            return None;
        }
        let handle = self.debouncer.schedule(Size::new(width, height), now);
        debug!(width, height, ?handle, "Resize scheduled");
        Some(handle)
    }

    /// When the shell should call [`Session::poll`] next.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debouncer.pending_deadline()
    }

    /// Recomputes the display if a settled resize is due.
    pub fn poll(&mut self, now: Instant) -> Option<Display> {
        let size = self.debouncer.poll(now)?;
        self.viewport = size;
        Some(self.display())
    }

    /// Recomputes the display for a shell timer that went off. Stale timers
    /// are ignored.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<Display> {
        let size = self.debouncer.fire(handle)?;
        self.viewport = size;
        Some(self.display())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Builds the frame for the current state.
    ///
    /// An explicit redraw supersedes any pending resize; its size is taken
    /// over immediately.
    pub fn display(&mut self) -> Display {
        if let Some(size) = self.debouncer.cancel() {
            self.viewport = size;
        }

        let Some(spread) = self.nav.spread() else {
            self.content_extent = None;
            self.pan.reset();
            return match self.nav.status() {
                NavStatus::OutOfBounds { index, .. } => Display {
                    title: format!("{APP_TITLE} - Bad Index"),
                    content: Content::Diagnostic(format!(
                        "Error: Image index {index} is out of bounds."
                    )),
                    pan_offset: (0, 0),
                },
                _ => self.welcome(),
            };
        };

        let index = spread.primary();
        let name = self.source.entry_name(index).unwrap_or_default().to_string();
        let primary = match self.source.decode(index) {
            Ok(image) => image,
            Err(e) => {
                self.content_extent = None;
                self.pan.reset();
                return Display {
                    title: format!("ERROR loading: {name}"),
                    content: Content::Diagnostic(format!(
                        "Error loading image:\n{name}\n\n{}",
                        error_chain(&e)
                    )),
                    pan_offset: (0, 0),
                };
            }
        };

        let Some(plan) = self.plan(spread, primary) else {
            return self.welcome();
        };

        self.content_extent = plan.scroll_region;
        if let Some(extent) = self.content_extent {
            self.pan.clamp(extent, self.viewport);
        } else {
            self.pan.reset();
        }

        let position = format!("[{}/{}]", index + 1, self.source.entry_count());
        let title = if self.nav.show_info() {
            format!("{position} - {APP_TITLE}")
        } else {
            format!("{position} - {name}")
        };

        Display {
            title,
            content: Content::Plan(plan),
            pan_offset: self.pan.offset(),
        }
    }

    fn welcome(&self) -> Display {
        Display {
            title: APP_TITLE.to_string(),
            content: Content::Welcome(format!(
                "Welcome! (Canvas: {}x{})\nLoad a file, folder, or zip to begin.",
                self.viewport.width, self.viewport.height
            )),
            pan_offset: (0, 0),
        }
    }

    fn plan(&mut self, spread: Spread, primary: DecodedImage) -> Option<RenderPlan> {
        let opts = PlanOptions {
            viewport: self.viewport,
            fit_to_window: self.nav.fit_to_window(),
            show_info: self.nav.show_info(),
        };

        match spread {
            Spread::Single(_) => Some(self.engine.plan_single(primary, opts)),
            Spread::Pair {
                left,
                right,
                primary: side,
            } => {
                let secondary_index = match side {
                    Side::Left => right,
                    Side::Right => left,
                };
                // A broken neighbour only costs the spread, not the page.
                let secondary = match self.source.decode(secondary_index) {
                    Ok(image) => Some(image),
                    Err(e) => {
                        warn!("Showing single page, neighbour failed: {}", e);
                        None
                    }
                };
                let (left, right) = match side {
                    Side::Left => (Some(primary), secondary),
                    Side::Right => (secondary, Some(primary)),
                };
                self.engine.plan_paired(left, right, side, opts)
            }
        }
    }
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_loader::tests::encoded;
    use crate::layout::Rect;
    use crate::scanner::archive::tests::write_zip;
    use image::ImageFormat;
    use std::fs;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        fs::write(dir.join(name), encoded(width, height, ImageFormat::Png)).unwrap();
    }

    /// a.png 400x300, b.jpg 200x200, c.gif 100x50
    fn album() -> TempDir {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "a.png", 400, 300);
        // Content is sniffed, so PNG bytes under a .jpg name decode fine
        write_png(dir.path(), "b.jpg", 200, 200);
        fs::write(dir.path().join("c.gif"), encoded(100, 50, ImageFormat::Gif)).unwrap();
        dir
    }

    fn session_for(dir: &Path) -> Session {
        let mut session = Session::new(SessionConfig::default(), dir);
        session.load(SourceKind::Folder, dir).unwrap();
        session
    }

    #[test]
    fn test_starts_with_welcome_without_help_image() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(SessionConfig::default(), dir.path());
        let display = session.display();
        assert!(display.is_welcome());
        assert_eq!(display.title, "Image Viewer");
    }

    #[test]
    fn test_starts_with_help_image_when_present() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "HotKeys.png", 64, 32);
        let mut session = Session::new(SessionConfig::default(), dir.path());
        let display = session.display();
        assert_eq!(display.title, "[1/1] - Image Viewer");
        assert_eq!(display.plan().unwrap().primary().image.name, "HotKeys.png");
    }

    #[test]
    fn test_browse_album() {
        let dir = album();
        let mut session = session_for(dir.path());

        let display = session.display();
        assert_eq!(display.title, "[1/3] - Image Viewer");
        let plan = display.plan().unwrap();
        assert_eq!(plan.primary().image.name, "a.png");
        assert_eq!(plan.primary().dest, Rect::new(0, 0, 800, 600));
        assert_eq!(plan.overlay.as_ref().unwrap().text, "400x300 | a.png");

        assert_eq!(session.apply(Action::Next), Outcome::Redraw);
        assert_eq!(session.display().title, "[2/3] - Image Viewer");

        assert_eq!(session.apply(Action::ToggleViewMode), Outcome::Redraw);
        let display = session.display();
        let plan = display.plan().unwrap();
        assert!(plan.is_paired());
        assert_eq!(plan.placements[0].image.name, "a.png");
        assert_eq!(plan.placements[1].image.name, "b.jpg");
        assert_eq!(plan.primary().image.name, "b.jpg");

        assert_eq!(session.apply(Action::Next), Outcome::Redraw);
        assert_eq!(session.navigator().index(), 2);
        assert_eq!(session.apply(Action::Next), Outcome::Unchanged);

        assert_eq!(session.apply(Action::ToggleInfo), Outcome::Redraw);
        let display = session.display();
        assert_eq!(display.title, "[3/3] - c.gif");
        assert!(display.plan().unwrap().overlay.is_none());
    }

    #[test]
    fn test_paired_next_left_degrades_at_last_entry() {
        let dir = album();
        let mut session = session_for(dir.path());
        session.apply(Action::ToggleViewMode);
        session.apply(Action::ToggleViewMode);

        let display = session.display();
        let plan = display.plan().unwrap();
        assert_eq!(plan.placements[0].image.name, "a.png");
        assert_eq!(plan.placements[1].image.name, "b.jpg");
        assert_eq!(plan.primary().image.name, "a.png");

        session.apply(Action::Next);
        assert_eq!(session.navigator().index(), 2);
        let display = session.display();
        assert!(!display.plan().unwrap().is_paired());
    }

    #[test]
    fn test_resizes_are_debounced() {
        let dir = album();
        let mut session = session_for(dir.path());
        let start = Instant::now();

        let sizes = [(500, 400), (300, 200), (200, 120), (150, 80), (100, 50)];
        for (i, (w, h)) in sizes.into_iter().enumerate() {
            let now = start + Duration::from_millis(10 * i as u64);
            assert!(session.on_resize(w, h, now).is_some());
            assert!(session.poll(now).is_none());
        }

        let settled = start + Duration::from_millis(140);
        let display = session.poll(settled).expect("one recompute");
        assert_eq!(session.viewport(), Size::new(100, 50));
        let dest = display.plan().unwrap().primary().dest;
        assert!(dest.width <= 100 && dest.height <= 50);
        assert!(session.poll(settled + Duration::from_millis(500)).is_none());
    }

    #[test]
    fn test_tiny_resize_is_ignored() {
        let dir = album();
        let mut session = session_for(dir.path());
        assert!(session.on_resize(9, 300, Instant::now()).is_none());
        assert!(session.pending_deadline().is_none());
        assert_eq!(session.viewport(), Size::new(800, 600));
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let dir = album();
        let mut session = session_for(dir.path());
        let now = Instant::now();
        let first = session.on_resize(640, 480, now).unwrap();
        let second = session.on_resize(320, 240, now).unwrap();

        assert!(session.fire(first).is_none());
        assert!(session.fire(second).is_some());
        assert_eq!(session.viewport(), Size::new(320, 240));
    }

    #[test]
    fn test_redraw_takes_over_pending_resize() {
        let dir = album();
        let mut session = session_for(dir.path());
        session.on_resize(320, 240, Instant::now());
        session.display();
        assert_eq!(session.viewport(), Size::new(320, 240));
        assert!(session.pending_deadline().is_none());
    }

    #[test]
    fn test_load_error_keeps_session() {
        let dir = album();
        let mut session = session_for(dir.path());
        session.apply(Action::Next);

        let err = session
            .load(SourceKind::Folder, &dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert_eq!(session.source().entry_count(), 3);
        assert_eq!(session.navigator().index(), 1);
        assert_eq!(session.source().location(), dir.path());
    }

    #[test]
    fn test_load_file_starts_at_that_file() {
        let dir = album();
        let mut session = Session::new(SessionConfig::default(), dir.path());
        let summary = session
            .load(SourceKind::File, &dir.path().join("c.gif"))
            .unwrap();
        assert_eq!(summary.initial_index, 2);
        assert_eq!(session.navigator().status(), NavStatus::Valid(2));
    }

    #[test]
    fn test_empty_folder_gives_notice() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        let mut session = Session::new(SessionConfig::default(), dir.path());

        let summary = session.load(SourceKind::Folder, dir.path()).unwrap();
        assert_eq!(summary.entry_count, 0);
        assert!(summary.notice().unwrap().contains("No supported image files"));
        assert!(session.display().is_welcome());
    }

    #[test]
    fn test_cancelled_picker_is_noop() {
        let dir = album();
        let mut session = session_for(dir.path());
        session.apply(Action::Next);

        let result = session.load_selection(SourceKind::Folder, None).unwrap();
        assert!(result.is_none());
        assert_eq!(session.navigator().index(), 1);
        assert_eq!(session.source().entry_count(), 3);
    }

    #[test]
    fn test_decode_error_shows_diagnostic() {
        let dir = album();
        fs::write(dir.path().join("b.jpg"), b"not really a jpeg").unwrap();
        let mut session = session_for(dir.path());
        session.apply(Action::Next);

        let display = session.display();
        assert!(display.is_diagnostic());
        assert_eq!(display.title, "ERROR loading: b.jpg");
        assert_eq!(session.navigator().index(), 1);

        // Moving on works as usual
        session.apply(Action::Next);
        assert!(session.display().plan().is_some());
    }

    #[test]
    fn test_broken_neighbour_degrades_spread() {
        let dir = album();
        fs::write(dir.path().join("a.png"), b"garbage").unwrap();
        let mut session = session_for(dir.path());
        session.apply(Action::Next);
        session.apply(Action::ToggleViewMode);

        let display = session.display();
        let plan = display.plan().unwrap();
        assert!(!plan.is_paired());
        assert_eq!(plan.primary().image.name, "b.jpg");
    }

    #[test]
    fn test_delete_moves_to_next_entry() {
        let dir = album();
        let mut session = session_for(dir.path());
        session.apply(Action::Next);

        assert_eq!(
            session.apply(Action::Delete),
            Outcome::Shell(ShellRequest::ConfirmDelete("b.jpg".into()))
        );
        let outcome = session.delete_current(|name| name == "b.jpg").unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted("b.jpg".into()));
        assert!(!dir.path().join("b.jpg").exists());
        assert_eq!(session.source().entries(), ["a.png", "c.gif"]);
        assert_eq!(session.navigator().status(), NavStatus::Valid(1));
        assert_eq!(session.display().title, "[2/2] - Image Viewer");
    }

    #[test]
    fn test_delete_last_entry_steps_back_then_empties() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "a.png", 10, 10);
        write_png(dir.path(), "b.png", 10, 10);
        let mut session = session_for(dir.path());
        session.apply(Action::Next);

        session.delete_current(|_| true).unwrap();
        assert_eq!(session.navigator().status(), NavStatus::Valid(0));
        session.delete_current(|_| true).unwrap();
        assert_eq!(session.navigator().status(), NavStatus::Empty);
        assert!(session.display().is_welcome());

        let outcome = session.delete_current(|_| true).unwrap();
        assert_eq!(outcome, DeleteOutcome::NothingToDelete);
    }

    #[test]
    fn test_declined_delete_keeps_file() {
        let dir = album();
        let mut session = session_for(dir.path());
        let outcome = session.delete_current(|_| false).unwrap();
        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(dir.path().join("a.png").exists());
        assert_eq!(session.source().entry_count(), 3);
    }

    #[test]
    fn test_archive_delete_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.zip");
        let png = encoded(8, 8, ImageFormat::Png);
        write_zip(&path, &[("p1.png", png.as_slice())]);

        let mut session = Session::new(SessionConfig::default(), dir.path());
        session.load(SourceKind::Archive, &path).unwrap();
        assert!(session.display().plan().is_some());

        assert!(matches!(session.apply(Action::Delete), Outcome::Notice(_)));
        let mut asked = false;
        let err = session
            .delete_current(|_| {
                asked = true;
                true
            })
            .unwrap_err();
        assert!(matches!(err, DeleteError::UnsupportedOperation));
        assert!(!asked);
        assert_eq!(session.source().entry_count(), 1);
    }

    #[test]
    fn test_refresh_reports_stale_index() {
        let dir = album();
        let mut session = session_for(dir.path());
        session.apply(Action::Next);
        session.apply(Action::Next);

        fs::remove_file(dir.path().join("b.jpg")).unwrap();
        fs::remove_file(dir.path().join("c.gif")).unwrap();
        let status = session.refresh().unwrap();
        assert_eq!(
            status,
            NavStatus::OutOfBounds {
                index: 2,
                entry_count: 1
            }
        );
        let display = session.display();
        assert!(display.is_diagnostic());
        assert_eq!(display.title, "Image Viewer - Bad Index");

        // Stepping back brings the index into range
        session.apply(Action::Previous);
        assert_eq!(session.navigator().status(), NavStatus::Valid(0));
    }

    #[test]
    fn test_pan_mode() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "big.png", 1000, 700);
        let mut session = session_for(dir.path());

        // Nothing to scroll while fitting
        assert!(!session.pan_by(10, 10));

        session.apply(Action::ToggleFit);
        let display = session.display();
        let plan = display.plan().unwrap();
        assert!(plan.pan_enabled);
        assert_eq!(plan.scroll_region, Some(Size::new(1000, 700)));

        assert_eq!(session.apply(Action::Right), Outcome::Redraw);
        assert_eq!(session.pan_offset(), (80, 0));
        assert_eq!(session.apply(Action::Down), Outcome::Redraw);
        assert_eq!(session.pan_offset(), (80, 60));

        session.pan_by(5000, 5000);
        assert_eq!(session.pan_offset(), (200, 100));
        assert_eq!(session.display().pan_offset, (200, 100));

        // Growing the viewport pulls the offset back in
        session.on_resize(900, 650, Instant::now());
        assert_eq!(session.display().pan_offset, (100, 50));
    }

    #[test]
    fn test_shell_requests() {
        let dir = album();
        let mut session = session_for(dir.path());
        assert_eq!(
            session.apply(Action::OpenArchive),
            Outcome::Shell(ShellRequest::PickArchive)
        );
        assert_eq!(
            session.apply(Action::Quit),
            Outcome::Shell(ShellRequest::Quit)
        );
        // Left/Right navigate while fitting
        assert_eq!(session.apply(Action::Right), Outcome::Redraw);
        assert_eq!(session.navigator().index(), 1);
    }
}
