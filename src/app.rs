use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use albumview::layout::Layer;
use albumview::models::SourceKind;
use albumview::navigation::Keybindings;
use albumview::session::{Content, DeleteOutcome, Display, Outcome, Session, ShellRequest};
use albumview::SessionConfig;

/// What to open and which keys to press.
#[derive(Debug, Default)]
pub struct AppOptions {
    pub open: Option<(SourceKind, PathBuf)>,
    pub keys: Vec<String>,
    /// Viewport to report before the first frame.
    pub size: Option<(i32, i32)>,
    /// Answer yes to delete confirmations.
    pub assume_yes: bool,
}

/// Headless shell: replays keys against a session and prints every frame.
pub struct ViewerApp {
    session: Session,
    keybindings: Keybindings,
    options: AppOptions,
}

impl ViewerApp {
    pub fn new(config: SessionConfig, start_dir: &Path, options: AppOptions) -> Self {
        Self {
            session: Session::new(config, start_dir),
            keybindings: Keybindings::new(),
            options,
        }
    }

    pub fn run(&mut self, out: &mut impl Write) -> Result<()> {
        if let Some((kind, path)) = self.options.open.clone() {
            let summary = self
                .session
                .load(kind, &path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            if let Some(notice) = summary.notice() {
                writeln!(out, "{notice}")?;
            }
        }

        if let Some((width, height)) = self.options.size {
            let now = Instant::now();
            self.session.on_resize(width, height, now);
            if let Some(due) = self.session.pending_deadline() {
                if let Some(display) = self.session.poll(due) {
                    print_display(out, &display)?;
                }
            }
        } else {
            print_display(out, &self.session.display())?;
        }

        let keys = std::mem::take(&mut self.options.keys);
        for key in &keys {
            let Some(action) = self.keybindings.action_for(key) else {
                warn!("Unbound key {:?}", key);
                continue;
            };
            match self.session.apply(action) {
                Outcome::Redraw => print_display(out, &self.session.display())?,
                Outcome::Unchanged => {}
                Outcome::Notice(message) => writeln!(out, "{message}")?,
                Outcome::Shell(request) => {
                    if !self.handle_request(request, out)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns false when the shell should stop.
    fn handle_request(&mut self, request: ShellRequest, out: &mut impl Write) -> Result<bool> {
        match request {
            ShellRequest::Quit => return Ok(false),
            ShellRequest::ConfirmDelete(name) => {
                let assume_yes = self.options.assume_yes;
                match self.session.delete_current(|_| assume_yes) {
                    Ok(DeleteOutcome::Deleted(name)) => {
                        info!("Deleted {}", name);
                        print_display(out, &self.session.display())?;
                    }
                    Ok(DeleteOutcome::Declined) => {
                        writeln!(out, "Not deleting {name} (pass --yes to confirm)")?;
                    }
                    Ok(DeleteOutcome::NothingToDelete) => {}
                    Err(e) => writeln!(out, "Could not delete {name}: {e}")?,
                }
            }
            // No pickers here: behaves like a cancelled dialog
            ShellRequest::PickFile => {
                self.session.load_selection(SourceKind::File, None)?;
            }
            ShellRequest::PickFolder => {
                self.session.load_selection(SourceKind::Folder, None)?;
            }
            ShellRequest::PickArchive => {
                self.session.load_selection(SourceKind::Archive, None)?;
            }
            ShellRequest::ToggleFullscreen => {}
        }
        Ok(true)
    }
}

fn print_display(out: &mut impl Write, display: &Display) -> Result<()> {
    writeln!(out, "== {}", display.title)?;
    match &display.content {
        Content::Welcome(text) | Content::Diagnostic(text) => {
            for line in text.lines() {
                writeln!(out, "   {line}")?;
            }
        }
        Content::Plan(plan) => {
            for layer in plan.layers() {
                match layer {
                    Layer::Image(placement) => writeln!(
                        out,
                        "   image {} at ({}, {}) {}x{}",
                        placement.image.name,
                        placement.dest.x,
                        placement.dest.y,
                        placement.dest.width,
                        placement.dest.height
                    )?,
                    Layer::Overlay(overlay) => {
                        writeln!(out, "   info  \"{}\" at ({}, {})", overlay.text, overlay.x, overlay.y)?
                    }
                }
            }
            if let Some(region) = plan.scroll_region {
                let (x, y) = display.pan_offset;
                writeln!(
                    out,
                    "   scroll {}x{} offset ({x}, {y})",
                    region.width, region.height
                )?;
            }
        }
    }
    Ok(())
}
