use crate::layout::RenderPlan;

pub const APP_TITLE: &str = "Image Viewer";

/// What the canvas shows.
#[derive(Debug, Clone)]
pub enum Content {
    /// Nothing loaded yet, or everything deleted.
    Welcome(String),
    /// Bad index or an entry that failed to decode. Drawn in red, centred.
    Diagnostic(String),
    Plan(RenderPlan),
}

/// One frame for the renderer.
#[derive(Debug, Clone)]
pub struct Display {
    pub title: String,
    pub content: Content,
    /// Scroll offset to apply in pan mode.
    pub pan_offset: (i32, i32),
}

impl Display {
    pub fn plan(&self) -> Option<&RenderPlan> {
        match &self.content {
            Content::Plan(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self.content, Content::Diagnostic(_))
    }

    pub fn is_welcome(&self) -> bool {
        matches!(self.content, Content::Welcome(_))
    }
}
