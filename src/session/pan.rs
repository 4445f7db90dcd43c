use crate::layout::Size;

/// Scroll offset of native-size content inside the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanState {
    x: i32,
    y: i32,
}

impl PanState {
    pub fn offset(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves by (`dx`, `dy`), keeping the viewport inside `content`.
    /// Returns true if the offset changed.
    pub fn pan_by(&mut self, dx: i32, dy: i32, content: Size, viewport: Size) -> bool {
        let old = *self;
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        self.clamp(content, viewport);
        old != *self
    }

    /// Pulls the offset back inside `content` after a resize or new plan.
    pub fn clamp(&mut self, content: Size, viewport: Size) {
        let max_x = (content.width - viewport.width).max(0);
        let max_y = (content.height - viewport.height).max(0);
        self.x = self.x.clamp(0, max_x);
        self.y = self.y.clamp(0, max_y);
    }
}
