use tracing::debug;

use super::fit::{fit_dimensions, fit_scale};
use super::plan::{Overlay, Placement, Rect, RenderPlan, Size};
use crate::models::DecodedImage;
use crate::navigation::Side;

/// Inputs shared by every plan.
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    pub viewport: Size,
    pub fit_to_window: bool,
    pub show_info: bool,
}

/// Places decoded images into the viewport.
///
/// Pure geometry: the engine never touches pixels, it only decides where
/// each image goes and at which scale.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    /// Top-left corner of the info overlay (default: 10, 10)
    pub overlay_origin: (i32, i32),
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            overlay_origin: (10, 10),
        }
    }
}

impl LayoutEngine {
    pub fn new(overlay_origin: (i32, i32)) -> Self {
        Self { overlay_origin }
    }

    fn overlay_for(&self, image: &DecodedImage, show_info: bool) -> Option<Overlay> {
        show_info.then(|| Overlay {
            text: format!("{}x{} | {}", image.width(), image.height(), image.name),
            x: self.overlay_origin.0,
            y: self.overlay_origin.1,
        })
    }

    fn fit_into(image: DecodedImage, x: i32, y: i32, max_w: i32, max_h: i32) -> Placement {
        let (w, h) = fit_dimensions(image.width(), image.height(), max_w, max_h);
        let scale = fit_scale(image.width(), image.height(), max_w, max_h);
        Placement {
            dest: Rect::new(x, y, w, h),
            scale,
            image,
        }
    }

    fn native_at(image: DecodedImage, x: i32) -> Placement {
        Placement {
            dest: Rect::new(x, 0, image.width(), image.height()),
            scale: 1.0,
            image,
        }
    }

    /// One image: centred and fit-scaled, or native size at the top-left.
    pub fn plan_single(&self, image: DecodedImage, opts: PlanOptions) -> RenderPlan {
        let overlay = self.overlay_for(&image, opts.show_info);
        let viewport = opts.viewport;

        let plan = if opts.fit_to_window {
            let (w, h) = fit_dimensions(
                image.width(),
                image.height(),
                viewport.width,
                viewport.height,
            );
            let x = ((viewport.width - w as i32) / 2).max(0);
            let y = ((viewport.height - h as i32) / 2).max(0);
            let placement = Self::fit_into(image, x, y, viewport.width, viewport.height);
            RenderPlan {
                placements: vec![placement],
                primary: 0,
                overlay,
                pan_enabled: false,
                scroll_region: None,
            }
        } else {
            let region = Size::new(image.width() as i32, image.height() as i32);
            RenderPlan {
                placements: vec![Self::native_at(image, 0)],
                primary: 0,
                overlay,
                pan_enabled: true,
                scroll_region: Some(region),
            }
        };

        debug!(
            dest = ?plan.placements[0].dest,
            scale = plan.placements[0].scale,
            "Planned single image"
        );
        plan
    }

    /// Two images side by side. A missing pane falls back to a single plan of
    /// the other image; `None` only when both are missing.
    pub fn plan_paired(
        &self,
        left: Option<DecodedImage>,
        right: Option<DecodedImage>,
        primary: Side,
        opts: PlanOptions,
    ) -> Option<RenderPlan> {
        let (left, right) = match (left, right) {
            (Some(l), Some(r)) => (l, r),
            (Some(only), None) | (None, Some(only)) => {
                return Some(self.plan_single(only, opts));
            }
            (None, None) => return None,
        };

        let primary_index = match primary {
            Side::Left => 0,
            Side::Right => 1,
        };
        let overlay = match primary {
            Side::Left => self.overlay_for(&left, opts.show_info),
            Side::Right => self.overlay_for(&right, opts.show_info),
        };
        let viewport = opts.viewport;

        let plan = if opts.fit_to_window {
            let half = viewport.width / 2;
            RenderPlan {
                placements: vec![
                    Self::fit_into(left, 0, 0, half, viewport.height),
                    Self::fit_into(right, half, 0, half, viewport.height),
                ],
                primary: primary_index,
                overlay,
                pan_enabled: false,
                scroll_region: None,
            }
        } else {
            let left = Self::native_at(left, 0);
            let right = Self::native_at(right, left.dest.right());
            let region = Size::new(
                right.dest.right(),
                left.dest.bottom().max(right.dest.bottom()),
            );
            RenderPlan {
                placements: vec![left, right],
                primary: primary_index,
                overlay,
                pan_enabled: true,
                scroll_region: Some(region),
            }
        };

        debug!(
            left = ?plan.placements[0].dest,
            right = ?plan.placements[1].dest,
            "Planned paired images"
        );
        Some(plan)
    }
}
