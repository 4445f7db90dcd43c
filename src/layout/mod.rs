//! Placement of decoded images inside the viewport.

pub mod engine;
pub mod fit;
pub mod plan;

pub use engine::{LayoutEngine, PlanOptions};
pub use fit::{compute_fit, fit_dimensions, fit_scale};
pub use plan::{Layer, Overlay, Placement, Rect, RenderPlan, Size};
