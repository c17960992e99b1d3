//! dragscroll_core - middle-click drag-to-scroll for any scrollable surface
//!
//! The controller is host-independent: viewports, frame scheduling, move
//! tracking and the cursor indicator are capabilities the host injects.

pub mod constants;

mod config;
mod controller;
mod direction;
mod event;
mod host;

pub use config::DragScrollConfig;
pub use controller::{DragScrollController, ScrollState, ScrollStep};
pub use direction::{Direction, Horizontal, Vertical};
pub use event::{MouseButton, Point, PointerEvent, Propagation};
pub use host::{FrameHandle, FrameScheduler, Indicator, PointerSource, Viewport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::DragScrollConfig;
    pub use crate::controller::{DragScrollController, ScrollState};
    pub use crate::event::{MouseButton, Point, PointerEvent, Propagation};
    pub use crate::host::{FrameHandle, FrameScheduler, Indicator, PointerSource, Viewport};
}
