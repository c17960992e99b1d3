//! Capabilities the host provides to the controller.
//!
//! The controller never touches a rendering surface directly. Each host (the
//! headless simulator, a DOM page, a native window) implements these traits
//! over its own objects.

use crate::direction::Direction;
use crate::event::Point;

/// A scrollable surface.
pub trait Viewport {
    fn scroll_top(&self) -> f32;
    fn scroll_left(&self) -> f32;
    fn set_scroll_top(&mut self, value: f32);
    fn set_scroll_left(&mut self, value: f32);
}

/// Identifies a requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Requests one callback per display refresh.
///
/// When a requested frame fires, the host calls
/// [`DragScrollController::on_frame`](crate::DragScrollController::on_frame)
/// with the handle returned here.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Installs and removes the global pointer-move listener.
///
/// While listening, the host routes every pointer move to
/// [`DragScrollController::on_pointer_move`](crate::DragScrollController::on_pointer_move).
pub trait PointerSource {
    fn listen_moves(&mut self);
    fn unlisten_moves(&mut self);
}

/// Cursor dot and body-level scrolling state. Purely cosmetic.
pub trait Indicator {
    /// Show the dot centered at `at` and set the body scrolling flag.
    fn show(&mut self, at: Point);
    /// Hide the dot and clear the body scrolling flag.
    fn hide(&mut self);
    /// Publish the current direction (`Direction::NONE` clears it).
    fn set_direction(&mut self, direction: Direction);
    /// Remove the indicator from its host.
    fn dispose(&mut self);
}
