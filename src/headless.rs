//! In-memory host for running the drag-scroll controller without a window.
//!
//! Used by trace replay and tests. Behaves like a browser page: scroll offsets
//! clamp to the scrollable range, frames queue until the host pumps them, and
//! the indicator maintains the body class set a stylesheet would key on.

use std::collections::BTreeSet;

use dragscroll_core::constants::indicator_origin;
use dragscroll_core::prelude::*;
use dragscroll_core::{Direction, ScrollStep};
use serde::{Deserialize, Serialize};

use crate::constants::{direction_class, DIRECTION_CLASS_PREFIX, SCROLLING_CLASS};

/// Size of a scrollable surface and its content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
    pub content_width: f32,
    pub content_height: f32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            content_width: 800.0,
            content_height: 6000.0,
        }
    }
}

/// A viewport whose offsets clamp to `[0, content - viewport]`.
#[derive(Debug, Clone, Default)]
pub struct ScrollSurface {
    size: SurfaceSize,
    top: f32,
    left: f32,
}

impl ScrollSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            top: 0.0,
            left: 0.0,
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn max_scroll_top(&self) -> f32 {
        (self.size.content_height - self.size.height).max(0.0)
    }

    pub fn max_scroll_left(&self) -> f32 {
        (self.size.content_width - self.size.width).max(0.0)
    }
}

impl Viewport for ScrollSurface {
    fn scroll_top(&self) -> f32 {
        self.top
    }

    fn scroll_left(&self) -> f32 {
        self.left
    }

    fn set_scroll_top(&mut self, value: f32) {
        self.top = value.clamp(0.0, self.max_scroll_top());
    }

    fn set_scroll_left(&mut self, value: f32) {
        self.left = value.clamp(0.0, self.max_scroll_left());
    }
}

/// Frame scheduler that queues requests until the host pumps them.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
    cancelled: usize,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every frame currently queued, leaving the queue empty.
    pub fn take_pending(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of frames cancelled so far.
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|pending| *pending != handle);
        self.cancelled += 1;
    }
}

/// Records whether the global move listener is installed.
#[derive(Debug, Default)]
pub struct MoveTracker {
    listening: bool,
}

impl MoveTracker {
    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl PointerSource for MoveTracker {
    fn listen_moves(&mut self) {
        self.listening = true;
    }

    fn unlisten_moves(&mut self) {
        self.listening = false;
    }
}

/// Indicator that keeps the state a DOM indicator would render.
#[derive(Debug, Default)]
pub struct CursorIndicator {
    origin: Option<(f32, f32)>,
    direction: Direction,
    body_classes: BTreeSet<String>,
    disposed: bool,
}

impl CursorIndicator {
    pub fn is_visible(&self) -> bool {
        self.origin.is_some()
    }

    /// Top-left corner of the dot, while visible.
    pub fn origin(&self) -> Option<(f32, f32)> {
        self.origin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body_classes(&self) -> impl Iterator<Item = &str> {
        self.body_classes.iter().map(String::as_str)
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn clear_direction_class(&mut self) {
        self.body_classes
            .retain(|class| class == SCROLLING_CLASS || !class.starts_with(DIRECTION_CLASS_PREFIX));
    }
}

impl Indicator for CursorIndicator {
    fn show(&mut self, at: Point) {
        self.origin = Some(indicator_origin(at.x, at.y));
        self.body_classes.insert(SCROLLING_CLASS.to_string());
    }

    fn hide(&mut self) {
        self.origin = None;
        self.body_classes.remove(SCROLLING_CLASS);
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.clear_direction_class();
        if let Some(class) = direction_class(direction.code()) {
            self.body_classes.insert(class);
        }
    }

    fn dispose(&mut self) {
        self.origin = None;
        self.body_classes.clear();
        self.disposed = true;
    }
}

/// Controller wired to the in-memory host.
pub type HeadlessController = DragScrollController<ScrollSurface, FrameQueue, MoveTracker, CursorIndicator>;

/// Build a headless controller over a surface of the given size.
pub fn headless_controller(size: SurfaceSize, config: DragScrollConfig) -> HeadlessController {
    DragScrollController::new(
        ScrollSurface::new(size),
        FrameQueue::new(),
        MoveTracker::default(),
        CursorIndicator::default,
    )
    .with_config(config)
}

/// Fire every frame currently queued for `controller`.
///
/// Frames requested while pumping are left for the next call, matching one
/// display refresh. Returns the steps that were applied.
pub fn pump_frame(controller: &mut HeadlessController) -> Vec<ScrollStep> {
    let due = controller.scheduler_mut().take_pending();
    due.into_iter()
        .filter_map(|handle| controller.on_frame(handle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> HeadlessController {
        headless_controller(SurfaceSize::default(), DragScrollConfig::default())
    }

    #[test]
    fn test_surface_clamps_offsets() {
        let mut surface = ScrollSurface::new(SurfaceSize::default());
        surface.set_scroll_top(-20.0);
        assert_eq!(surface.scroll_top(), 0.0);
        surface.set_scroll_top(10_000.0);
        assert_eq!(surface.scroll_top(), 5400.0);
        surface.set_scroll_left(50.0);
        assert_eq!(surface.scroll_left(), 0.0);
    }

    #[test]
    fn test_frame_queue_cancel() {
        let mut queue = FrameQueue::new();
        let first = queue.request_frame();
        let second = queue.request_frame();
        queue.cancel_frame(first);
        assert_eq!(queue.take_pending(), vec![second]);
        assert_eq!(queue.cancelled_count(), 1);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_body_classes_follow_session() {
        let mut c = controller();
        c.on_pointer_down(MouseButton::Middle, Point::new(100.0, 100.0));
        let indicator = c.indicator().unwrap();
        assert!(indicator.is_visible());
        assert_eq!(indicator.origin(), Some((88.0, 88.0)));
        assert!(indicator.has_body_class(SCROLLING_CLASS));

        c.on_pointer_move(Point::new(130.0, 130.0));
        pump_frame(&mut c);
        let indicator = c.indicator().unwrap();
        assert!(indicator.has_body_class("dragscroll-se"));

        c.on_pointer_move(Point::new(100.0, 130.0));
        pump_frame(&mut c);
        let indicator = c.indicator().unwrap();
        assert!(indicator.has_body_class("dragscroll-s"));
        assert!(!indicator.has_body_class("dragscroll-se"));

        c.on_pointer_up();
        let indicator = c.indicator().unwrap();
        assert!(!indicator.is_visible());
        assert_eq!(indicator.body_classes().count(), 0);
    }

    #[test]
    fn test_pump_runs_one_frame_per_call() {
        let mut c = controller();
        c.on_pointer_down(MouseButton::Middle, Point::new(0.0, 0.0));
        c.on_pointer_move(Point::new(0.0, 45.0));

        assert_eq!(pump_frame(&mut c).len(), 1);
        assert_eq!(c.viewport().scroll_top(), 20.0);
        assert_eq!(c.scheduler().pending_count(), 1);

        pump_frame(&mut c);
        assert_eq!(c.viewport().scroll_top(), 40.0);
    }

    #[test]
    fn test_scrolling_up_at_top_stays_clamped() {
        let mut c = controller();
        c.on_pointer_down(MouseButton::Middle, Point::new(0.0, 100.0));
        c.on_pointer_move(Point::new(0.0, 0.0));
        pump_frame(&mut c);
        assert_eq!(c.viewport().scroll_top(), 0.0);
        assert_eq!(c.indicator().unwrap().direction().code(), "n");
        // Direction was computed, so a release ends the session
        c.on_pointer_up();
        assert!(!c.is_scrolling());
    }

    #[test]
    fn test_stopped_session_leaves_no_frames() {
        let mut c = controller();
        c.on_pointer_down(MouseButton::Middle, Point::new(0.0, 0.0));
        c.on_pointer_down(MouseButton::Middle, Point::new(0.0, 0.0));
        assert!(!c.pointer().is_listening());
        assert!(pump_frame(&mut c).is_empty());
        assert_eq!(c.scheduler().pending_count(), 0);
    }
}
