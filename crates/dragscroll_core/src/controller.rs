//! Middle-click drag-to-scroll controller.
//!
//! Pressing the middle button anchors a session. While the session runs, every
//! display frame scrolls the viewport by a step proportional to how far the
//! pointer sits from the anchor (minus a deadzone). The session ends on a
//! second middle press, on release once movement has happened, or on disposal.
//!
//! All teardown goes through [`DragScrollController::stop`], so the pending
//! frame, the move listener and the indicator state are released on every exit
//! path.

use crate::config::DragScrollConfig;
use crate::direction::Direction;
use crate::event::{MouseButton, Point, PointerEvent, Propagation};
use crate::host::{FrameHandle, FrameScheduler, Indicator, PointerSource, Viewport};

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// No tracking, no scheduled frame, indicator hidden
    #[default]
    Idle,
    /// Tracking moves and scrolling every frame
    Scrolling,
}

/// One frame's worth of scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub move_x: f32,
    pub move_y: f32,
    pub direction: Direction,
}

impl ScrollStep {
    /// Compute the step for the pointer at `current` relative to `anchor`.
    pub fn compute(anchor: Point, current: Point, config: &DragScrollConfig) -> Self {
        let (diff_x, diff_y) = current.offset_from(anchor);
        let move_x = config.step(diff_x);
        let move_y = config.step(diff_y);
        Self {
            move_x,
            move_y,
            direction: Direction::from_step(move_x, move_y),
        }
    }
}

/// Per-session fields. Reset wholesale on stop.
#[derive(Debug, Clone, Default)]
struct ScrollSession {
    active: bool,
    anchor: Option<Point>,
    current: Option<Point>,
    has_moved: bool,
    pending_frame: Option<FrameHandle>,
}

/// Drag-to-scroll controller over host-provided capabilities.
pub struct DragScrollController<V, S, P, I>
where
    V: Viewport,
    S: FrameScheduler,
    P: PointerSource,
    I: Indicator,
{
    viewport: V,
    scheduler: S,
    pointer: P,
    indicator: Option<I>,
    make_indicator: Box<dyn FnMut() -> I>,
    config: DragScrollConfig,
    session: ScrollSession,
    listening: bool,
    disposed: bool,
}

impl<V, S, P, I> DragScrollController<V, S, P, I>
where
    V: Viewport,
    S: FrameScheduler,
    P: PointerSource,
    I: Indicator,
{
    /// Create a controller. The indicator is built by `make_indicator` on the
    /// first pointer press.
    pub fn new<F>(viewport: V, scheduler: S, pointer: P, make_indicator: F) -> Self
    where
        F: FnMut() -> I + 'static,
    {
        Self {
            viewport,
            scheduler,
            pointer,
            indicator: None,
            make_indicator: Box::new(make_indicator),
            config: DragScrollConfig::default(),
            session: ScrollSession::default(),
            listening: false,
            disposed: false,
        }
    }

    /// Set the tuning configuration (validated).
    pub fn with_config(mut self, config: DragScrollConfig) -> Self {
        self.config = config.validated();
        self
    }

    pub fn set_config(&mut self, config: DragScrollConfig) {
        self.config = config.validated();
    }

    pub fn config(&self) -> &DragScrollConfig {
        &self.config
    }

    pub fn state(&self) -> ScrollState {
        if self.session.active {
            ScrollState::Scrolling
        } else {
            ScrollState::Idle
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.session.active
    }

    /// Whether a non-empty direction was computed during the current session.
    pub fn has_moved(&self) -> bool {
        self.session.has_moved
    }

    pub fn anchor(&self) -> Option<Point> {
        self.session.anchor
    }

    pub fn current(&self) -> Option<Point> {
        self.session.current
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.session.pending_frame
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn pointer(&self) -> &P {
        &self.pointer
    }

    /// The indicator, once the first pointer press has created it.
    pub fn indicator(&self) -> Option<&I> {
        self.indicator.as_ref()
    }

    /// Route a host pointer event to the matching handler.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Propagation {
        match *event {
            PointerEvent::Pressed { button, position } => self.on_pointer_down(button, position),
            PointerEvent::Released { .. } => {
                self.on_pointer_up();
                Propagation::Continue
            }
            PointerEvent::Moved { position } => {
                self.on_pointer_move(position);
                Propagation::Continue
            }
        }
    }

    /// Pointer pressed inside the viewport.
    pub fn on_pointer_down(&mut self, button: MouseButton, position: Point) -> Propagation {
        if self.disposed {
            return Propagation::Continue;
        }

        if self.indicator.is_none() {
            log::debug!("Creating drag-scroll indicator");
            self.indicator = Some((self.make_indicator)());
        }

        if self.session.active {
            self.stop();
            return if button == MouseButton::Middle {
                Propagation::Stop
            } else {
                Propagation::Continue
            };
        }

        if button != MouseButton::Middle {
            return Propagation::Continue;
        }

        self.start(position);
        Propagation::Stop
    }

    /// Pointer moved. Only recorded while a session is tracking moves.
    pub fn on_pointer_move(&mut self, position: Point) {
        if !self.session.active || !self.listening {
            return;
        }
        self.session.current = Some(position);
    }

    /// Pointer released. Ends the session only once movement has happened.
    pub fn on_pointer_up(&mut self) {
        if self.session.has_moved {
            self.stop();
        }
    }

    /// A requested frame fired.
    ///
    /// Frames that are not the pending one (cancelled, or fired after stop or
    /// disposal) do nothing. Returns the applied step, if any.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<ScrollStep> {
        if !self.session.active || self.session.pending_frame != Some(handle) {
            log::trace!("Ignoring stale frame {:?}", handle);
            return None;
        }
        self.session.pending_frame = None;

        let step = match (self.session.anchor, self.session.current) {
            (Some(anchor), Some(current)) => {
                let step = ScrollStep::compute(anchor, current, &self.config);
                self.apply(step);
                Some(step)
            }
            _ => None,
        };

        self.session.pending_frame = Some(self.scheduler.request_frame());
        step
    }

    /// End the session and release everything it holds. Safe to call in any state.
    pub fn stop(&mut self) {
        if self.session.active {
            log::debug!("Drag scroll stopped");
        }
        self.session.active = false;

        if let Some(handle) = self.session.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.hide();
            indicator.set_direction(Direction::NONE);
        }
        if self.listening {
            self.pointer.unlisten_moves();
            self.listening = false;
        }

        self.session = ScrollSession::default();
    }

    /// Stop any session and remove the indicator. Every entry point is a
    /// no-op afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.stop();
        if let Some(mut indicator) = self.indicator.take() {
            indicator.dispose();
        }
        self.disposed = true;
        log::debug!("Drag scroll controller disposed");
    }

    fn start(&mut self, position: Point) {
        // Re-entrant starts must never overlap two frame chains.
        self.stop();

        log::debug!(
            "Drag scroll started at ({:.1}, {:.1})",
            position.x,
            position.y
        );
        self.session = ScrollSession {
            active: true,
            anchor: Some(position),
            current: Some(position),
            has_moved: false,
            pending_frame: None,
        };
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.show(position);
        }
        self.pointer.listen_moves();
        self.listening = true;
        self.session.pending_frame = Some(self.scheduler.request_frame());
    }

    fn apply(&mut self, step: ScrollStep) {
        if !step.direction.is_none() {
            self.session.has_moved = true;
        }
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.set_direction(step.direction);
        }

        let top = self.viewport.scroll_top();
        let left = self.viewport.scroll_left();
        self.viewport.set_scroll_top(top + step.move_y);
        self.viewport.set_scroll_left(left + step.move_x);

        log::trace!(
            "Drag scroll step ({:.0}, {:.0}) dir='{}'",
            step.move_x,
            step.move_y,
            step.direction
        );
    }
}

impl<V, S, P, I> Drop for DragScrollController<V, S, P, I>
where
    V: Viewport,
    S: FrameScheduler,
    P: PointerSource,
    I: Indicator,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
