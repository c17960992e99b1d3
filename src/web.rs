//! Browser host for the drag-scroll controller.
//!
//! Scrolls a DOM element, schedules ticks with `requestAnimationFrame`,
//! tracks moves with a window `mousemove` listener while a session runs, and
//! renders the indicator as a fixed-position dot plus body classes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dragscroll_core::constants::indicator_origin;
use dragscroll_core::prelude::*;
use dragscroll_core::Direction;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use crate::config::AppConfig;
use crate::constants::{direction_class, INDICATOR_CLASS, SCROLLING_CLASS};

type WebController = DragScrollController<ElementViewport, AnimationFrames, WindowMoves, DomIndicator>;

/// Back-reference from DOM callbacks to the controller that owns them.
type ControllerLink = Rc<RefCell<Weak<RefCell<WebController>>>>;

/// Run `f` on the linked controller, unless it is gone or already borrowed.
fn with_controller(link: &ControllerLink, f: impl FnOnce(&mut WebController)) {
    let Some(controller) = link.borrow().upgrade() else {
        return;
    };
    match controller.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => log::warn!("Drag scroll controller busy, dropping callback"),
    };
}

/// Viewport over a scrollable DOM element.
pub struct ElementViewport {
    element: Element,
}

impl Viewport for ElementViewport {
    fn scroll_top(&self) -> f32 {
        self.element.scroll_top() as f32
    }

    fn scroll_left(&self) -> f32 {
        self.element.scroll_left() as f32
    }

    fn set_scroll_top(&mut self, value: f32) {
        self.element.set_scroll_top(value.round() as i32);
    }

    fn set_scroll_left(&mut self, value: f32) {
        self.element.set_scroll_left(value.round() as i32);
    }
}

/// `requestAnimationFrame` scheduler.
pub struct AnimationFrames {
    window: Window,
    link: ControllerLink,
    next_id: u64,
    pending: Option<(FrameHandle, i32)>,
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);

        let link = Rc::clone(&self.link);
        let callback = Closure::once_into_js(move |_timestamp: f64| {
            with_controller(&link, |controller| {
                controller.on_frame(handle);
            });
        });

        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => self.pending = Some((handle, id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some((pending, id)) = self.pending {
            if pending == handle {
                if let Err(e) = self.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {:?}", e);
                }
                self.pending = None;
            }
        }
    }
}

/// Window-level `mousemove` listener, installed only during a session.
pub struct WindowMoves {
    window: Window,
    link: ControllerLink,
    listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl PointerSource for WindowMoves {
    fn listen_moves(&mut self) {
        if self.listener.is_some() {
            return;
        }
        let link = Rc::clone(&self.link);
        let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
            let position = Point::new(event.page_x() as f32, event.page_y() as f32);
            with_controller(&link, |controller| controller.on_pointer_move(position));
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Err(e) = self
            .window
            .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to add mousemove listener: {:?}", e);
        }
        self.listener = Some(listener);
    }

    fn unlisten_moves(&mut self) {
        if let Some(listener) = self.listener.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove mousemove listener: {:?}", e);
            }
        }
    }
}

/// Cursor dot element plus body classes.
pub struct DomIndicator {
    document: Document,
    dot: Option<HtmlElement>,
    direction_class: Option<String>,
}

impl DomIndicator {
    fn new(document: Document) -> Self {
        let dot = document
            .create_element("div")
            .ok()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        match (&dot, document.body()) {
            (Some(dot), Some(body)) => {
                dot.set_class_name(INDICATOR_CLASS);
                let style = dot.style();
                let _ = style.set_property("position", "fixed");
                let _ = style.set_property("display", "none");
                let _ = style.set_property("pointer-events", "none");
                if let Err(e) = body.append_child(dot) {
                    log::warn!("Failed to attach drag-scroll indicator: {:?}", e);
                }
            }
            _ => log::warn!("Could not create drag-scroll indicator"),
        }

        Self {
            document,
            dot,
            direction_class: None,
        }
    }

    fn body_class(&self, class: &str, on: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let classes = body.class_list();
        let result = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle body class {}: {:?}", class, e);
        }
    }
}

impl Indicator for DomIndicator {
    fn show(&mut self, at: Point) {
        if let Some(dot) = &self.dot {
            let (x, y) = indicator_origin(at.x, at.y);
            let style = dot.style();
            let _ = style.set_property("left", &format!("{}px", x));
            let _ = style.set_property("top", &format!("{}px", y));
            let _ = style.set_property("display", "block");
        }
        self.body_class(SCROLLING_CLASS, true);
    }

    fn hide(&mut self) {
        if let Some(dot) = &self.dot {
            let _ = dot.style().set_property("display", "none");
        }
        self.body_class(SCROLLING_CLASS, false);
    }

    fn set_direction(&mut self, direction: Direction) {
        let next = direction_class(direction.code());
        if next == self.direction_class {
            return;
        }
        if let Some(previous) = self.direction_class.take() {
            self.body_class(&previous, false);
        }
        if let Some(class) = &next {
            self.body_class(class, true);
        }
        self.direction_class = next;
    }

    fn dispose(&mut self) {
        self.set_direction(Direction::NONE);
        self.body_class(SCROLLING_CLASS, false);
        if let Some(dot) = self.dot.take() {
            dot.remove();
        }
    }
}

/// Drag scroll attached to one scrollable element.
///
/// Dropping it removes its listeners and disposes the controller.
pub struct WebDragScroll {
    controller: Rc<RefCell<WebController>>,
    window: Window,
    target: Element,
    on_down: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
}

impl WebDragScroll {
    /// Attach to `target` with the given tuning.
    pub fn attach(target: Element, config: DragScrollConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No global window exists")?;
        let document = window.document().ok_or("No document in window")?;

        let link: ControllerLink = Rc::new(RefCell::new(Weak::new()));
        let controller = DragScrollController::new(
            ElementViewport {
                element: target.clone(),
            },
            AnimationFrames {
                window: window.clone(),
                link: Rc::clone(&link),
                next_id: 0,
                pending: None,
            },
            WindowMoves {
                window: window.clone(),
                link: Rc::clone(&link),
                listener: None,
            },
            move || DomIndicator::new(document.clone()),
        )
        .with_config(config);
        let controller = Rc::new(RefCell::new(controller));
        *link.borrow_mut() = Rc::downgrade(&controller);

        let down_link = Rc::clone(&link);
        let on_down = Closure::wrap(Box::new(move |event: MouseEvent| {
            let pressed = PointerEvent::Pressed {
                button: MouseButton::from_dom_index(event.button()),
                position: Point::new(event.page_x() as f32, event.page_y() as f32),
            };
            with_controller(&down_link, |controller| {
                if controller.handle_event(&pressed).is_stopped() {
                    event.prevent_default();
                    event.stop_propagation();
                }
            });
        }) as Box<dyn FnMut(MouseEvent)>);

        let up_link = Rc::clone(&link);
        let on_up = Closure::wrap(Box::new(move |_event: MouseEvent| {
            with_controller(&up_link, |controller| controller.on_pointer_up());
        }) as Box<dyn FnMut(MouseEvent)>);

        target.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
        log::info!("Drag scroll attached");

        Ok(Self {
            controller,
            window,
            target,
            on_down,
            on_up,
        })
    }

    pub fn is_scrolling(&self) -> bool {
        self.controller.borrow().is_scrolling()
    }
}

impl Drop for WebDragScroll {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("mousedown", self.on_down.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.dispose(),
            Err(_) => log::warn!("Drag scroll dropped while controller busy"),
        }
    }
}

/// JS handle for an attached drag scroll.
#[wasm_bindgen]
pub struct DragScrollHandle {
    inner: Option<WebDragScroll>,
}

#[wasm_bindgen]
impl DragScrollHandle {
    /// Whether a drag-scroll session is active.
    #[wasm_bindgen(getter)]
    pub fn scrolling(&self) -> bool {
        self.inner.as_ref().is_some_and(WebDragScroll::is_scrolling)
    }

    /// Detach and release all resources. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.inner = None;
    }
}

/// Attach drag scroll to a scrollable element using the stored preferences.
#[wasm_bindgen(js_name = attachDragScroll)]
pub fn attach_drag_scroll(target: Element) -> Result<DragScrollHandle, JsValue> {
    let config = AppConfig::load_from_local_storage().unwrap_or_default();
    let inner = if config.preferences.enabled {
        Some(WebDragScroll::attach(
            target,
            config.preferences.drag_scroll_config(),
        )?)
    } else {
        log::info!("Drag scroll disabled in preferences");
        None
    };
    Ok(DragScrollHandle { inner })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = AppConfig::load_from_local_storage()
        .unwrap_or_default()
        .preferences
        .log_level;
    if console_log::init_with_level(level.to_level()).is_err() {
        web_sys::console::log_1(&"dragscroll: logger already initialised".into());
    }
}
