//! Pointer events delivered by the host.

/// A 2D point in screen (page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Displacement from `origin` to `self`.
    pub fn offset_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Events the controller responds to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer button pressed.
    Pressed { button: MouseButton, position: Point },
    /// Pointer button released.
    Released { button: MouseButton, position: Point },
    /// Pointer moved (only delivered while move tracking is installed).
    Moved { position: Point },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index to a button.
    pub fn from_dom_index(index: i16) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            3 => MouseButton::Back,
            4 => MouseButton::Forward,
            other => MouseButton::Other(other.max(0) as u16),
        }
    }
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Back => MouseButton::Back,
            winit::event::MouseButton::Forward => MouseButton::Forward,
            winit::event::MouseButton::Other(id) => MouseButton::Other(id),
        }
    }
}

/// Whether the host should keep dispatching an event to other handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Let the event reach other handlers
    #[default]
    Continue,
    /// The controller consumed the event
    Stop,
}

impl Propagation {
    pub fn is_stopped(&self) -> bool {
        matches!(self, Propagation::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_button_indices() {
        assert_eq!(MouseButton::from_dom_index(0), MouseButton::Left);
        assert_eq!(MouseButton::from_dom_index(1), MouseButton::Middle);
        assert_eq!(MouseButton::from_dom_index(2), MouseButton::Right);
        assert_eq!(MouseButton::from_dom_index(7), MouseButton::Other(7));
    }

    #[test]
    fn test_winit_middle_button() {
        let button: MouseButton = winit::event::MouseButton::Middle.into();
        assert_eq!(button, MouseButton::Middle);
    }

    #[test]
    fn test_point_offset() {
        let anchor = Point::new(100.0, 100.0);
        assert_eq!(Point::new(110.0, 94.0).offset_from(anchor), (10.0, -6.0));
    }
}
