//! Replay recorded pointer traces against a headless controller.
//!
//! A trace is a JSON document describing the surface and a sequence of pointer
//! steps interleaved with display frames:
//!
//! ```json
//! {
//!   "surface": { "width": 800, "height": 600, "content_width": 800, "content_height": 6000 },
//!   "steps": [
//!     { "type": "down", "button": "middle", "x": 400, "y": 300 },
//!     { "type": "move", "x": 400, "y": 345 },
//!     { "type": "frames", "count": 10 },
//!     { "type": "up" }
//!   ]
//! }
//! ```

use dragscroll_core::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::headless::{headless_controller, pump_frame, SurfaceSize};

/// Errors that can occur while loading a trace.
#[derive(Error, Debug)]
pub enum TraceError {
    /// I/O error reading the trace file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed trace JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Button names accepted in traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceButton {
    Left,
    Middle,
    Right,
}

impl From<TraceButton> for MouseButton {
    fn from(button: TraceButton) -> Self {
        match button {
            TraceButton::Left => MouseButton::Left,
            TraceButton::Middle => MouseButton::Middle,
            TraceButton::Right => MouseButton::Right,
        }
    }
}

/// One recorded input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraceStep {
    Down { button: TraceButton, x: f32, y: f32 },
    Up,
    Move { x: f32, y: f32 },
    Frames { count: u32 },
}

/// A recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub surface: SurfaceSize,
    pub steps: Vec<TraceStep>,
}

impl Trace {
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &std::path::Path) -> Result<Self, TraceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// A short session: click, drag down-right, hold for a second, release.
    pub fn demo() -> Self {
        Self {
            surface: SurfaceSize {
                content_width: 2400.0,
                ..SurfaceSize::default()
            },
            steps: vec![
                TraceStep::Down {
                    button: TraceButton::Middle,
                    x: 400.0,
                    y: 300.0,
                },
                TraceStep::Up,
                TraceStep::Frames { count: 5 },
                TraceStep::Move { x: 425.0, y: 345.0 },
                TraceStep::Frames { count: 60 },
                TraceStep::Move { x: 400.0, y: 280.0 },
                TraceStep::Frames { count: 30 },
                TraceStep::Up,
            ],
        }
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub scroll_top: f32,
    pub scroll_left: f32,
    pub scrolling: bool,
    /// Frames that ran a scroll step (including zero-length steps)
    pub frames_run: u32,
    /// Presses the controller consumed (stopped propagation)
    pub consumed_presses: u32,
}

/// Replay `trace` with the given tuning.
pub fn replay(trace: &Trace, config: DragScrollConfig) -> ReplayReport {
    let mut controller = headless_controller(trace.surface, config);
    let mut frames_run = 0;
    let mut consumed_presses = 0;

    for step in &trace.steps {
        match *step {
            TraceStep::Down { button, x, y } => {
                let event = PointerEvent::Pressed {
                    button: button.into(),
                    position: Point::new(x, y),
                };
                if controller.handle_event(&event).is_stopped() {
                    consumed_presses += 1;
                }
            }
            TraceStep::Up => {
                controller.on_pointer_up();
            }
            TraceStep::Move { x, y } => {
                controller.on_pointer_move(Point::new(x, y));
            }
            TraceStep::Frames { count } => {
                for _ in 0..count {
                    frames_run += pump_frame(&mut controller).len() as u32;
                }
            }
        }
    }

    let report = ReplayReport {
        scroll_top: controller.viewport().scroll_top(),
        scroll_left: controller.viewport().scroll_left(),
        scrolling: controller.is_scrolling(),
        frames_run,
        consumed_presses,
    };
    log::info!(
        "Replay finished: offset=({:.0}, {:.0}) scrolling={} frames={}",
        report.scroll_left,
        report.scroll_top,
        report.scrolling,
        report.frames_run
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trace() {
        let json = r#"{
            "steps": [
                { "type": "down", "button": "middle", "x": 10, "y": 20 },
                { "type": "move", "x": 10, "y": 60 },
                { "type": "frames", "count": 3 },
                { "type": "up" }
            ]
        }"#;
        let trace = Trace::from_json(json).unwrap();
        assert_eq!(trace.surface, SurfaceSize::default());
        assert_eq!(trace.steps.len(), 4);
        assert_eq!(trace.steps[3], TraceStep::Up);
    }

    #[test]
    fn test_unknown_step_is_error() {
        let json = r#"{ "steps": [ { "type": "wheel", "delta": 3 } ] }"#;
        assert!(matches!(Trace::from_json(json), Err(TraceError::Json(_))));
    }

    #[test]
    fn test_demo_trace() {
        let report = replay(&Trace::demo(), DragScrollConfig::default());
        // Early release without movement is ignored; the late one stops.
        assert!(!report.scrolling);
        assert_eq!(report.consumed_presses, 1);
        assert_eq!(report.frames_run, 95);
        // 60 frames at +20 down, then 30 frames at -8
        assert_eq!(report.scroll_top, 60.0 * 20.0 - 30.0 * 8.0);
        // 60 frames at +10 right
        assert_eq!(report.scroll_left, 600.0);
    }

    #[test]
    fn test_click_without_drag_keeps_scrolling() {
        let trace = Trace {
            surface: SurfaceSize::default(),
            steps: vec![
                TraceStep::Down {
                    button: TraceButton::Middle,
                    x: 50.0,
                    y: 50.0,
                },
                TraceStep::Up,
                TraceStep::Frames { count: 4 },
            ],
        };
        let report = replay(&trace, DragScrollConfig::default());
        assert!(report.scrolling);
        assert_eq!(report.scroll_top, 0.0);
        assert_eq!(report.frames_run, 4);
    }

    #[test]
    fn test_left_button_never_scrolls() {
        let trace = Trace {
            surface: SurfaceSize::default(),
            steps: vec![
                TraceStep::Down {
                    button: TraceButton::Left,
                    x: 50.0,
                    y: 50.0,
                },
                TraceStep::Move { x: 50.0, y: 400.0 },
                TraceStep::Frames { count: 4 },
            ],
        };
        let report = replay(&trace, DragScrollConfig::default());
        assert!(!report.scrolling);
        assert_eq!(report.consumed_presses, 0);
        assert_eq!(report.frames_run, 0);
        assert_eq!(report.scroll_top, 0.0);
    }
}
