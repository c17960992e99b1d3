//! dragscroll - middle-click drag-to-scroll for editor viewports
//!
//! Host glue around [`dragscroll_core`]: persisted preferences, a per-editor
//! controller registry, an in-memory host for trace replay, and the browser
//! host for WASM builds.

pub mod config;
pub mod constants;
pub mod headless;
pub mod registry;
pub mod replay;

pub use config::{AppConfig, ConfigError, LogLevel, Preferences};
pub use registry::{EditorId, EditorRegistry};
pub use replay::{replay, ReplayReport, Trace, TraceError};

// Re-export the core types hosts need
pub use dragscroll_core::{
    DragScrollConfig, DragScrollController, MouseButton, Point, PointerEvent, Propagation,
    ScrollState,
};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::*;
