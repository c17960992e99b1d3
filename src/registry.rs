//! Per-editor controller registry.
//!
//! Hosts attach one drag-scroll controller per editor and look it up by editor
//! id when routing input. Detaching or clearing the registry disposes the
//! controllers it held.

use std::collections::HashMap;
use std::fmt;

use dragscroll_core::prelude::*;

use crate::config::Preferences;

/// Identifies an editor instance in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorId(pub u64);

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "editor#{}", self.0)
    }
}

/// Registry of controllers keyed by editor.
pub struct EditorRegistry<V, S, P, I>
where
    V: Viewport,
    S: FrameScheduler,
    P: PointerSource,
    I: Indicator,
{
    controllers: HashMap<EditorId, DragScrollController<V, S, P, I>>,
    preferences: Preferences,
}

impl<V, S, P, I> EditorRegistry<V, S, P, I>
where
    V: Viewport,
    S: FrameScheduler,
    P: PointerSource,
    I: Indicator,
{
    pub fn new(preferences: Preferences) -> Self {
        Self {
            controllers: HashMap::new(),
            preferences,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Attach a controller to `editor`, applying the configured tuning.
    ///
    /// Returns false (and disposes the controller) when drag-scroll is disabled.
    /// A controller already attached to the editor is disposed and replaced.
    pub fn attach(&mut self, editor: EditorId, mut controller: DragScrollController<V, S, P, I>) -> bool {
        if !self.preferences.enabled {
            log::debug!("Drag scroll disabled, not attaching to {}", editor);
            controller.dispose();
            return false;
        }

        controller.set_config(self.preferences.drag_scroll_config());
        if let Some(mut previous) = self.controllers.insert(editor, controller) {
            log::debug!("Replacing drag-scroll controller for {}", editor);
            previous.dispose();
        }
        log::debug!("Attached drag scroll to {}", editor);
        true
    }

    /// Look up the controller for an editor.
    pub fn get(&self, editor: EditorId) -> Option<&DragScrollController<V, S, P, I>> {
        self.controllers.get(&editor)
    }

    pub fn get_mut(&mut self, editor: EditorId) -> Option<&mut DragScrollController<V, S, P, I>> {
        self.controllers.get_mut(&editor)
    }

    /// Detach and dispose the controller for an editor. Returns whether one existed.
    pub fn detach(&mut self, editor: EditorId) -> bool {
        match self.controllers.remove(&editor) {
            Some(mut controller) => {
                controller.dispose();
                log::debug!("Detached drag scroll from {}", editor);
                true
            }
            None => false,
        }
    }

    /// Dispose every controller.
    pub fn dispose_all(&mut self) {
        for (_, mut controller) in self.controllers.drain() {
            controller.dispose();
        }
    }

    /// Apply new preferences to every attached controller.
    pub fn set_preferences(&mut self, preferences: Preferences) {
        let config = preferences.drag_scroll_config();
        for controller in self.controllers.values_mut() {
            controller.set_config(config);
        }
        self.preferences = preferences;
    }

    pub fn editors(&self) -> impl Iterator<Item = EditorId> {
        self.controllers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl<V, S, P, I> Drop for EditorRegistry<V, S, P, I>
where
    V: Viewport,
    S: FrameScheduler,
    P: PointerSource,
    I: Indicator,
{
    fn drop(&mut self) {
        self.dispose_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{
        headless_controller, CursorIndicator, FrameQueue, MoveTracker, ScrollSurface, SurfaceSize,
    };

    type HeadlessRegistry = EditorRegistry<ScrollSurface, FrameQueue, MoveTracker, CursorIndicator>;

    fn controller() -> crate::headless::HeadlessController {
        headless_controller(SurfaceSize::default(), DragScrollConfig::default())
    }

    #[test]
    fn test_lookup_by_editor() {
        let mut registry = HeadlessRegistry::new(Preferences::default());
        assert!(registry.is_empty());
        assert!(registry.attach(EditorId(1), controller()));
        assert!(registry.get(EditorId(1)).is_some());
        assert!(registry.get(EditorId(2)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_disabled_does_not_attach() {
        let prefs = Preferences {
            enabled: false,
            ..Preferences::default()
        };
        let mut registry = HeadlessRegistry::new(prefs);
        assert!(!registry.attach(EditorId(1), controller()));
        assert!(registry.get(EditorId(1)).is_none());
    }

    #[test]
    fn test_attach_applies_preferences() {
        let prefs = Preferences {
            deadzone_radius: 0.0,
            speed_divisor: 1.0,
            ..Preferences::default()
        };
        let mut registry = HeadlessRegistry::new(prefs);
        registry.attach(EditorId(7), controller());
        let config = registry.get(EditorId(7)).unwrap().config();
        assert_eq!(config.deadzone_radius, 0.0);
        assert_eq!(config.speed_divisor, 1.0);
    }

    #[test]
    fn test_detach_disposes_mid_session() {
        let mut registry = HeadlessRegistry::new(Preferences::default());
        registry.attach(EditorId(1), controller());
        let c = registry.get_mut(EditorId(1)).unwrap();
        c.on_pointer_down(MouseButton::Middle, Point::new(10.0, 10.0));
        assert!(c.is_scrolling());

        assert!(registry.detach(EditorId(1)));
        assert!(!registry.detach(EditorId(1)));
        assert!(registry.get(EditorId(1)).is_none());
    }

    #[test]
    fn test_set_preferences_updates_attached() {
        let mut registry = HeadlessRegistry::new(Preferences::default());
        registry.attach(EditorId(1), controller());
        registry.attach(EditorId(2), controller());
        registry.set_preferences(Preferences {
            speed_divisor: 8.0,
            ..Preferences::default()
        });
        for editor in registry.editors().collect::<Vec<_>>() {
            assert_eq!(registry.get(editor).unwrap().config().speed_divisor, 8.0);
        }
        registry.dispose_all();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_editor_id_display() {
        assert_eq!(EditorId(3).to_string(), "editor#3");
    }
}
