// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pointer interaction: joint selection and drag updates.
//!
//! The controller is a two-state machine. Idle: no joint selected. Dragging:
//! exactly one joint selected, its position overwritten by every pointer move.
//! There is no drag threshold and no smoothing; a click that hits a joint
//! enters Dragging immediately and a click without movement leaves the joint
//! where it was.

use crate::skeleton::{JointName, Skeleton};

/// A pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at the given surface position.
    Down { x: f32, y: f32 },
    /// Pointer moved to the given surface position.
    Move { x: f32, y: f32 },
    /// Primary button released, anywhere.
    Up,
}

/// Translate window coordinates into surface-local coordinates by subtracting
/// the surface's origin within the window.
#[must_use]
pub fn surface_local(window_x: f32, window_y: f32, origin: (f32, f32)) -> (f32, f32) {
    (window_x - origin.0, window_y - origin.1)
}

/// Two-state drag controller: idle, or dragging exactly one joint.
#[derive(Debug, Default)]
pub struct DragController {
    selected: Option<JointName>,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The joint currently being dragged, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<JointName> {
        self.selected
    }

    /// Feed one pointer event.
    ///
    /// Returns `true` when the skeleton changed and the surface should be
    /// re-rendered.
    pub fn handle(&mut self, event: PointerEvent, skeleton: &mut Skeleton, hit_radius: f32) -> bool {
        match event {
            PointerEvent::Down { x, y } => {
                // A miss keeps the controller idle; that is a no-op, not an error
                self.selected = skeleton.hit_test(x, y, hit_radius);
                false
            }
            PointerEvent::Move { x, y } => {
                if let Some(name) = self.selected {
                    skeleton.set_position(name, x, y);
                    true
                } else {
                    false
                }
            }
            PointerEvent::Up => {
                self.selected = None;
                false
            }
        }
    }
}
