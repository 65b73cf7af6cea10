//! Device-independent pointer input
//!
//! Mouse and touch events both arrive in client (page) coordinates. They are
//! normalized to surface coordinates before reaching the hit detector.

use glam::Vec2;

/// A pointer sample from any input device, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    MouseMove(Vec2),
    /// First active touch moved
    TouchMove(Vec2),
    /// Finger went down
    TouchStart(Vec2),
}

impl PointerEvent {
    pub fn client(&self) -> Vec2 {
        match *self {
            PointerEvent::MouseMove(p) | PointerEvent::TouchMove(p) | PointerEvent::TouchStart(p) => p,
        }
    }

    /// Position relative to a surface whose top-left corner sits at `origin`
    /// in client coordinates
    pub fn surface_point(&self, origin: Vec2) -> Vec2 {
        self.client() - origin
    }

    pub fn is_touch(&self) -> bool {
        !matches!(self, PointerEvent::MouseMove(_))
    }
}
