use super::controller::Key;

/// A 2D pointer coordinate in window pixels, from either a mouse or a touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Builds a position, rejecting NaN or infinite coordinates.
    pub fn new(x: f64, y: f64) -> Option<Self> {
        let at = Self { x, y };
        at.is_finite().then_some(at)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Primary contact of a touch list; `None` when there are no contacts.
    pub fn from_touches(contacts: &[(f64, f64)]) -> Option<Self> {
        contacts.first().and_then(|&(x, y)| Self::new(x, y))
    }
}

/// Platform-agnostic input events, queued and drained once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerDown(PointerPosition),
    PointerMove(PointerPosition),
    PointerUp,
    /// Window lost focus; every held key and any drag are released.
    FocusLost,
}
