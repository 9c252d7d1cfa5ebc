use std::collections::HashSet;

use super::controller::{Action, Controller, Key, KeyBindings};
use super::input_event::PointerPosition;

/// Keys currently held plus the pointer-drag anchor.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    pressed: HashSet<Key>,
    /// Last pointer position seen while dragging
    anchor: Option<PointerPosition>,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// Records a key press. Returns `true` if the key was not already held.
    pub fn press(&mut self, key: Key) -> bool {
        self.pressed.insert(key)
    }

    /// Records a key release. Returns `true` if the key was held.
    pub fn release(&mut self, key: Key) -> bool {
        self.pressed.remove(&key)
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.anchor = None;
    }

    /// Starts a drag at `at`. Positions with non-finite coordinates are ignored.
    pub fn begin_drag(&mut self, at: PointerPosition) {
        if at.is_finite() {
            self.anchor = Some(at);
        }
    }

    /// Moves the drag anchor to `to`, returning the delta from the previous anchor.
    /// Returns `None` when no drag is in progress or the delta is not finite; the
    /// anchor is left where it was in that case.
    pub fn drag_to(&mut self, to: PointerPosition) -> Option<(f64, f64)> {
        let anchor = self.anchor.as_mut()?;
        let delta = (to.x - anchor.x, to.y - anchor.y);
        if !(delta.0.is_finite() && delta.1.is_finite()) {
            log::trace!("dropping pointer move to {:?}", to);
            return None;
        }
        *anchor = to;
        Some(delta)
    }

    pub fn end_drag(&mut self) {
        self.anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<PointerPosition> {
        self.anchor
    }

    pub fn is_squatting(&self) -> bool {
        self.is_down(Action::Squat)
    }

    pub fn is_running(&self) -> bool {
        self.is_down(Action::Run)
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

impl Controller for InputState {
    fn is_down(&self, action: Action) -> bool {
        self.bindings
            .keys_for(action)
            .iter()
            .any(|key| self.pressed.contains(key))
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = InputState::default();
        assert!(!state.is_down(Action::Forward));
        assert!(!state.is_squatting());
        assert!(!state.is_running());
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_press_release_is_idempotent() {
        let mut state = InputState::default();
        assert!(state.press(Key::KeyW));
        assert!(!state.press(Key::KeyW));
        assert!(state.is_down(Action::Forward));

        assert!(state.release(Key::KeyW));
        assert!(!state.release(Key::KeyW));
        assert!(!state.is_down(Action::Forward));
    }

    #[test]
    fn test_modifiers_level_triggered_on_either_side() {
        let mut state = InputState::default();
        state.press(Key::ControlRight);
        state.press(Key::ShiftLeft);
        assert!(state.is_squatting());
        assert!(state.is_running());

        state.release(Key::ControlRight);
        assert!(!state.is_squatting());
        assert!(state.is_running());
    }

    #[test]
    fn test_unbound_keys_are_recorded_but_inert() {
        let mut state = InputState::default();
        state.press(Key::Escape);
        assert!(state.is_key_down(Key::Escape));
        assert!(!state.is_down(Action::Forward));
    }

    #[test]
    fn test_drag_deltas_are_frame_to_frame() {
        let mut state = InputState::default();
        assert_eq!(state.drag_to(pos(5.0, 5.0)), None);

        state.begin_drag(pos(100.0, 100.0));
        assert_eq!(state.drag_to(pos(110.0, 95.0)), Some((10.0, -5.0)));
        assert_eq!(state.drag_to(pos(112.0, 95.0)), Some((2.0, 0.0)));
        assert_eq!(state.anchor(), Some(pos(112.0, 95.0)));

        state.end_drag();
        assert!(!state.is_dragging());
        assert_eq!(state.drag_to(pos(0.0, 0.0)), None);
    }

    #[test]
    fn test_non_finite_move_keeps_anchor() {
        let mut state = InputState::default();
        state.begin_drag(pos(10.0, 10.0));

        assert_eq!(state.drag_to(pos(0.0, f64::NAN)), None);
        assert_eq!(state.anchor(), Some(pos(10.0, 10.0)));
        assert_eq!(state.drag_to(pos(15.0, 5.0)), Some((5.0, -5.0)));
    }

    #[test]
    fn test_overflowing_delta_is_dropped() {
        let mut state = InputState::default();
        state.begin_drag(pos(-1e308, 0.0));

        assert_eq!(state.drag_to(pos(1e308, 0.0)), None);
        assert_eq!(state.anchor(), Some(pos(-1e308, 0.0)));
    }

    #[test]
    fn test_non_finite_drag_start_is_ignored() {
        let mut state = InputState::default();
        state.begin_drag(pos(f64::INFINITY, 0.0));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_release_all_clears_keys_and_drag() {
        let mut state = InputState::default();
        state.press(Key::KeyA);
        state.begin_drag(pos(1.0, 1.0));

        state.release_all();

        assert!(!state.is_down(Action::StrafeLeft));
        assert!(!state.is_dragging());
    }
}
