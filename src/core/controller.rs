use serde::{Deserialize, Serialize};

/// Physical key identifier, independent of the windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ControlLeft,
    ControlRight,
    ShiftLeft,
    ShiftRight,
    Escape,
}

/// What a held key means to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    StrafeLeft,
    StrafeRight,
    Back,
    Forward,
    Jump,
    Squat,
    Run,
}

/// Keys bound to each action. Any bound key activates the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub strafe_left: Vec<Key>,
    pub strafe_right: Vec<Key>,
    pub back: Vec<Key>,
    pub forward: Vec<Key>,
    pub jump: Vec<Key>,
    pub squat: Vec<Key>,
    pub run: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            strafe_left: vec![Key::KeyA, Key::ArrowLeft],
            strafe_right: vec![Key::KeyD, Key::ArrowRight],
            back: vec![Key::KeyS, Key::ArrowDown],
            forward: vec![Key::KeyW, Key::ArrowUp],
            jump: vec![Key::Space],
            squat: vec![Key::ControlLeft, Key::ControlRight],
            run: vec![Key::ShiftLeft, Key::ShiftRight],
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, action: Action) -> &[Key] {
        match action {
            Action::StrafeLeft => &self.strafe_left,
            Action::StrafeRight => &self.strafe_right,
            Action::Back => &self.back,
            Action::Forward => &self.forward,
            Action::Jump => &self.jump,
            Action::Squat => &self.squat,
            Action::Run => &self.run,
        }
    }

    pub fn is_bound(&self, key: Key, action: Action) -> bool {
        self.keys_for(action).contains(&key)
    }
}

/// Controller - answers which actions are currently held
pub trait Controller {
    /// Check if any key bound to `action` is currently down
    fn is_down(&self, action: Action) -> bool;

    /// Check if a specific key is currently down
    fn is_key_down(&self, key: Key) -> bool;
}
