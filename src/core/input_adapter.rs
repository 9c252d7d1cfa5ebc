use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::Key;
use super::input_event::{InputEvent, PointerPosition};

/// Adapter that turns Winit window events into walkthrough input events.
///
/// Mouse buttons carry no coordinates in Winit, so the last cursor position is
/// tracked here. Touches are reduced to a single primary contact: the first
/// finger down owns the drag until it lifts.
#[derive(Debug, Clone, Default)]
pub struct WinitInputAdapter {
    cursor: Option<PointerPosition>,
    primary_touch: Option<u64>,
}

impl WinitInputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event. Returns `None` for events the camera ignores
    /// or that lack usable coordinates.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let key = match event.physical_key {
                    PhysicalKey::Code(code) => Self::keycode_to_key(code)?,
                    PhysicalKey::Unidentified(_) => return None,
                };
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = PointerPosition::new(position.x, position.y);
                self.cursor.map(InputEvent::PointerMove)
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => match self.cursor {
                    Some(at) => Some(InputEvent::PointerDown(at)),
                    None => {
                        log::trace!("mouse press without a cursor position, ignored");
                        None
                    }
                },
                ElementState::Released => Some(InputEvent::PointerUp),
            },
            WindowEvent::Touch(touch) => self.translate_touch(touch),
            WindowEvent::Focused(false) => {
                self.primary_touch = None;
                Some(InputEvent::FocusLost)
            }
            _ => None,
        }
    }

    fn translate_touch(&mut self, touch: &Touch) -> Option<InputEvent> {
        let at = PointerPosition::from_touches(&[(touch.location.x, touch.location.y)]);

        match touch.phase {
            TouchPhase::Started => {
                if self.primary_touch.is_some() {
                    return None;
                }
                let Some(at) = at else {
                    log::trace!("touch start without usable coordinates, ignored");
                    return None;
                };
                self.primary_touch = Some(touch.id);
                Some(InputEvent::PointerDown(at))
            }
            TouchPhase::Moved => {
                if self.primary_touch != Some(touch.id) {
                    return None;
                }
                at.map(InputEvent::PointerMove)
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.primary_touch != Some(touch.id) {
                    return None;
                }
                self.primary_touch = None;
                Some(InputEvent::PointerUp)
            }
        }
    }

    /// Current cursor position (if the cursor is over the window)
    pub fn cursor(&self) -> Option<PointerPosition> {
        self.cursor
    }

    /// Map Winit KeyCode to Key
    fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
        match keycode {
            KeyCode::KeyW => Some(Key::KeyW),
            KeyCode::KeyA => Some(Key::KeyA),
            KeyCode::KeyS => Some(Key::KeyS),
            KeyCode::KeyD => Some(Key::KeyD),
            KeyCode::ArrowUp => Some(Key::ArrowUp),
            KeyCode::ArrowDown => Some(Key::ArrowDown),
            KeyCode::ArrowLeft => Some(Key::ArrowLeft),
            KeyCode::ArrowRight => Some(Key::ArrowRight),
            KeyCode::Space => Some(Key::Space),
            KeyCode::ControlLeft => Some(Key::ControlLeft),
            KeyCode::ControlRight => Some(Key::ControlRight),
            KeyCode::ShiftLeft => Some(Key::ShiftLeft),
            KeyCode::ShiftRight => Some(Key::ShiftRight),
            KeyCode::Escape => Some(Key::Escape),
            _ => None,
        }
    }
}
