//! Pointer-look: turns pointer or touch drags into yaw and pitch.

use std::f64::consts::FRAC_PI_2;

use glam::DQuat;
use serde::{Deserialize, Serialize};

use crate::camera::orientation_from;
use crate::core::{InputState, PointerPosition};
use crate::math::wrap_angle;

/// Pointer-look tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookSettings {
    /// Radians of rotation per pixel of drag
    pub sensitivity: f64,
    /// Distance kept between pitch and straight up/down, in radians
    pub pitch_margin: f64,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,
            pitch_margin: 0.1,
        }
    }
}

impl LookSettings {
    pub fn pitch_limit(&self) -> f64 {
        FRAC_PI_2 - self.pitch_margin
    }
}

#[derive(Debug, Clone)]
pub struct PointerLookController {
    settings: LookSettings,
    yaw: f64,
    pitch: f64,
}

impl PointerLookController {
    pub fn new(settings: LookSettings) -> Self {
        Self {
            settings,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn on_drag_start(&mut self, input: &mut InputState, at: PointerPosition) {
        input.begin_drag(at);
    }

    /// Rotates by the delta since the last drag position. Ignored unless a drag is active.
    pub fn on_drag_move(&mut self, input: &mut InputState, to: PointerPosition) -> bool {
        match input.drag_to(to) {
            Some((dx, dy)) => {
                self.rotate_by(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn on_drag_end(&mut self, input: &mut InputState) {
        input.end_drag();
    }

    /// Applies a pixel delta: dragging right turns left, dragging down looks up.
    /// Non-finite deltas are ignored.
    pub fn rotate_by(&mut self, dx: f64, dy: f64) {
        let yaw = self.yaw - dx * self.settings.sensitivity;
        let pitch = self.pitch - dy * self.settings.sensitivity;
        if !yaw.is_finite() || !pitch.is_finite() {
            return;
        }

        // a margin wider than a quarter turn pins pitch at level
        let limit = self.settings.pitch_limit().max(0.0);
        self.pitch = pitch.max(-limit).min(limit);
        self.yaw = wrap_angle(yaw);
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn orientation(&self) -> DQuat {
        orientation_from(self.yaw, self.pitch)
    }
}
