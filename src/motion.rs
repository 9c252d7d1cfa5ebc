//! Vertical motion: breathing sway, the jump arc, and squat smoothing.
//!
//! Jumping and squatting are layered over idle/walking. When a jump is in
//! flight it sets the camera height outright for that tick; otherwise the
//! height eases toward the standing or squatting target.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::TickCountdown;
use crate::math::{jump_arc, lerp};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpSettings {
    /// Length of a jump in ticks
    pub duration_ticks: u32,
    /// Peak height above the spawn height
    pub height: f64,
}

impl Default for JumpSettings {
    fn default() -> Self {
        Self {
            duration_ticks: 60,
            height: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquatSettings {
    pub height: f64,
    /// Fraction of the remaining distance to the target covered each tick
    pub smoothing: f64,
}

impl Default for SquatSettings {
    fn default() -> Self {
        Self {
            height: 3.0,
            smoothing: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingSettings {
    pub idle_rate: f64,
    pub idle_frequency: f64,
    pub idle_amplitude: f64,
    pub walk_rate: f64,
    pub walk_amplitude: f64,
}

impl Default for BreathingSettings {
    fn default() -> Self {
        Self {
            idle_rate: 0.05,
            idle_frequency: 0.5,
            idle_amplitude: 0.02,
            walk_rate: 0.1,
            walk_amplitude: 0.12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeSettings {
    pub amplitude: f64,
    /// Radians per millisecond of wall-clock time
    pub frequency: f64,
    /// Add the shake to the committed position along the right vector
    pub enabled: bool,
}

impl Default for ShakeSettings {
    fn default() -> Self {
        Self {
            amplitude: 0.05,
            frequency: 2.0,
            enabled: false,
        }
    }
}

/// Lateral shake side, set by the strafe keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShakeDirection {
    Left,
    #[default]
    None,
    Right,
}

impl ShakeDirection {
    pub fn sign(self) -> f64 {
        match self {
            ShakeDirection::Left => -1.0,
            ShakeDirection::None => 0.0,
            ShakeDirection::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionMode {
    #[default]
    Idle,
    Walking,
    Jumping,
    Squatting,
}

/// Snapshot of the animation state after a tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AnimationState {
    pub mode: MotionMode,
    pub is_walking: bool,
    pub breathing_phase: f64,
    pub walking_breathing_phase: f64,
    pub jump_elapsed: u32,
    pub shake_direction: ShakeDirection,
    /// Last computed shake magnitude, applied only when shake is enabled
    pub shake_offset: f64,
}

#[derive(Debug, Clone)]
pub struct VerticalMotionStateMachine {
    spawn_height: f64,
    jump: JumpSettings,
    squat: SquatSettings,
    breathing: BreathingSettings,
    shake: ShakeSettings,
    jump_timer: TickCountdown,
    state: AnimationState,
}

impl VerticalMotionStateMachine {
    pub fn new(
        spawn_height: f64,
        jump: JumpSettings,
        squat: SquatSettings,
        breathing: BreathingSettings,
        shake: ShakeSettings,
    ) -> Self {
        Self {
            spawn_height,
            jump,
            squat,
            breathing,
            shake,
            jump_timer: TickCountdown::new(jump.duration_ticks),
            state: AnimationState::default(),
        }
    }

    /// Starts a jump unless one is already in flight.
    pub fn try_jump(&mut self) -> bool {
        if self.jump_timer.is_active() {
            return false;
        }
        self.jump_timer.start();
        self.state.jump_elapsed = 0;
        log::debug!("jump started");
        true
    }

    pub fn is_jumping(&self) -> bool {
        self.jump_timer.is_active()
    }

    pub fn is_walking(&self) -> bool {
        self.state.is_walking
    }

    /// Walking sway: lateral on both horizontal axes plus a two-harmonic bob.
    /// Advances the walking phase.
    pub fn walking_sway(&mut self) -> DVec3 {
        self.state.walking_breathing_phase += self.breathing.walk_rate;
        let phase = self.state.walking_breathing_phase;
        let amplitude = self.breathing.walk_amplitude;

        let lateral = phase.sin() * amplitude * 2.0;
        let bob = (phase * 3.0).sin() * phase.cos() * amplitude;
        DVec3::new(lateral, bob, lateral)
    }

    /// Idle breathing offset. Advances the idle phase.
    ///
    /// The offset is added to the height before `settle_height` eases it, so
    /// the steady-state swing of the committed height is bounded by
    /// `idle_amplitude * (1 - smoothing) / smoothing`, not by `idle_amplitude`.
    pub fn idle_breath(&mut self) -> f64 {
        self.state.breathing_phase += self.breathing.idle_rate;
        (self.state.breathing_phase * self.breathing.idle_frequency).sin()
            * self.breathing.idle_amplitude
    }

    /// Final camera height for this tick given the proposed height `y`.
    ///
    /// A jump in flight overrides `y` with the jump arc and counts one tick;
    /// otherwise `y` eases toward the squat or standing height.
    pub fn settle_height(&mut self, y: f64, squatting: bool) -> f64 {
        if self.jump_timer.is_active() {
            let t = self.jump_timer.progress();
            let height = self.spawn_height + jump_arc(t, self.jump.height);
            if self.jump_timer.tick() {
                log::debug!("jump landed");
            }
            self.state.jump_elapsed = self.jump_timer.elapsed();
            height
        } else {
            let target = if squatting {
                self.squat.height
            } else {
                self.spawn_height
            };
            lerp(y, target, self.squat.smoothing)
        }
    }

    /// Shake magnitude from wall-clock milliseconds and the current direction.
    pub fn shake_offset(&mut self, wall_clock_ms: f64) -> f64 {
        let offset = (wall_clock_ms * self.shake.frequency).sin()
            * self.shake.amplitude
            * self.state.shake_direction.sign();
        self.state.shake_offset = offset;
        offset
    }

    pub fn shake_enabled(&self) -> bool {
        self.shake.enabled
    }

    /// Records this tick's walking flag and shake side.
    pub fn set_gait(&mut self, is_walking: bool, shake: ShakeDirection) {
        self.state.is_walking = is_walking;
        self.state.shake_direction = shake;
    }

    /// Derives the reported mode. Jumping outranks squatting, which outranks walking.
    pub fn update_mode(&mut self, squatting: bool) {
        self.state.mode = if self.is_jumping() {
            MotionMode::Jumping
        } else if squatting {
            MotionMode::Squatting
        } else if self.state.is_walking {
            MotionMode::Walking
        } else {
            MotionMode::Idle
        };
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }
}
