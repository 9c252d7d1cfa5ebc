use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::core::{Action, Controller};
use crate::motion::ShakeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// World units moved per tick at walking pace
    pub step_distance: f64,
    pub walk_multiplier: f64,
    pub run_multiplier: f64,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            step_distance: 1.0,
            walk_multiplier: 1.0,
            run_multiplier: 2.0,
        }
    }
}

impl MovementSettings {
    pub fn speed(&self, running: bool) -> f64 {
        let multiplier = if running {
            self.run_multiplier
        } else {
            self.walk_multiplier
        };
        self.step_distance * multiplier
    }
}

/// Result of evaluating held movement keys for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub displacement: DVec3,
    pub is_walking: bool,
    pub shake: ShakeDirection,
}

impl Step {
    const STILL: Step = Step {
        displacement: DVec3::ZERO,
        is_walking: false,
        shake: ShakeDirection::None,
    };
}

#[derive(Debug, Clone, Default)]
pub struct MovementController;

impl MovementController {
    pub fn new() -> Self {
        Self
    }

    /// Horizontal displacement for this tick.
    ///
    /// Keys are checked in a fixed order and the first match wins: strafe left,
    /// strafe right, back, forward. Holding forward and strafe together strafes;
    /// there is no diagonal movement.
    pub fn step(&self, pose: &CameraPose, input: &dyn Controller, speed: f64) -> Step {
        let forward = pose.horizontal_forward();
        let right = pose.right();

        if input.is_down(Action::StrafeLeft) {
            Step {
                displacement: right * -speed,
                is_walking: true,
                shake: ShakeDirection::Left,
            }
        } else if input.is_down(Action::StrafeRight) {
            Step {
                displacement: right * speed,
                is_walking: true,
                shake: ShakeDirection::Right,
            }
        } else if input.is_down(Action::Back) {
            Step {
                displacement: -forward * speed,
                is_walking: true,
                shake: ShakeDirection::None,
            }
        } else if input.is_down(Action::Forward) {
            Step {
                displacement: forward * speed,
                is_walking: true,
                shake: ShakeDirection::None,
            }
        } else {
            Step::STILL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InputState, Key};

    fn pose() -> CameraPose {
        CameraPose::new(DVec3::new(0.0, 10.0, 0.0))
    }

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::default();
        for key in keys {
            input.press(*key);
        }
        input
    }

    #[test]
    fn test_speed_from_running_flag() {
        let settings = MovementSettings::default();
        assert_eq!(settings.speed(false), 1.0);
        assert_eq!(settings.speed(true), 2.0);
    }

    #[test]
    fn test_no_keys_is_still() {
        let step = MovementController::new().step(&pose(), &held(&[]), 1.0);
        assert_eq!(step, Step::STILL);
    }

    #[test]
    fn test_forward_moves_along_heading() {
        let step = MovementController::new().step(&pose(), &held(&[Key::KeyW]), 1.5);
        assert!((step.displacement - DVec3::new(0.0, 0.0, -1.5)).length() < 1e-12);
        assert!(step.is_walking);
        assert_eq!(step.shake, ShakeDirection::None);
    }

    #[test]
    fn test_back_beats_forward() {
        let step = MovementController::new().step(&pose(), &held(&[Key::KeyW, Key::KeyS]), 1.0);
        assert!((step.displacement - DVec3::new(0.0, 0.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_strafe_beats_everything() {
        let step = MovementController::new().step(
            &pose(),
            &held(&[Key::KeyW, Key::KeyA, Key::KeyD]),
            1.0,
        );
        assert!((step.displacement - DVec3::new(-1.0, 0.0, 0.0)).length() < 1e-12);
        assert_eq!(step.shake, ShakeDirection::Left);

        let step = MovementController::new().step(&pose(), &held(&[Key::ArrowRight, Key::KeyS]), 1.0);
        assert!((step.displacement - DVec3::X).length() < 1e-12);
        assert_eq!(step.shake, ShakeDirection::Right);
    }

    #[test]
    fn test_pitch_does_not_change_ground_speed() {
        let mut p = pose();
        p.pitch = -1.4;
        let step = MovementController::new().step(&p, &held(&[Key::KeyW]), 1.0);
        assert_eq!(step.displacement.y, 0.0);
        assert!((step.displacement.length() - 1.0).abs() < 1e-12);
    }
}
