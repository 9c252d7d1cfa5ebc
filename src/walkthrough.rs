//! Per-tick camera update.
//!
//! [`CameraStateUpdater`] owns the whole controller: input state, look angles,
//! animation state and the committed pose. Platform events are queued with
//! [`CameraStateUpdater::push_event`] and applied in arrival order at the start
//! of the next [`CameraStateUpdater::tick`], so a tick always sees a complete,
//! ordered batch of input.
//!
//! Each tick runs, in order:
//! 1. walking sway, if the *previous* tick was walking
//! 2. movement keys (first match wins), which set this tick's walking flag
//! 3. speed for the next tick from the run modifier
//! 4. idle breathing, if this tick is not walking
//! 5. the jump arc, or squat smoothing when not jumping
//! 6. clamping into the movement bounds
//! 7. commit
//!
//! Steps 1 and 2 read different walking flags, so sway starts and stops one
//! tick after the movement keys do. Likewise the speed used in step 2 is the
//! one computed by the previous tick.

use std::collections::VecDeque;

use crate::camera::CameraPose;
use crate::config::WalkthroughConfig;
use crate::core::{Action, InputEvent, InputState};
use crate::frame::FrameInfo;
use crate::look::PointerLookController;
use crate::math::{clamp_position, AABB};
use crate::motion::{AnimationState, VerticalMotionStateMachine};
use crate::movement::{MovementController, MovementSettings};

pub struct CameraStateUpdater {
    bounds: AABB,
    speeds: MovementSettings,
    input: InputState,
    look: PointerLookController,
    movement: MovementController,
    motion: VerticalMotionStateMachine,
    pose: CameraPose,
    current_speed: f64,
    queue: VecDeque<InputEvent>,
    ticks: u64,
}

impl CameraStateUpdater {
    pub fn new(config: &WalkthroughConfig) -> Self {
        Self {
            bounds: config.bounds,
            speeds: config.movement,
            input: InputState::new(config.bindings.clone()),
            look: PointerLookController::new(config.look),
            movement: MovementController::new(),
            motion: VerticalMotionStateMachine::new(
                config.spawn_height,
                config.jump,
                config.squat,
                config.breathing,
                config.shake,
            ),
            pose: CameraPose::new(config.spawn_point()),
            current_speed: config.movement.step_distance,
            queue: VecDeque::new(),
            ticks: 0,
        }
    }

    /// Queue an event for the next tick
    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Advance one display tick and return the committed pose
    pub fn tick(&mut self, frame: &FrameInfo) -> CameraPose {
        while let Some(event) = self.queue.pop_front() {
            self.apply_event(event);
        }

        self.pose.yaw = self.look.yaw();
        self.pose.pitch = self.look.pitch();

        let mut position = self.pose.position;

        if self.motion.is_walking() {
            position += self.motion.walking_sway();
        }

        let step = self.movement.step(&self.pose, &self.input, self.current_speed);
        position += step.displacement;
        self.motion.set_gait(step.is_walking, step.shake);

        self.current_speed = self.speeds.speed(self.input.is_running());

        if !step.is_walking {
            position.y += self.motion.idle_breath();
        }

        let squatting = self.input.is_squatting();
        position.y = self.motion.settle_height(position.y, squatting);

        let shake = self.motion.shake_offset(frame.wall_clock_ms);
        if self.motion.shake_enabled() {
            position += self.pose.right() * shake;
        }

        self.pose.position = clamp_position(position, &self.bounds);
        self.motion.update_mode(squatting);
        self.ticks += 1;

        self.pose
    }

    fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                let newly_pressed = self.input.press(key);
                let bindings = self.input.bindings();
                if bindings.is_bound(key, Action::Jump) {
                    self.motion.try_jump();
                }
                if newly_pressed && bindings.is_bound(key, Action::Squat) {
                    log::debug!("squat pressed ({:?})", key);
                }
                if newly_pressed && bindings.is_bound(key, Action::Run) {
                    log::debug!("run pressed ({:?})", key);
                }
            }
            InputEvent::KeyUp(key) => {
                self.input.release(key);
            }
            InputEvent::PointerDown(at) => self.look.on_drag_start(&mut self.input, at),
            InputEvent::PointerMove(to) => {
                self.look.on_drag_move(&mut self.input, to);
            }
            InputEvent::PointerUp => self.look.on_drag_end(&mut self.input),
            InputEvent::FocusLost => {
                log::debug!("focus lost, releasing held input");
                self.input.release_all();
            }
        }
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn animation(&self) -> &AnimationState {
        self.motion.state()
    }

    pub fn is_jumping(&self) -> bool {
        self.motion.is_jumping()
    }

    /// Speed the next tick's movement will use
    pub fn current_speed(&self) -> f64 {
        self.current_speed
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
