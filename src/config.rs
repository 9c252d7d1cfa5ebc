//! Static walkthrough constants, loadable from a JSON file.

use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::camera::ProjectionSettings;
use crate::core::KeyBindings;
use crate::look::LookSettings;
use crate::math::AABB;
use crate::motion::{BreathingSettings, JumpSettings, ShakeSettings, SquatSettings};
use crate::movement::MovementSettings;

/// Every tunable the camera controller reads. Fixed for the session.
///
/// Missing fields in a config file fall back to the defaults below, which
/// reproduce the original walkthrough scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkthroughConfig {
    pub spawn_height: f64,
    pub bounds: AABB,
    pub movement: MovementSettings,
    pub jump: JumpSettings,
    pub squat: SquatSettings,
    pub breathing: BreathingSettings,
    pub shake: ShakeSettings,
    pub look: LookSettings,
    pub bindings: KeyBindings,
    pub projection: ProjectionSettings,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            spawn_height: 10.0,
            bounds: AABB::default(),
            movement: MovementSettings::default(),
            jump: JumpSettings::default(),
            squat: SquatSettings::default(),
            breathing: BreathingSettings::default(),
            shake: ShakeSettings::default(),
            look: LookSettings::default(),
            bindings: KeyBindings::default(),
            projection: ProjectionSettings::default(),
        }
    }
}

impl WalkthroughConfig {
    /// Reads and validates a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        log::info!("Loaded walkthrough config from {:?}", path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn spawn_point(&self) -> DVec3 {
        DVec3::new(0.0, self.spawn_height, 0.0)
    }

    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("spawn_height", self.spawn_height),
            ("movement.step_distance", self.movement.step_distance),
            ("movement.walk_multiplier", self.movement.walk_multiplier),
            ("movement.run_multiplier", self.movement.run_multiplier),
            ("jump.height", self.jump.height),
            ("squat.height", self.squat.height),
            ("squat.smoothing", self.squat.smoothing),
            ("breathing.idle_rate", self.breathing.idle_rate),
            ("breathing.idle_frequency", self.breathing.idle_frequency),
            ("breathing.idle_amplitude", self.breathing.idle_amplitude),
            ("breathing.walk_rate", self.breathing.walk_rate),
            ("breathing.walk_amplitude", self.breathing.walk_amplitude),
            ("shake.amplitude", self.shake.amplitude),
            ("shake.frequency", self.shake.frequency),
            ("look.sensitivity", self.look.sensitivity),
            ("look.pitch_margin", self.look.pitch_margin),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                bail!("{} must be finite, got {}", name, value);
            }
        }

        if !(self.bounds.min.is_finite() && self.bounds.max.is_finite()) {
            bail!("bounds must be finite");
        }
        if self.bounds.is_empty() {
            bail!(
                "bounds min {:?} exceeds max {:?}",
                self.bounds.min,
                self.bounds.max
            );
        }
        if !self.bounds.contains(self.spawn_point()) {
            bail!("spawn point {:?} lies outside the bounds", self.spawn_point());
        }
        if self.jump.duration_ticks == 0 {
            bail!("jump.duration_ticks must be at least 1");
        }
        if !(self.squat.smoothing > 0.0 && self.squat.smoothing <= 1.0) {
            bail!("squat.smoothing must be in (0, 1], got {}", self.squat.smoothing);
        }
        if !(self.look.pitch_margin > 0.0 && self.look.pitch_margin < std::f64::consts::FRAC_PI_2) {
            bail!("look.pitch_margin must be in (0, π/2), got {}", self.look.pitch_margin);
        }
        Ok(())
    }
}
