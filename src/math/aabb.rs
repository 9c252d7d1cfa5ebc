use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box the camera is allowed to move inside.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    pub min: DVec3,
    pub max: DVec3,
}

impl AABB {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Box that grows to fit the first point passed to `include`.
    pub fn empty() -> Self {
        Self {
            min: DVec3::splat(f64::INFINITY),
            max: DVec3::splat(f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Clamps each axis of `point` independently into `[min, max]`.
    pub fn clamp(&self, point: DVec3) -> DVec3 {
        point.max(self.min).min(self.max)
    }
}

impl Default for AABB {
    /// The walkable area of the default walkthrough scene.
    fn default() -> Self {
        Self {
            min: DVec3::new(-53.0, 0.0, -43.0),
            max: DVec3::new(72.0, 20.0, 41.0),
        }
    }
}

/// Free-standing form of [`AABB::clamp`] used by the per-tick pipeline.
pub fn clamp_position(position: DVec3, bounds: &AABB) -> DVec3 {
    bounds.clamp(position)
}
