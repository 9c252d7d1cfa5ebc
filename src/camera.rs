use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Yaw about world up, then pitch about the local right axis. No roll.
pub fn orientation_from(yaw: f64, pitch: f64) -> DQuat {
    DQuat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

/// The committed camera pose for one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: DVec3,
    pub yaw: f64,
    pub pitch: f64,
}

impl CameraPose {
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn orientation(&self) -> DQuat {
        orientation_from(self.yaw, self.pitch)
    }

    /// View direction. The camera looks down -Z at zero yaw and pitch.
    pub fn forward(&self) -> DVec3 {
        self.orientation() * DVec3::NEG_Z
    }

    /// Forward with its vertical component removed, renormalized
    pub fn horizontal_forward(&self) -> DVec3 {
        let f = self.forward();
        DVec3::new(f.x, 0.0, f.z).normalize_or_zero()
    }

    /// Horizontal right vector: `horizontal_forward × up`
    pub fn right(&self) -> DVec3 {
        self.horizontal_forward().cross(DVec3::Y).normalize_or_zero()
    }

    pub fn up(&self) -> DVec3 {
        self.orientation() * DVec3::Y
    }

    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_to_rh(self.position, self.forward(), DVec3::Y)
    }
}

/// Perspective projection settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub fov_y_degrees: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Perspective projection that follows the window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Projection {
    pub fn new(settings: &ProjectionSettings, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_y: settings.fov_y_degrees.to_radians(),
            aspect: 1.0,
            near: settings.near,
            far: settings.far,
        };
        projection.resize(width, height);
        projection
    }

    /// Recomputes the aspect ratio. Zero-sized (minimized) windows keep the old one.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f64 / height as f64;
        true
    }

    pub fn matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}
