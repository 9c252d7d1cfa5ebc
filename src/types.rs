use crate::camera::{CameraPose, Projection};

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    pub time: f32, // Seconds since session start
}

impl CameraUniform {
    pub fn from_pose(pose: &CameraPose, projection: &Projection, time: f64) -> Self {
        let view_proj = projection.matrix() * pose.view_matrix();

        Self {
            view_proj: view_proj.as_mat4().to_cols_array_2d(),
            position: pose.position.as_vec3().to_array(),
            _pad1: 0.0,
            forward: pose.forward().as_vec3().to_array(),
            _pad2: 0.0,
            right: pose.right().as_vec3().to_array(),
            _pad3: 0.0,
            up: pose.up().as_vec3().to_array(),
            time: time as f32,
        }
    }
}
