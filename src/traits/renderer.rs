use crate::types::CameraUniform;

/// Render collaborator - receives the committed camera each tick
pub trait PoseRenderer {
    /// Window was resized to the given physical size
    fn resize(&mut self, width: u32, height: u32);

    /// Submit the camera for this tick's frame
    fn submit(&mut self, camera: &CameraUniform) -> anyhow::Result<()>;
}
