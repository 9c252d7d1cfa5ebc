use std::sync::Arc;
use winit::window::Window as WinitWindow;

/// Wrapper around winit Window
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }
}
