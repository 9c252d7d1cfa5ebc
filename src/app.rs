//! Winit application shell around the camera controller.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use crate::camera::{CameraPose, Projection};
use crate::config::WalkthroughConfig;
use crate::core::WinitInputAdapter;
use crate::frame::{FrameClock, FrameInfo};
use crate::traits::PoseRenderer;
use crate::types::CameraUniform;
use crate::walkthrough::CameraStateUpdater;
use crate::window::Window;

const TICK_RATE_LOG_INTERVAL: f64 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// Renderer that only records and logs the submitted camera
#[derive(Debug, Default)]
pub struct LogRenderer {
    size: (u32, u32),
    submitted: u64,
    last: Option<CameraUniform>,
}

impl LogRenderer {
    pub fn submitted(&self) -> u64 {
        self.submitted
    }

    pub fn last(&self) -> Option<&CameraUniform> {
        self.last.as_ref()
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl PoseRenderer for LogRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        log::debug!("viewport resized to {}x{}", width, height);
    }

    fn submit(&mut self, camera: &CameraUniform) -> anyhow::Result<()> {
        self.submitted += 1;
        log::debug!(
            "camera at {:?} facing {:?}",
            camera.position,
            camera.forward
        );
        self.last = Some(*camera);
        Ok(())
    }
}

/// Counts ticks and logs the rate once per interval
#[derive(Debug, Default)]
struct TickRate {
    count: u32,
    timer: f64,
}

impl TickRate {
    fn record(&mut self, delta: f64) {
        self.count += 1;
        self.timer += delta;

        if self.timer >= TICK_RATE_LOG_INTERVAL {
            log::info!("ticks/s: {:.1}", self.count as f64 / self.timer);
            self.count = 0;
            self.timer = 0.0;
        }
    }
}

pub struct WalkthroughApp<R: PoseRenderer> {
    window: Option<Window>,
    updater: CameraStateUpdater,
    adapter: WinitInputAdapter,
    projection: Projection,
    renderer: R,
    frames: FrameClock,
    tick_rate: TickRate,
}

impl<R: PoseRenderer> WalkthroughApp<R> {
    pub fn new(config: &WalkthroughConfig, renderer: R) -> Self {
        Self {
            window: None,
            updater: CameraStateUpdater::new(config),
            adapter: WinitInputAdapter::new(),
            projection: Projection::new(
                &config.projection,
                INITIAL_WINDOW_WIDTH,
                INITIAL_WINDOW_HEIGHT,
            ),
            renderer,
            frames: FrameClock::new(),
            tick_rate: TickRate::default(),
        }
    }

    pub fn updater(&self) -> &CameraStateUpdater {
        &self.updater
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.projection.resize(width, height) {
            self.renderer.resize(width, height);
        }
    }

    fn redraw(&mut self) {
        let Some(frame) = self.frames.next() else {
            return;
        };
        self.tick_rate.record(frame.delta);

        let pose = self.updater.tick(&frame);
        let uniform = CameraUniform::from_pose(&pose, &self.projection, frame.time);
        if let Err(e) = self.renderer.submit(&uniform) {
            log::error!("Render error: {:#}", e);
        }
    }
}

impl<R: PoseRenderer> ApplicationHandler for WalkthroughApp<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title("Walkthrough")
                .with_inner_size(LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Window::new(Arc::new(w)),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = window.inner_size();
        self.resize(width, height);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let Some(input) = self.adapter.translate(&other) {
                    self.updater.push_event(input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Ticks the controller `ticks` times with no input, as fixed 60 Hz frames.
pub fn run_headless(config: &WalkthroughConfig, ticks: u64) -> CameraPose {
    let mut updater = CameraStateUpdater::new(config);
    let mut renderer = LogRenderer::default();
    let projection = Projection::new(
        &config.projection,
        INITIAL_WINDOW_WIDTH,
        INITIAL_WINDOW_HEIGHT,
    );

    for number in 0..ticks {
        let frame = FrameInfo::fixed(number);
        let pose = updater.tick(&frame);
        let uniform = CameraUniform::from_pose(&pose, &projection, frame.time);
        if let Err(e) = renderer.submit(&uniform) {
            log::error!("Render error: {:#}", e);
        }
    }

    log::info!("headless run finished after {} ticks", renderer.submitted());
    *updater.pose()
}
