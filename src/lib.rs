pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod loaders;
pub mod look;
pub mod math;
pub mod motion;
pub mod movement;
pub mod traits;
pub mod types;
pub mod walkthrough;
pub mod window;

pub use camera::CameraPose;
pub use config::WalkthroughConfig;
pub use walkthrough::CameraStateUpdater;
