// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::WalkthroughConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "walkthrough")]
#[command(about = "First-person walkthrough camera", long_about = None)]
pub struct Cli {
    /// JSON file overriding the built-in walkthrough constants
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// glTF scene model to load alongside the camera
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Apply the strafing shake to the camera position
    #[arg(long = "shake", default_value = "false")]
    pub shake: bool,

    /// Run this many ticks without a window and print the final pose as JSON
    #[arg(long, value_name = "TICKS")]
    pub headless: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn load_config(&self) -> Result<WalkthroughConfig> {
        let mut config = match &self.config {
            Some(path) => WalkthroughConfig::load(path)?,
            None => {
                log::info!("Using built-in walkthrough config");
                WalkthroughConfig::default()
            }
        };
        if self.shake {
            config.shake.enabled = true;
        }
        Ok(config)
    }
}
