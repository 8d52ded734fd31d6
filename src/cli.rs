use std::path::PathBuf;

use clap::Parser;

use crate::breakpoint::ViewportWidth;
use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "responsive-root", version)]
#[command(about = "Render a mobile, tablet or desktop screen based on the terminal width")]
pub struct Cli {
    /// Config file (default: <config_dir>/responsive-root/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pin the viewport width in pixels instead of reading the terminal
    #[arg(short, long, value_name = "PX")]
    pub width: Option<ViewportWidth>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config and apply command line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(width) = self.width {
            config.viewport.width_override = Some(width);
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        Ok(config)
    }
}
