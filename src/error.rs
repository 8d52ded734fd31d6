use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::viewport::ViewportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
