//! Application errors.

use storagetutor_core::TutorialError;
use storagetutor_render::RendererError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Tutorial setup failed: {0}")]
    Tutorial(#[from] TutorialError),
    #[error("Render failed: {0}")]
    Render(#[from] RendererError),
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid parameter '{key}': {value}")]
    Param { key: String, value: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Platform error: {0}")]
    Platform(String),
}

pub type AppResult<T> = Result<T, AppError>;
