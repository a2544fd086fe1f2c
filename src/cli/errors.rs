use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Run(#[from] testvid::Error),
}
