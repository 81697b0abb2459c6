//! Demo error type

use thiserror::Error;

/// Anything that can stop the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("invalid sample data: {0}")]
    Record(#[from] lintel::RecordError),
}
