// src/utils/error.rs
use thiserror::Error;

// Extraction itself never fails (malformed markdown degrades to empty
// results), so the only real failure modes belong to the binary: bad
// configuration, file I/O, and an unparsable input payload.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Invalid input payload: {0}")]
    Input(#[from] serde_json::Error),
}
