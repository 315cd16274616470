use reqwest::StatusCode;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error during JSON serialization or deserialization
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error while talking to the lookup API
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Error during input validation.
    #[error("{0}")]
    Validation(String),
    /// Lookup API answered with a non-success status
    #[error("Usuário não encontrado ({0})")]
    UserNotFound(StatusCode),
    /// Error when the profile link cannot be opened
    #[error("failed to open browser: {0}")]
    Browser(String),
}
