use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The payload carried no usable email. Client-caused, never persisted.
    #[error("Invalid email")]
    InvalidEmail,

    /// The storage layer failed. Holds the underlying cause for the logs only.
    #[error("Database error: {0}")]
    Database(String),
}

pub type AppResult<T> = Result<T, AppError>;
