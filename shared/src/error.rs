use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Geolocation failed: {0}")]
    Geolocation(String),

    #[error("Store request failed: {0}")]
    Store(String),

    #[error("Identity provider failed: {0}")]
    Identity(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
