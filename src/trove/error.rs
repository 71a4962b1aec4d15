use thiserror::Error;

pub type Result<T> = std::result::Result<T, TroveError>;

#[derive(Error, Debug)]
pub enum TroveError {
    #[error("I/O error: {0}")]
    Io(std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}
