use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyLegendError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type KlResult<T> = Result<T, KeyLegendError>;
