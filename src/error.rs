use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewGramError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Review Source Error: {0}")]
    Source(String),
}

pub type RgResult<T> = Result<T, ReviewGramError>;
