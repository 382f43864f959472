use thiserror::Error;

#[derive(Error, Debug)]
pub enum BayesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Empty training set: priors and entropy are undefined")]
    EmptyTrainingSet,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BayesError>;
