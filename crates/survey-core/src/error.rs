use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a JSON object of fields, got {0}")]
    NotAnObject(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: String, value: String },
}
