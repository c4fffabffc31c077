use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum DevrankError {
    #[error("catalog file not found: {0}")]
    CatalogNotFound(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid weight override: {0}")]
    InvalidWeightOverride(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DevrankError>;
