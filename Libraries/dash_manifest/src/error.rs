use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid duration: {0:?} is not a whole number of seconds")]
    InvalidDuration(String),
    #[error("invalid minBufferTime: {0}")]
    InvalidMinBufferTime(f64),
    #[error("xml error: {0}")]
    Xml(String),
    #[error("utf8 error: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
