use axum::http::StatusCode;
use std::fmt;

/// Failures of the date-log store itself, kept separate from the HTTP layer
/// so callers can tell a rejected input from a broken or corrupted file.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected at the boundary (bad date, value out of range). Never
    /// touches the persisted state.
    Validation(String),
    /// The backing file could not be read or written. The previously
    /// persisted state remains authoritative.
    Storage(std::io::Error),
    /// The backing file exists but does not parse as a log collection. Never
    /// auto-repaired; the file is left exactly as found.
    Corruption { path: String, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "{msg}"),
            StoreError::Storage(err) => write!(f, "storage failure: {err}"),
            StoreError::Corruption { path, source } => {
                write!(f, "log file {path} is corrupted: {source}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Validation(_) => None,
            StoreError::Storage(err) => Some(err),
            StoreError::Corruption { source, .. } => Some(source),
        }
    }
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err)
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            StoreError::Storage(_) | StoreError::Corruption { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
