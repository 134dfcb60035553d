use thiserror::Error;

/// Feil fra grensesnittene rundt kjernen (JSON-inngang, konfig, disk).
/// Selve analysene er totale og returnerer aldri feil.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl<E: std::fmt::Display> From<serde_path_to_error::Error<E>> for AnalyticsError {
    fn from(err: serde_path_to_error::Error<E>) -> Self {
        AnalyticsError::Parse {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}
