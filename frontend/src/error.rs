use thiserror::Error;

/// Failures of a single request against the movie database.
///
/// The `Display` output is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Something went wrong")]
    Transport { status: u16 },

    #[error("No movie found")]
    NoResults,

    #[error("Request was superseded")]
    Cancelled,

    #[error("Failed to reach the movie database: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Cancelled,
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("OMDB_API_KEY is not set; add it to ENV_CONFIG or the build environment")]
    MissingApiKey,

    #[error("invalid API url {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to read {0:?} from storage")]
    Read(String),

    #[error("failed to write {0:?} to storage")]
    Write(String),

    #[error("stored watched list is malformed: {0}")]
    Malformed(String),
}
