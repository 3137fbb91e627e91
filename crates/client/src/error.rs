use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx status with a JSON error body; carries the body's `msg` or `error`.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// The response declared JSON but the body did not parse.
    #[error("Invalid JSON from server")]
    InvalidResponse,

    /// The response was not JSON at all, whatever its status.
    #[error("Server error: {status} {status_text}")]
    ServerError { status: u16, status_text: String },

    /// No response was obtained.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Non-2xx status on a public profile lookup.
    #[error("{0}")]
    FetchFailed(String),

    /// Well-formed JSON that does not have the expected shape.
    #[error("Failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] domain::DomainError),

    #[error("Credential store error: {0}")]
    Credentials(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } | Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Invalid(domain::DomainError::Validation(errors))
    }
}
