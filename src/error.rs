use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcpSamplesError {
    #[error("Invalid wrapped key, expected base64: {0}")]
    InvalidWrappedKey(String),

    #[error("No access token available; set GOOGLE_ACCESS_TOKEN or sign in with `gcloud auth login`")]
    MissingCredentials,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{service} API error ({status}): {message}")]
    Api {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl GcpSamplesError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidWrappedKey(_) => 1,
            Self::MissingCredentials => 2,
            Self::Config(_) => 3,
            Self::Api { .. } => 4,
            Self::Io(_) | Self::Serialization(_) | Self::Http(_) => 10,
        }
    }
}

pub type Result<T> = std::result::Result<T, GcpSamplesError>;
