/// Shared error type used across all FinConsult crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP: {0}")]
    Http(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("provider {provider}: {message}")]
    Provider { provider: String, message: String },

    #[error("auth: {0}")]
    Auth(String),

    #[error("config: {0}")]
    Config(String),

    /// No API credential is set; no outbound request is possible until
    /// the user supplies one.
    #[error("no API credential configured")]
    CredentialMissing,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
