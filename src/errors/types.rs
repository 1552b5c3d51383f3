use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user asked for something the client can answer without the server,
    /// e.g. submitting an upload with no file chosen.
    #[error("{0}")]
    Input(String),

    /// The server answered with an explicit `error` field.
    #[error("{0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ReportDeskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ReportDeskError::Network(format!("request timed out: {}", err))
        } else if err.is_decode() {
            ReportDeskError::MalformedResponse(err.to_string())
        } else {
            ReportDeskError::Network(err.to_string())
        }
    }
}
