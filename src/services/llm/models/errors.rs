/// Errors raised by the model service layer.
#[derive(Debug)]
pub enum ModelClientError {
    /// The HTTP request could not be sent or its body could not be read.
    Request(String),
    /// The server answered with a non-success status.
    Http { status: u16, body: String },
    /// The response body was not the JSON we expected.
    Serialization(String),
    /// Client construction failed (bad header, missing provider, ...).
    Config(String),
}

impl std::fmt::Display for ModelClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelClientError::Request(s) => write!(f, "Request Error: {s}"),
            ModelClientError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ModelClientError::Serialization(s) => write!(f, "Serialization Error: {s}"),
            ModelClientError::Config(s) => write!(f, "Config Error: {s}"),
        }
    }
}

impl std::error::Error for ModelClientError {}

impl From<reqwest::Error> for ModelClientError {
    fn from(err: reqwest::Error) -> Self {
        ModelClientError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for ModelClientError {
    fn from(err: serde_json::Error) -> Self {
        ModelClientError::Serialization(err.to_string())
    }
}
