use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Upstream API error ({status}): {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to access session store: {0}")]
    Store(String),

    #[error("Server configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// HTTP status the router reports for this error. Upstream failures carry
    /// the provider's own status through to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Validation(_) => 400,
            GatewayError::SessionNotFound(_) => 404,
            GatewayError::MethodNotAllowed => 405,
            GatewayError::Upstream { status, .. } => *status,
            GatewayError::Http(_) | GatewayError::Store(_) | GatewayError::Config(_) => 500,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        GatewayError::Http(error.to_string())
    }
}

impl From<anyhow::Error> for GatewayError {
    fn from(error: anyhow::Error) -> Self {
        GatewayError::Store(error.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::Validation(error.to_string())
    }
}
