use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return GatewayError::Decode(format!("Malformed response body: {err}"));
        }

        match err.status() {
            Some(status) => GatewayError::Server {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => GatewayError::Network(format!("Request failed: {err}")),
        }
    }
}
