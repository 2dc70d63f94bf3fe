#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("credential not found: {0}")]
    NotFound(String),
    #[error("invalid credential name: {0:?}")]
    InvalidName(String),
    #[error("secret provider error for {credential}: {message}")]
    Provider { credential: String, message: String },
}

impl SecretError {
    pub fn provider(credential: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            credential: credential.into(),
            message: message.into(),
        }
    }
}
