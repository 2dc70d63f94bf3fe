use trestle_core::types::{ErrorCause, ErrorKind};
use trestle_core::{BuildError, MissingFieldError, ParameterError, ResultRecord};

use crate::executor::api::RemoteError;

/// Why one item failed.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("failed to build request: {0}")]
    Build(String),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl From<BuildError> for ItemError {
    fn from(e: BuildError) -> Self {
        match e {
            BuildError::MissingField(m) => ItemError::MissingField(m),
            BuildError::Parameter(p) => ItemError::Parameter(p),
            other => ItemError::Build(other.to_string()),
        }
    }
}

impl ItemError {
    pub fn cause(&self) -> ErrorCause {
        let message = self.to_string();
        match self {
            ItemError::MissingField(m) => ErrorCause {
                field: Some(m.field.clone()),
                ..ErrorCause::new(ErrorKind::MissingField, message)
            },
            ItemError::Parameter(_) | ItemError::Build(_) => {
                ErrorCause::new(ErrorKind::Parameter, message)
            }
            ItemError::Remote(r) => ErrorCause {
                status: r.status(),
                body: r.body(),
                ..ErrorCause::new(ErrorKind::RemoteService, message)
            },
        }
    }
}

/// Strict mode stopped at `index`. Records collected before the failure are kept.
#[derive(Debug, thiserror::Error)]
#[error("item {index}: {error}")]
pub struct BatchAborted {
    pub index: usize,
    #[source]
    pub error: ItemError,
    pub completed: Vec<ResultRecord>,
}
