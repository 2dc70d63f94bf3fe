mod error;
mod provider;
mod redact;
mod value;

pub use error::SecretError;
pub use provider::{
    CompositeProvider, EnvSecretsProvider, FileSecretsProvider, SecretsProvider,
    StaticSecretsProvider,
};
pub use redact::{redact_headers, REDACTED};
pub use value::SecretValue;

/// Credential looked up when the node config does not name one.
pub const DEFAULT_CREDENTIAL: &str = "TRESTLE_API_KEY";
