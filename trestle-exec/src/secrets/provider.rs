use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::secrets::{SecretError, SecretValue};

/// Resolves a credential name to the stored API key.
#[async_trait]
pub trait SecretsProvider: Send + Sync {
    async fn get(&self, credential: &str) -> Result<SecretValue, SecretError>;
}

/// Tries each provider in order; `NotFound` falls through to the next one.
#[derive(Default)]
pub struct CompositeProvider {
    providers: Vec<Box<dyn SecretsProvider>>,
}

impl CompositeProvider {
    pub fn new(providers: Vec<Box<dyn SecretsProvider>>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl SecretsProvider for CompositeProvider {
    async fn get(&self, credential: &str) -> Result<SecretValue, SecretError> {
        for p in &self.providers {
            match p.get(credential).await {
                Ok(v) => return Ok(v),
                Err(SecretError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(SecretError::NotFound(credential.to_string()))
    }
}

/// Reads `<prefix><CREDENTIAL>` from the environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretsProvider {
    pub env_prefix: Option<String>,
}

impl EnvSecretsProvider {
    pub fn env_key(&self, credential: &str) -> String {
        let name: String = credential
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        match &self.env_prefix {
            None => name,
            Some(p) => format!("{p}{name}"),
        }
    }
}

#[async_trait]
impl SecretsProvider for EnvSecretsProvider {
    async fn get(&self, credential: &str) -> Result<SecretValue, SecretError> {
        let key = self.env_key(credential);
        match std::env::var(&key) {
            Ok(v) if v.is_empty() => Err(SecretError::NotFound(credential.to_string())),
            Ok(v) => Ok(SecretValue::new(v)),
            Err(std::env::VarError::NotPresent) => {
                Err(SecretError::NotFound(credential.to_string()))
            }
            Err(e) => Err(SecretError::provider(credential, e.to_string())),
        }
    }
}

/// One file per credential under `base_dir`; a trailing newline is dropped.
#[derive(Debug, Clone)]
pub struct FileSecretsProvider {
    pub base_dir: PathBuf,
}

impl FileSecretsProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl SecretsProvider for FileSecretsProvider {
    async fn get(&self, credential: &str) -> Result<SecretValue, SecretError> {
        if credential.is_empty()
            || credential.contains(['/', '\\'])
            || credential.starts_with('.')
        {
            return Err(SecretError::InvalidName(credential.to_string()));
        }
        let path = self.base_dir.join(credential);
        let bytes = match tokio::fs::read(&path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SecretError::NotFound(credential.to_string()))
            }
            Err(e) => return Err(SecretError::provider(credential, e.to_string())),
        };
        let mut value = String::from_utf8(bytes)
            .map_err(|_| SecretError::provider(credential, "secret file is not valid UTF-8"))?;
        while value.ends_with(['\n', '\r']) {
            value.pop();
        }
        Ok(SecretValue::new(value))
    }
}

/// In-memory credentials, for tests and for keys passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct StaticSecretsProvider {
    values: BTreeMap<String, SecretValue>,
}

impl StaticSecretsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, credential: impl Into<String>, value: SecretValue) -> Self {
        self.values.insert(credential.into(), value);
        self
    }
}

#[async_trait]
impl SecretsProvider for StaticSecretsProvider {
    async fn get(&self, credential: &str) -> Result<SecretValue, SecretError> {
        self.values
            .get(credential)
            .cloned()
            .ok_or_else(|| SecretError::NotFound(credential.to_string()))
    }
}
