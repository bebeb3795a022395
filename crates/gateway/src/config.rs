//! Remote content-store configuration.

use thiserror::Error;

pub const PROJECT_ID_VAR: &str = "CONTENT_STORE_PROJECT_ID";
pub const DATASET_VAR: &str = "CONTENT_STORE_DATASET";
pub const TOKEN_VAR: &str = "CONTENT_STORE_TOKEN";

/// Missing credentials are a deployment error: the host process must fail to
/// start rather than serve with a broken backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing or empty")]
    MissingVar(&'static str),
}

/// Credentials and addressing for the remote content store.
#[derive(Debug, Clone)]
pub struct RemoteStoreConfig {
    project_id: String,
    dataset: String,
    token: String,
}

impl RemoteStoreConfig {
    pub fn new(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            token: token.into(),
        }
    }

    /// Load from the environment. Any missing or empty variable is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            project_id: require_var(PROJECT_ID_VAR)?,
            dataset: require_var(DATASET_VAR)?,
            token: require_var(TOKEN_VAR)?,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// URL of the store's read-query endpoint.
    pub fn query_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v1/data/query/{}",
            self.project_id, self.dataset
        )
    }

    /// URL of the store's mutation endpoint.
    pub fn mutate_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v1/data/mutate/{}",
            self.project_id, self.dataset
        )
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_address_the_configured_project_and_dataset() {
        let config = RemoteStoreConfig::new("proj1", "production", "secret");
        assert_eq!(
            config.query_url(),
            "https://proj1.api.sanity.io/v1/data/query/production"
        );
        assert_eq!(
            config.mutate_url(),
            "https://proj1.api.sanity.io/v1/data/mutate/production"
        );
    }
}
