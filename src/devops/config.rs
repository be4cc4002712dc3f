use std::{collections::HashMap, fmt};
use thiserror::Error;

pub const ENV_ORGANIZATION: &str = "azuml_devopsOrg";
pub const ENV_PROJECT: &str = "azuml_devopsProject";
pub const ENV_REPOSITORY_ID: &str = "azuml_devopsRepoId";
pub const ENV_PAT: &str = "azuml_devopsPAT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unable to retrieve '{variable}' environment variable")]
pub struct ConfigurationError {
    pub variable: &'static str,
}

/// Where DevOps credentials are read from.
pub trait ConfigSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Coordinates of the repository holding diagram sources, plus the
/// personal access token used to read it.
#[derive(Clone, PartialEq, Eq)]
pub struct DevOpsConfig {
    pub organization: String,
    pub project: String,
    pub repository_id: String,
    pub access_token: String,
}

impl fmt::Debug for DevOpsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevOpsConfig")
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("repository_id", &self.repository_id)
            .field("access_token", &"***")
            .finish()
    }
}

impl DevOpsConfig {
    /// Fails on the first variable that is missing or empty.
    pub fn load(source: &dyn ConfigSource) -> Result<Self, ConfigurationError> {
        let read = |variable: &'static str| {
            source
                .var(variable)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigurationError { variable })
        };

        Ok(Self {
            organization: read(ENV_ORGANIZATION)?,
            project: read(ENV_PROJECT)?,
            repository_id: read(ENV_REPOSITORY_ID)?,
            access_token: read(ENV_PAT)?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::load(&EnvSource)
    }

    /// Path of the git "items" endpoint, relative to the DevOps base url.
    pub fn items_path(&self) -> String {
        format!(
            "{}/{}/_apis/git/repositories/{}/items",
            self.organization, self.project, self.repository_id
        )
    }
}
