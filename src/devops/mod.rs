mod auth;
mod config;
mod repository;

pub use self::{
    auth::encode_basic_auth,
    config::{
        ConfigSource, ConfigurationError, DevOpsConfig, EnvSource, ENV_ORGANIZATION, ENV_PAT,
        ENV_PROJECT, ENV_REPOSITORY_ID,
    },
    repository::DevOpsRepository,
};
