use crate::consts::{
    DEFAULT_DEVOPS_API_VERSION, DEFAULT_DEVOPS_URL, DEFAULT_PLANTUML_COMMAND,
    DEFAULT_TEST_HTTP_URL,
};
use anyhow::anyhow;
use config::{Config, File};
use serde::{de::IgnoredAny, Deserialize};
use std::{net::SocketAddr, path::PathBuf, str::FromStr};
use url::Url;

const CONFIG_PATH_VAR: &str = "AZUML__CONFIG";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub server: ServerSettings,
    pub devops: DevOpsSettings,
    pub renderer: RendererSettings,
    pub diagnostics: DiagnosticsSettings,
    pub metrics: MetricsSettings,

    pub config: IgnoredAny,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub addr: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from_str("0.0.0.0:8043").expect("should be valid url"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DevOpsSettings {
    /// Root of the DevOps REST API; organization, project and
    /// repository segments are appended per request.
    pub base_url: Url,
    pub api_version: String,
}

impl Default for DevOpsSettings {
    fn default() -> Self {
        Self {
            base_url: Url::from_str(DEFAULT_DEVOPS_URL).expect("valid url"),
            api_version: DEFAULT_DEVOPS_API_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RendererSettings {
    /// PlantUML executable; looked up in `PATH` when relative.
    pub command: PathBuf,
    pub args: Vec<String>,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            command: PathBuf::from(DEFAULT_PLANTUML_COMMAND),
            args: ["-tpng", "-pipe", "-charset", "UTF-8"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticsSettings {
    pub enabled: bool,
    pub test_http_url: Url,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            test_http_url: Url::from_str(DEFAULT_TEST_HTTP_URL).expect("valid url"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsSettings {
    pub enabled: bool,
    pub addr: SocketAddr,
    pub route: String,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            addr: SocketAddr::from_str("0.0.0.0:6060").expect("should be valid url"),
            route: "/metrics".to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from the file named by `AZUML__CONFIG` (if set)
    /// and `AZUML__*` environment overrides.
    pub fn new() -> anyhow::Result<Self> {
        let config_path = std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);
        Self::build(config_path)
    }

    pub fn build(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        if let Some(config_path) = config_path {
            builder = builder.add_source(File::from(config_path));
        };
        // `__` keeps the credential variables (`azuml_devops*`) out of the settings tree
        builder = builder.add_source(config::Environment::with_prefix("AZUML").separator("__"));

        builder
            .build()?
            .try_deserialize()
            .map_err(|err| anyhow!(err))
    }
}
