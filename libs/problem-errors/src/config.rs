use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Settings applied when catalog entries are rendered as problem responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Prefix joined with the error code for entries without an explicit type URL
    /// (e.g. "https://errors.example.com/"). `None` leaves them as "about:blank".
    pub type_base_url: Option<String>,
    /// Extension member carrying the machine-readable error code.
    pub code_member: String,
    /// Extension member carrying the trace id, when one is supplied.
    pub trace_id_member: String,
    /// Headers attached to every catalog response.
    pub default_headers: HashMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            type_base_url: None,
            code_member: "code".to_string(),
            trace_id_member: "traceId".to_string(),
            default_headers: HashMap::new(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration with layered loading: defaults → YAML file → environment variables.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(config_path.as_ref()))
            // Example: PROBLEM__TYPE_BASE_URL=https://errors.example.com/ maps to type_base_url
            .merge(Env::prefixed("PROBLEM__").split("__"));

        let config: Self = figment
            .extract()
            .with_context(|| "Failed to extract catalog config from figment".to_string())?;

        tracing::debug!(
            path = %config_path.as_ref().display(),
            type_base_url = ?config.type_base_url,
            "loaded problem catalog config"
        );
        Ok(config)
    }

    /// Load configuration from file or fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize catalog config to YAML")
    }
}
