//! Configuration loading for NebulaLens.
//! Reads nebulalens.toml from the current directory or the path in the
//! NEBULALENS_CONFIG env var. A missing file means all defaults.

use nebulalens_common::NebulaError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_bind()       -> String { "127.0.0.1:3001".to_string() }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), static_dir: default_static_dir() }
    }
}

/// Where the remote classification service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_predict_path")]
    pub predict_path: String,
    #[serde(default = "default_importance_path")]
    pub feature_importance_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url()        -> String { "http://127.0.0.1:8000".to_string() }
fn default_predict_path()    -> String { "/predict".to_string() }
fn default_importance_path() -> String { "/feature_importance".to_string() }
fn default_timeout_secs()    -> u64    { 30 }

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            predict_path: default_predict_path(),
            feature_importance_path: default_importance_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClassifierConfig {
    pub fn predict_url(&self) -> String {
        join_url(&self.base_url, &self.predict_path)
    }

    pub fn feature_importance_url(&self) -> String {
        join_url(&self.base_url, &self.feature_importance_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Oldest entries are evicted past this many.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_max_entries() -> usize { 100 }

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: default_max_entries() }
    }
}


impl Config {
    /// Load configuration from nebulalens.toml.
    /// Checks NEBULALENS_CONFIG env var first, then current directory, then
    /// applies NEBULALENS_BIND / NEBULALENS_CLASSIFIER_URL overrides.
    pub fn load() -> Result<Self, NebulaError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// [`Config::load`] with the environment supplied by `env`.
    pub fn load_with<F>(env: F) -> Result<Self, NebulaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = env("NEBULALENS_CONFIG").unwrap_or_else(|| "nebulalens.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| NebulaError::Config(format!("cannot read {}: {}", path, e)))?;
            Self::from_toml(&content)?
        } else {
            tracing::info!("No config file at {}, using defaults", path);
            Config::default()
        };

        if let Some(bind) = env("NEBULALENS_BIND") {
            config.server.bind = bind;
        }
        if let Some(url) = env("NEBULALENS_CLASSIFIER_URL") {
            config.classifier.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, NebulaError> {
        toml::from_str(content).map_err(|e| NebulaError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), NebulaError> {
        let url = Url::parse(&self.classifier.base_url).map_err(|e| {
            NebulaError::Config(format!("classifier.base_url '{}': {}", self.classifier.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(NebulaError::Config(format!(
                "classifier.base_url must be http(s), got '{}'",
                url.scheme()
            )));
        }
        if self.classifier.timeout_secs == 0 {
            return Err(NebulaError::Config("classifier.timeout_secs must be > 0".into()));
        }
        if self.history.max_entries == 0 {
            return Err(NebulaError::Config("history.max_entries must be > 0".into()));
        }
        Ok(())
    }
}
