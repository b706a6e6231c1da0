use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the recipe-analysis service
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Scheme and host of the service, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path the ingredient list is POSTed to
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,
    /// Path of the health-check endpoint
    #[serde(default = "default_health_path")]
    pub health_path: String,
    /// Transport timeout in seconds; unset means the client never gives up
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            analyze_path: default_analyze_path(),
            health_path: default_health_path(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_analyze_path() -> String {
    "/api/analyze-recipe".to_string()
}

fn default_health_path() -> String {
    "/api/health".to_string()
}

fn default_user_agent() -> String {
    format!("recipe-analyzer/{}", env!("CARGO_PKG_VERSION"))
}

impl AnalyzerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ANALYZER__ prefix
    /// 2. recipe-analyzer.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ANALYZER__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Parse configuration from a TOML document, ignoring the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn analyze_url(&self) -> String {
        join_url(&self.base_url, &self.analyze_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.base_url, &self.health_path)
    }
}

/// Load configuration from `recipe-analyzer.toml` and `RECIPE_ANALYZER__*`
/// environment variables, see [`AnalyzerConfig::load`].
pub fn load_config() -> Result<AnalyzerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-analyzer").required(false))
        // Use double underscore for nested keys: RECIPE_ANALYZER__TIMEOUT_SECS
        .add_source(
            Environment::with_prefix("RECIPE_ANALYZER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
