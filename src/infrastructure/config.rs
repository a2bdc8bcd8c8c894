use crate::domain::entry::DashboardEntry;
use crate::domain::error::ShellError;
use crate::domain::profile::{Branding, ShellFeatures, ShellProfile};
use chrono::Duration;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/shell";
pub const CONFIG_PATH_VAR: &str = "REPORT_SHELL_CONFIG";
pub const ENV_PREFIX: &str = "REPORT_SHELL";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub features: ShellFeatures,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub entries: Vec<DashboardEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
    pub session_ttl_minutes: i64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            session_ttl_minutes: 8 * 60,
        }
    }
}

impl ServerSettings {
    /// Idle lifetime of a session; must be positive and representable.
    pub fn session_ttl(&self) -> Result<Duration, ShellError> {
        if self.session_ttl_minutes <= 0 {
            return Err(ShellError::InvalidConfig(format!(
                "session_ttl_minutes must be greater than zero, got {}",
                self.session_ttl_minutes
            )));
        }
        Duration::try_minutes(self.session_ttl_minutes).ok_or_else(|| {
            ShellError::InvalidConfig(format!(
                "session_ttl_minutes {} is out of range",
                self.session_ttl_minutes
            ))
        })
    }
}

impl AppConfig {
    pub fn into_profile(self) -> Result<ShellProfile, ShellError> {
        ShellProfile::new(self.entries, self.features, self.branding)
    }
}

/// Load the shell configuration file, with `REPORT_SHELL__SECTION__KEY`
/// environment variables layered on top.
pub fn load_config(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Config file path from `REPORT_SHELL_CONFIG`, falling back to `config/shell`.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
