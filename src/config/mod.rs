mod file_config;

pub use file_config::{BackendFileConfig, FileConfig, ProfileFileConfig};

use anyhow::Result;
use tracing::warn;

pub const URL_ENV_VARS: [&str; 2] = ["SUPABASE_URL", "BEATMARKET_SUPABASE_URL"];
pub const ANON_KEY_ENV_VARS: [&str; 2] = ["SUPABASE_ANON_KEY", "BEATMARKET_SUPABASE_ANON_KEY"];

/// CLI arguments that take part in config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub base_url: Option<String>,
    pub anon_key: Option<String>,
}

/// Backend values read from the environment. Each setting has a primary
/// variable and an alternate; the first non-empty one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvConfig {
    pub base_url: Option<String>,
    pub anon_key: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(*name))
                .find(|value| !value.trim().is_empty())
        };
        Self {
            base_url: first(&URL_ENV_VARS),
            anon_key: first(&ANON_KEY_ENV_VARS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendSettings {
    pub base_url: String,
    pub anon_key: String,
    pub timeout_sec: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSettings {
    pub username: Option<String>,
    pub handle: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// None when the URL or the key is missing; the client then runs on
    /// sample data.
    pub backend: Option<BackendSettings>,
    pub profile: ProfileSettings,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Resolve configuration from CLI arguments, optional TOML file config
    /// and the environment. TOML overrides CLI, CLI overrides environment.
    pub fn resolve(
        cli: &CliConfig,
        file_config: Option<FileConfig>,
        env: &EnvConfig,
    ) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let backend_file = file.backend.unwrap_or_default();

        let base_url = non_empty(backend_file.base_url)
            .or_else(|| non_empty(cli.base_url.clone()))
            .or_else(|| env.base_url.clone());
        let anon_key = non_empty(backend_file.anon_key)
            .or_else(|| non_empty(cli.anon_key.clone()))
            .or_else(|| env.anon_key.clone());

        // A bad URL is left for the loader to reject, so the client still
        // starts on sample data.
        let timeout_sec = match backend_file.timeout_sec {
            Some(0) => {
                warn!("Ignoring backend.timeout_sec = 0, requests will not time out");
                None
            }
            other => other,
        };

        let backend = match (base_url, anon_key) {
            (Some(base_url), Some(anon_key)) => Some(BackendSettings {
                base_url,
                anon_key,
                timeout_sec,
            }),
            _ => None,
        };

        let profile_file = file.profile.unwrap_or_default();
        let profile = ProfileSettings {
            username: non_empty(profile_file.username),
            handle: non_empty(profile_file.handle),
        };

        Ok(Self { backend, profile })
    }
}
