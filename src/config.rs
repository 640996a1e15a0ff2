//! Configuration constants and profile loading for rndline
//!
//! Settings come from an INI profile file with one section per profile name.
//! The API base URL can be overridden by the environment and the command line.

use crate::cmd_args::CommandLineArgs;
use crate::console::services::HttpSettings;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for rndline
pub const DEFAULT_PROFILE_PATH: &str = "~/.rndline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "RNDLINE_PROFILE_PATH";

/// Environment variable name for overriding the API base URL
pub const API_URL_ENV_VAR: &str = "RNDLINE_API_URL";

/// Environment variable naming the log file
pub const LOG_FILE_ENV_VAR: &str = "RNDLINE_LOG_FILE";

/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "RNDLINE_LOG_LEVEL";

/// API used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://rnd.bgenc.dev";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// One section of the profile file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

/// Read section `name` of the profile file at `path`.
///
/// A missing file or section yields the default profile.
pub fn load_profile(path: &Path, name: &str) -> Result<Profile> {
    if !path.exists() {
        tracing::debug!("Profile file {} not found, using defaults", path.display());
        return Ok(Profile::default());
    }

    let ini = Ini::load_from_file(path)
        .with_context(|| format!("Failed to read profile file {}", path.display()))?;

    let Some(section) = ini.section(Some(name)) else {
        tracing::debug!("Profile '{}' not found, using defaults", name);
        return Ok(Profile::default());
    };

    let timeout_secs = section
        .get("timeout_secs")
        .map(|value| {
            value.trim().parse::<u64>().with_context(|| {
                format!("Invalid timeout_secs '{value}' in profile '{name}'")
            })
        })
        .transpose()?;

    Ok(Profile {
        base_url: section.get("base_url").map(str::to_string),
        timeout_secs,
        user_agent: section.get("user_agent").map(str::to_string),
    })
}

/// Pick the base URL from the command line, the environment and the profile,
/// in that order. The result never ends with a slash.
pub fn resolve_base_url(
    cli: Option<&str>,
    environment: Option<&str>,
    profile: Option<&str>,
) -> String {
    [cli, environment, profile]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Everything the console needs from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub profile_name: String,
    pub profile_path: String,
    pub base_url: String,
    pub verbose: bool,
    pub http: HttpSettings,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            profile_name: "default".to_string(),
            profile_path: DEFAULT_PROFILE_PATH.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
            verbose: false,
            http: HttpSettings::default(),
        }
    }
}

impl ConsoleSettings {
    /// Resolve settings from the command line and the process environment
    pub fn from_args(args: &CommandLineArgs) -> Result<Self> {
        let profile_path = shellexpand::tilde(&get_profile_path()).into_owned();
        let env_api_url = std::env::var(API_URL_ENV_VAR).ok();
        Self::resolve(args, &profile_path, env_api_url.as_deref())
    }

    /// Resolve settings with an explicit profile path and environment URL
    pub fn resolve(
        args: &CommandLineArgs,
        profile_path: &str,
        env_api_url: Option<&str>,
    ) -> Result<Self> {
        let profile = load_profile(Path::new(profile_path), args.profile())?;
        tracing::debug!("Profile '{}': {:?}", args.profile(), profile);

        let mut http = HttpSettings::default();
        http.timeout = profile.timeout_secs.map(Duration::from_secs);
        if let Some(user_agent) = profile.user_agent {
            http.user_agent = user_agent;
        }

        Ok(Self {
            profile_name: args.profile().to_string(),
            profile_path: profile_path.to_string(),
            base_url: resolve_base_url(
                args.base_url(),
                env_api_url,
                profile.base_url.as_deref(),
            ),
            verbose: args.verbose(),
            http,
        })
    }
}
