//! Client settings, loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::retry::RetryPolicy;

/// Default base URL for the companies and jobs endpoints.
pub const DEFAULT_JOBS_API_URL: &str = "https://jobs-backend-22vj.onrender.com/api";

/// Default base URL for the team directory and location endpoints.
pub const DEFAULT_TEAM_API_URL: &str = "https://dev-be-cochrane-sinclair.rallythelocals.com/api";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Rows per page when neither the file nor the command line sets one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const SESSION_FILE_NAME: &str = "session";
const APP_DIR_NAME: &str = "jobboard";

/// Errors raised while reading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Retry section of the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    /// Total attempts per fetch, including the first. `1` disables retry.
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff_ms: 250,
            max_backoff_ms: 4_000,
        }
    }
}

impl RetrySettings {
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_millis(self.initial_backoff_ms),
            Duration::from_millis(self.max_backoff_ms),
        )
    }
}

/// Everything the HTTP boundary needs to know about its environment.
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// working configuration against the public endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub jobs_api_url: String,
    pub team_api_url: String,
    /// Base URL for `login` and `signup`; the jobs API when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_api_url: Option<String>,
    pub timeout_secs: u64,
    pub retry: RetrySettings,
    pub page_size: usize,
    /// Where the session token lives; the user data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            jobs_api_url: DEFAULT_JOBS_API_URL.to_string(),
            team_api_url: DEFAULT_TEAM_API_URL.to_string(),
            auth_api_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry: RetrySettings::default(),
            page_size: DEFAULT_PAGE_SIZE,
            session_file: None,
        }
    }
}

impl ClientSettings {
    /// Reads settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Per-request timeout; a zero setting falls back to the default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    #[must_use]
    pub fn auth_url(&self) -> &str {
        self.auth_api_url.as_deref().unwrap_or(&self.jobs_api_url)
    }

    /// Resolved session file path.
    ///
    /// Falls back to `session` in the platform data directory, then to
    /// `./.jobboard/session` when no home directory is known.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        if let Some(path) = &self.session_file {
            return path.clone();
        }
        default_session_path()
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}")).join(SESSION_FILE_NAME))
    }
}

/// `session` inside the platform data directory, e.g.
/// `~/.local/share/jobboard` on Linux or
/// `~/Library/Application Support/jobboard` on macOS.
fn default_session_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_DIR_NAME)?;
    Some(dirs.data_dir().join(SESSION_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = ClientSettings::from_toml("").unwrap();
        assert_eq!(settings, ClientSettings::default());
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert_eq!(settings.retry.max_attempts, 1);
        assert_eq!(settings.auth_url(), DEFAULT_JOBS_API_URL);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let settings = ClientSettings::from_toml(
            r#"
            jobs_api_url = "http://localhost:4000/api"
            timeout_secs = 5

            [retry]
            max_attempts = 3
            "#,
        )
        .unwrap();
        assert_eq!(settings.jobs_api_url, "http://localhost:4000/api");
        assert_eq!(settings.team_api_url, DEFAULT_TEAM_API_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert_eq!(settings.retry.max_attempts, 3);
        assert_eq!(settings.retry.initial_backoff_ms, 250);
    }

    #[test]
    fn explicit_session_file_wins() {
        let settings = ClientSettings {
            session_file: Some(PathBuf::from("/tmp/token")),
            ..ClientSettings::default()
        };
        assert_eq!(settings.session_path(), PathBuf::from("/tmp/token"));
    }

    #[test]
    fn default_session_file_lives_in_the_platform_data_dir() {
        let path = ClientSettings::default().session_path();
        let dirs = ProjectDirs::from("", "", "jobboard").expect("home directory");
        assert_eq!(path, dirs.data_dir().join("session"));
        assert!(path.is_absolute());
    }

    #[test]
    fn load_reports_the_path() {
        let err = ClientSettings::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn zero_timeout_uses_default() {
        let settings = ClientSettings {
            timeout_secs: 0,
            ..ClientSettings::default()
        };
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
