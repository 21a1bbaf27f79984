//! Resolution of client settings from the settings file and flags.

use std::path::Path;

use anyhow::{Context, Result};
use board_client::ClientSettings;

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub team_api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Extra attempts after the first one.
    pub retries: Option<u32>,
}

/// Defaults, then the file at `path` (if any), then `overrides`.
pub fn resolve_settings(path: Option<&Path>, overrides: &Overrides) -> Result<ClientSettings> {
    let mut settings = match path {
        Some(path) => ClientSettings::load(path)
            .with_context(|| format!("load settings from {}", path.display()))?,
        None => ClientSettings::default(),
    };
    if let Some(url) = &overrides.api_url {
        settings.jobs_api_url.clone_from(url);
    }
    if let Some(url) = &overrides.team_api_url {
        settings.team_api_url.clone_from(url);
    }
    if let Some(secs) = overrides.timeout_secs {
        settings.timeout_secs = secs;
    }
    if let Some(retries) = overrides.retries {
        settings.retry.max_attempts = retries.saturating_add(1);
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn flags_override_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobboard.toml");
        fs::write(
            &path,
            "jobs_api_url = \"http://file.test/api\"\ntimeout_secs = 12\npage_size = 5\n",
        )
        .unwrap();

        let settings = resolve_settings(
            Some(&path),
            &Overrides {
                api_url: Some("http://flag.test/api".to_string()),
                retries: Some(2),
                ..Overrides::default()
            },
        )
        .unwrap();
        assert_eq!(settings.jobs_api_url, "http://flag.test/api");
        assert_eq!(settings.timeout_secs, 12);
        assert_eq!(settings.page_size, 5);
        assert_eq!(settings.retry.max_attempts, 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = resolve_settings(Some(Path::new("/no/such/jobboard.toml")), &Overrides::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/jobboard.toml"));
    }
}
