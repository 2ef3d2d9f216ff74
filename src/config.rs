//! Configuration constants and profile loading for authpanel
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! a section of the INI profile file, then command line flags.

use crate::cmd_args::{CommandLineArgs, ScreenKind};
use anyhow::{Context, Result};
use ini::Ini;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default profile file path for authpanel
pub const DEFAULT_PROFILE_PATH: &str = "~/.authpanel/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "AUTHPANEL_PROFILE_PATH";

/// Environment variable holding the tracing filter directives
pub const LOG_LEVEL_ENV_VAR: &str = "AUTHPANEL_LOG_LEVEL";

pub const DEFAULT_SIGN_IN_URL: &str = "http://localhost:5000/login";
pub const DEFAULT_SIGN_UP_URL: &str = "http://localhost:5000/users";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Target interval between frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Logical canvas preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    Hd,
    Fhd,
}

impl Resolution {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hd" => Some(Resolution::Hd),
            "fhd" => Some(Resolution::Fhd),
            _ => None,
        }
    }

    pub fn logical_size(self) -> (f32, f32) {
        match self {
            Resolution::Hd => (1280.0, 720.0),
            Resolution::Fhd => (1920.0, 1080.0),
        }
    }

    /// Panel speed in logical units per second
    pub fn slide_speed(self) -> f32 {
        match self {
            Resolution::Hd => 2000.0,
            Resolution::Fhd => 3000.0,
        }
    }
}

/// Values read from one section of the profile file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub sign_in_url: Option<String>,
    pub sign_up_url: Option<String>,
    pub texts: Option<PathBuf>,
    pub resolution: Option<Resolution>,
    pub timeout_secs: Option<u64>,
}

impl Profile {
    /// Load `section` from the INI file at `path`. A missing file or
    /// section yields an empty profile.
    pub fn load(path: &str, section: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();
        if !Path::new(&expanded).exists() {
            tracing::debug!("Profile file '{}' not found, using defaults", expanded);
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(&expanded)
            .with_context(|| format!("failed to read profile file '{expanded}'"))?;
        let Some(props) = ini.section(Some(section)) else {
            tracing::debug!("Profile '{}' not found in '{}', using defaults", section, expanded);
            return Ok(Self::default());
        };

        let resolution = match props.get("resolution") {
            Some(value) => {
                let parsed = Resolution::parse(value);
                if parsed.is_none() {
                    tracing::warn!("Unknown resolution '{}' in profile '{}'", value, section);
                }
                parsed
            }
            None => None,
        };
        let timeout_secs = match props.get("timeout_secs") {
            Some(value) => Some(value.trim().parse::<u64>().with_context(|| {
                format!("timeout_secs must be a whole number of seconds, got '{value}'")
            })?),
            None => None,
        };

        tracing::debug!("Profile '{}' loaded from '{}'", section, expanded);
        Ok(Self {
            sign_in_url: props.get("sign_in_url").map(str::to_string),
            sign_up_url: props.get("sign_up_url").map(str::to_string),
            texts: props
                .get("texts")
                .map(|value| PathBuf::from(shellexpand::tilde(value).to_string())),
            resolution,
            timeout_secs,
        })
    }
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub screen: ScreenKind,
    pub sign_in_url: String,
    pub sign_up_url: String,
    pub texts_path: Option<PathBuf>,
    pub resolution: Resolution,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(&CommandLineArgs::default(), Profile::default())
    }
}

impl AppConfig {
    /// Merge command line flags over a profile
    pub fn resolve(args: &CommandLineArgs, profile: Profile) -> Self {
        Self {
            screen: args.screen(),
            sign_in_url: args
                .sign_in_url()
                .map(str::to_string)
                .or(profile.sign_in_url)
                .unwrap_or_else(|| DEFAULT_SIGN_IN_URL.to_string()),
            sign_up_url: args
                .sign_up_url()
                .map(str::to_string)
                .or(profile.sign_up_url)
                .unwrap_or_else(|| DEFAULT_SIGN_UP_URL.to_string()),
            texts_path: args.texts().map(Path::to_path_buf).or(profile.texts),
            resolution: profile.resolution.unwrap_or_default(),
            timeout: Duration::from_secs(profile.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Read the profile named on the command line and merge the flags over it
    pub fn load(args: &CommandLineArgs) -> Result<Self> {
        let profile_path = get_profile_path();
        let profile = Profile::load(&profile_path, args.profile())?;
        let config = Self::resolve(args, profile);
        tracing::info!(
            "Using profile '{}' from '{}': {:?}",
            args.profile(),
            profile_path,
            config
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn profile_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_profile_path() {
        assert_eq!(DEFAULT_PROFILE_PATH, "~/.authpanel/profile");
    }

    #[test]
    fn test_get_profile_path_env_override() {
        // Save current env var state
        let original = std::env::var_os(PROFILE_PATH_ENV_VAR);

        std::env::remove_var(PROFILE_PATH_ENV_VAR);
        assert_eq!(get_profile_path(), DEFAULT_PROFILE_PATH);

        let test_path = "/custom/profile/path";
        std::env::set_var(PROFILE_PATH_ENV_VAR, test_path);
        assert_eq!(get_profile_path(), test_path);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(PROFILE_PATH_ENV_VAR, val),
            None => std::env::remove_var(PROFILE_PATH_ENV_VAR),
        }
    }

    #[test]
    fn test_resolution_presets() {
        assert_eq!(Resolution::parse("FHD"), Some(Resolution::Fhd));
        assert_eq!(Resolution::parse("4k"), None);
        assert_eq!(Resolution::Hd.logical_size(), (1280.0, 720.0));
        assert_eq!(Resolution::Fhd.slide_speed(), 3000.0);
    }

    #[test]
    fn test_missing_profile_file_yields_defaults() {
        let profile = Profile::load("/nonexistent/authpanel/profile", "default").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_profile_section_is_read() {
        let file = profile_file(
            "[default]\nsign_in_url = http://api/login\nresolution = fhd\ntimeout_secs = 3\n\n[staging]\nsign_up_url = http://staging/users\n",
        );
        let path = file.path().to_str().unwrap();

        let profile = Profile::load(path, "default").unwrap();
        assert_eq!(profile.sign_in_url.as_deref(), Some("http://api/login"));
        assert_eq!(profile.sign_up_url, None);
        assert_eq!(profile.resolution, Some(Resolution::Fhd));
        assert_eq!(profile.timeout_secs, Some(3));

        let staging = Profile::load(path, "staging").unwrap();
        assert_eq!(staging.sign_up_url.as_deref(), Some("http://staging/users"));

        assert_eq!(Profile::load(path, "absent").unwrap(), Profile::default());
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        let file = profile_file("[default]\ntimeout_secs = soon\n");
        assert!(Profile::load(file.path().to_str().unwrap(), "default").is_err());
    }

    #[test]
    fn test_flags_override_profile() {
        let args = CommandLineArgs::parse_from([
            "authpanel",
            "--sign-in-url",
            "http://flag/login",
            "--screen",
            "registration",
        ]);
        let profile = Profile {
            sign_in_url: Some("http://profile/login".to_string()),
            sign_up_url: Some("http://profile/users".to_string()),
            timeout_secs: Some(4),
            ..Profile::default()
        };

        let config = AppConfig::resolve(&args, profile);
        assert_eq!(config.sign_in_url, "http://flag/login");
        assert_eq!(config.sign_up_url, "http://profile/users");
        assert_eq!(config.screen, ScreenKind::Registration);
        assert_eq!(config.timeout, Duration::from_secs(4));
        assert_eq!(config.resolution, Resolution::Hd);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.screen, ScreenKind::Panel);
        assert_eq!(config.sign_in_url, DEFAULT_SIGN_IN_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
