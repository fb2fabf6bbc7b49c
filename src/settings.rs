use serde::Deserialize;
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Explicit path of the bookmarks file. When `None` the Edge profile
    /// directory for the current platform is used.
    #[serde(default)]
    pub bookmarks_path: Option<String>,
    /// Edge profile directory name, e.g. `Default` or `Profile 1`.
    #[serde(default = "default_profile")]
    pub profile: String,
    /// When enabled the plugin initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that log output is written to instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_profile() -> String {
    "Default".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bookmarks_path: None,
            profile: default_profile(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Location of the bookmarks file to search.
    pub fn bookmarks_path(&self) -> Option<PathBuf> {
        match &self.bookmarks_path {
            Some(p) if !p.trim().is_empty() => Some(PathBuf::from(p)),
            _ => edge_profile_dir(&self.profile).map(|dir| dir.join("Bookmarks")),
        }
    }
}

#[cfg(target_os = "windows")]
fn edge_profile_dir(profile: &str) -> Option<PathBuf> {
    dirs_next::data_local_dir().map(|d| {
        d.join("Microsoft")
            .join("Edge")
            .join("User Data")
            .join(profile)
    })
}

#[cfg(target_os = "macos")]
fn edge_profile_dir(profile: &str) -> Option<PathBuf> {
    dirs_next::data_dir().map(|d| d.join("Microsoft Edge").join(profile))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn edge_profile_dir(profile: &str) -> Option<PathBuf> {
    dirs_next::config_dir().map(|d| d.join("microsoft-edge").join(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.profile, "Default");
    }

    #[test]
    fn explicit_path_overrides_profile() {
        let settings = Settings {
            bookmarks_path: Some("/tmp/Bookmarks".into()),
            ..Settings::default()
        };
        assert_eq!(settings.bookmarks_path(), Some(PathBuf::from("/tmp/Bookmarks")));
    }

    #[test]
    fn default_path_ends_in_profile_bookmarks() {
        let settings = Settings {
            profile: "Profile 1".into(),
            ..Settings::default()
        };
        if let Some(path) = settings.bookmarks_path() {
            assert!(path.ends_with("Profile 1/Bookmarks"));
        }
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_reads_fields_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"debug_logging": true, "profile": "Profile 2", "log_file": "edge.log"}"#,
        )
        .unwrap();
        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(
            settings,
            Settings {
                debug_logging: true,
                profile: "Profile 2".into(),
                log_file: Some("edge.log".into()),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load(path.to_str().unwrap()).is_err());
    }
}
