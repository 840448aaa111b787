use crate::constants::{
    CHAT_API_URL, DEFAULT_BRANCH, DEFAULT_VISIBLE, GITHUB_API_URL, GITHUB_RAW_URL,
    GITHUB_USERNAME, HTTP_TIMEOUT_SECS, LISTING_PAGE_SIZE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_raw_url")]
    pub raw_url: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsConfig {
    /// Cards shown before the list is expanded
    #[serde(default = "default_visible")]
    pub visible: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_chat_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_username() -> String {
    GITHUB_USERNAME.to_string()
}

fn default_api_url() -> String {
    GITHUB_API_URL.to_string()
}

fn default_raw_url() -> String {
    GITHUB_RAW_URL.to_string()
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_per_page() -> usize {
    LISTING_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    HTTP_TIMEOUT_SECS
}

fn default_visible() -> usize {
    DEFAULT_VISIBLE
}

fn default_chat_url() -> String {
    CHAT_API_URL.to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            api_url: default_api_url(),
            raw_url: default_raw_url(),
            branch: default_branch(),
            per_page: default_per_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            visible: default_visible(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            url: default_chat_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            PathBuf::from("config/settings.toml"),
            PathBuf::from(shellexpand::tilde("~/.config/folio/settings.toml").as_ref()),
        ];

        for path in &default_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.github.username, "kalasuryakiran");
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.raw_url, "https://raw.githubusercontent.com");
        assert_eq!(config.github.branch, "main");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.projects.visible, 5);
    }

    #[test]
    fn test_config_from_file() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            temp_file.path(),
            r#"
[github]
username = "octocat"

[projects]
visible = 3
"#,
        )
        .unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();
        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.projects.visible, 3);
        assert_eq!(config.chat.url, "http://127.0.0.1:5000/api/chat");
    }

    #[test]
    fn test_config_from_file_invalid() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[github\nusername =").unwrap();
        assert!(Config::from_file(temp_file.path()).is_err());
    }
}
