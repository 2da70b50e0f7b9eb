use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Represents the complete configuration for auto-release.
///
/// Contains branch-to-tag-pattern mappings, label bump rules, changelog
/// settings, and the bot identity used for changelog commits.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_branches")]
    pub branches: HashMap<String, String>,

    #[serde(default = "default_prerelease_branches")]
    pub prerelease_branches: Vec<String>,

    #[serde(default)]
    pub labels: LabelRulesConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub bot: BotConfig,
}

/// Returns the default branch -> tag pattern mapping.
fn default_branches() -> HashMap<String, String> {
    let mut branches = HashMap::new();
    branches.insert("main".to_string(), "v{version}".to_string());
    branches.insert("develop".to_string(), "dev-{version}".to_string());
    branches
}

/// Returns the branches whose releases are marked as pre-releases.
fn default_prerelease_branches() -> Vec<String> {
    vec!["develop".to_string()]
}

fn default_major_labels() -> Vec<String> {
    vec!["major".to_string()]
}

fn default_minor_labels() -> Vec<String> {
    vec!["enhancement".to_string(), "feature".to_string()]
}

fn default_patch_labels() -> Vec<String> {
    vec!["bug".to_string(), "fix".to_string()]
}

fn default_publish_label() -> String {
    "publish".to_string()
}

/// Label rules mapping PR labels to version bump kinds.
///
/// Matching is case-insensitive and checked in fixed priority order:
/// major, then minor, then patch. Label sets matching none of the
/// lists fall back to a patch bump.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LabelRulesConfig {
    #[serde(default = "default_major_labels")]
    pub major: Vec<String>,

    #[serde(default = "default_minor_labels")]
    pub minor: Vec<String>,

    #[serde(default = "default_patch_labels")]
    pub patch: Vec<String>,

    #[serde(default = "default_publish_label")]
    pub publish: String,
}

impl Default for LabelRulesConfig {
    fn default() -> Self {
        LabelRulesConfig {
            major: default_major_labels(),
            minor: default_minor_labels(),
            patch: default_patch_labels(),
            publish: default_publish_label(),
        }
    }
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

fn default_notes_path() -> String {
    "RELEASE_NOTES.md".to_string()
}

fn default_fallback_window() -> usize {
    20
}

fn default_breaking_keywords() -> Vec<String> {
    vec!["breaking".to_string()]
}

fn default_feature_keywords() -> Vec<String> {
    vec![
        "feat".to_string(),
        "feature".to_string(),
        "enhancement".to_string(),
    ]
}

fn default_fix_keywords() -> Vec<String> {
    vec!["fix".to_string(), "bug".to_string()]
}

/// Changelog generation and persistence settings.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: String,

    #[serde(default = "default_notes_path")]
    pub notes_path: String,

    /// How many commits to include when no previous tag exists
    #[serde(default = "default_fallback_window")]
    pub fallback_commit_window: usize,

    #[serde(default = "default_breaking_keywords")]
    pub breaking_keywords: Vec<String>,

    #[serde(default = "default_feature_keywords")]
    pub feature_keywords: Vec<String>,

    #[serde(default = "default_fix_keywords")]
    pub fix_keywords: Vec<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
            notes_path: default_notes_path(),
            fallback_commit_window: default_fallback_window(),
            breaking_keywords: default_breaking_keywords(),
            feature_keywords: default_feature_keywords(),
            fix_keywords: default_fix_keywords(),
        }
    }
}

fn default_bot_name() -> String {
    "github-actions[bot]".to_string()
}

fn default_bot_email() -> String {
    "41898282+github-actions[bot]@users.noreply.github.com".to_string()
}

/// Commit identity used for the changelog commit.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BotConfig {
    #[serde(default = "default_bot_name")]
    pub name: String,

    #[serde(default = "default_bot_email")]
    pub email: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            name: default_bot_name(),
            email: default_bot_email(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branches: default_branches(),
            prerelease_branches: default_prerelease_branches(),
            labels: LabelRulesConfig::default(),
            changelog: ChangelogConfig::default(),
            bot: BotConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autorelease.toml` in current directory
/// 3. `~/.config/.autorelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./autorelease.toml").exists() {
        fs::read_to_string("./autorelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".autorelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
