use crate::favorites::Favorites;
use crate::tags::EnabledGroups;
use crate::types::CodepointHex;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing preferences and user data, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchPreferences,
    #[serde(default)]
    pub tags: BuiltInTagsConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    #[serde(default)]
    pub user_tags: Vec<UserTagPair>,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for codepoint in &self.favorites.codepoints {
            if CodepointHex::try_new(codepoint.clone()).is_err() {
                errors.push(format!("favorite {codepoint:?} is not a valid codepoint"));
            }
        }

        for pair in &self.user_tags {
            if CodepointHex::try_new(pair.codepoint.clone()).is_err() {
                errors.push(format!(
                    "user tag {:?} has invalid codepoint {:?}",
                    pair.tag, pair.codepoint
                ));
            }
            if pair.tag.trim().is_empty() {
                errors.push(format!("user tag on {:?} is empty", pair.codepoint));
            }
        }

        errors
    }

    /// Returns a validated config, dropping favorites and user tags that
    /// cannot be resolved.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let codepoints = self
            .favorites
            .codepoints
            .iter()
            .filter(|codepoint| {
                let valid = CodepointHex::try_new((*codepoint).clone()).is_ok();
                if !valid {
                    warn!("dropping invalid favorite {codepoint:?}");
                }
                valid
            })
            .cloned()
            .collect();

        let user_tags = self
            .user_tags
            .iter()
            .filter(|pair| {
                let valid = CodepointHex::try_new(pair.codepoint.clone()).is_ok()
                    && !pair.tag.trim().is_empty();
                if !valid {
                    warn!("dropping invalid user tag {pair:?}");
                }
                valid
            })
            .cloned()
            .collect();

        Self {
            search: self.search.clone(),
            tags: self.tags.clone(),
            favorites: FavoritesConfig { codepoints },
            user_tags,
        }
    }

    /// Favorites set built from the valid stored codepoints, in stored order.
    pub fn favorites(&self) -> Favorites {
        self.favorites
            .codepoints
            .iter()
            .filter_map(|codepoint| CodepointHex::try_new(codepoint.clone()).ok())
            .collect()
    }

    pub fn enabled_groups(&self) -> EnabledGroups {
        EnabledGroups {
            block: self.tags.block,
            category: self.tags.category,
            emoji: self.tags.emoji,
            alias: self.tags.alias,
        }
    }
}

/// Search settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPreferences {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    50
}

/// Which built-in tag groups contribute to search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltInTagsConfig {
    #[serde(default = "default_true")]
    pub block: bool,
    #[serde(default = "default_true")]
    pub category: bool,
    #[serde(default = "default_true")]
    pub emoji: bool,
    #[serde(default = "default_true")]
    pub alias: bool,
}

impl Default for BuiltInTagsConfig {
    fn default() -> Self {
        Self {
            block: true,
            category: true,
            emoji: true,
            alias: true,
        }
    }
}

impl From<EnabledGroups> for BuiltInTagsConfig {
    fn from(enabled: EnabledGroups) -> Self {
        Self {
            block: enabled.block,
            category: enabled.category,
            emoji: enabled.emoji,
            alias: enabled.alias,
        }
    }
}

/// Favorited codepoints, in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesConfig {
    #[serde(default)]
    pub codepoints: Vec<String>,
}

/// One user-assigned tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTagPair {
    pub codepoint: String,
    pub tag: String,
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests;
