//! User preferences.
//!
//! Preferences are layered with the `config` crate: the built-in defaults in
//! `default.yaml` come first and an optional user file overrides them.

#![allow(missing_docs)]

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod interaction;

pub use animation::*;
pub use interaction::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
}

impl Preferences {
    /// Loads the default preferences, overridden by `user_file` if it is
    /// given and exists. If loading fails, a warning is logged and the
    /// default preferences are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads the default preferences, overridden by `user_file` if it is
    /// given and exists.
    pub fn try_load(user_file: Option<&Path>) -> eyre::Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        if let Some(path) = user_file {
            log::debug!("Loading user preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT).required(false));
        }

        Ok(config.build()?.try_deserialize()?)
    }

    /// Writes the preferences to `path` as YAML, creating parent directories
    /// as needed.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        Ok(())
    }
}
