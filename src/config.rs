// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};
use std::time::Duration;

use anywho::{Error, anywho};
use serde::{Deserialize, Serialize};

pub const APP_ID: &str = "dev.mariinkys.StarrySearch";

const CONFIG_FILE: &str = "config.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarryConfig {
    /// Endpoint the name or id is appended to
    pub api_base_url: String,
    /// Address the web page is served on
    pub bind_address: String,
    /// Request timeout in seconds, none waits on the transport
    pub request_timeout_secs: Option<u64>,
    /// Overrides the desktop language, e.g. "es" or "en"
    pub language: Option<String>,
}

impl Default for StarryConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://pokeapi.co/api/v2/pokemon/"),
            bind_address: String::from("127.0.0.1:8080"),
            request_timeout_secs: None,
            language: None,
        }
    }
}

impl StarryConfig {
    /// Default location of the config file, inside the user's config dir
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_ID).join(CONFIG_FILE))
    }

    /// Loads the config from `path`, or from the default location when none is given.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) => path,
                None => {
                    tracing::warn!("no config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: StarryConfig = ron::from_str(&contents)
            .map_err(|e| anywho!("Failed to parse {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Pretty RON rendition, as written to disk
    pub fn to_ron(&self) -> Result<String, Error> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}
