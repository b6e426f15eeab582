//! Configuration for a comparison run
//!
//! An optional TOML file with CLI flags taking precedence. There is no
//! environment lookup and no global state: the config value is threaded
//! through the comparison call.

use std::path::Path;

use serde::Deserialize;

use crate::diff::BlockMatching;
use crate::error::{TfDeltaError, TfDeltaResult};

/// Settings threaded through one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Block pairing policy
    pub matching: BlockMatching,
    /// Keep comparing nested blocks below a level with attribute changes
    pub descend_past_attribute_changes: bool,
    /// Configuration file extension to discover, without the dot
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: BlockMatching::default(),
            descend_past_attribute_changes: false,
            extension: "tf".to_string(),
        }
    }
}

impl Config {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> TfDeltaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| TfDeltaError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        toml::from_str(&text).map_err(|err| TfDeltaError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
