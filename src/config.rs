//! Speller configuration
//!
//! Loaded from YAML or JSON. Every field is optional; missing fields take
//! the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpellError};

/// Default number of notes before the current one in the PS13 window.
pub const DEFAULT_KPRE: usize = 33;
/// Default number of notes from the current one on in the PS13 window.
pub const DEFAULT_KPOST: usize = 23;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellerConfig {
    #[serde(default = "default_kpre")]
    pub kpre: usize,
    #[serde(default = "default_kpost")]
    pub kpost: usize,
    /// Log every spelling decision. No effect on results.
    #[serde(default)]
    pub debug: bool,
    /// Run the passing-note repair after spelling.
    #[serde(default)]
    pub rewrite_passing: bool,
    /// Size of the tonality catalog handed to the speller.
    #[serde(default)]
    pub tons: usize,
}

fn default_kpre() -> usize {
    DEFAULT_KPRE
}

fn default_kpost() -> usize {
    DEFAULT_KPOST
}

impl Default for SpellerConfig {
    fn default() -> Self {
        SpellerConfig {
            kpre: DEFAULT_KPRE,
            kpost: DEFAULT_KPOST,
            debug: false,
            rewrite_passing: false,
            tons: 0,
        }
    }
}

impl SpellerConfig {
    pub fn from_yaml_str(s: &str) -> Result<SpellerConfig> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<SpellerConfig> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a configuration file, choosing the format from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SpellerConfig> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => SpellerConfig::from_yaml_str(&text),
            Some("json") => SpellerConfig::from_json_str(&text),
            _ => Err(SpellError::Config(format!(
                "unknown config format: {}",
                path.display()
            ))),
        }
    }
}
