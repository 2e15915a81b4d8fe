use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use crate::error::{CaptureError, Result};
use crate::identifier::DEFAULT_PREFIX;

pub const DEFAULT_ROOT: &str = "wgsl_dump_output";
pub const DEFAULT_SHADER_EXTENSION: &str = ".wgsl";
/// Overrides [`CaptureConfig::root`] when set.
pub const ROOT_ENV: &str = "WGSL_DUMP_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Directory every artifact is written under.
    pub root: PathBuf,
    /// Stripped from the front of test identifiers before resolving.
    pub prefix: String,
    pub shader_extension: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            prefix: DEFAULT_PREFIX.to_string(),
            shader_extension: DEFAULT_SHADER_EXTENSION.to_string(),
        }
    }
}

impl CaptureConfig {
    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_env_overrides(self) -> Self {
        match std::env::var_os(ROOT_ENV) {
            Some(root) if !root.is_empty() => self.with_root(root),
            _ => self,
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<CaptureConfig> {
    let path = path.as_ref();
    let data = read_to_string(path).map_err(|source| CaptureError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    CaptureConfig::from_toml_str(&data).map_err(|source| CaptureError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = CaptureConfig::from_toml_str(r#"root = "out/dumps""#).expect("parse");
        assert_eq!(config.root, PathBuf::from("out/dumps"));
        assert_eq!(config.prefix, DEFAULT_PREFIX);
        assert_eq!(config.shader_extension, ".wgsl");
    }
}
