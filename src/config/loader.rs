use super::{validate, Config};
use crate::env::FileEnv;
use crate::error::{Error, Result};
use crate::property::PropertyDefinition;
use std::path::Path;
use tracing::debug;

/// Reads and validates plugin configuration files
pub struct ConfigLoader<'a> {
    fs: &'a dyn FileEnv,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(fs: &'a dyn FileEnv) -> Self {
        Self { fs }
    }

    /// Parse the file at `path` as YAML.
    pub fn load(&self, path: &Path) -> Result<Config> {
        debug!("Loading config from {}", path.display());

        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration text. An empty document is an empty config.
    pub fn parse(content: &str) -> std::result::Result<Config, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load the file at `path` and turn it into validated property
    /// definitions.
    pub fn load_definitions(&self, path: &Path) -> Result<Vec<PropertyDefinition>> {
        let config = self.load(path)?;
        let definitions = validate(&config)?;
        debug!("Loaded {} properties", definitions.len());
        Ok(definitions)
    }
}
