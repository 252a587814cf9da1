//! Plugin configuration
//!
//! When invoked by `kustomize build` the first argument is a temporary file
//! holding the plugin configuration. Only `properties` is read; the usual
//! `apiVersion`, `kind` and `metadata` keys are ignored.

use serde::Deserialize;

pub mod loader;
pub mod validator;

pub use loader::ConfigLoader;
pub use validator::{validate, ConfigValidator};

/// Plugin configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Named properties used for templating
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A single named value obtained from the current environment
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Property {
    /// Name used while templating
    #[serde(default)]
    pub name: String,

    /// What this property is and what it is intended to be used for
    #[serde(default)]
    pub description: String,

    /// Environment variable names, in priority order
    #[serde(default)]
    pub source: Vec<String>,

    /// Fallback used when none of the source variables hold a value
    #[serde(default)]
    pub default: Option<String>,

    /// Regex rewrite applied to a value taken from a source
    #[serde(default)]
    pub mutate: Option<Mutate>,
}

/// Regex rewrite of a property value
///
/// `replace` is expanded against the first match of `pattern`, so a single
/// capture group is selected with `replace: "$1"`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Mutate {
    #[serde(default)]
    pub pattern: String,

    #[serde(default)]
    pub replace: String,
}
