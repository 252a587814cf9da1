//! Property resolution
//!
//! A property is a named value obtained from the first non-empty environment
//! variable among its sources, optionally rewritten by a regex, with a static
//! default as the last resort. Resolution runs once per invocation and
//! produces an immutable [`ResolvedProperties`] map that templating reads.

mod map;
mod mutate;
mod resolver;

pub use map::{build_properties, ResolvedProperties};
pub use mutate::Mutator;
pub use resolver::resolve;

use thiserror::Error;

/// A single property as consumed by the resolver
///
/// Built from a validated [`crate::config::Property`]; see
/// [`crate::config::validate`].
#[derive(Debug, Clone)]
pub struct PropertyDefinition {
    /// Name referenced from documents as `${{.NAME}}`
    pub name: String,
    /// Human readable purpose of the property
    pub description: String,
    /// Environment variable names, highest priority first
    pub sources: Vec<String>,
    /// Fallback used when no source holds a value
    pub default: Option<String>,
    /// Transform applied to a value taken from a source
    pub mutate: Option<Mutator>,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, sources: &[&str]) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            sources: sources.iter().map(|s| s.to_string()).collect(),
            default: None,
            mutate: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_mutate(mut self, mutator: Mutator) -> Self {
        self.mutate = Some(mutator);
        self
    }
}

/// Why a single property could not be resolved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("could not resolve value for property")]
    NoValue,

    #[error("value {value:?} did not match mutate regex")]
    NoMatch { value: String },

    #[error("replaced value was blank")]
    BlankReplacement,
}
