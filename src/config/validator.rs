use super::{Config, Mutate, Property};
use crate::error::{Error, Result};
use crate::property::{Mutator, PropertyDefinition};

/// Validate `config` and convert it into resolver input.
pub fn validate(config: &Config) -> Result<Vec<PropertyDefinition>> {
    ConfigValidator::validate_config(config)
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate_config(config: &Config) -> Result<Vec<PropertyDefinition>> {
        // At least one property needs to be configured.
        if config.properties.is_empty() {
            return Err(Error::config(&["properties"], "no properties"));
        }

        config
            .properties
            .iter()
            .enumerate()
            .map(|(index, property)| Self::validate_property(index, property))
            .collect()
    }

    pub fn validate_property(index: usize, property: &Property) -> Result<PropertyDefinition> {
        if property.name.is_empty() {
            return Err(Error::config(
                &["properties", index.to_string().as_str(), "name"],
                "name is empty",
            ));
        }

        let name = property.name.as_str();

        if property.description.is_empty() {
            return Err(Error::config(
                &["properties", name, "description"],
                "description is empty",
            ));
        }

        if property.source.is_empty() {
            return Err(Error::config(&["properties", name, "source"], "no sources"));
        }

        if let Some(position) = property.source.iter().position(|source| source.is_empty()) {
            return Err(Error::config(
                &["properties", name, "source", position.to_string().as_str()],
                "source is empty",
            ));
        }

        let mutate = match &property.mutate {
            Some(mutate) => Self::validate_mutate(name, mutate)?,
            None => None,
        };

        Ok(PropertyDefinition {
            name: property.name.clone(),
            description: property.description.clone(),
            sources: property.source.clone(),
            default: property.default.clone().filter(|default| !default.is_empty()),
            mutate,
        })
    }

    /// A mutate block is either fully empty or has both a compilable pattern
    /// and a replacement.
    pub fn validate_mutate(name: &str, mutate: &Mutate) -> Result<Option<Mutator>> {
        match (mutate.pattern.is_empty(), mutate.replace.is_empty()) {
            (true, true) => Ok(None),
            (true, false) => Err(Error::config(
                &["properties", name, "mutate", "pattern"],
                "pattern is empty",
            )),
            (false, true) => Err(Error::config(
                &["properties", name, "mutate", "replace"],
                "replace is empty",
            )),
            (false, false) => Mutator::new(&mutate.pattern, mutate.replace.clone())
                .map(Some)
                .map_err(|e| {
                    Error::config(
                        &["properties", name, "mutate", "pattern"],
                        format!("invalid regex: {e}"),
                    )
                }),
        }
    }
}
