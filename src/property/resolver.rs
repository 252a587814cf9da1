//! Single property resolution

use super::{PropertyDefinition, ResolveError};
use crate::env::VarEnv;
use tracing::trace;

/// Obtain a final value for the given property.
///
/// Sources are checked in declared order and the first one holding a
/// non-empty value wins; a variable that is set but empty counts as unset.
/// A value taken from a source is passed through the property's mutator, if
/// any. When no source holds a value the non-empty default is returned
/// as-is.
pub fn resolve(property: &PropertyDefinition, env: &dyn VarEnv) -> Result<String, ResolveError> {
    for source in &property.sources {
        let Some(value) = env.var(source).filter(|value| !value.is_empty()) else {
            trace!(property = %property.name, source = %source, "source has no value");
            continue;
        };

        trace!(property = %property.name, source = %source, "source selected");

        return match &property.mutate {
            Some(mutator) => mutator.apply(&value),
            None => Ok(value),
        };
    }

    match property.default.as_deref() {
        Some(default) if !default.is_empty() => {
            trace!(property = %property.name, "falling back to default");
            Ok(default.to_string())
        }
        _ => Err(ResolveError::NoValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockVarEnv;
    use crate::property::Mutator;
    use proptest::prelude::*;

    #[test]
    fn test_empty_source_is_skipped() {
        let env = MockVarEnv::new().with_var("A", "").with_var("B", "x");
        let property = PropertyDefinition::new("P", &["A", "B"]);
        assert_eq!(resolve(&property, &env).unwrap(), "x");
    }

    #[test]
    fn test_first_source_wins() {
        let env = MockVarEnv::new().with_var("A", "a").with_var("B", "b");
        let property = PropertyDefinition::new("P", &["A", "B"]);
        assert_eq!(resolve(&property, &env).unwrap(), "a");
    }

    #[test]
    fn test_default_used_when_no_source() {
        let env = MockVarEnv::new();
        let property = PropertyDefinition::new("P", &["A"]).with_default("d");
        assert_eq!(resolve(&property, &env).unwrap(), "d");
    }

    #[test]
    fn test_empty_default_fails() {
        let env = MockVarEnv::new().with_var("A", "");
        let property = PropertyDefinition::new("P", &["A"]).with_default("");
        assert_eq!(resolve(&property, &env), Err(ResolveError::NoValue));
    }

    #[test]
    fn test_missing_default_fails() {
        let env = MockVarEnv::new();
        let property = PropertyDefinition::new("P", &["A"]);
        assert_eq!(resolve(&property, &env), Err(ResolveError::NoValue));
    }

    #[test]
    fn test_mutate_capture_group() {
        let env = MockVarEnv::new().with_var("TAG", "v42");
        let property = PropertyDefinition::new("P", &["TAG"])
            .with_mutate(Mutator::new(r"^v(\d+)$", "$1").unwrap());
        assert_eq!(resolve(&property, &env).unwrap(), "42");
    }

    #[test]
    fn test_mutate_non_match_fails() {
        let env = MockVarEnv::new().with_var("TAG", "abc");
        let property = PropertyDefinition::new("P", &["TAG"])
            .with_mutate(Mutator::new(r"^v(\d+)$", "$1").unwrap());
        assert_eq!(
            resolve(&property, &env),
            Err(ResolveError::NoMatch {
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_mutate_failure_does_not_fall_through() {
        let env = MockVarEnv::new().with_var("A", "abc").with_var("B", "v1");
        let property = PropertyDefinition::new("P", &["A", "B"])
            .with_default("fallback")
            .with_mutate(Mutator::new(r"^v(\d+)$", "$1").unwrap());
        assert!(matches!(
            resolve(&property, &env),
            Err(ResolveError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_default_is_not_mutated() {
        let env = MockVarEnv::new();
        let property = PropertyDefinition::new("P", &["TAG"])
            .with_default("latest")
            .with_mutate(Mutator::new(r"^v(\d+)$", "$1").unwrap());
        assert_eq!(resolve(&property, &env).unwrap(), "latest");
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |name: &str| (name == "B").then(|| "from-closure".to_string());
        let property = PropertyDefinition::new("P", &["A", "B"]);
        assert_eq!(resolve(&property, &lookup).unwrap(), "from-closure");
    }

    proptest! {
        #[test]
        fn test_first_non_empty_source_always_wins(
            values in prop::collection::vec(prop::option::of("[a-z]{0,3}"), 1..6),
        ) {
            let env = MockVarEnv::new();
            let mut sources = Vec::new();
            for (i, value) in values.iter().enumerate() {
                let name = format!("S{i}");
                if let Some(value) = value {
                    env.set(name.clone(), value.clone());
                }
                sources.push(name);
            }
            let sources: Vec<&str> = sources.iter().map(String::as_str).collect();
            let property = PropertyDefinition::new("P", &sources).with_default("d");

            let expected = values
                .iter()
                .flatten()
                .find(|value| !value.is_empty())
                .cloned()
                .unwrap_or_else(|| "d".to_string());

            prop_assert_eq!(resolve(&property, &env).unwrap(), expected);
        }
    }
}
