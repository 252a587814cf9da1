//! Resolution of every configured property into one map

use super::{resolve, PropertyDefinition};
use crate::env::VarEnv;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::info;

/// Property names mapped to their resolved values
pub type ResolvedProperties = BTreeMap<String, String>;

/// Resolve all properties in declaration order.
///
/// Stops at the first property that cannot be resolved; no partial map is
/// ever returned. A later definition with a duplicate name overwrites the
/// earlier value.
pub fn build_properties(
    properties: &[PropertyDefinition],
    env: &dyn VarEnv,
) -> Result<ResolvedProperties> {
    let mut resolved = ResolvedProperties::new();

    for property in properties {
        let value = resolve(property, env).map_err(|source| Error::Property {
            name: property.name.clone(),
            source,
        })?;

        info!("property {:?} resolved to {:?}", property.name, value);
        resolved.insert(property.name.clone(), value);
    }

    Ok(resolved)
}
