//! End-to-end execution: config, properties, then the document stream

use crate::app::config::AppConfig;
use crate::config::ConfigLoader;
use crate::env::AppEnv;
use crate::error::Result;
use crate::property::build_properties;
use crate::transform::transform;
use std::io::{Read, Write};
use tracing::{debug, info};

/// Resolve all properties, then template every document from `input` into
/// `out`.
///
/// Property resolution completes before the first document is read, so a
/// property failure leaves `out` untouched. Returns the number of documents
/// written.
pub fn run<R: Read, W: Write>(
    config: &AppConfig,
    env: &AppEnv,
    input: R,
    out: &mut W,
) -> Result<usize> {
    info!("{} version {}", crate::NAME, crate::VERSION);

    let definitions = ConfigLoader::new(env.fs.as_ref()).load_definitions(&config.config_path)?;
    let properties = build_properties(&definitions, env.vars.as_ref())?;

    let written = transform(input, out, &properties)?;
    debug!("Wrote {} documents", written);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MockFileEnv, MockVarEnv};
    use crate::error::Error;
    use std::sync::Arc;

    const CONFIG: &str = r#"
properties:
  - name: TAG
    description: Image tag
    source: [CI_COMMIT_TAG]
    mutate:
      pattern: '^v(.+)$'
      replace: '$1'
  - name: STAGE
    description: Deployment stage
    source: [STAGE]
    default: dev
"#;

    fn env(vars: MockVarEnv) -> AppEnv {
        let fs = MockFileEnv::new();
        fs.add_file("plugin.yaml", CONFIG);
        AppEnv::custom(Arc::new(fs), Arc::new(vars))
    }

    fn config() -> AppConfig {
        AppConfig::new(0, "plugin.yaml")
    }

    #[test]
    fn test_run_templates_stream() {
        let env = env(MockVarEnv::new().with_var("CI_COMMIT_TAG", "v2.0.1"));
        let input = "image: app:${{.TAG}}\nstage: ${{.STAGE}}\n";
        let mut out = Vec::new();

        let written = run(&config(), &env, input.as_bytes(), &mut out).unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "image: app:2.0.1\nstage: dev\n---\n"
        );
    }

    #[test]
    fn test_property_failure_writes_nothing() {
        let env = env(MockVarEnv::new().with_var("CI_COMMIT_TAG", "2.0.1"));
        let mut out = Vec::new();

        let err = run(&config(), &env, "a: b\n".as_bytes(), &mut out).unwrap_err();

        assert!(matches!(err, Error::Property { ref name, .. } if name == "TAG"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_config_file() {
        let env = env(MockVarEnv::new());
        let mut out = Vec::new();

        let err = run(
            &AppConfig::new(0, "other.yaml"),
            &env,
            "".as_bytes(),
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
