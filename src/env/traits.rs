//! Environment trait definitions for dependency injection and testing

use std::path::Path;

/// File system operations trait
///
/// Only what the config loader needs.
///
/// # Examples
///
/// ```
/// use template_transformer::env::FileEnv;
/// use std::path::Path;
///
/// fn read_config<E: FileEnv>(env: &E, path: &Path) -> Result<String, std::io::Error> {
///     env.read_to_string(path)
/// }
/// ```
pub trait FileEnv: Send + Sync {
    /// Read a file's contents as a string
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Environment variable lookup trait
///
/// Returns `None` when the variable is not set. Callers decide what an empty
/// value means.
///
/// Any `Fn(&str) -> Option<String>` closure is also a `VarEnv`.
///
/// # Examples
///
/// ```
/// use template_transformer::env::VarEnv;
///
/// let lookup = |name: &str| (name == "STAGE").then(|| "prod".to_string());
/// assert_eq!(lookup.var("STAGE").as_deref(), Some("prod"));
/// assert_eq!(lookup.var("OTHER"), None);
/// ```
pub trait VarEnv: Send + Sync {
    /// Look up a single variable by name
    fn var(&self, name: &str) -> Option<String>;
}

impl<F> VarEnv for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}
