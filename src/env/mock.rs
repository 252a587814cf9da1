//! Mock environment implementations for testing
//!
//! These implementations use in-memory data structures and never touch the
//! real file system or process environment.

use super::traits::{FileEnv, VarEnv};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock file system for testing
///
/// # Examples
///
/// ```
/// use template_transformer::env::{MockFileEnv, FileEnv};
/// use std::path::Path;
///
/// let env = MockFileEnv::new();
/// env.add_file("config.yml", "properties: []");
///
/// let content = env.read_to_string(Path::new("config.yml")).unwrap();
/// assert_eq!(content, "properties: []");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFileEnv {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MockFileEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the mock file system
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
    }
}

impl FileEnv for MockFileEnv {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                )
            })
    }
}

/// Mock process environment for testing
///
/// # Examples
///
/// ```
/// use template_transformer::env::{MockVarEnv, VarEnv};
///
/// let env = MockVarEnv::new().with_var("EMPTY", "");
/// assert_eq!(env.var("EMPTY").as_deref(), Some(""));
/// assert_eq!(env.var("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockVarEnv {
    vars: Arc<Mutex<HashMap<String, String>>>,
}

impl MockVarEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.lock().unwrap().insert(name.into(), value.into());
    }

    /// Builder form of [`MockVarEnv::set`]
    pub fn with_var(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove a variable
    pub fn unset(&self, name: &str) {
        self.vars.lock().unwrap().remove(name);
    }
}

impl VarEnv for MockVarEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.lock().unwrap().get(name).cloned()
    }
}
