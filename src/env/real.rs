//! Real environment implementations that interact with the actual system

use super::traits::{FileEnv, VarEnv};
use std::fs;
use std::path::Path;

/// Real file system implementation
///
/// Delegates to the standard library's `std::fs` module.
#[derive(Debug, Clone, Default)]
pub struct RealFileEnv;

impl RealFileEnv {
    pub fn new() -> Self {
        Self
    }
}

impl FileEnv for RealFileEnv {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Real process environment
///
/// Variables whose value is not valid unicode are reported as unset.
#[derive(Debug, Clone, Default)]
pub struct RealVarEnv;

impl RealVarEnv {
    pub fn new() -> Self {
        Self
    }
}

impl VarEnv for RealVarEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
