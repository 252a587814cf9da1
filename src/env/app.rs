//! Combined application environment

use super::mock::{MockFileEnv, MockVarEnv};
use super::real::{RealFileEnv, RealVarEnv};
use super::traits::{FileEnv, VarEnv};
use std::sync::Arc;

/// Combined application environment
///
/// Provides access to the file system and the process environment. Can be
/// constructed with real or mock implementations.
///
/// # Examples
///
/// ```
/// use template_transformer::env::AppEnv;
///
/// // Create real environment for production use
/// let env = AppEnv::real();
///
/// // Create mock environment for testing
/// let test_env = AppEnv::mock();
/// ```
#[derive(Clone)]
pub struct AppEnv {
    pub fs: Arc<dyn FileEnv>,
    pub vars: Arc<dyn VarEnv>,
}

impl AppEnv {
    /// Create an environment with real implementations
    pub fn real() -> Self {
        Self {
            fs: Arc::new(RealFileEnv::new()),
            vars: Arc::new(RealVarEnv::new()),
        }
    }

    /// Create an environment with empty mock implementations
    pub fn mock() -> Self {
        Self {
            fs: Arc::new(MockFileEnv::new()),
            vars: Arc::new(MockVarEnv::new()),
        }
    }

    /// Create an environment from custom implementations
    pub fn custom(fs: Arc<dyn FileEnv>, vars: Arc<dyn VarEnv>) -> Self {
        Self { fs, vars }
    }

    /// Replace the variable lookup implementation
    pub fn with_vars(mut self, vars: Arc<dyn VarEnv>) -> Self {
        self.vars = vars;
        self
    }
}

impl std::fmt::Debug for AppEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnv").finish_non_exhaustive()
    }
}
