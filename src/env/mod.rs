//! Environment abstraction layer for dependency injection and testing
//!
//! Property resolution reads environment variables and the config loader
//! reads a file. Both go through the traits defined here so that the core can
//! be exercised without touching real process state:
//! - **Traits**: `FileEnv` and `VarEnv` define the capabilities
//! - **Real Implementations**: delegate to `std::fs` and `std::env`
//! - **Mock Implementations**: in-memory maps for tests
//! - **Combined Environment**: `AppEnv` bundles both together
//!
//! # Usage
//!
//! ```
//! use template_transformer::env::{AppEnv, MockVarEnv, VarEnv};
//! use std::sync::Arc;
//!
//! let vars = MockVarEnv::new();
//! vars.set("CI_COMMIT_TAG", "v1.2.3");
//!
//! let env = AppEnv::mock().with_vars(Arc::new(vars));
//! assert_eq!(env.vars.var("CI_COMMIT_TAG").as_deref(), Some("v1.2.3"));
//! ```

mod app;
mod mock;
mod real;
mod traits;

pub use app::AppEnv;
pub use mock::{MockFileEnv, MockVarEnv};
pub use real::{RealFileEnv, RealVarEnv};
pub use traits::{FileEnv, VarEnv};
