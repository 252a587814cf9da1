//! # template-transformer
//!
//! A kustomize exec transformer plugin that templates YAML resources with
//! properties resolved from the environment.
//!
//! ## Usage
//!
//! ```bash
//! template-transformer [-v...] <CONFIG> < resources.yaml
//! ```
//!
//! ## Modules
//!
//! - `app` - CLI level configuration, logging and the end-to-end run
//! - `config` - Plugin configuration loading and validation
//! - `env` - Injectable file system and environment variable access
//! - `error` - Crate error type
//! - `property` - Property resolution from environment variables
//! - `template` - `${{.NAME}}` marker parsing and substitution
//! - `transform` - Multi-document YAML stream templating
pub mod app;
pub mod config;
pub mod env;
pub mod error;
pub mod property;
pub mod template;
pub mod transform;

pub use error::{Error, Result};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
