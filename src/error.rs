use crate::property::ResolveError;
use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{path}: {message}")]
    Config { path: String, message: String },

    #[error("/properties/{name}: {source}")]
    Property {
        name: String,
        #[source]
        source: ResolveError,
    },

    #[error("document {document}: {source}")]
    Decode {
        document: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document {document}: failed to serialize: {source}")]
    Encode {
        document: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document {document}: {source}")]
    Template {
        document: usize,
        #[source]
        source: TemplateError,
    },
}

impl Error {
    /// Create a configuration error located at the given path segments,
    /// rendered as `/properties/NAME/source/0`.
    pub fn config<S: AsRef<str>>(segments: &[S], message: impl Into<String>) -> Self {
        let path = segments
            .iter()
            .map(|segment| segment.as_ref())
            .collect::<Vec<_>>()
            .join("/");

        Error::Config {
            path: format!("/{path}"),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
