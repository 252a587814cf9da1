//! Property substitution in document text
//!
//! Markers look like `${{.NAME}}`, optionally padded with spaces inside the
//! delimiters: `${{ .NAME }}`. A name starts with a letter or underscore
//! followed by letters, decimal digits or underscores; letters and digits
//! may be any Unicode ones. The delimiters were chosen so that they:
//! - survive a YAML parse and re-serialize as part of a plain scalar
//! - do not clash with kustomize vars or Kubernetes `$(VAR)` references
//! - do not clash with shell `${VAR}` and `$(cmd)` expansion
//!
//! Only plain property references are understood. Lookups are strict: a name
//! missing from the property map is an error, never an empty string.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

pub const OPEN_DELIM: &str = "${{";
pub const CLOSE_DELIM: &str = "}}";

static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\.([\p{L}_][\p{L}\p{Nd}_]*)\s*$").expect("Invalid regex pattern")
});

/// Why a document could not be templated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template: line {line}: unclosed action")]
    Unclosed { line: usize },

    #[error("template: line {line}: unsupported action {action:?}, expected a property reference like ${{{{.NAME}}}}")]
    Unsupported { line: usize, action: String },

    #[error("template: line {line}: no value for property {name:?}")]
    MissingKey { line: usize, name: String },
}

/// Template segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Property reference, with the line it appeared on
    Reference { name: String, line: usize },
}

/// A parsed template
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Split `text` into literal and reference segments.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = text;
        let mut line = 1;

        while let Some(start) = rest.find(OPEN_DELIM) {
            let (literal, after_literal) = rest.split_at(start);
            line += literal.matches('\n').count();
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal.to_string()));
            }

            let body_start = &after_literal[OPEN_DELIM.len()..];
            let end = body_start
                .find(CLOSE_DELIM)
                .ok_or(TemplateError::Unclosed { line })?;
            let action = &body_start[..end];

            let name = REFERENCE
                .captures(action)
                .and_then(|captures| captures.get(1))
                .ok_or_else(|| TemplateError::Unsupported {
                    line,
                    action: action.trim().to_string(),
                })?;
            segments.push(Segment::Reference {
                name: name.as_str().to_string(),
                line,
            });

            line += action.matches('\n').count();
            rest = &body_start[end + CLOSE_DELIM.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitute every reference from `properties`.
    pub fn render(&self, properties: &BTreeMap<String, String>) -> Result<String, TemplateError> {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Reference { name, line } => {
                    let value = properties
                        .get(name)
                        .ok_or_else(|| TemplateError::MissingKey {
                            line: *line,
                            name: name.clone(),
                        })?;
                    result.push_str(value);
                }
            }
        }

        Ok(result)
    }
}
