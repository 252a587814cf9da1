//! Regex based value rewriting

use super::ResolveError;
use regex::Regex;

/// A compiled `pattern` plus the `replace` template expanded against its
/// first match
///
/// The template uses the `regex` crate's expansion syntax: `$1` or `${1}` for
/// numbered groups, `$name` or `${name}` for named groups, `$0` for the whole
/// match and `$$` for a literal dollar sign. Groups that did not participate
/// in the match expand to nothing.
#[derive(Debug, Clone)]
pub struct Mutator {
    regex: Regex,
    replace: String,
}

impl Mutator {
    pub fn new(pattern: &str, replace: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            replace: replace.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }

    /// Rewrite `value` by expanding the replace template against the first
    /// match of the pattern.
    pub fn apply(&self, value: &str) -> Result<String, ResolveError> {
        let captures = self
            .regex
            .captures(value)
            .ok_or_else(|| ResolveError::NoMatch {
                value: value.to_string(),
            })?;

        let mut replaced = String::new();
        captures.expand(&self.replace, &mut replaced);

        if replaced.is_empty() {
            return Err(ResolveError::BlankReplacement);
        }

        Ok(replaced)
    }
}
