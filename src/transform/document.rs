//! Templating of a single decoded document

use crate::error::{Error, Result};
use crate::property::ResolvedProperties;
use crate::template::Template;
use serde_yaml::Value;
use std::io::Write;

/// Written after every document so the output stays a valid multi-document
/// stream.
pub const DOCUMENT_SEPARATOR: &str = "---\n";

/// Serialize `document` and substitute every property reference in it.
///
/// `number` is the 1-based position of the document in its stream and only
/// used for error context.
pub fn render_document(
    document: &Value,
    properties: &ResolvedProperties,
    number: usize,
) -> Result<String> {
    let text = serde_yaml::to_string(document).map_err(|source| Error::Encode {
        document: number,
        source,
    })?;

    Template::parse(&text)
        .and_then(|template| template.render(properties))
        .map_err(|source| Error::Template {
            document: number,
            source,
        })
}

/// Render `document` and write it, followed by the separator, to `out`.
///
/// Nothing is written unless the whole document rendered. The output is
/// flushed afterwards so a later failure never loses this document.
pub fn write_document<W: Write>(
    out: &mut W,
    document: &Value,
    properties: &ResolvedProperties,
    number: usize,
) -> Result<()> {
    let rendered = render_document(document, properties, number)?;

    out.write_all(rendered.as_bytes())?;
    out.write_all(DOCUMENT_SEPARATOR.as_bytes())?;
    out.flush()?;

    Ok(())
}
