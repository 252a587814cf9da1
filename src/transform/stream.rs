//! Multi-document stream processing

use super::document::write_document;
use crate::error::{Error, Result};
use crate::property::ResolvedProperties;
use serde::de::value::{EnumAccessDeserializer, MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, Deserializer, EnumAccess, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_yaml::Value;
use std::fmt;
use std::io::{Read, Write};
use tracing::debug;

/// One item of a YAML stream
///
/// A stream holding no documents at all (empty, blank or comment-only input)
/// still yields a single placeholder item, which the YAML deserializer reports
/// through `visit_none`. An explicit empty document such as `---` is a null
/// scalar and arrives through `visit_unit` instead.
#[derive(Debug, PartialEq)]
enum StreamItem {
    NoDocuments,
    Document(Value),
}

impl<'de> Deserialize<'de> for StreamItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(StreamItemVisitor)
    }
}

struct StreamItemVisitor;

impl<'de> Visitor<'de> for StreamItemVisitor {
    type Value = StreamItem;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a YAML document")
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<StreamItem, E> {
        Ok(StreamItem::NoDocuments)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<StreamItem, E> {
        Ok(StreamItem::Document(Value::Null))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<StreamItem, E> {
        Ok(StreamItem::Document(Value::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<StreamItem, E> {
        Ok(StreamItem::Document(Value::Number(v.into())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<StreamItem, E> {
        Ok(StreamItem::Document(Value::Number(v.into())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<StreamItem, E> {
        Ok(StreamItem::Document(Value::Number(v.into())))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<StreamItem, E> {
        Ok(StreamItem::Document(Value::String(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<StreamItem, E> {
        Ok(StreamItem::Document(Value::String(v)))
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<StreamItem, D::Error> {
        Value::deserialize(deserializer).map(StreamItem::Document)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> std::result::Result<StreamItem, A::Error> {
        Value::deserialize(SeqAccessDeserializer::new(seq)).map(StreamItem::Document)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<StreamItem, A::Error> {
        Value::deserialize(MapAccessDeserializer::new(map)).map(StreamItem::Document)
    }

    // Tagged values such as `!Custom {a: 1}`
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> std::result::Result<StreamItem, A::Error> {
        Value::deserialize(EnumAccessDeserializer::new(data)).map(StreamItem::Document)
    }
}

/// Read resources from `input`, template them, and write them to `out`.
///
/// Returns the number of documents written. Input without any document
/// (empty, blank or comments only) is not an error and produces no output.
pub fn transform<R: Read, W: Write>(
    input: R,
    out: &mut W,
    properties: &ResolvedProperties,
) -> Result<usize> {
    let mut written = 0;

    for (index, deserializer) in serde_yaml::Deserializer::from_reader(input).enumerate() {
        let number = index + 1;
        let item = StreamItem::deserialize(deserializer).map_err(|source| Error::Decode {
            document: number,
            source,
        })?;

        let document = match item {
            StreamItem::Document(document) => document,
            StreamItem::NoDocuments => break,
        };

        write_document(out, &document, properties, number)?;
        debug!(document = number, "document transformed");
        written += 1;
    }

    debug!(documents = written, "stream finished");

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateError;

    fn props(pairs: &[(&str, &str)]) -> ResolvedProperties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn run(input: &str, properties: &ResolvedProperties) -> (Result<usize>, String) {
        let mut out = Vec::new();
        let result = transform(input.as_bytes(), &mut out, properties);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_multiple_documents_in_order() {
        let input = "name: ${{.NAME}}\n---\nname: ${{.NAME}}\n---\nname: ${{.NAME}}\n";
        let (result, output) = run(input, &props(&[("NAME", "prod")]));

        assert_eq!(result.unwrap(), 3);
        assert_eq!(output, "name: prod\n---\nname: prod\n---\nname: prod\n---\n");
    }

    #[test]
    fn test_stream_without_documents_writes_nothing() {
        for input in ["", "\n\n", "   \n", "# comment\n", "# one\n\n# two\n"] {
            let (result, output) = run(input, &props(&[("NAME", "prod")]));

            assert_eq!(result.unwrap(), 0, "input {input:?}");
            assert!(output.is_empty(), "input {input:?} wrote {output:?}");
        }
    }

    #[test]
    fn test_explicit_empty_document_is_null() {
        let (result, output) = run("---\n", &props(&[]));

        assert_eq!(result.unwrap(), 1);
        assert_eq!(output, "null\n---\n");
    }

    #[test]
    fn test_scalar_and_sequence_documents() {
        let input = "--- ${{.NAME}}\n---\n- a\n- ${{.NAME}}\n--- 7\n";
        let (result, output) = run(input, &props(&[("NAME", "prod")]));

        assert_eq!(result.unwrap(), 3);
        assert_eq!(output, "prod\n---\n- a\n- prod\n---\n7\n---\n");
    }

    #[test]
    fn test_tagged_document_keeps_tag() {
        let input = "!Config\nname: ${{.NAME}}\n";
        let (result, output) = run(input, &props(&[("NAME", "prod")]));

        assert_eq!(result.unwrap(), 1);
        assert!(output.starts_with("!Config"), "output {output:?}");
        assert!(output.contains("name: prod"), "output {output:?}");
        assert!(output.ends_with("---\n"));
    }

    #[test]
    fn test_stream_item_visitor() {
        let document: StreamItem = serde_yaml::from_str("a: 1\n").unwrap();
        let expected: Value = serde_yaml::from_str("a: 1\n").unwrap();
        assert_eq!(document, StreamItem::Document(expected));

        let null: StreamItem = serde_yaml::from_str("null\n").unwrap();
        assert_eq!(null, StreamItem::Document(Value::Null));
    }

    #[test]
    fn test_missing_key_aborts_after_earlier_documents() {
        let input = "a: ${{.NAME}}\n---\nb: ${{.MISSING}}\n---\nc: ${{.NAME}}\n";
        let (result, output) = run(input, &props(&[("NAME", "prod")]));

        match result.unwrap_err() {
            Error::Template { document, source } => {
                assert_eq!(document, 2);
                assert_eq!(
                    source,
                    TemplateError::MissingKey {
                        line: 1,
                        name: "MISSING".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(output, "a: prod\n---\n");
    }

    #[test]
    fn test_malformed_yaml_is_a_decode_error() {
        let (result, output) = run("key: [unclosed\n", &props(&[]));

        assert!(matches!(
            result.unwrap_err(),
            Error::Decode { document: 1, .. }
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_quoted_marker_is_substituted() {
        let input = "metadata:\n  labels:\n    stage: \"${{.STAGE}}\"\n";
        let (result, output) = run(input, &props(&[("STAGE", "canary")]));

        assert_eq!(result.unwrap(), 1);
        assert_eq!(output, "metadata:\n  labels:\n    stage: canary\n---\n");
    }
}
