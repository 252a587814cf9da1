//! Document stream templating
//!
//! Documents are decoded one at a time, immediately re-serialized to YAML
//! text, templated as opaque text, and written back out followed by a `---`
//! separator. Any failure aborts the rest of the stream; documents already
//! written stay written.

mod document;
mod stream;

pub use document::{render_document, write_document, DOCUMENT_SEPARATOR};
pub use stream::transform;
