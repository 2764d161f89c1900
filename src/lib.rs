//! Fluent, validating HTML markup writer.
//!
//! grappelli writes HTML the way a typed API should: every attribute setter
//! checks that the element supports the attribute, that the configured
//! document type allows it, and that the value is well formed, before the
//! escaped result reaches the output. There is no element class hierarchy.
//! One [`ElementWriter`] serves every tag, and what a tag supports is plain
//! data in a catalog.
//!
//! - Values are normalized before anything else: surrounding whitespace is
//!   trimmed, blank values disappear instead of producing empty attributes,
//!   and enumerated attributes match their keywords case-insensitively.
//! - HTML 5 is the default document type. [`Doctype::Html4`] tightens the
//!   gate to the older attribute set, and setting an HTML 5-only attribute
//!   there reports [`WriteError::UnsupportedDoctype`].
//! - [`Serialization::Sgml`] (the default) writes `<br>` and minimized
//!   boolean attributes; [`Serialization::Xml`] writes `<br />` and
//!   `checked="checked"`.
//! - Attribute values and text content are escaped on the way out, always.
//!
//! # Quick example
//!
//! ```
//! use grappelli::{Dir, HtmlWriter, WriteResult};
//!
//! fn main() -> WriteResult<()> {
//!     let mut out = String::new();
//!     let mut doc = HtmlWriter::new(&mut out);
//!     doc.doctype()?;
//!     doc.div()?.id("app")?.dir(Dir::Ltr)?.children(|doc| {
//!         doc.p()?.text("hello")
//!     })?;
//!     assert_eq!(
//!         out,
//!         "<!DOCTYPE html><div id=\"app\" dir=\"ltr\"><p>hello</p></div>"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//!
//! - `serde`: [`Doctype`], [`Serialization`], and the keyword enums
//!   serialize as their keyword strings.

mod document;
mod element;
mod options;
mod tags;

pub use document::HtmlWriter;
pub use element::ElementWriter;
pub use options::WriterOptions;

// Re-export the vocabulary types so callers only need this crate.
pub use grappelli_attrs::{
	Autocapitalize, Autocomplete, Coords, Crossorigin, Decoding, Dir, Draggable, IntoKeyword,
	Keyword, Loading, Method, Preload, Scope, Shape, Translate, Wrap,
};
pub use grappelli_core::{Doctype, ParseModeError, Serialization, WriteError, WriteResult};
