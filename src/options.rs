//! Writer configuration.

use grappelli_core::{Doctype, Serialization};

/// Configuration for an [`HtmlWriter`](crate::HtmlWriter).
///
/// Built fluently; every setter consumes and returns the options.
///
/// # Examples
///
/// ```
/// use grappelli::{Doctype, Serialization, WriterOptions};
///
/// let options = WriterOptions::new()
///     .doctype(Doctype::Html4)
///     .serialization(Serialization::Xml)
///     .pretty(true);
/// ```
#[derive(Debug, Clone)]
pub struct WriterOptions {
	pub(crate) doctype: Doctype,
	pub(crate) serialization: Serialization,
	pub(crate) pretty: bool,
	pub(crate) indent: String,
}

impl WriterOptions {
	/// Default options: HTML5, SGML serialization, compact output.
	pub fn new() -> Self {
		Self {
			doctype: Doctype::default(),
			serialization: Serialization::default(),
			pretty: false,
			indent: "  ".to_owned(),
		}
	}

	/// Sets the document type attribute support is checked against.
	pub fn doctype(mut self, doctype: Doctype) -> Self {
		self.doctype = doctype;
		self
	}

	/// Sets the wire form of the output.
	pub fn serialization(mut self, serialization: Serialization) -> Self {
		self.serialization = serialization;
		self
	}

	/// Turns newline-and-indent formatting on or off.
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}

	/// Sets the indent unit for pretty output. Implies [`pretty`](Self::pretty).
	pub fn indent(mut self, indent: impl Into<String>) -> Self {
		self.indent = indent.into();
		self.pretty = true;
		self
	}
}

impl Default for WriterOptions {
	fn default() -> Self {
		Self::new()
	}
}
