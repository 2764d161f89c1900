//! Document type and serialization mode switches.
//!
//! A document is configured once with a [`Doctype`] and a [`Serialization`];
//! every attribute decision downstream keys off those two values.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a mode keyword cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} keyword: '{value}'")]
pub struct ParseModeError {
	kind: &'static str,
	value: String,
}

impl ParseModeError {
	fn new(kind: &'static str, value: &str) -> Self {
		Self {
			kind,
			value: value.to_owned(),
		}
	}
}

/// Document type a document is generated for.
///
/// The doctype decides which attributes are available at all: HTML5-only
/// attributes are rejected under [`Doctype::Html4`], and the HTML4 legacy
/// attributes are rejected under [`Doctype::Html5`].
///
/// # Examples
///
/// ```
/// use grappelli_core::Doctype;
///
/// assert_eq!(Doctype::default(), Doctype::Html5);
/// assert_eq!(Doctype::Html5.declaration(), "<!DOCTYPE html>");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Doctype {
	/// HTML 4.01 Transitional.
	Html4,
	/// HTML5 as maintained by the WHATWG living standard.
	#[default]
	Html5,
}

impl Doctype {
	/// Returns the full `<!DOCTYPE …>` declaration for this document type.
	pub fn declaration(self) -> &'static str {
		match self {
			Self::Html4 => {
				r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#
			}
			Self::Html5 => "<!DOCTYPE html>",
		}
	}

	/// Returns the lowercase keyword for this doctype.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Html4 => "html4",
			Self::Html5 => "html5",
		}
	}
}

impl fmt::Display for Doctype {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Doctype {
	type Err = ParseModeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"html4" => Ok(Self::Html4),
			"html5" => Ok(Self::Html5),
			_ => Err(ParseModeError::new("doctype", s)),
		}
	}
}

/// Wire form a document is serialized in.
///
/// SGML is the classic `text/html` form: boolean attributes minimize to the
/// bare name and void elements close with `>`. XML is the XHTML form: every
/// attribute carries a value and void elements self-close with ` />`.
///
/// # Examples
///
/// ```
/// use grappelli_core::Serialization;
///
/// assert_eq!(Serialization::Sgml.content_type(), "text/html");
/// assert_eq!(Serialization::Xml.content_type(), "application/xhtml+xml");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Serialization {
	/// Classic HTML serialization (`text/html`).
	#[default]
	Sgml,
	/// XHTML serialization (`application/xhtml+xml`).
	Xml,
}

impl Serialization {
	/// Returns the MIME content type for documents in this serialization.
	pub fn content_type(self) -> &'static str {
		match self {
			Self::Sgml => "text/html",
			Self::Xml => "application/xhtml+xml",
		}
	}

	/// Returns the closing token for a void element's start tag.
	pub fn self_close(self) -> &'static str {
		match self {
			Self::Sgml => ">",
			Self::Xml => " />",
		}
	}

	/// Returns the document prolog line, when this serialization has one.
	///
	/// XML documents open with an XML declaration before the doctype; SGML
	/// documents have no prolog.
	pub fn prolog(self) -> Option<&'static str> {
		match self {
			Self::Sgml => None,
			Self::Xml => Some(r#"<?xml version="1.0" encoding="UTF-8"?>"#),
		}
	}

	/// Returns the lowercase keyword for this serialization.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Sgml => "sgml",
			Self::Xml => "xml",
		}
	}
}

impl fmt::Display for Serialization {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Serialization {
	type Err = ParseModeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// "html"/"xhtml" are accepted as the names most callers reach for.
		match s.trim().to_ascii_lowercase().as_str() {
			"sgml" | "html" => Ok(Self::Sgml),
			"xml" | "xhtml" => Ok(Self::Xml),
			_ => Err(ParseModeError::new("serialization", s)),
		}
	}
}
