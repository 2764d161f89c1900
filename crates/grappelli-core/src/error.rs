//! Error taxonomy for attribute validation and markup emission.
//!
//! Every rejection carries structured fields (attribute name, offending
//! value, accepted set) so callers can render or translate messages
//! themselves; the `Display` output is a plain English rendering of the same
//! data. An empty or blank value is never an error anywhere in the
//! workspace: setters omit the attribute and succeed.

use std::fmt;

use thiserror::Error;

use crate::doctype::Doctype;

/// Errors produced while validating or writing markup.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
	/// The element does not support the attribute at all.
	#[error("attribute '{attribute}' is not supported on <{tag}>")]
	UnsupportedAttribute {
		attribute: &'static str,
		tag: String,
	},

	/// The attribute exists but not under the document's doctype.
	#[error("attribute '{attribute}' is not allowed in {doctype} documents")]
	UnsupportedDoctype {
		attribute: &'static str,
		doctype: Doctype,
	},

	/// The value is not one of the attribute's accepted keywords.
	#[error("invalid value '{value}' for attribute '{attribute}': expected one of {}", .expected.join(", "))]
	InvalidKeyword {
		attribute: &'static str,
		value: String,
		expected: &'static [&'static str],
	},

	/// The value cannot be parsed as an integer.
	#[error("invalid integer '{value}' for attribute '{attribute}'")]
	InvalidInteger {
		attribute: &'static str,
		value: String,
	},

	/// The integer value is below the attribute's floor.
	#[error("value {value} for attribute '{attribute}' is below the minimum of {min}")]
	IntegerOutOfRange {
		attribute: &'static str,
		value: i64,
		min: i64,
	},

	/// A dynamic name (custom element tag, `data-*` suffix, raw attribute)
	/// does not match the naming rules.
	#[error("invalid {kind} name: '{name}'")]
	InvalidName { kind: &'static str, name: String },

	/// The tag is neither a known element nor a valid custom element name.
	#[error("unknown element: '{tag}'")]
	UnknownElement { tag: String },

	/// Content was written to an element that cannot have any.
	#[error("<{tag}> is a void element and cannot have content")]
	VoidContent { tag: String },

	/// The underlying sink failed.
	#[error("write to the output sink failed")]
	Fmt(#[from] fmt::Error),
}

/// Result alias used across the workspace.
pub type WriteResult<T> = Result<T, WriteError>;
