//! Entity escaping for attribute values and text content.
//!
//! Thin wrappers over the `html-escape` crate. Each context escapes exactly
//! the characters that can break out of it: `&` and `"` inside double-quoted
//! attribute values, `&`, `<` and `>` in element content. Clean input passes
//! through borrowed.

use std::borrow::Cow;

/// Escapes a value for a double-quoted attribute context.
///
/// # Examples
///
/// ```
/// use grappelli_core::encode;
///
/// assert_eq!(encode::attribute_value(r#"Tom & "Jerry""#), "Tom &amp; &quot;Jerry&quot;");
/// assert_eq!(encode::attribute_value("plain"), "plain");
/// ```
pub fn attribute_value(value: &str) -> Cow<'_, str> {
	html_escape::encode_double_quoted_attribute(value)
}

/// Escapes text for element content.
///
/// # Examples
///
/// ```
/// use grappelli_core::encode;
///
/// assert_eq!(encode::text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
/// ```
pub fn text(value: &str) -> Cow<'_, str> {
	html_escape::encode_text(value)
}
