//! Value normalization applied before any validation.
//!
//! Attribute values are normalized the same way everywhere: surrounding ASCII
//! whitespace is stripped first, then the attribute's case or token rule is
//! applied. An input that normalizes to nothing means "omit the attribute",
//! never an error, so every function here returns `None` for it.
//!
//! All functions are idempotent: feeding an output back in returns it
//! unchanged.

use std::borrow::Cow;

/// Strips surrounding ASCII whitespace, `None` when nothing remains.
///
/// # Examples
///
/// ```
/// use grappelli_core::normalize;
///
/// assert_eq!(normalize::trimmed("  ltr  "), Some("ltr"));
/// assert_eq!(normalize::trimmed("   "), None);
/// ```
pub fn trimmed(value: &str) -> Option<&str> {
	let trimmed = value.trim_matches(|c: char| c.is_ascii_whitespace());
	if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Strips surrounding ASCII whitespace and lowercases the rest.
///
/// Borrows when the trimmed input is already lowercase.
///
/// # Examples
///
/// ```
/// use grappelli_core::normalize;
///
/// assert_eq!(normalize::trimmed_lowercase("  LTR  ").as_deref(), Some("ltr"));
/// assert_eq!(normalize::trimmed_lowercase(""), None);
/// ```
pub fn trimmed_lowercase(value: &str) -> Option<Cow<'_, str>> {
	let trimmed = trimmed(value)?;
	if trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
		Some(Cow::Owned(trimmed.to_ascii_lowercase()))
	} else {
		Some(Cow::Borrowed(trimmed))
	}
}

/// Trims and folds internal ASCII whitespace runs into single spaces.
///
/// Used for token-list attributes (`class`, `rel`, …) where any whitespace
/// separates tokens. Borrows when the input is already in collapsed form.
pub fn collapse_whitespace(value: &str) -> Option<Cow<'_, str>> {
	let trimmed = trimmed(value)?;
	let collapsed_already = !trimmed.contains("  ")
		&& !trimmed
			.chars()
			.any(|c| c.is_ascii_whitespace() && c != ' ');
	if collapsed_already {
		return Some(Cow::Borrowed(trimmed));
	}

	let mut out = String::with_capacity(trimmed.len());
	let mut in_run = false;
	for c in trimmed.chars() {
		if c.is_ascii_whitespace() {
			if !in_run {
				out.push(' ');
			}
			in_run = true;
		} else {
			out.push(c);
			in_run = false;
		}
	}
	Some(Cow::Owned(out))
}
