//! Name validation for custom elements and `data-*` attributes.
//!
//! Catalog attributes are static and need no checking; the two dynamic name
//! surfaces do. Both rules are the lowercase-ASCII subset that is valid in
//! either serialization mode.

use std::sync::LazyLock;

use grappelli_core::{WriteError, WriteResult};
use regex::Regex;

static DATA_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$").expect("DATA_SUFFIX_REGEX: invalid regex pattern")
});

static CUSTOM_ELEMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-z][a-z0-9]*-[a-z0-9-]*$").expect("CUSTOM_ELEMENT_REGEX: invalid regex pattern")
});

/// Checks the part of a `data-*` attribute name after the `data-` prefix.
///
/// # Examples
///
/// ```
/// use grappelli_attrs::name::check_data_suffix;
///
/// assert!(check_data_suffix("user-id").is_ok());
/// assert!(check_data_suffix("User Id").is_err());
/// ```
pub fn check_data_suffix(suffix: &str) -> WriteResult<()> {
	if DATA_SUFFIX_REGEX.is_match(suffix) {
		Ok(())
	} else {
		Err(WriteError::InvalidName {
			kind: "data attribute suffix",
			name: suffix.to_owned(),
		})
	}
}

/// Checks a custom element tag name.
///
/// Custom element names must start with a lowercase ASCII letter and contain
/// at least one hyphen, like `x-widget`.
pub fn check_custom_element(tag: &str) -> WriteResult<()> {
	if CUSTOM_ELEMENT_REGEX.is_match(tag) {
		Ok(())
	} else {
		Err(WriteError::InvalidName {
			kind: "custom element",
			name: tag.to_owned(),
		})
	}
}
