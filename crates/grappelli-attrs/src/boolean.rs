//! Boolean attribute emission forms.
//!
//! A set boolean attribute is written differently per serialization mode:
//! SGML minimizes to the bare name (` async`), XML repeats the name as the
//! value (` async="async"`). An unset boolean writes nothing at all; that
//! decision is the caller's, this module only picks the form.

use grappelli_core::Serialization;

/// Value text for a set boolean attribute.
///
/// `None` means the minimized form: the emitter writes the bare name.
///
/// # Examples
///
/// ```
/// use grappelli_attrs::boolean::boolean_value;
/// use grappelli_core::Serialization;
///
/// assert_eq!(boolean_value("async", Serialization::Sgml), None);
/// assert_eq!(boolean_value("async", Serialization::Xml), Some("async"));
/// ```
pub fn boolean_value(name: &str, serialization: Serialization) -> Option<&str> {
	match serialization {
		Serialization::Sgml => None,
		Serialization::Xml => Some(name),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sgml_minimizes() {
		assert_eq!(boolean_value("checked", Serialization::Sgml), None);
	}

	#[test]
	fn xml_repeats_the_name() {
		assert_eq!(boolean_value("checked", Serialization::Xml), Some("checked"));
	}
}
