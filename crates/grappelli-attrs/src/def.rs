//! The attribute catalog: one static definition per attribute.
//!
//! An [`AttrDef`] is pure data: the canonical name, the value domain the
//! attribute accepts, and the doctype gate. All validation behavior reads
//! off that data, so adding an attribute means adding one table row, not a
//! type.
//!
//! The gate always runs before any value work: an attribute rejected for the
//! document's doctype reports [`WriteError::UnsupportedDoctype`] even when
//! the value would also fail its domain check.

use std::borrow::Cow;

use grappelli_core::{Doctype, WriteError, WriteResult, normalize};

use crate::keyword::Keyword as _;
use crate::keyword::{
	Autocapitalize, Autocomplete, Crossorigin, Decoding, Dir, Draggable, Loading, Method, Preload,
	Scope, Shape, Translate, Wrap,
};

/// How an attribute's value is interpreted and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
	/// Free text, trimmed.
	Text,
	/// Free text, trimmed and ASCII-lowercased.
	TextLowercase,
	/// Space-separated token list; internal whitespace runs collapse.
	TokenList,
	/// One token from a closed set.
	Keyword {
		keywords: &'static [&'static str],
	},
	/// Present/absent flag.
	Bool,
	/// Integer with an optional floor and an optional implicit default that
	/// is never written.
	Int {
		min: Option<i64>,
		elide: Option<i64>,
	},
	/// Comma-joined coordinate list.
	Coords,
}

/// Which document types accept an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctypeGate {
	Both,
	Html5Only,
	Html4Only,
}

impl DoctypeGate {
	pub fn allows(self, doctype: Doctype) -> bool {
		match self {
			Self::Both => true,
			Self::Html5Only => doctype == Doctype::Html5,
			Self::Html4Only => doctype == Doctype::Html4,
		}
	}
}

/// Outcome of validating a raw text value against a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue<'a> {
	/// Nothing to write.
	Elided,
	/// Write ` name="value"`.
	Value(Cow<'a, str>),
	/// Write the boolean form for the serialization mode.
	Flag,
}

/// Static description of one attribute.
#[derive(Debug)]
pub struct AttrDef {
	pub name: &'static str,
	pub domain: ValueDomain,
	pub gate: DoctypeGate,
}

impl AttrDef {
	/// Rejects the attribute when the document's doctype does not carry it.
	pub fn check_doctype(&self, doctype: Doctype) -> WriteResult<()> {
		if self.gate.allows(doctype) {
			Ok(())
		} else {
			Err(WriteError::UnsupportedDoctype {
				attribute: self.name,
				doctype,
			})
		}
	}

	/// Validates an integer against the domain's floor.
	///
	/// `Ok(None)` means the value equals the implicit default and the
	/// attribute is omitted entirely.
	pub fn check_int(&self, value: i64) -> WriteResult<Option<i64>> {
		match self.domain {
			ValueDomain::Int { min, elide } => {
				if let Some(min) = min
					&& value < min
				{
					return Err(WriteError::IntegerOutOfRange {
						attribute: self.name,
						value,
						min,
					});
				}
				if elide == Some(value) {
					Ok(None)
				} else {
					Ok(Some(value))
				}
			}
			_ => Ok(Some(value)),
		}
	}

	/// Applies the domain's normalization to a text value; `None` elides.
	pub fn normalize_text<'a>(&self, value: &'a str) -> Option<Cow<'a, str>> {
		match self.domain {
			ValueDomain::TextLowercase => normalize::trimmed_lowercase(value),
			ValueDomain::TokenList => normalize::collapse_whitespace(value),
			_ => normalize::trimmed(value).map(Cow::Borrowed),
		}
	}

	/// The closed token set, for keyword attributes.
	pub fn keywords(&self) -> Option<&'static [&'static str]> {
		match self.domain {
			ValueDomain::Keyword { keywords } => Some(keywords),
			_ => None,
		}
	}

	/// Validates a raw text value against this definition.
	///
	/// This is the path behind the untyped setter: keyword domains check the
	/// token table and emit the canonical token, integer domains parse and
	/// range-check, boolean domains treat any non-blank value as "set".
	pub fn resolve_text<'a>(&self, value: &'a str) -> WriteResult<ResolvedValue<'a>> {
		match self.domain {
			ValueDomain::Keyword { keywords } => match normalize::trimmed_lowercase(value) {
				None => Ok(ResolvedValue::Elided),
				Some(token) => {
					if keywords.contains(&token.as_ref()) {
						Ok(ResolvedValue::Value(token))
					} else {
						Err(WriteError::InvalidKeyword {
							attribute: self.name,
							value: token.into_owned(),
							expected: keywords,
						})
					}
				}
			},
			ValueDomain::Bool => match normalize::trimmed(value) {
				None => Ok(ResolvedValue::Elided),
				Some(_) => Ok(ResolvedValue::Flag),
			},
			ValueDomain::Int { .. } => match normalize::trimmed(value) {
				None => Ok(ResolvedValue::Elided),
				Some(text) => {
					let parsed: i64 =
						text.parse().map_err(|_| WriteError::InvalidInteger {
							attribute: self.name,
							value: text.to_owned(),
						})?;
					match self.check_int(parsed)? {
						None => Ok(ResolvedValue::Elided),
						Some(kept) => Ok(ResolvedValue::Value(Cow::Owned(kept.to_string()))),
					}
				}
			},
			_ => match self.normalize_text(value) {
				None => Ok(ResolvedValue::Elided),
				Some(text) => Ok(ResolvedValue::Value(text)),
			},
		}
	}
}

macro_rules! defs {
	($($const_name:ident: $name:literal, $domain:expr, $gate:expr;)+) => {
		$(
			pub const $const_name: AttrDef = AttrDef {
				name: $name,
				domain: $domain,
				gate: $gate,
			};
		)+

		/// Every definition, sorted by name for binary search.
		static ALL: &[&AttrDef] = &[$(&$const_name),+];
	};
}

use DoctypeGate::{Both, Html4Only, Html5Only};
use ValueDomain::{Bool, Coords, Int, Keyword, Text, TextLowercase, TokenList};

defs! {
	ACCESSKEY: "accesskey", Text, Both;
	ACTION: "action", Text, Both;
	ALT: "alt", Text, Both;
	ASYNC: "async", Bool, Html5Only;
	AUTOCAPITALIZE: "autocapitalize", Keyword { keywords: Autocapitalize::KEYWORDS }, Html5Only;
	AUTOCOMPLETE: "autocomplete", Keyword { keywords: Autocomplete::KEYWORDS }, Html5Only;
	AUTOFOCUS: "autofocus", Bool, Html5Only;
	AUTOPLAY: "autoplay", Bool, Html5Only;
	BORDER: "border", Int { min: Some(0), elide: None }, Html4Only;
	CHARSET: "charset", TextLowercase, Both;
	CHECKED: "checked", Bool, Both;
	CITE: "cite", Text, Both;
	CLASS: "class", TokenList, Both;
	COLS: "cols", Int { min: Some(1), elide: None }, Both;
	COLSPAN: "colspan", Int { min: Some(1), elide: Some(1) }, Both;
	COMPACT: "compact", Bool, Html4Only;
	CONTENT: "content", Text, Both;
	CONTROLS: "controls", Bool, Html5Only;
	COORDS: "coords", Coords, Both;
	CROSSORIGIN: "crossorigin", Keyword { keywords: Crossorigin::KEYWORDS }, Html5Only;
	DATETIME: "datetime", Text, Both;
	DECODING: "decoding", Keyword { keywords: Decoding::KEYWORDS }, Html5Only;
	DEFER: "defer", Bool, Both;
	DIR: "dir", Keyword { keywords: Dir::KEYWORDS }, Both;
	DISABLED: "disabled", Bool, Both;
	DOWNLOAD: "download", Text, Html5Only;
	DRAGGABLE: "draggable", Keyword { keywords: Draggable::KEYWORDS }, Html5Only;
	ENCTYPE: "enctype", TextLowercase, Both;
	FOR: "for", Text, Both;
	HEADERS: "headers", TokenList, Both;
	HEIGHT: "height", Int { min: Some(0), elide: None }, Both;
	HIDDEN: "hidden", Bool, Html5Only;
	HREF: "href", Text, Both;
	HREFLANG: "hreflang", Text, Both;
	ID: "id", Text, Both;
	INTEGRITY: "integrity", Text, Html5Only;
	ISMAP: "ismap", Bool, Both;
	LABEL: "label", Text, Both;
	LANG: "lang", Text, Both;
	LOADING: "loading", Keyword { keywords: Loading::KEYWORDS }, Html5Only;
	LOOP: "loop", Bool, Html5Only;
	MAXLENGTH: "maxlength", Int { min: Some(0), elide: None }, Both;
	MEDIA: "media", Text, Both;
	METHOD: "method", Keyword { keywords: Method::KEYWORDS }, Both;
	MINLENGTH: "minlength", Int { min: Some(0), elide: None }, Html5Only;
	MULTIPLE: "multiple", Bool, Both;
	MUTED: "muted", Bool, Html5Only;
	NAME: "name", Text, Both;
	NOHREF: "nohref", Bool, Html4Only;
	NOVALIDATE: "novalidate", Bool, Html5Only;
	NOWRAP: "nowrap", Bool, Html4Only;
	OPEN: "open", Bool, Html5Only;
	PLACEHOLDER: "placeholder", Text, Html5Only;
	POSTER: "poster", Text, Html5Only;
	PRELOAD: "preload", Keyword { keywords: Preload::KEYWORDS }, Html5Only;
	READONLY: "readonly", Bool, Both;
	REFERRERPOLICY: "referrerpolicy", TextLowercase, Html5Only;
	REL: "rel", TokenList, Both;
	REQUIRED: "required", Bool, Html5Only;
	REVERSED: "reversed", Bool, Html5Only;
	ROWS: "rows", Int { min: Some(1), elide: None }, Both;
	ROWSPAN: "rowspan", Int { min: Some(1), elide: Some(1) }, Both;
	SANDBOX: "sandbox", TokenList, Html5Only;
	SCOPE: "scope", Keyword { keywords: Scope::KEYWORDS }, Both;
	SELECTED: "selected", Bool, Both;
	SHAPE: "shape", Keyword { keywords: Shape::KEYWORDS }, Both;
	SIZE: "size", Int { min: Some(1), elide: None }, Both;
	SIZES: "sizes", Text, Html5Only;
	SPAN: "span", Int { min: Some(1), elide: Some(1) }, Both;
	SRC: "src", Text, Both;
	SRCSET: "srcset", Text, Html5Only;
	START: "start", Int { min: None, elide: None }, Both;
	STYLE: "style", Text, Both;
	TABINDEX: "tabindex", Int { min: None, elide: None }, Both;
	TARGET: "target", Text, Both;
	TITLE: "title", Text, Both;
	TRANSLATE: "translate", Keyword { keywords: Translate::KEYWORDS }, Html5Only;
	TYPE: "type", TextLowercase, Both;
	USEMAP: "usemap", Text, Both;
	VALUE: "value", Text, Both;
	WIDTH: "width", Int { min: Some(0), elide: None }, Both;
	WRAP: "wrap", Keyword { keywords: Wrap::KEYWORDS }, Html5Only;
}

/// Looks up a definition by canonical attribute name.
pub fn lookup(name: &str) -> Option<&'static AttrDef> {
	ALL.binary_search_by(|def| def.name.cmp(name))
		.ok()
		.map(|index| ALL[index])
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn table_is_sorted_by_name() {
		assert!(ALL.windows(2).all(|pair| pair[0].name < pair[1].name));
	}

	#[test]
	fn lookup_finds_known_names() {
		assert_eq!(lookup("dir").map(|def| def.name), Some("dir"));
		assert_eq!(lookup("minlength").map(|def| def.name), Some("minlength"));
		assert!(lookup("nosuchattr").is_none());
	}

	#[rstest]
	#[case(&MINLENGTH, Doctype::Html5, true)]
	#[case(&MINLENGTH, Doctype::Html4, false)]
	#[case(&COMPACT, Doctype::Html4, true)]
	#[case(&COMPACT, Doctype::Html5, false)]
	#[case(&DIR, Doctype::Html4, true)]
	#[case(&DIR, Doctype::Html5, true)]
	fn gates_follow_the_doctype(
		#[case] def: &AttrDef,
		#[case] doctype: Doctype,
		#[case] allowed: bool,
	) {
		// Act
		let result = def.check_doctype(doctype);

		// Assert
		assert_eq!(result.is_ok(), allowed);
		if !allowed {
			assert!(matches!(
				result,
				Err(WriteError::UnsupportedDoctype { attribute, .. }) if attribute == def.name
			));
		}
	}

	#[test]
	fn colspan_elides_its_implicit_default() {
		assert_eq!(COLSPAN.check_int(1).unwrap(), None);
		assert_eq!(COLSPAN.check_int(2).unwrap(), Some(2));
	}

	#[test]
	fn colspan_rejects_values_below_one() {
		assert!(matches!(
			COLSPAN.check_int(0),
			Err(WriteError::IntegerOutOfRange { attribute: "colspan", value: 0, min: 1 })
		));
	}

	#[test]
	fn size_keeps_the_floor_but_never_elides() {
		// <input size> defaults to 20, so an explicit 1 carries meaning.
		assert_eq!(SIZE.check_int(1).unwrap(), Some(1));
		assert_eq!(SIZE.check_int(20).unwrap(), Some(20));
		assert!(matches!(
			SIZE.check_int(0),
			Err(WriteError::IntegerOutOfRange { attribute: "size", value: 0, min: 1 })
		));
	}

	#[test]
	fn unfloored_integers_accept_negatives() {
		assert_eq!(TABINDEX.check_int(-1).unwrap(), Some(-1));
		assert_eq!(START.check_int(-10).unwrap(), Some(-10));
	}

	#[test]
	fn normalization_follows_the_domain() {
		assert_eq!(TYPE.normalize_text("  TEXT/HTML ").as_deref(), Some("text/html"));
		assert_eq!(CLASS.normalize_text(" a   b ").as_deref(), Some("a b"));
		assert_eq!(TITLE.normalize_text("  Hello World  ").as_deref(), Some("Hello World"));
		assert_eq!(TITLE.normalize_text("   "), None);
	}

	#[test]
	fn keyword_defs_share_their_enum_token_tables() {
		use crate::keyword::{
			Autocapitalize, Autocomplete, Crossorigin, Decoding, Dir, Draggable, Loading, Method,
			Preload, Scope, Shape, Translate, Wrap,
		};

		assert_eq!(AUTOCAPITALIZE.keywords(), Some(Autocapitalize::KEYWORDS));
		assert_eq!(AUTOCOMPLETE.keywords(), Some(Autocomplete::KEYWORDS));
		assert_eq!(CROSSORIGIN.keywords(), Some(Crossorigin::KEYWORDS));
		assert_eq!(DECODING.keywords(), Some(Decoding::KEYWORDS));
		assert_eq!(DIR.keywords(), Some(Dir::KEYWORDS));
		assert_eq!(DRAGGABLE.keywords(), Some(Draggable::KEYWORDS));
		assert_eq!(LOADING.keywords(), Some(Loading::KEYWORDS));
		assert_eq!(METHOD.keywords(), Some(Method::KEYWORDS));
		assert_eq!(PRELOAD.keywords(), Some(Preload::KEYWORDS));
		assert_eq!(SCOPE.keywords(), Some(Scope::KEYWORDS));
		assert_eq!(SHAPE.keywords(), Some(Shape::KEYWORDS));
		assert_eq!(TRANSLATE.keywords(), Some(Translate::KEYWORDS));
		assert_eq!(WRAP.keywords(), Some(Wrap::KEYWORDS));
		assert_eq!(TITLE.keywords(), None);
	}

	// ===== resolve_text: the untyped setter path =====

	#[rstest]
	#[case("  LTR  ", ResolvedValue::Value(Cow::Borrowed("ltr")))]
	#[case("rtl", ResolvedValue::Value(Cow::Borrowed("rtl")))]
	#[case("   ", ResolvedValue::Elided)]
	fn dir_text_resolves(#[case] input: &str, #[case] expected: ResolvedValue<'_>) {
		assert_eq!(DIR.resolve_text(input).unwrap(), expected);
	}

	#[test]
	fn dir_text_rejects_unknown_tokens() {
		let err = DIR.resolve_text("diagonal").unwrap_err();
		assert!(matches!(
			err,
			WriteError::InvalidKeyword { attribute: "dir", ref value, .. } if value == "diagonal"
		));
	}

	#[test]
	fn bool_text_sets_on_any_non_blank_value() {
		assert_eq!(CHECKED.resolve_text("checked").unwrap(), ResolvedValue::Flag);
		assert_eq!(CHECKED.resolve_text("  ").unwrap(), ResolvedValue::Elided);
	}

	#[rstest]
	#[case("2", ResolvedValue::Value(Cow::Owned(String::from("2"))))]
	#[case(" 3 ", ResolvedValue::Value(Cow::Owned(String::from("3"))))]
	#[case("1", ResolvedValue::Elided)]
	#[case("", ResolvedValue::Elided)]
	fn colspan_text_resolves(#[case] input: &str, #[case] expected: ResolvedValue<'_>) {
		assert_eq!(COLSPAN.resolve_text(input).unwrap(), expected);
	}

	#[test]
	fn integer_text_rejects_garbage_and_range() {
		assert!(matches!(
			COLSPAN.resolve_text("wide").unwrap_err(),
			WriteError::InvalidInteger { attribute: "colspan", .. }
		));
		assert!(matches!(
			COLSPAN.resolve_text("0").unwrap_err(),
			WriteError::IntegerOutOfRange { attribute: "colspan", .. }
		));
	}
}
