//! Keyword-valued attributes: closed token sets and their resolvers.
//!
//! Each enumerated attribute is a plain enum; token resolution lives in the
//! [`Keyword`] trait rather than on the variants, and the one mode-dependent
//! case ([`Crossorigin`]) overrides [`Keyword::resolve`]. Setters accept
//! either the enum or free text through [`IntoKeyword`]; the text path is
//! trimmed, lowercased, and checked against the token table.

use std::fmt;
use std::str::FromStr;

use grappelli_core::{Serialization, WriteError, WriteResult, normalize};

/// A closed set of tokens an attribute accepts.
pub trait Keyword: Copy + Sized {
	/// Attribute this keyword set belongs to.
	const ATTRIBUTE: &'static str;
	/// Every accepted token, lowercase, in declaration order.
	const KEYWORDS: &'static [&'static str];

	/// Canonical token for this variant.
	fn as_str(self) -> &'static str;

	/// Looks up a variant from an exact lowercase token.
	fn from_keyword(keyword: &str) -> Option<Self>;

	/// Token to emit under the given serialization mode.
	///
	/// Mode-independent for every keyword set except [`Crossorigin`], whose
	/// anonymous form minimizes under SGML. An empty token tells the emitter
	/// to write the bare attribute name.
	fn resolve(self, serialization: Serialization) -> &'static str {
		let _ = serialization;
		self.as_str()
	}
}

/// Conversion into an optional keyword, used by attribute setters.
///
/// Implemented for each keyword enum itself (infallible), for string types
/// (validated against the token table), and for `Option`s of both, where
/// `None` and blank strings both mean "omit the attribute".
pub trait IntoKeyword<K: Keyword> {
	/// Resolves to a keyword; `Ok(None)` omits the attribute.
	fn into_keyword(self) -> WriteResult<Option<K>>;
}

/// Trims, lowercases, and looks up free text against `K`'s token table.
///
/// # Examples
///
/// ```
/// use grappelli_attrs::keyword::{Dir, keyword_from_text};
///
/// assert_eq!(keyword_from_text::<Dir>("  LTR  ").unwrap(), Some(Dir::Ltr));
/// assert_eq!(keyword_from_text::<Dir>("   ").unwrap(), None);
/// assert!(keyword_from_text::<Dir>("diagonal").is_err());
/// ```
pub fn keyword_from_text<K: Keyword>(value: &str) -> WriteResult<Option<K>> {
	match normalize::trimmed_lowercase(value) {
		None => Ok(None),
		Some(token) => match K::from_keyword(&token) {
			Some(keyword) => Ok(Some(keyword)),
			None => Err(WriteError::InvalidKeyword {
				attribute: K::ATTRIBUTE,
				value: token.into_owned(),
				expected: K::KEYWORDS,
			}),
		},
	}
}

macro_rules! keyword_conversions {
	($name:ident) => {
		impl IntoKeyword<$name> for $name {
			fn into_keyword(self) -> WriteResult<Option<$name>> {
				Ok(Some(self))
			}
		}

		impl<'a> IntoKeyword<$name> for &'a str {
			fn into_keyword(self) -> WriteResult<Option<$name>> {
				keyword_from_text(self)
			}
		}

		impl IntoKeyword<$name> for String {
			fn into_keyword(self) -> WriteResult<Option<$name>> {
				keyword_from_text(&self)
			}
		}

		impl<'a> IntoKeyword<$name> for &'a String {
			fn into_keyword(self) -> WriteResult<Option<$name>> {
				keyword_from_text(self)
			}
		}

		impl IntoKeyword<$name> for Option<$name> {
			fn into_keyword(self) -> WriteResult<Option<$name>> {
				Ok(self)
			}
		}

		impl<'a> IntoKeyword<$name> for Option<&'a str> {
			fn into_keyword(self) -> WriteResult<Option<$name>> {
				match self {
					Some(value) => keyword_from_text(value),
					None => Ok(None),
				}
			}
		}

		impl IntoKeyword<$name> for Option<String> {
			fn into_keyword(self) -> WriteResult<Option<$name>> {
				match self {
					Some(value) => keyword_from_text(&value),
					None => Ok(None),
				}
			}
		}

		impl<'a> IntoKeyword<$name> for Option<&'a String> {
			fn into_keyword(self) -> WriteResult<Option<$name>> {
				match self {
					Some(value) => keyword_from_text(value),
					None => Ok(None),
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = WriteError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				keyword_from_text(s)?.ok_or_else(|| WriteError::InvalidKeyword {
					attribute: Self::ATTRIBUTE,
					value: s.to_owned(),
					expected: Self::KEYWORDS,
				})
			}
		}
	};
}

macro_rules! keyword_enum {
	(
		$(#[$meta:meta])*
		$name:ident for $attribute:literal {
			$($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
		#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
		pub enum $name {
			$($(#[$vmeta])* $variant,)+
		}

		impl Keyword for $name {
			const ATTRIBUTE: &'static str = $attribute;
			const KEYWORDS: &'static [&'static str] = &[$($token),+];

			fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $token,)+
				}
			}

			fn from_keyword(keyword: &str) -> Option<Self> {
				match keyword {
					$($token => Some(Self::$variant),)+
					_ => None,
				}
			}
		}

		keyword_conversions!($name);
	};
}

keyword_enum! {
	/// Text directionality (`dir`).
	Dir for "dir" {
		/// Left to right.
		Ltr => "ltr",
		/// Right to left.
		Rtl => "rtl",
		/// Decided by the element's contents.
		Auto => "auto",
	}
}

keyword_enum! {
	/// Input capitalization hint (`autocapitalize`).
	Autocapitalize for "autocapitalize" {
		Off => "off",
		None => "none",
		On => "on",
		Sentences => "sentences",
		Words => "words",
		Characters => "characters",
	}
}

keyword_enum! {
	/// Form autofill toggle (`autocomplete`).
	Autocomplete for "autocomplete" {
		On => "on",
		Off => "off",
	}
}

keyword_enum! {
	/// Image decode scheduling (`decoding`).
	Decoding for "decoding" {
		Sync => "sync",
		Async => "async",
		Auto => "auto",
	}
}

keyword_enum! {
	/// Drag availability (`draggable`).
	///
	/// Enumerated `true`/`false`, not a boolean attribute: the token is
	/// always written out.
	Draggable for "draggable" {
		True => "true",
		False => "false",
	}
}

keyword_enum! {
	/// Resource load scheduling (`loading`).
	Loading for "loading" {
		Eager => "eager",
		Lazy => "lazy",
	}
}

keyword_enum! {
	/// Form submission method (`method`).
	Method for "method" {
		Get => "get",
		Post => "post",
		Dialog => "dialog",
	}
}

keyword_enum! {
	/// Media preload hint (`preload`).
	Preload for "preload" {
		None => "none",
		Metadata => "metadata",
		Auto => "auto",
	}
}

keyword_enum! {
	/// Header cell scope (`scope`).
	Scope for "scope" {
		Row => "row",
		Col => "col",
		Rowgroup => "rowgroup",
		Colgroup => "colgroup",
	}
}

keyword_enum! {
	/// Image map area shape (`shape`).
	Shape for "shape" {
		Rect => "rect",
		Circle => "circle",
		Poly => "poly",
		Default => "default",
	}
}

keyword_enum! {
	/// Translation opt-out (`translate`).
	Translate for "translate" {
		Yes => "yes",
		No => "no",
	}
}

keyword_enum! {
	/// Textarea line wrapping (`wrap`).
	Wrap for "wrap" {
		Soft => "soft",
		Hard => "hard",
	}
}

/// CORS settings (`crossorigin`).
///
/// The one keyword set whose emitted form depends on the serialization mode:
/// the anonymous form minimizes to the bare attribute under SGML and expands
/// to `crossorigin="anonymous"` under XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Crossorigin {
	/// CORS request without credentials.
	Anonymous,
	/// CORS request with credentials.
	UseCredentials,
}

impl Keyword for Crossorigin {
	const ATTRIBUTE: &'static str = "crossorigin";
	const KEYWORDS: &'static [&'static str] = &["anonymous", "use-credentials"];

	fn as_str(self) -> &'static str {
		match self {
			Self::Anonymous => "anonymous",
			Self::UseCredentials => "use-credentials",
		}
	}

	fn from_keyword(keyword: &str) -> Option<Self> {
		match keyword {
			"anonymous" => Some(Self::Anonymous),
			"use-credentials" => Some(Self::UseCredentials),
			_ => None,
		}
	}

	fn resolve(self, serialization: Serialization) -> &'static str {
		match (self, serialization) {
			(Self::Anonymous, Serialization::Sgml) => "",
			_ => self.as_str(),
		}
	}
}

keyword_conversions!(Crossorigin);
