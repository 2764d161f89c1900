//! Fluent element writer.
//!
//! An [`ElementWriter`] exists while an element's start tag is open. Every
//! attribute setter runs the same pipeline before anything reaches the sink:
//!
//! 1. capability check against the element's attribute set
//! 2. doctype gate
//! 3. normalization (trim, per-domain casing and whitespace)
//! 4. value validation (keyword tables, integer ranges)
//! 5. escaped emission as ` name="value"`
//!
//! Setters consume and return the writer, so calls chain with `?`. Blank
//! values disappear instead of producing empty attributes, and integer
//! attributes with a spec default (`colspan`, `rowspan`, `span`) disappear
//! when set to that default.

use std::borrow::Cow;
use std::fmt;

use grappelli_attrs::{
	AttrDef, Autocapitalize, Autocomplete, Coords, Crossorigin, Decoding, Dir, Draggable,
	IntoKeyword, Keyword, Loading, Method, Preload, ResolvedValue, Scope, Shape, Translate, Wrap,
	def, name,
};
use grappelli_core::{WriteError, WriteResult, normalize};

use crate::document::HtmlWriter;
use crate::tags::{GLOBAL_ATTRS, TagDef};

/// Writer for a single element while its start tag is open.
///
/// Obtained from the per-tag constructors on [`HtmlWriter`] (or
/// [`HtmlWriter::element`]). The element closes through [`text`](Self::text),
/// [`raw`](Self::raw), [`children`](Self::children), or
/// [`finish`](Self::finish); dropping the writer without calling one of them
/// leaves the start tag unclosed in the output.
#[must_use = "the start tag stays open until text(), raw(), children(), or finish() is called"]
pub struct ElementWriter<'a, W: fmt::Write> {
	doc: &'a mut HtmlWriter<W>,
	tag: Cow<'static, str>,
	void: bool,
	extra: &'static [&'static str],
}

impl<'a, W: fmt::Write> ElementWriter<'a, W> {
	pub(crate) fn known(doc: &'a mut HtmlWriter<W>, def: &'static TagDef) -> Self {
		Self {
			doc,
			tag: Cow::Borrowed(def.tag),
			void: def.void,
			extra: def.extra,
		}
	}

	// Custom elements carry the global attributes plus data-* and are never
	// void.
	pub(crate) fn custom(doc: &'a mut HtmlWriter<W>, tag: String) -> Self {
		Self {
			doc,
			tag: Cow::Owned(tag),
			void: false,
			extra: &[],
		}
	}

	/// The tag this writer is emitting.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	fn supports(&self, attribute: &str) -> bool {
		GLOBAL_ATTRS.binary_search(&attribute).is_ok()
			|| self.extra.binary_search(&attribute).is_ok()
	}

	// Capability first, then the doctype gate. Value work never starts for
	// an attribute the element or document type rejects.
	fn check(&self, def: &AttrDef) -> WriteResult<()> {
		if !self.supports(def.name) {
			return Err(WriteError::UnsupportedAttribute {
				attribute: def.name,
				tag: self.tag.to_string(),
			});
		}
		def.check_doctype(self.doc.doctype)
	}

	fn text_attr(self, def: &AttrDef, value: impl AsRef<str>) -> WriteResult<Self> {
		self.check(def)?;
		match def.normalize_text(value.as_ref()) {
			None => Ok(self),
			Some(text) => {
				self.doc.write_attr(def.name, &text)?;
				Ok(self)
			}
		}
	}

	fn keyword_attr<K, V>(self, def: &AttrDef, value: V) -> WriteResult<Self>
	where
		K: Keyword,
		V: IntoKeyword<K>,
	{
		self.check(def)?;
		match value.into_keyword()? {
			None => Ok(self),
			Some(keyword) => {
				let token = keyword.resolve(self.doc.serialization);
				if token.is_empty() {
					// The serialization minimizes this keyword away.
					self.doc.write_flag_attr(def.name)?;
				} else {
					self.doc.write_attr(def.name, token)?;
				}
				Ok(self)
			}
		}
	}

	fn bool_attr(self, def: &AttrDef, set: bool) -> WriteResult<Self> {
		self.check(def)?;
		if set {
			self.doc.write_flag_attr(def.name)?;
		}
		Ok(self)
	}

	fn int_attr(self, def: &AttrDef, value: i64) -> WriteResult<Self> {
		self.check(def)?;
		match def.check_int(value)? {
			None => Ok(self),
			Some(kept) => {
				self.doc.write_unescaped_attr(def.name, kept)?;
				Ok(self)
			}
		}
	}

	/// Sets any catalog attribute from raw text.
	///
	/// The value runs the attribute's normal pipeline: keyword domains
	/// validate the token, integer domains parse and range-check, boolean
	/// domains treat any non-blank value as set. Names starting with
	/// `data-` route to [`data`](Self::data); anything else outside the
	/// catalog is rejected.
	///
	/// One wrinkle: keyword attributes set this way always emit
	/// `name="value"`, so `attr("crossorigin", "anonymous")` writes the
	/// value even under SGML where the typed setter would minimize it.
	pub fn attr(self, name: &str, value: &str) -> WriteResult<Self> {
		if let Some(suffix) = name.strip_prefix("data-") {
			return self.data(suffix, value);
		}
		let def = def::lookup(name).ok_or_else(|| WriteError::InvalidName {
			kind: "attribute",
			name: name.to_owned(),
		})?;
		self.check(def)?;
		match def.resolve_text(value)? {
			ResolvedValue::Elided => Ok(self),
			ResolvedValue::Flag => {
				self.doc.write_flag_attr(def.name)?;
				Ok(self)
			}
			ResolvedValue::Value(text) => {
				self.doc.write_attr(def.name, &text)?;
				Ok(self)
			}
		}
	}

	/// Sets `data-{suffix}`, validating the suffix (lowercase ASCII words
	/// separated by single hyphens).
	pub fn data(self, suffix: &str, value: &str) -> WriteResult<Self> {
		name::check_data_suffix(suffix)?;
		match normalize::trimmed(value) {
			None => Ok(self),
			Some(text) => {
				let attr_name = format!("data-{suffix}");
				self.doc.write_attr(&attr_name, text)?;
				Ok(self)
			}
		}
	}

	/// Sets the `coords` attribute from a coordinate list.
	///
	/// Accepts anything convertible to [`Coords`], including plain arrays:
	/// `area.coords([0, 0, 40, 40])`. An empty list is elided.
	pub fn coords(self, value: impl Into<Coords>) -> WriteResult<Self> {
		let def = &def::COORDS;
		self.check(def)?;
		let coords = value.into();
		if coords.is_empty() {
			return Ok(self);
		}
		self.doc.write_unescaped_attr(def.name, &coords)?;
		Ok(self)
	}

	/// Closes the start tag, writes escaped text, and writes the end tag.
	pub fn text(self, text: &str) -> WriteResult<()> {
		if self.void {
			return Err(WriteError::VoidContent {
				tag: self.tag.into_owned(),
			});
		}
		self.doc.close_start_tag()?;
		self.doc.text(text)?;
		self.doc.end_tag(&self.tag, false)
	}

	/// Closes the start tag, writes markup verbatim, and writes the end tag.
	///
	/// No escaping is applied; the caller vouches for the content.
	pub fn raw(self, markup: &str) -> WriteResult<()> {
		if self.void {
			return Err(WriteError::VoidContent {
				tag: self.tag.into_owned(),
			});
		}
		self.doc.close_start_tag()?;
		self.doc.raw(markup)?;
		self.doc.end_tag(&self.tag, false)
	}

	/// Closes the start tag, runs `build` for the element's children, and
	/// writes the end tag.
	pub fn children(self, build: impl FnOnce(&mut HtmlWriter<W>) -> WriteResult<()>) -> WriteResult<()> {
		if self.void {
			return Err(WriteError::VoidContent {
				tag: self.tag.into_owned(),
			});
		}
		self.doc.close_start_tag()?;
		let before = self.doc.elements_written;
		self.doc.depth += 1;
		let result = build(self.doc);
		self.doc.depth -= 1;
		result?;
		let had_child_elements = self.doc.elements_written > before;
		self.doc.end_tag(&self.tag, had_child_elements)
	}

	/// Closes the element with no content: void elements close their start
	/// tag the way the serialization calls for, everything else gets an
	/// empty body.
	pub fn finish(self) -> WriteResult<()> {
		if self.void {
			self.doc.close_void()
		} else {
			self.doc.close_start_tag()?;
			self.doc.end_tag(&self.tag, false)
		}
	}
}

macro_rules! text_setters {
	($($(#[$meta:meta])* $method:ident => $def:ident;)+) => {
		impl<W: fmt::Write> ElementWriter<'_, W> {
			$(
				$(#[$meta])*
				pub fn $method(self, value: impl AsRef<str>) -> WriteResult<Self> {
					self.text_attr(&def::$def, value)
				}
			)+
		}
	};
}

macro_rules! keyword_setters {
	($($(#[$meta:meta])* $method:ident($kw:ty) => $def:ident;)+) => {
		impl<W: fmt::Write> ElementWriter<'_, W> {
			$(
				$(#[$meta])*
				pub fn $method(self, value: impl IntoKeyword<$kw>) -> WriteResult<Self> {
					self.keyword_attr::<$kw, _>(&def::$def, value)
				}
			)+
		}
	};
}

macro_rules! bool_setters {
	($($(#[$meta:meta])* $method:ident => $def:ident;)+) => {
		impl<W: fmt::Write> ElementWriter<'_, W> {
			$(
				$(#[$meta])*
				pub fn $method(self, set: bool) -> WriteResult<Self> {
					self.bool_attr(&def::$def, set)
				}
			)+
		}
	};
}

macro_rules! int_setters {
	($($(#[$meta:meta])* $method:ident($int:ty) => $def:ident;)+) => {
		impl<W: fmt::Write> ElementWriter<'_, W> {
			$(
				$(#[$meta])*
				pub fn $method(self, value: $int) -> WriteResult<Self> {
					self.int_attr(&def::$def, i64::from(value))
				}
			)+
		}
	};
}

text_setters! {
	/// Sets the `accesskey` attribute.
	accesskey => ACCESSKEY;
	/// Sets the form `action` URL.
	action => ACTION;
	/// Sets the `alt` text.
	alt => ALT;
	/// Sets the `charset` attribute, lowercased.
	charset => CHARSET;
	/// Sets the `cite` URL.
	cite => CITE;
	/// Sets the `class` attribute. Whitespace runs between class names
	/// collapse to single spaces.
	class => CLASS;
	/// Sets the `content` attribute of a `<meta>` element.
	content => CONTENT;
	/// Sets the `datetime` attribute.
	datetime => DATETIME;
	/// Sets the `download` file name.
	download => DOWNLOAD;
	/// Sets the form `enctype`, lowercased.
	enctype => ENCTYPE;
	/// Sets the `for` attribute of a `<label>`. Named with a trailing
	/// underscore because `for` is a Rust keyword.
	for_ => FOR;
	/// Sets the `headers` attribute of a table cell.
	headers => HEADERS;
	/// Sets the `href` URL.
	href => HREF;
	/// Sets the `hreflang` attribute.
	hreflang => HREFLANG;
	/// Sets the `id` attribute.
	id => ID;
	/// Sets the `integrity` hash for a script or stylesheet.
	integrity => INTEGRITY;
	/// Sets the `label` attribute of an `<optgroup>`, `<option>`, or
	/// `<track>`.
	label => LABEL;
	/// Sets the `lang` attribute.
	lang => LANG;
	/// Sets the `media` query.
	media => MEDIA;
	/// Sets the `name` attribute.
	name => NAME;
	/// Sets the `placeholder` text.
	placeholder => PLACEHOLDER;
	/// Sets the `poster` image URL of a `<video>`.
	poster => POSTER;
	/// Sets the `referrerpolicy` attribute, lowercased.
	referrerpolicy => REFERRERPOLICY;
	/// Sets the `rel` attribute. Whitespace runs between link types
	/// collapse to single spaces.
	rel => REL;
	/// Sets the `sandbox` token list of an `<iframe>`.
	sandbox => SANDBOX;
	/// Sets the `sizes` attribute.
	sizes => SIZES;
	/// Sets the `src` URL.
	src => SRC;
	/// Sets the `srcset` candidate list.
	srcset => SRCSET;
	/// Sets the inline `style` attribute.
	style => STYLE;
	/// Sets the `target` browsing context.
	target => TARGET;
	/// Sets the `title` tooltip text.
	title => TITLE;
	/// Sets the `type` attribute, lowercased. Named with a trailing
	/// underscore because `type` is a Rust keyword.
	type_ => TYPE;
	/// Sets the `usemap` reference of an `<img>` or `<input>`.
	usemap => USEMAP;
	/// Sets the `value` attribute.
	value => VALUE;
}

keyword_setters! {
	/// Sets `autocapitalize`. Accepts an [`Autocapitalize`] variant or a
	/// keyword string.
	autocapitalize(Autocapitalize) => AUTOCAPITALIZE;
	/// Sets `autocomplete` to `on` or `off`.
	autocomplete(Autocomplete) => AUTOCOMPLETE;
	/// Sets the CORS mode. Under SGML, [`Crossorigin::Anonymous`] is
	/// minimized to the bare attribute name; under XML it keeps its value.
	crossorigin(Crossorigin) => CROSSORIGIN;
	/// Sets the image `decoding` hint.
	decoding(Decoding) => DECODING;
	/// Sets the text direction. Accepts a [`Dir`] variant or a keyword
	/// string (`"ltr"`, `"rtl"`, `"auto"`), case-insensitively.
	dir(Dir) => DIR;
	/// Sets `draggable`. Unlike the boolean attributes this one is
	/// enumerated: it writes `true` or `false`.
	draggable(Draggable) => DRAGGABLE;
	/// Sets the `loading` hint (`eager` or `lazy`).
	loading(Loading) => LOADING;
	/// Sets the form `method`.
	method(Method) => METHOD;
	/// Sets the media `preload` hint.
	preload(Preload) => PRELOAD;
	/// Sets the `scope` of a `<th>` header cell.
	scope(Scope) => SCOPE;
	/// Sets the `shape` of an `<area>`.
	shape(Shape) => SHAPE;
	/// Sets `translate` (`yes` or `no`).
	translate(Translate) => TRANSLATE;
	/// Sets the `wrap` mode of a `<textarea>`.
	wrap(Wrap) => WRAP;
}

bool_setters! {
	/// Sets the `async` flag of a `<script>`. Named with a trailing
	/// underscore because `async` is a Rust keyword.
	async_ => ASYNC;
	/// Sets the `autofocus` flag.
	autofocus => AUTOFOCUS;
	/// Sets the `autoplay` flag.
	autoplay => AUTOPLAY;
	/// Sets the `checked` flag.
	checked => CHECKED;
	/// Sets the HTML 4 `compact` flag of a list.
	compact => COMPACT;
	/// Sets the `controls` flag of a media element.
	controls => CONTROLS;
	/// Sets the `defer` flag of a `<script>`.
	defer => DEFER;
	/// Sets the `disabled` flag.
	disabled => DISABLED;
	/// Sets the `hidden` flag.
	hidden => HIDDEN;
	/// Sets the `ismap` flag of an `<img>` inside a link.
	ismap => ISMAP;
	/// Sets the `loop` flag of a media element. Named with a trailing
	/// underscore because `loop` is a Rust keyword.
	loop_ => LOOP;
	/// Sets the `multiple` flag.
	multiple => MULTIPLE;
	/// Sets the `muted` flag.
	muted => MUTED;
	/// Sets the HTML 4 `nohref` flag of an `<area>`.
	nohref => NOHREF;
	/// Sets the `novalidate` flag of a `<form>`.
	novalidate => NOVALIDATE;
	/// Sets the HTML 4 `nowrap` flag of a table cell.
	nowrap => NOWRAP;
	/// Sets the `open` flag of `<details>` or `<dialog>`.
	open => OPEN;
	/// Sets the `readonly` flag.
	readonly => READONLY;
	/// Sets the `required` flag.
	required => REQUIRED;
	/// Sets the `reversed` flag of an `<ol>`.
	reversed => REVERSED;
	/// Sets the `selected` flag of an `<option>`.
	selected => SELECTED;
}

int_setters! {
	/// Sets the HTML 4 `border` width of a `<table>` or `<img>`.
	border(u32) => BORDER;
	/// Sets the `cols` count of a `<textarea>`. Must be at least 1.
	cols(u32) => COLS;
	/// Sets the column span of a table cell. Must be at least 1; the
	/// default of 1 is elided.
	colspan(u32) => COLSPAN;
	/// Sets the `height` in pixels.
	height(u32) => HEIGHT;
	/// Sets the `maxlength` of a text control.
	maxlength(u32) => MAXLENGTH;
	/// Sets the `minlength` of a text control.
	minlength(u32) => MINLENGTH;
	/// Sets the `rows` count of a `<textarea>`. Must be at least 1.
	rows(u32) => ROWS;
	/// Sets the row span of a table cell. Must be at least 1; the default
	/// of 1 is elided.
	rowspan(u32) => ROWSPAN;
	/// Sets the `size` of a control. Must be at least 1.
	size(u32) => SIZE;
	/// Sets the column span of a `<col>` or `<colgroup>`. Must be at
	/// least 1; the default of 1 is elided.
	span(u32) => SPAN;
	/// Sets the ordinal `start` of an `<ol>`. May be negative.
	start(i32) => START;
	/// Sets the `tabindex`. May be negative to remove the element from
	/// sequential focus.
	tabindex(i32) => TABINDEX;
	/// Sets the `width` in pixels.
	width(u32) => WIDTH;
}
