//! Known-element catalog.
//!
//! One static entry per element: tag name, void flag, and the attributes the
//! element supports beyond the global set. There is no element type
//! hierarchy; capability is data, and every element is written by the same
//! [`ElementWriter`](crate::ElementWriter).

/// Static description of one known element.
pub(crate) struct TagDef {
	pub tag: &'static str,
	pub void: bool,
	/// Supported attributes beyond [`GLOBAL_ATTRS`], sorted.
	pub extra: &'static [&'static str],
}

/// Attributes every element supports, sorted for binary search.
pub(crate) static GLOBAL_ATTRS: &[&str] = &[
	"accesskey",
	"autocapitalize",
	"class",
	"dir",
	"draggable",
	"hidden",
	"id",
	"lang",
	"style",
	"tabindex",
	"title",
	"translate",
];

macro_rules! tag_consts {
	($($const_name:ident: $tag:literal, $void:expr, [$($attr:literal),* $(,)?];)+) => {
		$(
			pub(crate) const $const_name: TagDef = TagDef {
				tag: $tag,
				void: $void,
				extra: &[$($attr),*],
			};
		)+

		/// Every known element, sorted by tag for binary search.
		pub(crate) static ALL: &[&TagDef] = &[$(&$const_name),+];
	};
}

tag_consts! {
	A: "a", false, ["charset", "download", "href", "hreflang", "media", "referrerpolicy", "rel", "target", "type"];
	AREA: "area", true, ["alt", "coords", "download", "href", "hreflang", "nohref", "referrerpolicy", "rel", "shape", "target"];
	ARTICLE: "article", false, [];
	ASIDE: "aside", false, [];
	AUDIO: "audio", false, ["autoplay", "controls", "crossorigin", "loop", "muted", "preload", "src"];
	BLOCKQUOTE: "blockquote", false, ["cite"];
	BODY: "body", false, [];
	BR: "br", true, [];
	BUTTON: "button", false, ["autofocus", "disabled", "name", "type", "value"];
	CAPTION: "caption", false, [];
	CODE: "code", false, [];
	COL: "col", true, ["span"];
	COLGROUP: "colgroup", false, ["span"];
	DD: "dd", false, [];
	DEL: "del", false, ["cite", "datetime"];
	DETAILS: "details", false, ["open"];
	DIALOG: "dialog", false, ["open"];
	DIV: "div", false, [];
	DL: "dl", false, ["compact"];
	DT: "dt", false, [];
	EM: "em", false, [];
	FIELDSET: "fieldset", false, ["disabled", "name"];
	FIGCAPTION: "figcaption", false, [];
	FIGURE: "figure", false, [];
	FOOTER: "footer", false, [];
	FORM: "form", false, ["action", "autocomplete", "enctype", "method", "name", "novalidate", "target"];
	H1: "h1", false, [];
	H2: "h2", false, [];
	H3: "h3", false, [];
	H4: "h4", false, [];
	H5: "h5", false, [];
	H6: "h6", false, [];
	HEAD: "head", false, [];
	HEADER: "header", false, [];
	HR: "hr", true, [];
	HTML: "html", false, [];
	IFRAME: "iframe", false, ["height", "loading", "name", "referrerpolicy", "sandbox", "src", "width"];
	IMG: "img", true, ["alt", "border", "crossorigin", "decoding", "height", "ismap", "loading", "referrerpolicy", "sizes", "src", "srcset", "usemap", "width"];
	INPUT: "input", true, ["alt", "autocomplete", "autofocus", "checked", "disabled", "height", "maxlength", "minlength", "multiple", "name", "placeholder", "readonly", "required", "size", "src", "type", "usemap", "value", "width"];
	INS: "ins", false, ["cite", "datetime"];
	LABEL: "label", false, ["for"];
	LEGEND: "legend", false, [];
	LI: "li", false, ["value"];
	LINK: "link", true, ["charset", "crossorigin", "href", "hreflang", "integrity", "media", "referrerpolicy", "rel", "sizes", "type"];
	MAIN: "main", false, [];
	MAP: "map", false, ["name"];
	META: "meta", true, ["charset", "content", "name"];
	NAV: "nav", false, [];
	OL: "ol", false, ["compact", "reversed", "start"];
	OPTGROUP: "optgroup", false, ["disabled", "label"];
	OPTION: "option", false, ["disabled", "label", "selected", "value"];
	P: "p", false, [];
	PRE: "pre", false, [];
	SCRIPT: "script", false, ["async", "charset", "crossorigin", "defer", "integrity", "referrerpolicy", "src", "type"];
	SECTION: "section", false, [];
	SELECT: "select", false, ["autocomplete", "autofocus", "disabled", "multiple", "name", "required", "size"];
	SMALL: "small", false, [];
	SOURCE: "source", true, ["media", "sizes", "src", "srcset", "type"];
	SPAN: "span", false, [];
	STRONG: "strong", false, [];
	STYLE: "style", false, ["media", "type"];
	SUMMARY: "summary", false, [];
	TABLE: "table", false, ["border"];
	TBODY: "tbody", false, [];
	TD: "td", false, ["colspan", "headers", "nowrap", "rowspan"];
	TEXTAREA: "textarea", false, ["autocomplete", "autofocus", "cols", "disabled", "maxlength", "minlength", "name", "placeholder", "readonly", "required", "rows", "wrap"];
	TFOOT: "tfoot", false, [];
	TH: "th", false, ["colspan", "headers", "nowrap", "rowspan", "scope"];
	THEAD: "thead", false, [];
	TIME: "time", false, ["datetime"];
	TITLE: "title", false, [];
	TR: "tr", false, [];
	TRACK: "track", true, ["label", "src"];
	UL: "ul", false, ["compact"];
	VIDEO: "video", false, ["autoplay", "controls", "crossorigin", "height", "loop", "muted", "poster", "preload", "src", "width"];
	WBR: "wbr", true, [];
}

/// Looks up a known element by tag name.
pub(crate) fn lookup(tag: &str) -> Option<&'static TagDef> {
	ALL.binary_search_by(|def| def.tag.cmp(tag))
		.ok()
		.map(|index| ALL[index])
}
