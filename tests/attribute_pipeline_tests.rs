//! Attribute pipeline tests
//!
//! End-to-end checks of normalization, keyword resolution, doctype gating,
//! and escaped emission through the public writer API.

use grappelli::{
	Coords, Crossorigin, Dir, Doctype, HtmlWriter, Serialization, Shape, WriteError,
	WriterOptions,
};
use proptest::prelude::*;
use rstest::rstest;

fn html4_doc(out: &mut String) -> HtmlWriter<&mut String> {
	HtmlWriter::with_options(out, WriterOptions::new().doctype(Doctype::Html4))
}

fn xhtml_doc(out: &mut String) -> HtmlWriter<&mut String> {
	HtmlWriter::with_options(out, WriterOptions::new().serialization(Serialization::Xml))
}

// ===== normalization =====

#[rstest]
#[case("ltr", "<span dir=\"ltr\"></span>")]
#[case("  LTR  ", "<span dir=\"ltr\"></span>")]
#[case("Auto", "<span dir=\"auto\"></span>")]
#[case("", "<span></span>")]
#[case("   ", "<span></span>")]
fn test_dir_normalizes_its_keyword(#[case] input: &str, #[case] expected: &str) {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.span().unwrap().dir(input).unwrap().finish().unwrap();
	assert_eq!(out, expected);
}

#[rstest]
#[case("  badge ", "<div class=\"badge\"></div>")]
#[case("badge   badge-wide", "<div class=\"badge badge-wide\"></div>")]
#[case("a \t b", "<div class=\"a b\"></div>")]
fn test_class_collapses_whitespace(#[case] input: &str, #[case] expected: &str) {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.div().unwrap().class(input).unwrap().finish().unwrap();
	assert_eq!(out, expected);
}

#[rstest]
fn test_type_lowercases_its_value() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.input().unwrap().type_("TEXT").unwrap().finish().unwrap();
	assert_eq!(out, "<input type=\"text\">");
}

// ===== keyword validation =====

#[rstest]
fn test_invalid_keyword_names_value_and_attribute() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	let error = doc.span().unwrap().dir("diagonal").map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::InvalidKeyword {
			attribute: "dir",
			value: "diagonal".into(),
			expected: &["ltr", "rtl", "auto"],
		}
	);
	assert_eq!(
		error.to_string(),
		"invalid value 'diagonal' for attribute 'dir': expected one of ltr, rtl, auto"
	);
}

#[rstest]
#[case("sentences", "<input autocapitalize=\"sentences\">")]
#[case("WORDS", "<input autocapitalize=\"words\">")]
#[case("characters", "<input autocapitalize=\"characters\">")]
fn test_autocapitalize_accepts_keyword_strings(#[case] input: &str, #[case] expected: &str) {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.input().unwrap().autocapitalize(input).unwrap().finish().unwrap();
	assert_eq!(out, expected);
}

// ===== doctype gating =====

#[rstest]
fn test_minlength_is_html5_only() {
	let mut out = String::new();
	let mut doc = html4_doc(&mut out);
	let error = doc.input().unwrap().minlength(2).map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::UnsupportedDoctype {
			attribute: "minlength",
			doctype: Doctype::Html4,
		}
	);

	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.input().unwrap().minlength(2).unwrap().finish().unwrap();
	assert_eq!(out, "<input minlength=\"2\">");
}

#[rstest]
fn test_gate_answers_before_the_range_check() {
	let mut out = String::new();
	let mut doc = html4_doc(&mut out);
	let error = doc.input().unwrap().attr("minlength", "-3").map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::UnsupportedDoctype {
			attribute: "minlength",
			doctype: Doctype::Html4,
		}
	);
}

#[rstest]
fn test_compact_is_html4_only() {
	let mut out = String::new();
	let mut doc = html4_doc(&mut out);
	doc.ul().unwrap().compact(true).unwrap().finish().unwrap();
	assert_eq!(out, "<ul compact></ul>");

	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	let error = doc.ul().unwrap().compact(true).map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::UnsupportedDoctype {
			attribute: "compact",
			doctype: Doctype::Html5,
		}
	);
}

// ===== integers =====

#[rstest]
#[case(1, "<td></td>")]
#[case(2, "<td colspan=\"2\"></td>")]
#[case(12, "<td colspan=\"12\"></td>")]
fn test_colspan_elides_its_default(#[case] value: u32, #[case] expected: &str) {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.td().unwrap().colspan(value).unwrap().finish().unwrap();
	assert_eq!(out, expected);
}

#[rstest]
fn test_colspan_rejects_zero() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	let error = doc.td().unwrap().colspan(0).map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::IntegerOutOfRange {
			attribute: "colspan",
			value: 0,
			min: 1,
		}
	);
}

#[rstest]
#[case(1, "<select size=\"1\"></select>")]
#[case(20, "<select size=\"20\"></select>")]
fn test_size_always_writes_explicit_values(#[case] value: u32, #[case] expected: &str) {
	// size has no elide-default: 1 is not the HTML default for <input>.
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.select().unwrap().size(value).unwrap().finish().unwrap();
	assert_eq!(out, expected);
}

#[rstest]
fn test_attr_parses_integer_text() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.td().unwrap().attr("rowspan", " 3 ").unwrap().finish().unwrap();
	assert_eq!(out, "<td rowspan=\"3\"></td>");

	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	let error = doc.td().unwrap().attr("rowspan", "wide").map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::InvalidInteger {
			attribute: "rowspan",
			value: "wide".into(),
		}
	);
}

// ===== booleans and serialization modes =====

#[rstest]
fn test_booleans_minimize_under_sgml() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.input().unwrap().required(true).unwrap().disabled(false).unwrap().finish().unwrap();
	assert_eq!(out, "<input required>");
}

#[rstest]
fn test_booleans_repeat_their_name_under_xml() {
	let mut out = String::new();
	let mut doc = xhtml_doc(&mut out);
	doc.input().unwrap().required(true).unwrap().finish().unwrap();
	assert_eq!(out, "<input required=\"required\" />");
}

#[rstest]
fn test_crossorigin_resolution_depends_on_the_serialization() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.img().unwrap().crossorigin(Crossorigin::Anonymous).unwrap().finish().unwrap();
	assert_eq!(out, "<img crossorigin>");

	let mut out = String::new();
	let mut doc = xhtml_doc(&mut out);
	doc.img().unwrap().crossorigin(Crossorigin::Anonymous).unwrap().finish().unwrap();
	assert_eq!(out, "<img crossorigin=\"anonymous\" />");

	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.img().unwrap().crossorigin("use-credentials").unwrap().finish().unwrap();
	assert_eq!(out, "<img crossorigin=\"use-credentials\">");
}

// ===== escape hatches =====

#[rstest]
#[case("user-id", " 42 ", "<div data-user-id=\"42\"></div>")]
#[case("x1", "7", "<div data-x1=\"7\"></div>")]
#[case("chart-series-label", "q3", "<div data-chart-series-label=\"q3\"></div>")]
fn test_data_accepts_wellformed_suffixes(
	#[case] suffix: &str,
	#[case] value: &str,
	#[case] expected: &str,
) {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.div().unwrap().data(suffix, value).unwrap().finish().unwrap();
	assert_eq!(out, expected);
}

#[rstest]
#[case("User")]
#[case("9lives")]
#[case("user--id")]
#[case("-x")]
#[case("")]
fn test_data_rejects_malformed_suffixes(#[case] suffix: &str) {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	let error = doc.div().unwrap().data(suffix, "x").map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::InvalidName {
			kind: "data attribute suffix",
			name: suffix.into(),
		}
	);
}

#[rstest]
fn test_attr_rejects_unknown_names() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	let error = doc.div().unwrap().attr("onclick", "alert(1)").map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::InvalidName {
			kind: "attribute",
			name: "onclick".into(),
		}
	);
}

#[rstest]
fn test_attr_still_checks_element_capability() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	let error = doc.div().unwrap().attr("colspan", "2").map(|_| ()).unwrap_err();
	assert_eq!(
		error,
		WriteError::UnsupportedAttribute {
			attribute: "colspan",
			tag: "div".into(),
		}
	);
}

// ===== structured values =====

#[rstest]
fn test_area_takes_shape_and_coords() {
	let mut out = String::new();
	let mut doc = HtmlWriter::new(&mut out);
	doc.area()
		.unwrap()
		.shape(Shape::Circle)
		.unwrap()
		.coords(Coords::circle(60, 40, 25))
		.unwrap()
		.finish()
		.unwrap();
	assert_eq!(out, "<area shape=\"circle\" coords=\"60,40,25\">");
}

// ===== properties =====

proptest! {
	// Whatever the value, an emitted attribute contributes exactly its two
	// delimiter quotes; inner quotes are escaped away.
	#[test]
	fn test_attribute_quoting_survives_any_value(value in "[ -~]{0,40}") {
		let mut out = String::new();
		let mut doc = HtmlWriter::new(&mut out);
		doc.span().unwrap().title(&value).unwrap().finish().unwrap();
		let quotes = out.matches('"').count();
		if out.contains("title=") {
			prop_assert_eq!(quotes, 2);
		} else {
			prop_assert_eq!(quotes, 0);
		}
	}

	// Trimming through the writer is idempotent: feeding a pre-trimmed
	// value renders the same markup.
	#[test]
	fn test_trimming_is_idempotent_through_the_writer(value in " {0,3}[a-z0-9]{0,20} {0,3}") {
		let mut once = String::new();
		HtmlWriter::new(&mut once).span().unwrap().id(&value).unwrap().finish().unwrap();

		let mut twice = String::new();
		HtmlWriter::new(&mut twice).span().unwrap().id(value.trim()).unwrap().finish().unwrap();

		prop_assert_eq!(once, twice);
	}
}

// ===== serde feature =====

#[cfg(feature = "serde")]
#[rstest]
fn test_keywords_serialize_as_their_strings() {
	assert_eq!(serde_json::to_string(&Dir::Ltr).unwrap(), "\"ltr\"");
	assert_eq!(serde_json::to_string(&Doctype::Html5).unwrap(), "\"html5\"");
	assert_eq!(
		serde_json::to_string(&Crossorigin::UseCredentials).unwrap(),
		"\"use-credentials\""
	);
}

#[cfg(not(feature = "serde"))]
#[rstest]
fn test_dir_variants_display_their_keyword() {
	assert_eq!(Dir::Ltr.to_string(), "ltr");
	assert_eq!(Dir::Auto.to_string(), "auto");
}
