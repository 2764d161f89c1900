//! Streaming document writer.

use std::fmt;

use grappelli_attrs::boolean;
use grappelli_core::{Doctype, Serialization, WriteError, WriteResult, encode};

use crate::element::ElementWriter;
use crate::options::WriterOptions;
use crate::tags;

/// Streaming HTML writer over any [`fmt::Write`] sink.
///
/// Markup is written as it is produced; nothing is buffered and nothing is
/// re-parsed. Elements open through the per-tag constructors (or
/// [`element`](Self::element) for dynamic tags) and return an
/// [`ElementWriter`] that sets attributes and closes the element. An error
/// anywhere in a chain aborts the rest of that chain, so the sink may hold a
/// partial document afterwards.
///
/// # Examples
///
/// ```
/// use grappelli::HtmlWriter;
///
/// let mut out = String::new();
/// let mut doc = HtmlWriter::new(&mut out);
/// doc.doctype()?;
/// doc.p()?.id("greeting")?.text("hello")?;
/// assert_eq!(out, "<!DOCTYPE html><p id=\"greeting\">hello</p>");
/// # Ok::<(), grappelli::WriteError>(())
/// ```
pub struct HtmlWriter<W: fmt::Write> {
	out: W,
	pub(crate) doctype: Doctype,
	pub(crate) serialization: Serialization,
	pretty: bool,
	indent: String,
	pub(crate) depth: usize,
	wrote_any: bool,
	pub(crate) elements_written: u64,
}

impl<W: fmt::Write> HtmlWriter<W> {
	/// Creates a writer with default options (HTML5, SGML, compact output).
	pub fn new(out: W) -> Self {
		Self::with_options(out, WriterOptions::new())
	}

	/// Creates a writer with explicit options.
	pub fn with_options(out: W, options: WriterOptions) -> Self {
		tracing::debug!(
			"opening document: doctype={}, serialization={}",
			options.doctype,
			options.serialization
		);
		Self {
			out,
			doctype: options.doctype,
			serialization: options.serialization,
			pretty: options.pretty,
			indent: options.indent,
			depth: 0,
			wrote_any: false,
			elements_written: 0,
		}
	}

	/// Returns the underlying sink.
	pub fn into_inner(self) -> W {
		self.out
	}

	/// Writes the doctype declaration for the configured document type. In
	/// XML serialization the XML prolog comes first.
	pub fn doctype(&mut self) -> WriteResult<()> {
		if let Some(prolog) = self.serialization.prolog() {
			self.out.write_str(prolog)?;
			if self.pretty {
				self.out.write_str("\n")?;
			}
		}
		self.out.write_str(self.doctype.declaration())?;
		self.wrote_any = true;
		Ok(())
	}

	/// Writes text at the current position, escaping markup characters.
	pub fn text(&mut self, text: &str) -> WriteResult<()> {
		self.out.write_str(&encode::text(text))?;
		self.wrote_any = true;
		Ok(())
	}

	/// Writes markup exactly as given, no escaping. The caller vouches for
	/// the content.
	pub fn raw(&mut self, markup: &str) -> WriteResult<()> {
		self.out.write_str(markup)?;
		self.wrote_any = true;
		Ok(())
	}

	/// Starts an element by tag name.
	///
	/// Catalog tags behave exactly like their dedicated constructors. Names
	/// containing a hyphen are treated as custom elements, which carry the
	/// global attributes plus `data-*` and are never void. Anything else is
	/// rejected with [`WriteError::UnknownElement`].
	pub fn element(&mut self, tag: &str) -> WriteResult<ElementWriter<'_, W>> {
		if let Some(def) = tags::lookup(tag) {
			self.start_tag(def.tag)?;
			return Ok(ElementWriter::known(self, def));
		}
		if tag.contains('-') {
			grappelli_attrs::name::check_custom_element(tag)?;
			tracing::trace!("starting custom element <{}>", tag);
			let tag = tag.to_owned();
			self.start_tag(&tag)?;
			return Ok(ElementWriter::custom(self, tag));
		}
		Err(WriteError::UnknownElement { tag: tag.to_owned() })
	}

	// In pretty mode, start tags (and end tags of elements that contained
	// elements) begin on a fresh indented line.
	fn open_line(&mut self) -> WriteResult<()> {
		if self.pretty && self.wrote_any {
			self.out.write_str("\n")?;
			for _ in 0..self.depth {
				self.out.write_str(&self.indent)?;
			}
		}
		Ok(())
	}

	pub(crate) fn start_tag(&mut self, tag: &str) -> WriteResult<()> {
		self.open_line()?;
		self.out.write_str("<")?;
		self.out.write_str(tag)?;
		self.wrote_any = true;
		self.elements_written += 1;
		Ok(())
	}

	pub(crate) fn close_start_tag(&mut self) -> WriteResult<()> {
		self.out.write_str(">")?;
		Ok(())
	}

	pub(crate) fn close_void(&mut self) -> WriteResult<()> {
		self.out.write_str(self.serialization.self_close())?;
		Ok(())
	}

	pub(crate) fn end_tag(&mut self, tag: &str, had_child_elements: bool) -> WriteResult<()> {
		if had_child_elements {
			self.open_line()?;
		}
		self.out.write_str("</")?;
		self.out.write_str(tag)?;
		self.out.write_str(">")?;
		Ok(())
	}

	pub(crate) fn write_attr(&mut self, name: &str, value: &str) -> WriteResult<()> {
		self.out.write_str(" ")?;
		self.out.write_str(name)?;
		self.out.write_str("=\"")?;
		self.out.write_str(&encode::attribute_value(value))?;
		self.out.write_str("\"")?;
		Ok(())
	}

	/// Writes a boolean attribute in the form the serialization calls for:
	/// bare name under SGML, `name="name"` under XML.
	pub(crate) fn write_flag_attr(&mut self, name: &str) -> WriteResult<()> {
		self.out.write_str(" ")?;
		self.out.write_str(name)?;
		if let Some(value) = boolean::boolean_value(name, self.serialization) {
			self.out.write_str("=\"")?;
			self.out.write_str(value)?;
			self.out.write_str("\"")?;
		}
		Ok(())
	}

	// For values that cannot contain markup characters (integers, coords).
	pub(crate) fn write_unescaped_attr(&mut self, name: &str, value: impl fmt::Display) -> WriteResult<()> {
		write!(self.out, " {name}=\"{value}\"")?;
		Ok(())
	}
}

macro_rules! element_constructors {
	($($(#[$meta:meta])* $method:ident => $const_name:ident;)+) => {
		impl<W: fmt::Write> HtmlWriter<W> {
			$(
				$(#[$meta])*
				pub fn $method(&mut self) -> WriteResult<ElementWriter<'_, W>> {
					self.start_tag(tags::$const_name.tag)?;
					Ok(ElementWriter::known(self, &tags::$const_name))
				}
			)+
		}
	};
}

element_constructors! {
	/// Starts an `<a>` element.
	a => A;
	/// Starts an `<area>` element (void).
	area => AREA;
	/// Starts an `<article>` element.
	article => ARTICLE;
	/// Starts an `<aside>` element.
	aside => ASIDE;
	/// Starts an `<audio>` element.
	audio => AUDIO;
	/// Starts a `<blockquote>` element.
	blockquote => BLOCKQUOTE;
	/// Starts a `<body>` element.
	body => BODY;
	/// Starts a `<br>` element (void).
	br => BR;
	/// Starts a `<button>` element.
	button => BUTTON;
	/// Starts a `<caption>` element.
	caption => CAPTION;
	/// Starts a `<code>` element.
	code => CODE;
	/// Starts a `<col>` element (void).
	col => COL;
	/// Starts a `<colgroup>` element.
	colgroup => COLGROUP;
	/// Starts a `<dd>` element.
	dd => DD;
	/// Starts a `<del>` element.
	del => DEL;
	/// Starts a `<details>` element.
	details => DETAILS;
	/// Starts a `<dialog>` element.
	dialog => DIALOG;
	/// Starts a `<div>` element.
	div => DIV;
	/// Starts a `<dl>` element.
	dl => DL;
	/// Starts a `<dt>` element.
	dt => DT;
	/// Starts an `<em>` element.
	em => EM;
	/// Starts a `<fieldset>` element.
	fieldset => FIELDSET;
	/// Starts a `<figcaption>` element.
	figcaption => FIGCAPTION;
	/// Starts a `<figure>` element.
	figure => FIGURE;
	/// Starts a `<footer>` element.
	footer => FOOTER;
	/// Starts a `<form>` element.
	form => FORM;
	/// Starts an `<h1>` element.
	h1 => H1;
	/// Starts an `<h2>` element.
	h2 => H2;
	/// Starts an `<h3>` element.
	h3 => H3;
	/// Starts an `<h4>` element.
	h4 => H4;
	/// Starts an `<h5>` element.
	h5 => H5;
	/// Starts an `<h6>` element.
	h6 => H6;
	/// Starts a `<head>` element.
	head => HEAD;
	/// Starts a `<header>` element.
	header => HEADER;
	/// Starts an `<hr>` element (void).
	hr => HR;
	/// Starts an `<html>` element.
	html => HTML;
	/// Starts an `<iframe>` element.
	iframe => IFRAME;
	/// Starts an `<img>` element (void).
	img => IMG;
	/// Starts an `<input>` element (void).
	input => INPUT;
	/// Starts an `<ins>` element.
	ins => INS;
	/// Starts a `<label>` element.
	label => LABEL;
	/// Starts a `<legend>` element.
	legend => LEGEND;
	/// Starts an `<li>` element.
	li => LI;
	/// Starts a `<link>` element (void).
	link => LINK;
	/// Starts a `<main>` element.
	main => MAIN;
	/// Starts a `<map>` element.
	map => MAP;
	/// Starts a `<meta>` element (void).
	meta => META;
	/// Starts a `<nav>` element.
	nav => NAV;
	/// Starts an `<ol>` element.
	ol => OL;
	/// Starts an `<optgroup>` element.
	optgroup => OPTGROUP;
	/// Starts an `<option>` element.
	option => OPTION;
	/// Starts a `<p>` element.
	p => P;
	/// Starts a `<pre>` element.
	pre => PRE;
	/// Starts a `<script>` element.
	script => SCRIPT;
	/// Starts a `<section>` element.
	section => SECTION;
	/// Starts a `<select>` element.
	select => SELECT;
	/// Starts a `<small>` element.
	small => SMALL;
	/// Starts a `<source>` element (void).
	source => SOURCE;
	/// Starts a `<span>` element.
	span => SPAN;
	/// Starts a `<strong>` element.
	strong => STRONG;
	/// Starts a `<style>` element.
	style => STYLE;
	/// Starts a `<summary>` element.
	summary => SUMMARY;
	/// Starts a `<table>` element.
	table => TABLE;
	/// Starts a `<tbody>` element.
	tbody => TBODY;
	/// Starts a `<td>` element.
	td => TD;
	/// Starts a `<textarea>` element.
	textarea => TEXTAREA;
	/// Starts a `<tfoot>` element.
	tfoot => TFOOT;
	/// Starts a `<th>` element.
	th => TH;
	/// Starts a `<thead>` element.
	thead => THEAD;
	/// Starts a `<time>` element.
	time => TIME;
	/// Starts a `<title>` element.
	title => TITLE;
	/// Starts a `<tr>` element.
	tr => TR;
	/// Starts a `<track>` element (void).
	track => TRACK;
	/// Starts a `<ul>` element.
	ul => UL;
	/// Starts a `<video>` element.
	video => VIDEO;
	/// Starts a `<wbr>` element (void).
	wbr => WBR;
}
