//! Attribute catalog for the grappelli markup writer.
//!
//! Everything here is about one question: given an attribute, a value, and a
//! document configuration, what gets written?
//!
//! - [`def`]: the static catalog of attribute definitions (value domain +
//!   doctype gate) and the shared validation paths
//! - [`keyword`]: the closed token sets behind enumerated attributes and the
//!   [`IntoKeyword`] conversion that lets setters take enums or free text
//! - [`boolean`]: minimized vs expanded boolean forms per serialization
//! - [`coords`]: the structured `<area coords>` value
//! - [`name`]: pattern checks for `data-*` suffixes and custom element tags

pub mod boolean;
pub mod coords;
pub mod def;
pub mod keyword;
pub mod name;

pub use coords::Coords;
pub use def::{AttrDef, DoctypeGate, ResolvedValue, ValueDomain};
pub use keyword::{
	Autocapitalize, Autocomplete, Crossorigin, Decoding, Dir, Draggable, IntoKeyword, Keyword,
	Loading, Method, Preload, Scope, Shape, Translate, Wrap,
};
