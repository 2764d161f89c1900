//! Core primitives for the grappelli markup writer.
//!
//! This crate carries the pieces every other grappelli crate builds on:
//!
//! - [`Doctype`] and [`Serialization`]: the two document-level switches that
//!   drive attribute gating and emission forms
//! - [`normalize`]: whitespace and case folding applied to attribute values
//!   before validation
//! - [`encode`]: entity escaping for attribute values and text content
//! - [`WriteError`]: the error taxonomy shared across the workspace

pub mod doctype;
pub mod encode;
pub mod error;
pub mod normalize;

pub use doctype::{Doctype, ParseModeError, Serialization};
pub use error::{WriteError, WriteResult};
