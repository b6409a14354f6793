//! HTML attribute serialization
//!
//! Components receive configuration as HTML attributes. The encoding
//! convention is shared with the client runtime and must stay byte-stable:
//!
//! - `true` renders the bare attribute name
//! - `false` and null render nothing
//! - maps and sequences render as `json-<name>='<compact json>'`
//! - strings and numbers render as `<name>="<value>"`
//!
//! Entries render in insertion order and are never deduplicated; key
//! uniqueness is the caller's contract.

use serde_json::{Number, Value};
use std::borrow::Borrow;

use crate::escape::escape_html;

/// A single attribute value
///
/// An explicit tagged union; the encoder dispatches on the variant, never on
/// runtime type inspection of a dynamic value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	Null,
	Bool(bool),
	Number(Number),
	String(String),
	/// A nested map or sequence, serialized to JSON on render
	Structured(Value),
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		Self::Number(Number::from(value))
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		Self::Number(Number::from(value))
	}
}

impl From<u64> for AttrValue {
	fn from(value: u64) -> Self {
		Self::Number(Number::from(value))
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		// Non-finite floats have no JSON form; they degrade to null
		Number::from_f64(value).map(Self::Number).unwrap_or(Self::Null)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Self::Null)
	}
}

impl From<Value> for AttrValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			Value::Number(n) => Self::Number(n),
			Value::String(s) => Self::String(s),
			value @ (Value::Array(_) | Value::Object(_)) => Self::Structured(value),
		}
	}
}

/// Render an ordered sequence of attribute entries
///
/// Fragments are joined by single spaces in the input's order. Identical
/// input produces byte-identical output on every call.
///
/// # Examples
///
/// ```
/// use ferrolith_components::attrs::{AttrValue, render_attrs};
///
/// let entries = vec![
///     ("disabled", AttrValue::Bool(true)),
///     ("hidden", AttrValue::Bool(false)),
///     ("label", AttrValue::from("Save & close")),
/// ];
/// assert_eq!(render_attrs(entries), r#"disabled label="Save &amp; close""#);
/// ```
pub fn render_attrs<I, K, V>(attrs: I) -> String
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: Borrow<AttrValue>,
{
	let mut parts = Vec::new();

	for (name, value) in attrs {
		let name = escape_html(name.as_ref());
		match value.borrow() {
			AttrValue::Null | AttrValue::Bool(false) => {}
			AttrValue::Bool(true) => parts.push(name),
			AttrValue::Number(n) => {
				parts.push(format!(r#"{}="{}""#, name, escape_html(&n.to_string())));
			}
			AttrValue::String(s) => {
				parts.push(format!(r#"{}="{}""#, name, escape_html(s)));
			}
			AttrValue::Structured(v) => {
				// serde_json emits compact JSON with forward slashes and
				// non-ASCII intact; only the quoting delimiter needs care
				let json = serde_json::to_string(v).unwrap_or_else(|_| "null".to_string());
				parts.push(format!("json-{}='{}'", name, json.replace('\'', "&#x27;")));
			}
		}
	}

	parts.join(" ")
}

/// An insertion-ordered attribute map with a builder API
///
/// # Examples
///
/// ```
/// use ferrolith_components::Attrs;
/// use serde_json::json;
///
/// let rendered = Attrs::new()
///     .set("disabled", true)
///     .set("hidden", false)
///     .set("count", 42)
///     .set("config", json!({"theme": "dark"}))
///     .render();
/// assert_eq!(rendered, r#"disabled count="42" json-config='{"theme":"dark"}'"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
	entries: Vec<(String, AttrValue)>,
}

impl Attrs {
	/// Create an empty attribute map
	pub fn new() -> Self {
		Self::default()
	}
	/// Append an attribute
	///
	/// Entries are kept in insertion order; setting the same name twice
	/// yields two fragments.
	pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.entries.push((name.into(), value.into()));
		self
	}
	/// Render all entries via [`render_attrs`]
	pub fn render(&self) -> String {
		render_attrs(self.entries.iter().map(|(name, value)| (name, value)))
	}
	/// Number of entries, including ones that render to nothing
	pub fn len(&self) -> usize {
		self.entries.len()
	}
	/// Whether the map holds no entries
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		}
	}
}
