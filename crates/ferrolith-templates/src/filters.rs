//! Tera filters

use std::collections::HashMap;
use tera::{Result as TeraResult, Value};

use ferrolith_components::attrs::AttrValue;
use ferrolith_components::render_attrs;

/// Render a JSON object as component attributes
///
/// Entries follow the object's iteration order; booleans, nulls, and nested
/// structures follow the encoder's convention.
///
/// # Example
///
/// ```tera
/// <ui-modal {{ modal_options | component_attrs }}></ui-modal>
/// ```
pub fn component_attrs(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
	let map = value
		.as_object()
		.ok_or_else(|| tera::Error::msg("component_attrs requires an object"))?;

	let rendered = render_attrs(
		map.iter()
			.map(|(name, value)| (name.as_str(), AttrValue::from(value.clone()))),
	);

	Ok(Value::String(rendered))
}
