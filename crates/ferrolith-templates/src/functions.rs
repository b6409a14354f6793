//! Tera function builders
//!
//! Tera functions are values registered on the engine; these builders return
//! closures capturing their slice of the host configuration.

use std::collections::HashMap;
use std::sync::Arc;
use tera::{Result as TeraResult, Value};

use ferrolith_vite::ViteAssetResolver;

use crate::filters::component_attrs;

/// Function form of the `component_attrs` filter
///
/// # Example
///
/// ```tera
/// <ui-chart {{ component_attrs(attrs=chart_config) }}></ui-chart>
/// ```
pub fn make_component_attrs_fn()
-> impl Fn(&HashMap<String, Value>) -> TeraResult<Value> + Send + Sync {
	|args: &HashMap<String, Value>| {
		let value = args
			.get("attrs")
			.ok_or_else(|| tera::Error::msg("component_attrs requires an `attrs` argument"))?;
		component_attrs(value, &HashMap::new())
	}
}

/// Expose the configured component tag prefix to templates
pub fn make_tag_prefix_fn(
	tag_prefix: String,
) -> impl Fn(&HashMap<String, Value>) -> TeraResult<Value> + Send + Sync {
	move |_args: &HashMap<String, Value>| Ok(Value::String(tag_prefix.clone()))
}

/// Build a markup function over an optional resolver
///
/// Backs both `vite_scripts` and `vite_styles`; without a resolver the
/// function renders an empty string rather than failing the template.
pub fn make_vite_fn(
	resolver: Option<Arc<ViteAssetResolver>>,
	markup: fn(&ViteAssetResolver) -> String,
) -> impl Fn(&HashMap<String, Value>) -> TeraResult<Value> + Send + Sync {
	move |_args: &HashMap<String, Value>| {
		Ok(Value::String(
			resolver.as_deref().map(markup).unwrap_or_default(),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn component_attrs_fn_requires_the_argument() {
		let function = make_component_attrs_fn();
		assert!(function(&HashMap::new()).is_err());
	}

	#[test]
	fn vite_fn_without_resolver_is_empty() {
		let function = make_vite_fn(None, ViteAssetResolver::script_tags);
		let rendered = function(&HashMap::new()).unwrap();
		assert_eq!(rendered.as_str(), Some(""));
	}
}
