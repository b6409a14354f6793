//! Tera helpers for Ferrolith
//!
//! Exposes the attribute encoder and the Vite asset resolver to templates:
//!
//! - `component_attrs` (filter and function) - render an object as component
//!   attributes
//! - `vite_scripts` / `vite_styles` - asset markup for the configured entry
//!   points
//! - `component_tag_prefix` - the configured component prefix, for templates
//!   that build tag names dynamically
//!
//! Helper outputs are markup strings meant to be inserted verbatim; pipe
//! them through `safe` in autoescaping templates.
//!
//! # Examples
//!
//! ```
//! use ferrolith_templates::{TemplateContext, register};
//! use tera::{Context, Tera};
//!
//! let mut tera = Tera::default();
//! register(&mut tera, TemplateContext::new("ui-"));
//! tera.add_raw_template("page", "<ui-card {{ attrs | component_attrs }}></ui-card>")
//!     .unwrap();
//!
//! let mut context = Context::new();
//! context.insert("attrs", &serde_json::json!({"open": true, "title": "Hi"}));
//!
//! let html = tera.render("page", &context).unwrap();
//! assert_eq!(html, r#"<ui-card open title="Hi"></ui-card>"#);
//! ```

pub mod filters;
pub mod functions;

use std::sync::Arc;
use tera::Tera;

use ferrolith_vite::ViteAssetResolver;

pub use filters::component_attrs;
pub use functions::{make_component_attrs_fn, make_tag_prefix_fn, make_vite_fn};

/// Everything the template helpers need from the host configuration
#[derive(Clone)]
pub struct TemplateContext {
	pub tag_prefix: String,
	pub resolver: Option<Arc<ViteAssetResolver>>,
}

impl TemplateContext {
	/// Create a context with the given component tag prefix
	pub fn new(tag_prefix: impl Into<String>) -> Self {
		Self {
			tag_prefix: tag_prefix.into(),
			resolver: None,
		}
	}
	/// Attach a resolver backing `vite_scripts` / `vite_styles`
	pub fn with_resolver(mut self, resolver: Arc<ViteAssetResolver>) -> Self {
		self.resolver = Some(resolver);
		self
	}
}

/// Register all Ferrolith helpers on a Tera instance
///
/// `vite_scripts` and `vite_styles` render empty strings when no resolver is
/// configured, so templates stay valid in hosts without an asset pipeline.
pub fn register(tera: &mut Tera, context: TemplateContext) {
	tera.register_filter("component_attrs", component_attrs);
	tera.register_function("component_attrs", make_component_attrs_fn());
	tera.register_function("component_tag_prefix", make_tag_prefix_fn(context.tag_prefix));
	tera.register_function(
		"vite_scripts",
		make_vite_fn(context.resolver.clone(), ViteAssetResolver::script_tags),
	);
	tera.register_function(
		"vite_styles",
		make_vite_fn(context.resolver, ViteAssetResolver::style_tags),
	);
}
