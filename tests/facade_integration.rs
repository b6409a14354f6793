//! End-to-end test of the Ferrolith facade
//!
//! Renders a page with the Tera helpers, serves it through a middleware
//! chain, and checks the augmented response: components header plus preload
//! links resolved from a real manifest on disk.

use async_trait::async_trait;
use ferrolith::prelude::*;
use ferrolith::templates::register;
use std::fs;
use std::sync::Arc;
use tera::{Context, Tera};

struct RenderedPage(String);

#[async_trait]
impl Handler for RenderedPage {
	async fn handle(&self, _request: Request) -> ferrolith::Result<Response> {
		Ok(Response::html(self.0.clone()))
	}
}

#[tokio::test]
async fn rendered_page_flows_through_detection_and_preload() {
	let public_dir = tempfile::tempdir().unwrap();
	let manifest_dir = public_dir.path().join("build/.vite");
	fs::create_dir_all(&manifest_dir).unwrap();
	fs::write(
		manifest_dir.join("manifest.json"),
		r#"{"resources/js/app.js": {"file": "assets/app-abc.js", "css": ["assets/app-def.css"]}}"#,
	)
	.unwrap();

	let resolver = Arc::new(ViteAssetResolver::new(
		ViteConfig::new(public_dir.path())
			.with_build_directory("build")
			.with_entry_points(["resources/js/app.js"]),
	));

	// Render the page with the template helpers
	let mut tera = Tera::default();
	register(
		&mut tera,
		TemplateContext::new("ui-").with_resolver(resolver.clone()),
	);
	tera.add_raw_template(
		"page",
		"<html><head>{{ vite_styles() }}{{ vite_scripts() }}</head>\
		 <body><ui-nav {{ nav | component_attrs }}></ui-nav><ui-footer/></body></html>",
	)
	.unwrap();

	let mut context = Context::new();
	context.insert("nav", &serde_json::json!({"sticky": true}));
	let html = tera.render("page", &context).unwrap();

	assert!(html.contains(r#"<link rel="stylesheet" href="/build/assets/app-def.css">"#));
	assert!(html.contains(r#"<script type="module" src="/build/assets/app-abc.js"></script>"#));
	assert!(html.contains("<ui-nav sticky></ui-nav>"));

	// Serve it through the chain
	let config = ComponentPreloadConfig::new("ui-");
	config.validate().unwrap();
	let chain = MiddlewareChain::new(Arc::new(RenderedPage(html))).with_middleware(Arc::new(
		ComponentPreloadMiddleware::new(config).with_resolver(resolver),
	));

	let request = Request::builder().uri("/").build().unwrap();
	let response = chain.execute(request).await.unwrap();

	assert_eq!(
		response
			.headers
			.get(COMPONENTS_HEADER)
			.unwrap()
			.to_str()
			.unwrap(),
		"ui-footer, ui-nav"
	);

	let links: Vec<_> = response
		.headers
		.get_all("link")
		.iter()
		.map(|value| value.to_str().unwrap().to_string())
		.collect();
	assert_eq!(
		links,
		vec![
			"</build/assets/app-abc.js>; rel=preload; as=script",
			"</build/assets/app-def.css>; rel=preload; as=style",
		]
	);
}

#[tokio::test]
async fn switch_field_renders_through_the_facade() {
	let html = SwitchField::new("newsletter")
		.with_label("Subscribe")
		.checked()
		.render_with_label();

	assert!(html.starts_with(r#"<ui-switch name="newsletter" id="id_newsletter" checked>"#));
	assert!(html.ends_with(r#"<label for="id_newsletter">Subscribe</label>"#));
}
