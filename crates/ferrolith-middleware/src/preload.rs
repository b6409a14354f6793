//! Component detection and preload headers
//!
//! Runs after the handler, on the way out. Three gates decide whether a
//! response is augmented at all: only the primary request of a cycle, only
//! HTML (or untyped) responses, only non-empty bodies. Everything past the
//! gates is additive; the body is never modified.

use async_trait::async_trait;
use hyper::header::HeaderValue;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use ferrolith_components::full_tag_names;
use ferrolith_http::{Error, Handler, Middleware, Request, Response, Result};
use ferrolith_vite::ViteAssetResolver;

/// Header listing the full tag names of detected components
pub const COMPONENTS_HEADER: &str = "x-ferrolith-components";

/// Header carrying preload directives, one value per asset
pub const LINK_HEADER: &str = "link";

/// Configuration for [`ComponentPreloadMiddleware`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentPreloadConfig {
	/// Custom-element tag prefix marking a component (e.g. `ui-`)
	#[serde(default = "default_tag_prefix")]
	pub tag_prefix: String,
	/// Whether to emit `Link` preload headers when a resolver is configured
	#[serde(default = "default_preload")]
	pub preload: bool,
}

fn default_tag_prefix() -> String {
	"ui-".to_string()
}

fn default_preload() -> bool {
	true
}

impl Default for ComponentPreloadConfig {
	fn default() -> Self {
		Self {
			tag_prefix: default_tag_prefix(),
			preload: default_preload(),
		}
	}
}

impl ComponentPreloadConfig {
	/// Create a config with the given tag prefix
	pub fn new(tag_prefix: impl Into<String>) -> Self {
		Self {
			tag_prefix: tag_prefix.into(),
			..Self::default()
		}
	}
	/// Disable `Link` preload headers
	pub fn without_preload(mut self) -> Self {
		self.preload = false;
		self
	}
	/// Check that the tag prefix is usable
	///
	/// Intended for the host's configuration layer at startup; the
	/// middleware itself never calls this and stays total on the hot path.
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_middleware::ComponentPreloadConfig;
	///
	/// assert!(ComponentPreloadConfig::new("ui-").validate().is_ok());
	/// assert!(ComponentPreloadConfig::new("").validate().is_err());
	/// assert!(ComponentPreloadConfig::new("ui").validate().is_err());
	/// assert!(ComponentPreloadConfig::new("u i-").validate().is_err());
	/// ```
	pub fn validate(&self) -> Result<()> {
		let prefix = &self.tag_prefix;
		if prefix.is_empty() {
			return Err(Error::config("component tag prefix must not be empty"));
		}
		if !prefix
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
		{
			return Err(Error::config(format!(
				"component tag prefix {prefix:?} contains invalid characters"
			)));
		}
		if !prefix.ends_with(['-', '_', ':']) {
			return Err(Error::config(format!(
				"component tag prefix {prefix:?} must end in a separator"
			)));
		}
		Ok(())
	}
}

/// Middleware that advertises component usage and asset preloads
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use ferrolith_http::{Handler, Middleware, Request, Response};
/// use ferrolith_middleware::{COMPONENTS_HEADER, ComponentPreloadConfig, ComponentPreloadMiddleware};
///
/// struct Page;
///
/// #[async_trait]
/// impl Handler for Page {
///     async fn handle(&self, _request: Request) -> ferrolith_http::Result<Response> {
///         Ok(Response::html("<ui-card><ui-badge/></ui-card>"))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let middleware = ComponentPreloadMiddleware::new(ComponentPreloadConfig::default());
/// let request = Request::builder().uri("/").build().unwrap();
/// let response = middleware.process(request, Arc::new(Page)).await.unwrap();
///
/// assert_eq!(
///     response.headers.get(COMPONENTS_HEADER).unwrap().to_str().unwrap(),
///     "ui-badge, ui-card"
/// );
/// # });
/// ```
pub struct ComponentPreloadMiddleware {
	config: ComponentPreloadConfig,
	resolver: Option<Arc<ViteAssetResolver>>,
}

impl ComponentPreloadMiddleware {
	/// Create the middleware without asset preloading
	pub fn new(config: ComponentPreloadConfig) -> Self {
		Self {
			config,
			resolver: None,
		}
	}
	/// Attach a resolver whose preload descriptors become `Link` headers
	pub fn with_resolver(mut self, resolver: Arc<ViteAssetResolver>) -> Self {
		self.resolver = Some(resolver);
		self
	}

	fn augment(&self, mut response: Response) -> Response {
		let is_html = match response.content_type() {
			None => true,
			Some(content_type) => content_type.contains("text/html"),
		};
		if !is_html || response.body.is_empty() {
			return response;
		}

		let html = String::from_utf8_lossy(&response.body);
		let tags = full_tag_names(&html, &self.config.tag_prefix);

		if !tags.is_empty() {
			let joined = tags.join(", ");
			tracing::debug!(components = %joined, "detected component usage");
			if let Ok(value) = HeaderValue::from_str(&joined) {
				response.headers.insert(COMPONENTS_HEADER, value);
			}
		}

		if self.config.preload
			&& let Some(resolver) = &self.resolver
		{
			for link in resolver.preload_links() {
				let directive = format!("<{}>; rel=preload; as={}", link.url, link.kind);
				if let Ok(value) = HeaderValue::from_str(&directive) {
					response.headers.append(LINK_HEADER, value);
				}
			}
		}

		response
	}
}

#[async_trait]
impl Middleware for ComponentPreloadMiddleware {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		let is_primary = request.is_primary();
		let response = next.handle(request).await?;

		if !is_primary {
			return Ok(response);
		}

		Ok(self.augment(response))
	}
}
