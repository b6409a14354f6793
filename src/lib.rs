//! # Ferrolith
//!
//! Ferrolith augments server-rendered HTML applications with three
//! cross-cutting capabilities:
//!
//! - **Component detection** - scan rendered pages for prefixed custom
//!   elements (`<ui-button>`, ...) and advertise the result in a response
//!   header, so the client runtime can hydrate exactly what is used.
//! - **Vite asset resolution** - turn a Vite build manifest (or a live dev
//!   server) into script/style markup and HTTP preload directives.
//! - **Attribute serialization** - a deterministic convention for rendering
//!   attribute maps (strings, numbers, booleans, nested structures) into
//!   HTML attribute syntax, shared bit-for-bit with the client runtime.
//!
//! All augmentation is best-effort by design: missing manifests, absent
//! entry points, and empty bodies produce empty output, never errors. The
//! worst outcome of any failure is the absence of an optional header or
//! optional markup.
//!
//! ## Feature Flags
//!
//! - `components` - scanner, attribute encoder, switch widget
//! - `http` - minimal request/response substrate and middleware traits
//! - `vite` - manifest resolution and asset markup
//! - `middleware` - the component-preload response middleware
//! - `templates` - Tera helper registration
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ferrolith::prelude::*;
//!
//! let resolver = Arc::new(ViteAssetResolver::new(
//!     ViteConfig::new("public")
//!         .with_build_directory("build")
//!         .with_entry_points(["resources/js/app.js"]),
//! ));
//!
//! let chain = MiddlewareChain::new(app_handler).with_middleware(Arc::new(
//!     ComponentPreloadMiddleware::new(ComponentPreloadConfig::new("ui-"))
//!         .with_resolver(resolver.clone()),
//! ));
//!
//! let mut tera = tera::Tera::default();
//! ferrolith::templates::register(
//!     &mut tera,
//!     TemplateContext::new("ui-").with_resolver(resolver),
//! );
//! ```

#[cfg(feature = "components")]
pub mod components;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "middleware")]
pub mod middleware;
#[cfg(feature = "templates")]
pub mod templates;
#[cfg(feature = "vite")]
pub mod vite;

pub mod prelude;

// Re-export core types
#[cfg(feature = "components")]
pub use ferrolith_components::{AttrValue, Attrs, SwitchField, render_attrs, scan_component_tags};
#[cfg(feature = "http")]
pub use ferrolith_http::{Error, Handler, Middleware, MiddlewareChain, Request, Response, Result};
#[cfg(feature = "middleware")]
pub use ferrolith_middleware::{ComponentPreloadConfig, ComponentPreloadMiddleware};
#[cfg(feature = "vite")]
pub use ferrolith_vite::{ViteAssetResolver, ViteConfig};
