//! Convenience re-exports for typical hosts
//!
//! ```rust,ignore
//! use ferrolith::prelude::*;
//! ```

#[cfg(feature = "components")]
pub use ferrolith_components::{
	AttrValue, Attrs, SwitchField, full_tag_names, render_attrs, scan_component_tags,
};
#[cfg(feature = "http")]
pub use ferrolith_http::{
	Handler, Middleware, MiddlewareChain, Request, RequestKind, Response,
};
#[cfg(feature = "middleware")]
pub use ferrolith_middleware::{
	COMPONENTS_HEADER, ComponentPreloadConfig, ComponentPreloadMiddleware,
};
#[cfg(feature = "templates")]
pub use ferrolith_templates::TemplateContext;
#[cfg(feature = "vite")]
pub use ferrolith_vite::{AssetKind, PreloadLink, ViteAssetResolver, ViteConfig};
