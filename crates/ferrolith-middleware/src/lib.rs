//! Response middleware for Ferrolith
//!
//! [`ComponentPreloadMiddleware`] inspects primary HTML responses, records
//! which custom-element components the rendered page uses in a response
//! header, and emits `Link` preload headers for the configured Vite entry
//! points. Augmentation is best-effort: nothing in this crate can fail the
//! response it decorates.

pub mod preload;

pub use preload::{
	COMPONENTS_HEADER, ComponentPreloadConfig, ComponentPreloadMiddleware, LINK_HEADER,
};
