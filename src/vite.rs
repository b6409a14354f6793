//! Vite asset resolution module
//!
//! Re-exports [`ferrolith_vite`]: configuration, manifest model, and the
//! asset resolver.

pub use ferrolith_vite::*;
