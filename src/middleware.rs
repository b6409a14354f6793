//! Response middleware module
//!
//! Re-exports [`ferrolith_middleware`]: the component-preload middleware and
//! its configuration.

pub use ferrolith_middleware::*;
