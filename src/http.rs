//! HTTP substrate module
//!
//! Re-exports [`ferrolith_http`]: request/response types, middleware traits,
//! and the composition chain the preload middleware plugs into.

pub use ferrolith_http::*;
