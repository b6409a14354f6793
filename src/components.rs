//! Component detection and attribute serialization
//!
//! Re-exports [`ferrolith_components`]: the tag scanner, the attribute
//! encoder, HTML escaping, and the switch form widget.

pub use ferrolith_components::*;
