//! Template helper module
//!
//! Re-exports [`ferrolith_templates`]: Tera filter/function registration for
//! component attributes and Vite asset markup.

pub use ferrolith_templates::*;
