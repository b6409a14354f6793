//! Custom-element detection and HTML attribute serialization
//!
//! Server-rendered pages reference client-side components as prefixed custom
//! elements (`<ui-button>`, `<ui-input>`, ...). This crate provides the pure
//! building blocks around that convention:
//!
//! - [`scanner`] - find which components a rendered document actually uses
//! - [`attrs`] - serialize attribute maps into HTML attribute syntax with a
//!   deterministic convention for booleans and structured values
//! - [`escape`] - the shared HTML/attribute escaping routine
//! - [`switch`] - a form switch widget rendered as a custom element
//!
//! Everything here is a pure function over its inputs; nothing touches the
//! filesystem or global state.

pub mod attrs;
pub mod escape;
pub mod scanner;
pub mod switch;

pub use attrs::{AttrValue, Attrs, render_attrs};
pub use escape::escape_html;
pub use scanner::{full_tag_names, scan_component_tags};
pub use switch::SwitchField;
