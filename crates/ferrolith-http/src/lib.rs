//! Minimal HTTP substrate for Ferrolith
//!
//! Ferrolith augments responses produced by a host application; this crate is
//! the seam between that host and the Ferrolith middleware. It provides:
//!
//! - [`Request`] and [`Response`] over `hyper` header/status types with
//!   `bytes` bodies
//! - [`Handler`] and [`Middleware`] async traits plus a [`MiddlewareChain`]
//! - [`Extensions`] for type-keyed per-request data
//! - [`Error`] and [`Result`] for host-facing plumbing
//!
//! The substrate is intentionally small: it models just enough of a request
//! cycle for response-processing hooks to run. It is not a server.

pub mod error;
pub mod extensions;
pub mod middleware;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use extensions::Extensions;
pub use middleware::{Handler, Middleware, MiddlewareChain};
pub use request::{Request, RequestBuilder, RequestKind};
pub use response::Response;
