//! Handler and middleware traits plus the composition chain
//!
//! Middleware composes around a terminal [`Handler`]; each middleware decides
//! whether to run via [`Middleware::should_continue`] and may inspect or
//! rewrite the response produced by the rest of the chain.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;

/// Handler trait for producing a response from a request
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation for `Arc<T>` where T: Handler
///
/// Allows `Arc<dyn Handler>` to be used wherever a Handler is expected.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Middleware trait for request/response processing
#[async_trait]
pub trait Middleware: Send + Sync {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;

	/// Whether this middleware should run for the given request.
	///
	/// Returning `false` passes the request straight to the rest of the
	/// chain. Defaults to `true`.
	fn should_continue(&self, _request: &Request) -> bool {
		true
	}
}

/// Middleware chain - composes multiple middleware around a handler
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use ferrolith_http::{Handler, MiddlewareChain, Request, Response};
///
/// struct Hello;
///
/// #[async_trait]
/// impl Handler for Hello {
///     async fn handle(&self, _request: Request) -> ferrolith_http::Result<Response> {
///         Ok(Response::html("<h1>hello</h1>"))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let chain = MiddlewareChain::new(Arc::new(Hello));
/// let request = Request::builder().uri("/").build().unwrap();
/// let response = chain.execute(request).await.unwrap();
/// assert_eq!(&response.body[..], b"<h1>hello</h1>");
/// # });
/// ```
pub struct MiddlewareChain {
	middlewares: Vec<Arc<dyn Middleware>>,
	handler: Arc<dyn Handler>,
}

impl MiddlewareChain {
	/// Create a chain terminating in the given handler
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			middlewares: Vec::new(),
			handler,
		}
	}
	/// Add a middleware; middleware run in registration order
	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}
	/// Execute the chain for a request
	pub async fn execute(&self, request: Request) -> Result<Response> {
		let handler = self.build_handler();
		handler.handle(request).await
	}

	fn build_handler(&self) -> Arc<dyn Handler> {
		let mut next = self.handler.clone();
		for middleware in self.middlewares.iter().rev() {
			next = Arc::new(MiddlewareHandler {
				middleware: middleware.clone(),
				next,
			});
		}
		next
	}
}

struct MiddlewareHandler {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for MiddlewareHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		if !self.middleware.should_continue(&request) {
			return self.next.handle(request).await;
		}
		self.middleware.process(request, self.next.clone()).await
	}
}
