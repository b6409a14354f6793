use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};

use crate::error::{Error, Result};
use crate::extensions::Extensions;

/// Position of a request within the processing cycle.
///
/// Hosts that render fragments through internal sub-requests mark those as
/// [`RequestKind::Nested`]; response augmentation only applies to the primary
/// request of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestKind {
	/// The top-level request whose response is sent to the client
	#[default]
	Primary,
	/// An internal sub-request (fragment render, ESI include, ...)
	Nested,
}

/// HTTP request representation
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub kind: RequestKind,
	pub extensions: Extensions,
}

impl Request {
	/// Create a new primary request
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::{Request, RequestKind};
	/// use hyper::{HeaderMap, Method, Uri, Version};
	/// use bytes::Bytes;
	///
	/// let request = Request::new(
	///     Method::GET,
	///     Uri::from_static("/dashboard"),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// assert_eq!(request.kind(), RequestKind::Primary);
	/// assert_eq!(request.path(), "/dashboard");
	/// ```
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		Self {
			method,
			uri,
			version,
			headers,
			body,
			kind: RequestKind::Primary,
			extensions: Extensions::new(),
		}
	}
	/// Start building a request
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/articles")
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.path(), "/articles");
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}
	/// The request path component
	pub fn path(&self) -> &str {
		self.uri.path()
	}
	/// The request's position in the processing cycle
	pub fn kind(&self) -> RequestKind {
		self.kind
	}
	/// Whether this is the top-level request of the cycle
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Request;
	///
	/// let primary = Request::builder().uri("/").build().unwrap();
	/// assert!(primary.is_primary());
	///
	/// let nested = Request::builder().uri("/_fragment").nested().build().unwrap();
	/// assert!(!nested.is_primary());
	/// ```
	pub fn is_primary(&self) -> bool {
		self.kind == RequestKind::Primary
	}
}

/// Builder for [`Request`]
#[derive(Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	version: Option<Version>,
	headers: HeaderMap,
	body: Bytes,
	kind: RequestKind,
}

impl RequestBuilder {
	/// Set the request method (defaults to GET)
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}
	/// Set the request URI
	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}
	/// Set the HTTP version (defaults to HTTP/1.1)
	pub fn version(mut self, version: Version) -> Self {
		self.version = Some(version);
		self
	}
	/// Replace the header map wholesale
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}
	/// Add a single header; silently skipped if the name or value is invalid
	pub fn header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = hyper::header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}
	/// Set the request body
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}
	/// Mark the request as an internal sub-request
	pub fn nested(mut self) -> Self {
		self.kind = RequestKind::Nested;
		self
	}
	/// Set the request kind explicitly
	pub fn kind(mut self, kind: RequestKind) -> Self {
		self.kind = kind;
		self
	}
	/// Build the request, parsing the URI
	///
	/// # Errors
	///
	/// Returns [`Error::Http`] when the URI does not parse.
	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.uri
			.unwrap_or_else(|| "/".to_string())
			.parse()
			.map_err(|e| Error::Http(format!("invalid uri: {e}")))?;

		Ok(Request {
			method: self.method.unwrap_or(Method::GET),
			uri,
			version: self.version.unwrap_or(Version::HTTP_11),
			headers: self.headers,
			body: self.body,
			kind: self.kind,
			extensions: Extensions::new(),
		})
	}
}
