use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

/// HTTP response representation
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::NO_CONTENT);
	/// assert_eq!(response.status, StatusCode::NO_CONTENT);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}
	/// Create a Response with HTTP 200 OK status
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::ok();
	/// assert_eq!(response.status, StatusCode::OK);
	/// ```
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}
	/// Create an HTML response with the `text/html` content type set
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Response;
	///
	/// let response = Response::html("<p>hi</p>");
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "text/html; charset=utf-8"
	/// );
	/// assert_eq!(&response.body[..], b"<p>hi</p>");
	/// ```
	pub fn html(body: impl Into<Bytes>) -> Self {
		Self::ok()
			.with_header("content-type", "text/html; charset=utf-8")
			.with_body(body)
	}
	/// Create a JSON response from a serializable value
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Response;
	///
	/// let response = Response::json(&serde_json::json!({"ready": true})).unwrap();
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn json<T: Serialize>(data: &T) -> crate::Result<Self> {
		let body = serde_json::to_vec(data)?;
		Ok(Self::ok()
			.with_header("content-type", "application/json")
			.with_body(body))
	}
	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}
	/// Set a header; silently skipped if the name or value is invalid
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Response;
	///
	/// let response = Response::ok().with_header("X-Request-Id", "abc");
	/// assert_eq!(
	///     response.headers.get("x-request-id").unwrap().to_str().unwrap(),
	///     "abc"
	/// );
	/// ```
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = hyper::header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}
	/// The declared content type, if any
	pub fn content_type(&self) -> Option<&str> {
		self.headers
			.get(hyper::header::CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
	}
}
