use thiserror::Error;

/// Errors surfaced by the Ferrolith substrate.
///
/// Missing-resource conditions (absent manifest, absent entry point, empty
/// body) are never errors anywhere in Ferrolith; they degrade to empty
/// output. This type exists for host plumbing and configuration misuse only.
#[derive(Debug, Error)]
pub enum Error {
	/// Malformed request data, e.g. an invalid URI passed to the builder
	#[error("http error: {0}")]
	Http(String),

	/// Configuration rejected by a validation helper
	#[error("configuration error: {0}")]
	Config(String),

	/// Failure inside a host-supplied handler
	#[error("internal error: {0}")]
	Internal(String),
}

impl Error {
	/// Shorthand for a [`Error::Config`] with a formatted message
	pub fn config(msg: impl Into<String>) -> Self {
		Self::Config(msg.into())
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Internal(err.to_string())
	}
}

/// Result alias used across the Ferrolith crates
pub type Result<T> = std::result::Result<T, Error>;
