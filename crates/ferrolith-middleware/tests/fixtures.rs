//! Shared test fixtures for ferrolith-middleware tests
//!
//! Provides handlers with configurable bodies/content types, request
//! constructors, resolver fixtures backed by a temporary build directory,
//! and header assertion helpers.

// Allow dead code in test fixtures: the utilities are shared across test
// files and not every file uses all of them.
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use ferrolith_http::{Handler, Request, Response, Result};
use ferrolith_vite::{ViteAssetResolver, ViteConfig};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// A handler that returns a fixed body with an optional content type
pub struct FixedResponseHandler {
	pub body: Bytes,
	pub content_type: Option<&'static str>,
	pub extra_headers: Vec<(&'static str, &'static str)>,
}

impl FixedResponseHandler {
	pub fn html(body: &str) -> Self {
		Self {
			body: Bytes::from(body.to_string()),
			content_type: Some("text/html; charset=utf-8"),
			extra_headers: Vec::new(),
		}
	}

	pub fn untyped(body: &str) -> Self {
		Self {
			body: Bytes::from(body.to_string()),
			content_type: None,
			extra_headers: Vec::new(),
		}
	}

	pub fn json(body: &str) -> Self {
		Self {
			body: Bytes::from(body.to_string()),
			content_type: Some("application/json"),
			extra_headers: Vec::new(),
		}
	}

	pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
		self.extra_headers.push((name, value));
		self
	}
}

#[async_trait]
impl Handler for FixedResponseHandler {
	async fn handle(&self, _request: Request) -> Result<Response> {
		let mut response = Response::ok().with_body(self.body.clone());
		if let Some(content_type) = self.content_type {
			response = response.with_header("content-type", content_type);
		}
		for (name, value) in &self.extra_headers {
			response = response.with_header(name, value);
		}
		Ok(response)
	}
}

pub fn html_handler(body: &str) -> Arc<FixedResponseHandler> {
	Arc::new(FixedResponseHandler::html(body))
}

pub fn primary_request() -> Request {
	Request::builder().uri("/page").build().unwrap()
}

pub fn nested_request() -> Request {
	Request::builder().uri("/_fragment").nested().build().unwrap()
}

/// A production resolver over a freshly written manifest
///
/// Returns the TempDir alongside the resolver; dropping it removes the
/// manifest, so tests keep it bound for their whole body.
pub fn production_resolver(entry_points: &[&str], manifest_json: &str) -> (TempDir, Arc<ViteAssetResolver>) {
	let public_dir = tempfile::tempdir().unwrap();
	let manifest_dir = public_dir.path().join("build").join(".vite");
	fs::create_dir_all(&manifest_dir).unwrap();
	fs::write(manifest_dir.join("manifest.json"), manifest_json).unwrap();

	let resolver = Arc::new(ViteAssetResolver::new(
		ViteConfig::new(public_dir.path())
			.with_build_directory("build")
			.with_entry_points(entry_points.iter().copied()),
	));

	(public_dir, resolver)
}

pub fn dev_resolver(entry_points: &[&str]) -> Arc<ViteAssetResolver> {
	Arc::new(ViteAssetResolver::new(
		ViteConfig::new("public")
			.with_entry_points(entry_points.iter().copied())
			.with_dev_server_url("http://localhost:5173"),
	))
}

pub fn assert_header(response: &Response, name: &str, expected: &str) {
	let value = response
		.headers
		.get(name)
		.unwrap_or_else(|| panic!("missing header {name}"))
		.to_str()
		.unwrap();
	assert_eq!(value, expected, "header {name}");
}

pub fn assert_no_header(response: &Response, name: &str) {
	assert!(
		response.headers.get(name).is_none(),
		"header {name} should not be set"
	);
}

pub fn header_values<'a>(response: &'a Response, name: &str) -> Vec<&'a str> {
	response
		.headers
		.get_all(name)
		.iter()
		.map(|value| value.to_str().unwrap())
		.collect()
}
