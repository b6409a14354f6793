use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for Vite asset resolution
///
/// Immutable for the lifetime of one resolver instance. An external
/// configuration layer is expected to hand over already-validated values;
/// the builder exists for hosts that wire things up in code.
///
/// # Examples
///
/// ```
/// use ferrolith_vite::ViteConfig;
///
/// let config = ViteConfig::new("/var/www/public")
///     .with_build_directory("build")
///     .with_entry_points(["resources/js/app.js"]);
/// assert_eq!(config.base_path(), "/build/");
/// assert!(config.dev_server_url.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViteConfig {
	/// Document root under which the build directory lives
	pub public_dir: PathBuf,
	/// Build output directory, relative to `public_dir`
	#[serde(default = "default_build_directory")]
	pub build_directory: String,
	/// Entry-point source paths, order-significant
	#[serde(default)]
	pub entry_points: Vec<String>,
	/// Dev server origin; presence selects dev mode
	#[serde(default)]
	pub dev_server_url: Option<String>,
}

fn default_build_directory() -> String {
	"build".to_string()
}

impl ViteConfig {
	/// Create a config rooted at the given public directory
	pub fn new(public_dir: impl Into<PathBuf>) -> Self {
		Self {
			public_dir: public_dir.into(),
			build_directory: default_build_directory(),
			entry_points: Vec::new(),
			dev_server_url: None,
		}
	}
	/// Set the build output directory
	pub fn with_build_directory(mut self, build_directory: impl Into<String>) -> Self {
		self.build_directory = build_directory.into();
		self
	}
	/// Replace the entry-point list
	pub fn with_entry_points<I, S>(mut self, entry_points: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.entry_points = entry_points.into_iter().map(Into::into).collect();
		self
	}
	/// Append one entry point
	pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
		self.entry_points.push(entry_point.into());
		self
	}
	/// Point resolution at a live dev server
	pub fn with_dev_server_url(mut self, url: impl Into<String>) -> Self {
		self.dev_server_url = Some(url.into());
		self
	}
	/// URL base under which built assets are served
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_vite::ViteConfig;
	///
	/// assert_eq!(ViteConfig::new(".").with_build_directory("/dist/").base_path(), "/dist/");
	/// assert_eq!(ViteConfig::new(".").with_build_directory("assets/v2").base_path(), "/assets/v2/");
	/// ```
	pub fn base_path(&self) -> String {
		format!("/{}/", self.trimmed_build_directory())
	}
	/// Filesystem path of the build directory
	pub fn build_dir(&self) -> PathBuf {
		self.public_dir.join(self.trimmed_build_directory())
	}

	fn trimmed_build_directory(&self) -> &str {
		self.build_directory.trim_matches('/')
	}
}
