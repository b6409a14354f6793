//! Manifest-backed asset resolution

use once_cell::sync::OnceCell;
use std::fmt;

use ferrolith_components::escape_html;

use crate::config::ViteConfig;
use crate::manifest::{ViteManifest, load_manifest};

/// Resource kind of a preload descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
	Script,
	Style,
}

impl AssetKind {
	/// The `as` token used in preload-link header grammar
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Script => "script",
			Self::Style => "style",
		}
	}
}

impl fmt::Display for AssetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A (URL, resource kind) pair instructing the client to fetch early
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadLink {
	pub url: String,
	pub kind: AssetKind,
}

/// Resolves entry points to asset markup and preload descriptors
///
/// Dev mode and production mode are mutually exclusive, selected solely by
/// the presence of a non-empty `dev_server_url`. Every method is total:
/// missing manifests, malformed JSON, and absent entry points all produce
/// empty output.
///
/// The manifest is read at most once per instance; a resolver shared across
/// concurrent requests is safe, because the first load goes through a
/// single-assignment cell and the loaded value is immutable.
///
/// # Examples
///
/// ```
/// use ferrolith_vite::{ViteAssetResolver, ViteConfig};
///
/// let resolver = ViteAssetResolver::new(
///     ViteConfig::new("public")
///         .with_entry_points(["resources/js/app.js"])
///         .with_dev_server_url("http://localhost:5173"),
/// );
///
/// assert!(resolver.is_dev_mode());
/// let scripts = resolver.script_tags();
/// assert!(scripts.contains(r#"src="http://localhost:5173/@vite/client""#));
/// assert!(scripts.contains(r#"src="http://localhost:5173/resources/js/app.js""#));
/// assert_eq!(resolver.style_tags(), "");
/// assert!(resolver.preload_links().is_empty());
/// ```
pub struct ViteAssetResolver {
	config: ViteConfig,
	manifest: OnceCell<ViteManifest>,
}

impl ViteAssetResolver {
	/// Create a resolver over the given configuration
	pub fn new(config: ViteConfig) -> Self {
		Self {
			config,
			manifest: OnceCell::new(),
		}
	}
	/// The configuration this resolver operates on
	pub fn config(&self) -> &ViteConfig {
		&self.config
	}
	/// Whether a live dev server serves the assets
	pub fn is_dev_mode(&self) -> bool {
		self.dev_server_url().is_some()
	}
	/// Script markup for all configured entry points
	///
	/// Dev mode: the Vite client bootstrap followed by one module script per
	/// entry point, all pointing at the dev server. Production mode: one
	/// module script per entry point present in the manifest; absent entries
	/// are skipped.
	pub fn script_tags(&self) -> String {
		match self.dev_server_url() {
			Some(dev_url) => self.dev_script_tags(dev_url),
			None => self.production_script_tags(),
		}
	}
	/// Stylesheet markup for all configured entry points
	///
	/// Always empty in dev mode; the dev client injects CSS through its own
	/// script. Production mode: one link per stylesheet of each entry
	/// present in the manifest, in listed order.
	pub fn style_tags(&self) -> String {
		if self.is_dev_mode() {
			return String::new();
		}
		self.production_style_tags()
	}
	/// Preload descriptors for all configured entry points
	///
	/// Empty in dev mode. Production mode: per present entry, in entry-point
	/// order, the entry's script first, then its stylesheets in listed
	/// order.
	pub fn preload_links(&self) -> Vec<PreloadLink> {
		if self.is_dev_mode() {
			return Vec::new();
		}

		let manifest = self.manifest();
		let base_path = self.config.base_path();
		let mut links = Vec::new();

		for entry_point in &self.config.entry_points {
			let Some(entry) = manifest.get(entry_point) else {
				continue;
			};

			links.push(PreloadLink {
				url: format!("{base_path}{}", entry.file),
				kind: AssetKind::Script,
			});

			for css_file in &entry.css {
				links.push(PreloadLink {
					url: format!("{base_path}{css_file}"),
					kind: AssetKind::Style,
				});
			}
		}

		links
	}

	fn dev_server_url(&self) -> Option<&str> {
		self.config
			.dev_server_url
			.as_deref()
			.filter(|url| !url.is_empty())
	}

	fn manifest(&self) -> &ViteManifest {
		self.manifest
			.get_or_init(|| load_manifest(&self.config.build_dir()))
	}

	fn dev_script_tags(&self, dev_url: &str) -> String {
		let dev_url = dev_url.trim_end_matches('/');
		let mut tags = format!(
			"<script type=\"module\" src=\"{}/@vite/client\"></script>\n",
			escape_html(dev_url)
		);

		for entry_point in &self.config.entry_points {
			tags.push_str(&format!(
				"<script type=\"module\" src=\"{}/{}\"></script>\n",
				escape_html(dev_url),
				escape_html(entry_point)
			));
		}

		tags
	}

	fn production_script_tags(&self) -> String {
		let manifest = self.manifest();
		let base_path = self.config.base_path();
		let mut tags = String::new();

		for entry_point in &self.config.entry_points {
			let Some(entry) = manifest.get(entry_point) else {
				continue;
			};

			tags.push_str(&format!(
				"<script type=\"module\" src=\"{}\"></script>\n",
				escape_html(&format!("{base_path}{}", entry.file))
			));
		}

		tags
	}

	fn production_style_tags(&self) -> String {
		let manifest = self.manifest();
		let base_path = self.config.base_path();
		let mut tags = String::new();

		for entry_point in &self.config.entry_points {
			let Some(entry) = manifest.get(entry_point) else {
				continue;
			};

			for css_file in &entry.css {
				tags.push_str(&format!(
					"<link rel=\"stylesheet\" href=\"{}\">\n",
					escape_html(&format!("{base_path}{css_file}"))
				));
			}
		}

		tags
	}
}
