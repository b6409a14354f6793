//! Vite manifest model and fail-soft loading

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One entry of a Vite build manifest
///
/// Unknown fields (`imports`, `dynamicImports`, `assets`, ...) are ignored;
/// `src` and `isEntry` are parsed but play no role in resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
	/// Built output file, relative to the build directory
	pub file: String,
	/// Stylesheets extracted for this entry, in emission order
	#[serde(default)]
	pub css: Vec<String>,
	/// Source path this entry was built from
	#[serde(default)]
	pub src: Option<String>,
	#[serde(default, rename = "isEntry")]
	pub is_entry: bool,
}

/// Mapping from entry-point source path to its build output
pub type ViteManifest = HashMap<String, ManifestEntry>;

/// Load the manifest from a build directory
///
/// Checks the Vite 5+ location (`.vite/manifest.json`) before the legacy
/// flat location (`manifest.json`). A missing file or a document that does
/// not parse as a manifest mapping resolves to an empty map; asset
/// resolution is a best-effort enhancement and must never fail the
/// surrounding response.
pub fn load_manifest(build_dir: &Path) -> ViteManifest {
	let nested = build_dir.join(".vite").join("manifest.json");
	let path = if nested.exists() {
		nested
	} else {
		build_dir.join("manifest.json")
	};

	let content = match std::fs::read_to_string(&path) {
		Ok(content) => content,
		Err(_) => {
			tracing::debug!(path = %path.display(), "vite manifest not found");
			return ViteManifest::new();
		}
	};

	match serde_json::from_str(&content) {
		Ok(manifest) => manifest,
		Err(err) => {
			tracing::warn!(
				path = %path.display(),
				error = %err,
				"vite manifest is not valid JSON, treating as empty"
			);
			ViteManifest::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn entry_parses_with_optional_fields_missing() {
		let entry: ManifestEntry =
			serde_json::from_str(r#"{"file": "assets/app-abc.js"}"#).unwrap();
		assert_eq!(entry.file, "assets/app-abc.js");
		assert!(entry.css.is_empty());
		assert!(entry.src.is_none());
		assert!(!entry.is_entry);
	}

	#[test]
	fn entry_parses_full_shape_and_ignores_unknown_fields() {
		let entry: ManifestEntry = serde_json::from_str(
			r#"{
				"file": "assets/app-abc.js",
				"src": "resources/js/app.js",
				"isEntry": true,
				"css": ["assets/app-def.css"],
				"imports": ["_shared-xyz.js"]
			}"#,
		)
		.unwrap();
		assert_eq!(entry.css, vec!["assets/app-def.css"]);
		assert_eq!(entry.src.as_deref(), Some("resources/js/app.js"));
		assert!(entry.is_entry);
	}

	#[test]
	fn missing_directory_yields_empty_manifest() {
		let manifest = load_manifest(Path::new("/nonexistent/build"));
		assert!(manifest.is_empty());
	}
}
