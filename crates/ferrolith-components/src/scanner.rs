//! Custom-element tag scanner
//!
//! Finds which prefixed custom elements a rendered HTML document actually
//! uses, so the response pipeline can advertise them to the client runtime.

use regex::Regex;
use std::collections::BTreeSet;

/// Scan a document for custom-element tags with the given prefix
///
/// Returns the deduplicated tag suffixes (the part after the prefix) in
/// ascending lexicographic order. The prefix is operator-configured text,
/// not a pattern; it is always matched literally.
///
/// # Examples
///
/// ```
/// use ferrolith_components::scan_component_tags;
///
/// let html = "<ui-button>x</ui-button><ui-input/><ui-button>y</ui-button>";
/// assert_eq!(scan_component_tags(html, "ui-"), vec!["button", "input"]);
/// assert!(scan_component_tags("<div>no components</div>", "ui-").is_empty());
/// ```
pub fn scan_component_tags(html: &str, prefix: &str) -> Vec<String> {
	let pattern = format!(r"<{}([\w-]+)", regex::escape(prefix));
	let regex = match Regex::new(&pattern) {
		Ok(regex) => regex,
		Err(_) => return Vec::new(),
	};

	let mut suffixes = BTreeSet::new();
	for captures in regex.captures_iter(html) {
		if let Some(suffix) = captures.get(1) {
			suffixes.insert(suffix.as_str().to_string());
		}
	}

	suffixes.into_iter().collect()
}

/// Scan a document and return full tag names (prefix included)
///
/// Same order and deduplication as [`scan_component_tags`].
///
/// # Examples
///
/// ```
/// use ferrolith_components::full_tag_names;
///
/// let html = "<ui-input></ui-input><ui-button></ui-button>";
/// assert_eq!(full_tag_names(html, "ui-"), vec!["ui-button", "ui-input"]);
/// ```
pub fn full_tag_names(html: &str, prefix: &str) -> Vec<String> {
	scan_component_tags(html, prefix)
		.into_iter()
		.map(|suffix| format!("{prefix}{suffix}"))
		.collect()
}
