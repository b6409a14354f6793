//! Property Tests
//!
//! Uses proptest to exercise the scanner and the attribute encoder with
//! random inputs. The scanner must stay total for arbitrary documents and
//! operator-configured prefixes; the encoder must stay deterministic,
//! order-preserving, and compositional.

use ferrolith_components::attrs::{AttrValue, render_attrs};
use ferrolith_components::scan_component_tags;
use proptest::prelude::*;

proptest! {
	#![proptest_config(ProptestConfig::with_cases(256))]

	/// The scanner never panics, never returns duplicates, and always
	/// returns ascending output - for any document and any prefix,
	/// metacharacters included.
	#[test]
	fn scanner_output_sorted_and_deduplicated(
		html in ".{0,400}",
		prefix in ".{0,12}",
	) {
		let tags = scan_component_tags(&html, &prefix);
		for pair in tags.windows(2) {
			prop_assert!(pair[0] < pair[1]);
		}
	}

	/// Every reported suffix is literally present in the document right
	/// after `<` + prefix.
	#[test]
	fn scanner_matches_are_literal(html in "[a-z<>/ -]{0,300}") {
		for suffix in scan_component_tags(&html, "ui-") {
			let needle = format!("<ui-{}", suffix);
			prop_assert!(html.contains(&needle));
		}
	}

	/// Repetition in the source document does not change the result.
	#[test]
	fn scanner_is_insensitive_to_repetition(name in "[a-z]{1,8}") {
		let once = format!("<ui-{name}/>");
		let thrice = once.repeat(3);
		prop_assert_eq!(
			scan_component_tags(&once, "ui-"),
			scan_component_tags(&thrice, "ui-")
		);
	}

	/// Encoding the same entries twice yields identical bytes.
	#[test]
	fn encoder_is_deterministic(entries in attr_entries()) {
		let first = render_attrs(entries.iter().map(|(k, v)| (k, v)));
		let second = render_attrs(entries.iter().map(|(k, v)| (k, v)));
		prop_assert_eq!(first, second);
	}

	/// A sequence encodes as its entries encoded one at a time, joined by
	/// single spaces; reordering input therefore reorders fragments.
	#[test]
	fn encoder_is_compositional(entries in attr_entries()) {
		let whole = render_attrs(entries.iter().map(|(k, v)| (k, v)));
		let pieces: Vec<String> = entries
			.iter()
			.map(|(k, v)| render_attrs([(k, v)]))
			.filter(|fragment| !fragment.is_empty())
			.collect();
		prop_assert_eq!(whole, pieces.join(" "));
	}

	/// The rendered output never contains a raw double quote outside the
	/// delimiters the encoder itself emits, so fragments cannot escape
	/// their attribute context.
	#[test]
	fn encoder_output_is_quote_safe(value in ".{0,60}") {
		let rendered = render_attrs([("v", AttrValue::String(value))]);
		let inner = rendered
			.strip_prefix("v=\"")
			.and_then(|rest| rest.strip_suffix('"'))
			.unwrap();
		prop_assert!(!inner.contains('"'));
		prop_assert!(!inner.contains('<'));
	}
}

fn attr_entries() -> impl Strategy<Value = Vec<(String, AttrValue)>> {
	let value = prop_oneof![
		Just(AttrValue::Null),
		any::<bool>().prop_map(AttrValue::Bool),
		any::<i64>().prop_map(|n| AttrValue::Number(n.into())),
		".{0,30}".prop_map(AttrValue::String),
		"[a-z']{0,20}".prop_map(|s| AttrValue::Structured(serde_json::json!({ "v": s }))),
	];
	proptest::collection::vec(("[a-zA-Z][a-zA-Z0-9_-]{0,10}", value), 0..8)
}
