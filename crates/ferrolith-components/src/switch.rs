//! Switch form widget
//!
//! A checkbox variant rendered as a `<{prefix}switch>` custom element, for
//! hosts that render form fields server-side. Markup generation only; data
//! binding and validation stay with the host's form layer.

use crate::attrs::Attrs;
use crate::escape::escape_html;

/// A switch (toggle) form field
///
/// # Examples
///
/// ```
/// use ferrolith_components::SwitchField;
///
/// let field = SwitchField::new("notifications").checked();
/// assert_eq!(
///     field.render(),
///     r#"<ui-switch name="notifications" id="id_notifications" checked></ui-switch>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SwitchField {
	pub name: String,
	pub label: Option<String>,
	pub checked: bool,
	pub disabled: bool,
	pub class: Option<String>,
	pub tag_prefix: String,
}

impl SwitchField {
	/// Create a switch field with the given name
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			checked: false,
			disabled: false,
			class: None,
			tag_prefix: "ui-".to_string(),
		}
	}
	/// Set the field label
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	/// Mark the switch as on
	pub fn checked(mut self) -> Self {
		self.checked = true;
		self
	}
	/// Disable the switch
	pub fn disabled(mut self) -> Self {
		self.disabled = true;
		self
	}
	/// Set a CSS class
	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}
	/// Use a different component tag prefix (defaults to `ui-`)
	pub fn with_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.tag_prefix = prefix.into();
		self
	}
	/// The HTML id attribute value
	pub fn html_id(&self) -> String {
		format!("id_{}", self.name)
	}
	/// Render the switch element
	///
	/// `checked` and `disabled` follow the bare-boolean attribute
	/// convention; an unset class contributes nothing.
	pub fn render(&self) -> String {
		let tag = format!("{}switch", self.tag_prefix);
		let attrs = Attrs::new()
			.set("name", self.name.clone())
			.set("id", self.html_id())
			.set("checked", self.checked)
			.set("disabled", self.disabled)
			.set("class", self.class.clone())
			.render();
		format!("<{} {}></{}>", escape_html(&tag), attrs, escape_html(&tag))
	}
	/// Render the switch element followed by its `<label>` when one is set
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_components::SwitchField;
	///
	/// let html = SwitchField::new("dark_mode").with_label("Dark mode").render_with_label();
	/// assert!(html.ends_with(r#"<label for="id_dark_mode">Dark mode</label>"#));
	/// ```
	pub fn render_with_label(&self) -> String {
		match &self.label {
			Some(label) => format!(
				r#"{}<label for="{}">{}</label>"#,
				self.render(),
				escape_html(&self.html_id()),
				escape_html(label)
			),
			None => self.render(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_render_has_name_and_id_only() {
		let html = SwitchField::new("emails").render();
		assert_eq!(html, r#"<ui-switch name="emails" id="id_emails"></ui-switch>"#);
	}

	#[test]
	fn checked_and_disabled_render_bare() {
		let html = SwitchField::new("x").checked().disabled().render();
		assert!(html.contains(" checked disabled"));
	}

	#[test]
	fn class_is_rendered_when_set() {
		let html = SwitchField::new("x").with_class("form-switch").render();
		assert!(html.contains(r#"class="form-switch""#));
	}

	#[test]
	fn custom_prefix_changes_the_tag() {
		let html = SwitchField::new("x").with_tag_prefix("app-").render();
		assert!(html.starts_with("<app-switch "));
		assert!(html.ends_with("</app-switch>"));
	}

	#[test]
	fn label_text_is_escaped() {
		let html = SwitchField::new("x").with_label("a & b").render_with_label();
		assert!(html.contains(">a &amp; b</label>"));
	}
}
