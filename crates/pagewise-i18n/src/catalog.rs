//! Message catalog for storing translations

use crate::Translator;
use pagewise_exception::Result;
use std::borrow::Cow;
use std::collections::HashMap;

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use pagewise_i18n::{MessageCatalog, Translator};
///
/// let mut catalog = MessageCatalog::new("de");
/// catalog.add("Next", "Weiter");
///
/// assert_eq!(catalog.get("Next"), Some(&"Weiter".to_string()));
/// assert_eq!(catalog.gettext("Next"), "Weiter");
/// assert_eq!(catalog.gettext("Last"), "Last");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Create a catalog from a JSON object mapping message ids to translations
	///
	/// # Example
	/// ```
	/// use pagewise_i18n::MessageCatalog;
	///
	/// let catalog = MessageCatalog::from_json("fr", r#"{"First": "Premier"}"#).unwrap();
	/// assert_eq!(catalog.get("First"), Some(&"Premier".to_string()));
	/// ```
	pub fn from_json(locale: &str, json: &str) -> Result<Self> {
		let messages: HashMap<String, String> = serde_json::from_str(json)?;
		Ok(Self {
			locale: locale.to_string(),
			messages,
		})
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a translation
	pub fn add(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}

	/// Number of translated messages
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Whether the catalog holds no translations
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

impl Translator for MessageCatalog {
	fn gettext<'a>(&'a self, message: &'a str) -> Cow<'a, str> {
		match self.messages.get(message) {
			Some(translation) => Cow::Borrowed(translation.as_str()),
			None => Cow::Borrowed(message),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pagewise_exception::Error;
	use rstest::rstest;

	#[rstest]
	fn test_new_catalog_is_empty() {
		let catalog = MessageCatalog::new("ja");
		assert_eq!(catalog.locale(), "ja");
		assert!(catalog.is_empty());
	}

	#[rstest]
	fn test_add_and_get() {
		let mut catalog = MessageCatalog::new("fr");
		catalog.add("Previous", "Précédent");
		catalog.add("Previous", "Préc.");
		assert_eq!(catalog.len(), 1);
		assert_eq!(catalog.get("Previous"), Some(&"Préc.".to_string()));
	}

	#[rstest]
	fn test_gettext_falls_back_to_message_id() {
		let catalog = MessageCatalog::new("fr");
		assert_eq!(catalog.gettext("Last"), "Last");
	}

	#[rstest]
	fn test_from_json() {
		let catalog =
			MessageCatalog::from_json("es", r#"{"First": "Primero", "Last": "Último"}"#).unwrap();
		assert_eq!(catalog.locale(), "es");
		assert_eq!(catalog.len(), 2);
		assert_eq!(catalog.gettext("Last"), "Último");
	}

	#[rstest]
	fn test_from_json_invalid() {
		let result = MessageCatalog::from_json("es", "[1, 2]");
		assert!(matches!(result, Err(Error::Json(_))));
	}
}
