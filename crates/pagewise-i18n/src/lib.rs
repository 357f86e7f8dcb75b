//! # Pagewise i18n
//!
//! Translation of the labels shown by page navigation.
//!
//! Labels are looked up by their English message id through a [`Translator`].
//! Hosts plug in their own localization function, or use a [`MessageCatalog`]
//! filled from code or JSON.
//!
//! ## Example
//!
//! ```
//! use pagewise_i18n::{MessageCatalog, Translator, interpolate};
//!
//! let mut catalog = MessageCatalog::new("fr");
//! catalog.add("Page %(current)s of %(total)s", "Page %(current)s sur %(total)s");
//!
//! let label = interpolate(
//!     &catalog.gettext("Page %(current)s of %(total)s"),
//!     &[("current", "2"), ("total", "4")],
//! );
//! assert_eq!(label, "Page 2 sur 4");
//! ```

mod catalog;

pub use catalog::MessageCatalog;

use std::borrow::Cow;

/// Looks up the translation of a message id.
///
/// Implementations return the message itself when they have no translation.
pub trait Translator: Send + Sync {
	/// Translates `message`.
	fn gettext<'a>(&'a self, message: &'a str) -> Cow<'a, str>;
}

/// Translator that leaves every message untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
	fn gettext<'a>(&'a self, message: &'a str) -> Cow<'a, str> {
		Cow::Borrowed(message)
	}
}

impl<F> Translator for F
where
	F: Fn(&str) -> String + Send + Sync,
{
	fn gettext<'a>(&'a self, message: &'a str) -> Cow<'a, str> {
		Cow::Owned(self(message))
	}
}

/// Substitutes `%(name)s` placeholders in `template`.
///
/// Placeholders without a matching argument are left in place.
///
/// # Examples
///
/// ```
/// use pagewise_i18n::interpolate;
///
/// assert_eq!(
///     interpolate("Showing %(start)s to %(end)s", &[("start", "1"), ("end", "15")]),
///     "Showing 1 to 15"
/// );
/// assert_eq!(interpolate("%(missing)s", &[]), "%(missing)s");
/// ```
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
	let mut result = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(open) = rest.find("%(") {
		result.push_str(&rest[..open]);
		let after_open = &rest[open + 2..];

		let Some(close) = after_open.find(")s") else {
			result.push_str(&rest[open..]);
			return result;
		};

		let name = &after_open[..close];
		match args.iter().find(|(key, _)| *key == name) {
			Some((_, value)) => result.push_str(value),
			None => result.push_str(&rest[open..open + 2 + close + 2]),
		}
		rest = &after_open[close + 2..];
	}

	result.push_str(rest);
	result
}
