//! Sources of the requested page number.
//!
//! The host application hands the calculator whatever holds its request
//! parameters. Values are looked up by key and coerced leniently: a page
//! request can never make pagination fail.

use crate::{Error, Result};
use std::collections::{BTreeMap, HashMap};

/// Key-value lookup the requested page number is read from.
///
/// # Examples
///
/// ```
/// use pagewise_pagination::PageSource;
/// use std::collections::HashMap;
///
/// let mut params = HashMap::new();
/// params.insert("page".to_string(), "2".to_string());
/// assert_eq!(params.get_param("page"), Some("2"));
/// assert_eq!(params.get_param("missing"), None);
/// ```
pub trait PageSource {
	/// Returns the raw value stored under `key`, if any.
	fn get_param(&self, key: &str) -> Option<&str>;
}

impl PageSource for HashMap<String, String> {
	fn get_param(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl PageSource for BTreeMap<String, String> {
	fn get_param(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl<S: PageSource + ?Sized> PageSource for &S {
	fn get_param(&self, key: &str) -> Option<&str> {
		(**self).get_param(key)
	}
}

/// A source with no parameters at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParams;

impl PageSource for NoParams {
	fn get_param(&self, _key: &str) -> Option<&str> {
		None
	}
}

/// Parameters decoded from a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	params: HashMap<String, String>,
}

impl QueryParams {
	/// Decodes an `application/x-www-form-urlencoded` query string.
	///
	/// A leading `?` is ignored. When a key repeats, the last value wins.
	///
	/// # Examples
	///
	/// ```
	/// use pagewise_pagination::{PageSource, QueryParams};
	///
	/// let params = QueryParams::parse("?page=2&page=5&q=rust+books").unwrap();
	/// assert_eq!(params.get_param("page"), Some("5"));
	/// assert_eq!(params.get_param("q"), Some("rust books"));
	/// ```
	pub fn parse(query: &str) -> Result<Self> {
		let query = query.strip_prefix('?').unwrap_or(query);
		let pairs: Vec<(String, String)> =
			serde_urlencoded::from_str(query).map_err(|e| Error::InvalidQuery(e.to_string()))?;

		Ok(Self {
			params: pairs.into_iter().collect(),
		})
	}

	/// Adds or replaces a parameter.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.params.insert(key.into(), value.into());
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Whether no parameters are present.
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}
}

impl PageSource for QueryParams {
	fn get_param(&self, key: &str) -> Option<&str> {
		self.params.get(key).map(String::as_str)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			params: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

/// The page a request asked for, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestedPage {
	/// No page parameter was supplied.
	#[default]
	Absent,
	/// A page number, possibly zero, negative or past the end.
	Number(i64),
	/// One of the configured "last page" keywords.
	Last,
}

impl From<Option<i64>> for RequestedPage {
	fn from(value: Option<i64>) -> Self {
		value.map_or(Self::Absent, Self::Number)
	}
}

impl From<i64> for RequestedPage {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

/// Coerces a loosely typed page parameter into an integer.
///
/// Surrounding whitespace is ignored, an optional sign is honoured and the
/// leading run of ASCII digits is taken. Input without leading digits yields
/// 0. Values that do not fit saturate.
///
/// # Examples
///
/// ```
/// use pagewise_pagination::coerce_page_number;
///
/// assert_eq!(coerce_page_number("3"), 3);
/// assert_eq!(coerce_page_number(" 3abc "), 3);
/// assert_eq!(coerce_page_number("2.9"), 2);
/// assert_eq!(coerce_page_number("-5"), -5);
/// assert_eq!(coerce_page_number("abc"), 0);
/// ```
pub fn coerce_page_number(raw: &str) -> i64 {
	let trimmed = raw.trim();
	let (negative, digits) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};

	let mut value: i64 = 0;
	for byte in digits.bytes().take_while(u8::is_ascii_digit) {
		let digit = i64::from(byte - b'0');
		value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
			Some(v) => v,
			None => return if negative { i64::MIN } else { i64::MAX },
		};
	}

	if negative { -value } else { value }
}

/// Reads the requested page stored under `key`.
///
/// Values equal to one of `last_page_strings` select the final page; any
/// other value goes through [`coerce_page_number`].
pub fn resolve_requested_page<S>(
	source: &S,
	key: &str,
	last_page_strings: &[String],
) -> RequestedPage
where
	S: PageSource + ?Sized,
{
	match source.get_param(key) {
		None => RequestedPage::Absent,
		Some(raw) if last_page_strings.iter().any(|s| s == raw.trim()) => RequestedPage::Last,
		Some(raw) => RequestedPage::Number(coerce_page_number(raw)),
	}
}
