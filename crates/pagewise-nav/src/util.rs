//! Escaping and link helpers shared by the renderers.

use pagewise_exception::{Error, Result};
use std::borrow::Cow;
use url::{Url, form_urlencoded};

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Builds the link to `page` by setting `page_key` in `base_url`'s query.
///
/// Other query parameters are kept in order; an existing `page_key`
/// parameter is replaced. Relative base URLs produce relative links, and an
/// empty base URL produces a bare query string.
///
/// # Examples
///
/// ```
/// use pagewise_nav::page_url;
///
/// assert_eq!(page_url("/news?sort=date", "page", 3).unwrap(), "/news?sort=date&page=3");
/// assert_eq!(page_url("/news?page=9", "page", 2).unwrap(), "/news?page=2");
/// assert_eq!(page_url("", "start", 4).unwrap(), "?start=4");
/// assert_eq!(
///     page_url("https://example.com/blog", "page", 2).unwrap(),
///     "https://example.com/blog?page=2"
/// );
/// ```
pub fn page_url(base_url: &str, page_key: &str, page: usize) -> Result<String> {
	let page_value = page.to_string();

	if base_url.is_empty() {
		let query = form_urlencoded::Serializer::new(String::new())
			.append_pair(page_key, &page_value)
			.finish();
		return Ok(format!("?{}", query));
	}

	let mut url = match Url::parse(base_url) {
		Ok(url) => url,
		Err(url::ParseError::RelativeUrlWithoutBase) => {
			return Ok(relative_page_url(base_url, page_key, &page_value));
		}
		Err(e) => return Err(invalid_url(e)),
	};

	let kept: Vec<(String, String)> = url
		.query_pairs()
		.filter(|(key, _)| key != page_key)
		.map(|(key, value)| (key.into_owned(), value.into_owned()))
		.collect();

	url.query_pairs_mut()
		.clear()
		.extend_pairs(kept)
		.append_pair(page_key, &page_value);

	Ok(url.to_string())
}

/// Sets the page parameter in a relative reference; path and fragment are
/// kept verbatim.
fn relative_page_url(base_url: &str, page_key: &str, page_value: &str) -> String {
	let (rest, fragment) = match base_url.split_once('#') {
		Some((rest, fragment)) => (rest, Some(fragment)),
		None => (base_url, None),
	};
	let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

	let mut serializer = form_urlencoded::Serializer::new(String::new());
	for (key, value) in form_urlencoded::parse(query.as_bytes()) {
		if key != page_key {
			serializer.append_pair(&key, &value);
		}
	}
	serializer.append_pair(page_key, page_value);

	let mut link = format!("{}?{}", path, serializer.finish());
	if let Some(fragment) = fragment {
		link.push('#');
		link.push_str(fragment);
	}
	link
}

fn invalid_url(error: url::ParseError) -> Error {
	Error::InvalidArgument(format!("Invalid base URL: {}", error))
}
