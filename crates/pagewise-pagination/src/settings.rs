//! Pagination settings.
//!
//! Settings can be built in code or loaded from TOML:
//!
//! ```toml
//! page_key = "p"
//! per_page = 20
//! page_size_key = "page_size"
//! max_per_page = 100
//! last_page_strings = ["last", "end"]
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of records per page
pub const DEFAULT_PER_PAGE: usize = 15;

/// Default query parameter carrying the page number
pub const DEFAULT_PAGE_KEY: &str = "page";

/// Settings shared by every listing that paginates the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	/// Query parameter name for the page number
	pub page_key: String,
	/// Default page size
	pub per_page: usize,
	/// Query parameter name for a per-request page size (optional)
	pub page_size_key: Option<String>,
	/// Maximum page size a request may ask for
	pub max_per_page: Option<usize>,
	/// Parameter values that select the last page
	pub last_page_strings: Vec<String>,
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			page_key: DEFAULT_PAGE_KEY.to_string(),
			per_page: DEFAULT_PER_PAGE,
			page_size_key: None,
			max_per_page: None,
			last_page_strings: vec!["last".to_string()],
		}
	}
}

impl PaginationSettings {
	/// Creates settings with the defaults.
	///
	/// # Examples
	///
	/// ```
	/// use pagewise_pagination::PaginationSettings;
	///
	/// let settings = PaginationSettings::new();
	/// assert_eq!(settings.page_key, "page");
	/// assert_eq!(settings.per_page, 15);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the query parameter name for the page number
	pub fn with_page_key(mut self, key: impl Into<String>) -> Self {
		self.page_key = key.into();
		self
	}

	/// Sets the default page size
	pub fn with_per_page(mut self, per_page: usize) -> Self {
		self.per_page = per_page;
		self
	}

	/// Sets the query parameter name for a per-request page size
	///
	/// # Examples
	///
	/// ```
	/// use pagewise_pagination::PaginationSettings;
	///
	/// let settings = PaginationSettings::new()
	///     .with_page_size_key("limit")
	///     .with_max_per_page(50);
	/// assert_eq!(settings.page_size_key.as_deref(), Some("limit"));
	/// assert_eq!(settings.max_per_page, Some(50));
	/// ```
	pub fn with_page_size_key(mut self, key: impl Into<String>) -> Self {
		self.page_size_key = Some(key.into());
		self
	}

	/// Sets the maximum page size a request may ask for
	pub fn with_max_per_page(mut self, max: usize) -> Self {
		self.max_per_page = Some(max);
		self
	}

	/// Replaces the values that select the last page
	pub fn with_last_page_strings<I, S>(mut self, strings: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.last_page_strings = strings.into_iter().map(Into::into).collect();
		self
	}

	/// Parses and validates settings from a TOML document.
	///
	/// Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file.
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "Loading pagination settings");
		Self::from_toml_str(&content)
	}

	/// Checks that the settings describe a usable pagination.
	pub fn validate(&self) -> Result<()> {
		let result = self.check();
		if let Err(ref e) = result {
			tracing::warn!(error = %e, "Rejected pagination settings");
		}
		result
	}

	fn check(&self) -> Result<()> {
		if self.per_page == 0 {
			return Err(Error::InvalidArgument(
				"per_page must be greater than 0".to_string(),
			));
		}
		if self.max_per_page == Some(0) {
			return Err(Error::InvalidArgument(
				"max_per_page must be greater than 0".to_string(),
			));
		}
		if let Some(max) = self.max_per_page.filter(|max| self.per_page > *max) {
			return Err(Error::ImproperlyConfigured(format!(
				"per_page ({}) exceeds max_per_page ({})",
				self.per_page, max
			)));
		}
		if self.page_key.trim().is_empty() {
			return Err(Error::ImproperlyConfigured(
				"page_key must not be empty".to_string(),
			));
		}
		if let Some(ref size_key) = self.page_size_key {
			if size_key.trim().is_empty() {
				return Err(Error::ImproperlyConfigured(
					"page_size_key must not be empty".to_string(),
				));
			}
			if *size_key == self.page_key {
				return Err(Error::ImproperlyConfigured(format!(
					"page_size_key and page_key are both '{}'",
					size_key
				)));
			}
		}
		Ok(())
	}

	/// Page size for a request, honouring `page_size_key` and `max_per_page`.
	///
	/// A missing, non-numeric or zero page size falls back to `per_page`.
	pub(crate) fn effective_per_page(&self, requested: Option<&str>) -> usize {
		let Some(size) = requested.and_then(|raw| raw.trim().parse::<usize>().ok()) else {
			return self.per_page;
		};
		if size == 0 {
			return self.per_page;
		}
		match self.max_per_page {
			Some(max) if size > max => {
				tracing::debug!(requested = size, max, "Capping requested page size");
				max
			}
			_ => size,
		}
	}
}
