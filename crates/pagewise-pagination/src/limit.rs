//! Offset/limit pairs for paged data queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Dialect used when writing a [`Limit`] as a query fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitSyntax {
	/// `LIMIT offset, count`, as understood by MySQL and SQLite.
	#[default]
	Comma,
	/// `LIMIT count OFFSET offset`, the ANSI/PostgreSQL form.
	OffsetKeyword,
}

/// Zero-based first row and maximum row count of one page.
///
/// # Examples
///
/// ```
/// use pagewise_pagination::{Limit, LimitSyntax};
///
/// let limit = Limit::new(30, 15);
/// assert_eq!(limit.to_string(), "LIMIT 30, 15");
/// assert_eq!(limit.sql(LimitSyntax::OffsetKeyword), "LIMIT 15 OFFSET 30");
/// assert_eq!(limit.as_tuple(), (30, 15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Limit {
	/// Zero-based index of the first row
	pub offset: usize,
	/// Maximum number of rows
	pub per_page: usize,
}

impl Limit {
	/// Creates a new offset/limit pair.
	pub fn new(offset: usize, per_page: usize) -> Self {
		Self { offset, per_page }
	}

	/// Returns `(offset, per_page)`.
	pub fn as_tuple(&self) -> (usize, usize) {
		(self.offset, self.per_page)
	}

	/// Row indexes covered by this limit, not clipped to any record count.
	pub fn range(&self) -> Range<usize> {
		self.offset..self.offset.saturating_add(self.per_page)
	}

	/// Writes the pair as a `LIMIT` query fragment in the given dialect.
	pub fn sql(&self, syntax: LimitSyntax) -> String {
		match syntax {
			LimitSyntax::Comma => format!("LIMIT {}, {}", self.offset, self.per_page),
			LimitSyntax::OffsetKeyword => {
				format!("LIMIT {} OFFSET {}", self.per_page, self.offset)
			}
		}
	}
}

impl fmt::Display for Limit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "LIMIT {}, {}", self.offset, self.per_page)
	}
}

impl From<Limit> for (usize, usize) {
	fn from(limit: Limit) -> Self {
		limit.as_tuple()
	}
}
