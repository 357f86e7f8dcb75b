//! Page number calculation.

use crate::limit::Limit;
use crate::settings::PaginationSettings;
use crate::source::{PageSource, RequestedPage, coerce_page_number, resolve_requested_page};
use crate::{Error, Result};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Works out which page of a listing is shown and which rows it covers.
///
/// All derived values are computed once, in the constructor. The requested
/// page is clamped into `[1, total_pages]`, and an empty listing still has
/// one (empty) page.
///
/// # Examples
///
/// ```
/// use pagewise_pagination::PageCalculator;
///
/// let calculator = PageCalculator::new(50, 15, Some(99)).unwrap();
/// assert_eq!(calculator.total_pages(), 4);
/// assert_eq!(calculator.current_page(), 4);
/// assert_eq!(calculator.start(), 45);
/// assert_eq!(calculator.limit().as_tuple(), (45, 15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageCalculator {
	total_records: usize,
	per_page: usize,
	total_pages: usize,
	current_page: usize,
}

impl PageCalculator {
	/// Creates a calculator for an explicit page number.
	///
	/// `None` means no page was requested and selects page 1.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when `per_page` is 0.
	pub fn new(total_records: usize, per_page: usize, requested_page: Option<i64>) -> Result<Self> {
		Self::for_request(total_records, per_page, RequestedPage::from(requested_page))
	}

	/// Creates a calculator for an already resolved page request.
	///
	/// # Examples
	///
	/// ```
	/// use pagewise_pagination::{PageCalculator, RequestedPage};
	///
	/// let calculator = PageCalculator::for_request(95, 10, RequestedPage::Last).unwrap();
	/// assert_eq!(calculator.current_page(), 10);
	/// ```
	pub fn for_request(
		total_records: usize,
		per_page: usize,
		request: RequestedPage,
	) -> Result<Self> {
		if per_page == 0 {
			return Err(Error::InvalidArgument(
				"per_page must be greater than 0".to_string(),
			));
		}

		let total_pages = total_records.div_ceil(per_page).max(1);
		let current_page = clamp_page(request, total_pages);

		Ok(Self {
			total_records,
			per_page,
			total_pages,
			current_page,
		})
	}

	/// Creates a calculator, reading the requested page from `source`.
	///
	/// The value stored under `page_key` is coerced with
	/// [`coerce_page_number`]; a missing key selects page 1.
	///
	/// # Examples
	///
	/// ```
	/// use pagewise_pagination::{PageCalculator, QueryParams};
	///
	/// let params = QueryParams::parse("start=3").unwrap();
	/// let calculator = PageCalculator::from_source(50, 15, &params, "start").unwrap();
	/// assert_eq!(calculator.current_page(), 3);
	/// ```
	pub fn from_source<S>(
		total_records: usize,
		per_page: usize,
		source: &S,
		page_key: &str,
	) -> Result<Self>
	where
		S: PageSource + ?Sized,
	{
		let requested = source.get_param(page_key).map(coerce_page_number);
		Self::new(total_records, per_page, requested)
	}

	/// Creates a calculator configured by `settings`.
	///
	/// Besides the page key, this honours the per-request page size parameter
	/// (capped by `max_per_page`) and the "last page" keywords.
	///
	/// # Examples
	///
	/// ```
	/// use pagewise_pagination::{PageCalculator, PaginationSettings, QueryParams};
	///
	/// let settings = PaginationSettings::new().with_page_size_key("size");
	/// let params = QueryParams::parse("page=last&size=20").unwrap();
	/// let calculator = PageCalculator::from_settings(50, &settings, &params).unwrap();
	/// assert_eq!(calculator.per_page(), 20);
	/// assert_eq!(calculator.current_page(), 3);
	/// ```
	pub fn from_settings<S>(
		total_records: usize,
		settings: &PaginationSettings,
		source: &S,
	) -> Result<Self>
	where
		S: PageSource + ?Sized,
	{
		settings.validate()?;

		let requested_size = settings
			.page_size_key
			.as_deref()
			.and_then(|key| source.get_param(key));
		let per_page = settings.effective_per_page(requested_size);
		let request =
			resolve_requested_page(source, &settings.page_key, &settings.last_page_strings);

		Self::for_request(total_records, per_page, request)
	}

	/// Total number of records in the listing
	pub fn total_records(&self) -> usize {
		self.total_records
	}

	/// Number of records per page
	pub fn per_page(&self) -> usize {
		self.per_page
	}

	/// Total number of pages, at least 1
	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	/// Current page number (1-indexed), always within `[1, total_pages]`
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Zero-based offset of the first row on the current page.
	pub fn start(&self) -> usize {
		if self.current_page > 1 {
			(self.current_page - 1) * self.per_page
		} else {
			0
		}
	}

	/// Offset/limit pair for the data query.
	pub fn limit(&self) -> Limit {
		Limit::new(self.start(), self.per_page)
	}

	/// The data query's `LIMIT offset, count` fragment.
	pub fn limit_clause(&self) -> String {
		self.limit().to_string()
	}

	/// Whether the current page is the first one
	pub fn is_first_page(&self) -> bool {
		self.current_page == 1
	}

	/// Whether the current page is the last one
	pub fn is_last_page(&self) -> bool {
		self.current_page == self.total_pages
	}

	/// Whether there is a page after the current one
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}

	/// Whether there is a page before the current one
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Whether the listing spans more than one page
	pub fn has_other_pages(&self) -> bool {
		self.total_pages > 1
	}

	/// Number of the following page, if any
	pub fn next_page_number(&self) -> Option<usize> {
		self.has_next().then(|| self.current_page + 1)
	}

	/// Number of the preceding page, if any
	pub fn previous_page_number(&self) -> Option<usize> {
		self.has_previous().then(|| self.current_page - 1)
	}

	/// 1-based index of the first record on this page, or 0 for an empty listing.
	pub fn first_record(&self) -> usize {
		if self.total_records == 0 {
			0
		} else {
			self.start() + 1
		}
	}

	/// 1-based index of the last record on this page, or 0 for an empty listing.
	///
	/// # Examples
	///
	/// ```
	/// use pagewise_pagination::PageCalculator;
	///
	/// let middle = PageCalculator::new(50, 15, Some(2)).unwrap();
	/// assert_eq!((middle.first_record(), middle.last_record()), (16, 30));
	///
	/// let last = PageCalculator::new(50, 15, Some(4)).unwrap();
	/// assert_eq!((last.first_record(), last.last_record()), (46, 50));
	/// ```
	pub fn last_record(&self) -> usize {
		if self.is_last_page() {
			self.total_records
		} else {
			self.current_page * self.per_page
		}
	}

	/// All page numbers, `1..=total_pages`
	pub fn page_range(&self) -> RangeInclusive<usize> {
		1..=self.total_pages
	}

	/// The part of an in-memory collection shown on the current page.
	///
	/// Returns an empty slice when the collection is shorter than the offset.
	pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
		let start = self.start();
		let end = start.saturating_add(self.per_page).min(items.len());
		items.get(start..end).unwrap_or(&[])
	}

	/// Snapshot of every derived value, for JSON responses.
	pub fn summary(&self) -> PageSummary {
		PageSummary {
			current_page: self.current_page,
			total_pages: self.total_pages,
			total_records: self.total_records,
			per_page: self.per_page,
			offset: self.start(),
			first_record: self.first_record(),
			last_record: self.last_record(),
			has_next: self.has_next(),
			has_previous: self.has_previous(),
		}
	}
}

fn clamp_page(request: RequestedPage, total_pages: usize) -> usize {
	match request {
		RequestedPage::Absent => 1,
		RequestedPage::Last => total_pages,
		RequestedPage::Number(n) if n < 1 => {
			tracing::debug!(requested = n, "Page number below 1, using first page");
			1
		}
		RequestedPage::Number(n) => match usize::try_from(n) {
			Ok(page) if page <= total_pages => page,
			_ => {
				tracing::debug!(
					requested = n,
					total_pages,
					"Page number out of range, using last page"
				);
				total_pages
			}
		},
	}
}

/// Serializable view of a [`PageCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
	pub current_page: usize,
	pub total_pages: usize,
	pub total_records: usize,
	pub per_page: usize,
	pub offset: usize,
	pub first_record: usize,
	pub last_record: usize,
	pub has_next: bool,
	pub has_previous: bool,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::source::{NoParams, QueryParams};
	use rstest::rstest;

	// ========================================
	// Construction
	// ========================================

	#[rstest]
	fn test_zero_per_page_is_rejected() {
		let result = PageCalculator::new(50, 0, None);
		assert!(matches!(result, Err(Error::InvalidArgument(_))));
	}

	#[rstest]
	fn test_zero_per_page_is_rejected_from_source() {
		let result = PageCalculator::from_source(50, 0, &NoParams, "page");
		assert!(matches!(result, Err(Error::InvalidArgument(_))));
	}

	// ========================================
	// Total pages
	// ========================================

	#[rstest]
	#[case(50, 15, 4)]
	#[case(45, 15, 3)]
	#[case(46, 15, 4)]
	#[case(1, 15, 1)]
	#[case(15, 15, 1)]
	#[case(16, 15, 2)]
	#[case(100, 1, 100)]
	fn test_total_pages(#[case] total: usize, #[case] per_page: usize, #[case] expected: usize) {
		let calculator = PageCalculator::new(total, per_page, None).unwrap();
		assert_eq!(calculator.total_pages(), expected);
	}

	#[rstest]
	fn test_empty_listing_has_one_page() {
		let calculator = PageCalculator::new(0, 15, Some(3)).unwrap();
		assert_eq!(calculator.total_pages(), 1);
		assert_eq!(calculator.current_page(), 1);
		assert_eq!(calculator.start(), 0);
		assert_eq!(calculator.first_record(), 0);
		assert_eq!(calculator.last_record(), 0);
		assert!(!calculator.has_other_pages());
	}

	// ========================================
	// Current page clamping
	// ========================================

	#[rstest]
	#[case(None, 1)]
	#[case(Some(1), 1)]
	#[case(Some(3), 3)]
	#[case(Some(4), 4)]
	#[case(Some(5), 4)]
	#[case(Some(99), 4)]
	#[case(Some(0), 1)]
	#[case(Some(-5), 1)]
	#[case(Some(i64::MIN), 1)]
	#[case(Some(i64::MAX), 4)]
	fn test_current_page_clamping(#[case] requested: Option<i64>, #[case] expected: usize) {
		let calculator = PageCalculator::new(50, 15, requested).unwrap();
		assert_eq!(calculator.current_page(), expected);
	}

	#[rstest]
	fn test_last_request() {
		let calculator = PageCalculator::for_request(50, 15, RequestedPage::Last).unwrap();
		assert_eq!(calculator.current_page(), 4);
		assert!(calculator.is_last_page());
	}

	#[rstest]
	fn test_reads_are_idempotent() {
		let calculator = PageCalculator::new(50, 15, Some(2)).unwrap();
		assert_eq!(calculator.current_page(), calculator.current_page());
		assert_eq!(calculator.total_pages(), calculator.total_pages());
		assert_eq!(calculator.limit(), calculator.limit());
	}

	// ========================================
	// Offsets and limits
	// ========================================

	#[rstest]
	#[case(None, 0)]
	#[case(Some(1), 0)]
	#[case(Some(2), 15)]
	#[case(Some(3), 30)]
	#[case(Some(4), 45)]
	fn test_start(#[case] requested: Option<i64>, #[case] expected: usize) {
		let calculator = PageCalculator::new(50, 15, requested).unwrap();
		assert_eq!(calculator.start(), expected);
	}

	#[rstest]
	fn test_limit_and_clause_agree() {
		let calculator = PageCalculator::new(50, 15, Some(3)).unwrap();
		assert_eq!(calculator.limit(), Limit::new(30, 15));
		assert_eq!(calculator.limit_clause(), "LIMIT 30, 15");
	}

	// ========================================
	// Neighbours and ranges
	// ========================================

	#[rstest]
	fn test_first_page_neighbours() {
		let calculator = PageCalculator::new(50, 15, None).unwrap();
		assert!(calculator.is_first_page());
		assert!(!calculator.has_previous());
		assert!(calculator.has_next());
		assert_eq!(calculator.previous_page_number(), None);
		assert_eq!(calculator.next_page_number(), Some(2));
	}

	#[rstest]
	fn test_middle_page_neighbours() {
		let calculator = PageCalculator::new(50, 15, Some(2)).unwrap();
		assert_eq!(calculator.previous_page_number(), Some(1));
		assert_eq!(calculator.next_page_number(), Some(3));
		assert!(calculator.has_other_pages());
	}

	#[rstest]
	fn test_last_page_neighbours() {
		let calculator = PageCalculator::new(50, 15, Some(4)).unwrap();
		assert!(calculator.is_last_page());
		assert!(!calculator.has_next());
		assert_eq!(calculator.next_page_number(), None);
		assert_eq!(calculator.previous_page_number(), Some(3));
	}

	#[rstest]
	fn test_record_range_exact_multiple() {
		let calculator = PageCalculator::new(45, 15, Some(3)).unwrap();
		assert_eq!(calculator.first_record(), 31);
		assert_eq!(calculator.last_record(), 45);
	}

	#[rstest]
	fn test_page_range() {
		let calculator = PageCalculator::new(50, 15, None).unwrap();
		assert_eq!(calculator.page_range().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
	}

	#[rstest]
	fn test_page_of() {
		let items: Vec<i32> = (1..=50).collect();
		let calculator = PageCalculator::new(items.len(), 15, Some(4)).unwrap();
		assert_eq!(calculator.page_of(&items), &[46, 47, 48, 49, 50]);
	}

	#[rstest]
	fn test_page_of_short_collection() {
		let items = vec!["a", "b"];
		let calculator = PageCalculator::new(50, 15, Some(3)).unwrap();
		assert!(calculator.page_of(&items).is_empty());
	}

	// ========================================
	// Sources and settings
	// ========================================

	#[rstest]
	#[case("page=3", 3)]
	#[case("page=abc", 1)]
	#[case("page=-5", 1)]
	#[case("page=99", 4)]
	#[case("page=2.5", 2)]
	#[case("other=3", 1)]
	fn test_from_source(#[case] query: &str, #[case] expected: usize) {
		let params = QueryParams::parse(query).unwrap();
		let calculator = PageCalculator::from_source(50, 15, &params, "page").unwrap();
		assert_eq!(calculator.current_page(), expected);
	}

	#[rstest]
	fn test_from_settings_defaults() {
		let settings = PaginationSettings::default();
		let params = QueryParams::parse("page=2").unwrap();
		let calculator = PageCalculator::from_settings(50, &settings, &params).unwrap();
		assert_eq!(calculator.per_page(), 15);
		assert_eq!(calculator.current_page(), 2);
	}

	#[rstest]
	fn test_from_settings_caps_page_size() {
		let settings = PaginationSettings::new()
			.with_page_size_key("size")
			.with_max_per_page(20);
		let params = QueryParams::parse("size=1000").unwrap();
		let calculator = PageCalculator::from_settings(50, &settings, &params).unwrap();
		assert_eq!(calculator.per_page(), 20);
		assert_eq!(calculator.total_pages(), 3);
	}

	#[rstest]
	fn test_from_settings_ignores_size_without_key() {
		let settings = PaginationSettings::default();
		let params = QueryParams::parse("size=5").unwrap();
		let calculator = PageCalculator::from_settings(50, &settings, &params).unwrap();
		assert_eq!(calculator.per_page(), 15);
	}

	#[rstest]
	fn test_from_settings_rejects_invalid_settings() {
		let settings = PaginationSettings::new().with_page_key("");
		let result = PageCalculator::from_settings(50, &settings, &NoParams);
		assert!(matches!(result, Err(Error::ImproperlyConfigured(_))));
	}

	#[rstest]
	fn test_summary() {
		let calculator = PageCalculator::new(50, 15, Some(4)).unwrap();
		let summary = calculator.summary();
		assert_eq!(summary.current_page, 4);
		assert_eq!(summary.total_pages, 4);
		assert_eq!(summary.offset, 45);
		assert_eq!(summary.first_record, 46);
		assert_eq!(summary.last_record, 50);
		assert!(!summary.has_next);
		assert!(summary.has_previous);
	}
}
