//! Page navigation description.

use pagewise_i18n::{Translator, interpolate};
use pagewise_pagination::PageCalculator;
use serde::Serialize;

/// Message ids of the navigation labels, looked up through a [`Translator`].
pub mod labels {
	/// Label of the link to the first page
	pub const FIRST: &str = "First";
	/// Label of the link to the previous page
	pub const PREVIOUS: &str = "Previous";
	/// Label of the link to the next page
	pub const NEXT: &str = "Next";
	/// Label of the link to the last page
	pub const LAST: &str = "Last";
	/// Status label, with `%(current)s` and `%(total)s` placeholders
	pub const STATUS: &str = "Page %(current)s of %(total)s";
	/// Tooltip of the status item, with `%(start)s`, `%(end)s` and `%(total)s`
	pub const RECORD_RANGE: &str = "Showing records %(start)s to %(end)s of %(total)s";
}

/// Position of an item within the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKind {
	First,
	Previous,
	Status,
	Next,
	Last,
}

impl NavKind {
	/// Lower-case name, used for CSS classes and JSON
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::First => "first",
			Self::Previous => "previous",
			Self::Status => "status",
			Self::Next => "next",
			Self::Last => "last",
		}
	}
}

/// One entry of the navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
	/// Which entry this is
	pub kind: NavKind,
	/// Translated label
	pub label: String,
	/// Page the entry links to; `None` for inert text
	pub target_page: Option<usize>,
	/// Tooltip text
	pub title: Option<String>,
}

impl NavItem {
	fn link(kind: NavKind, label: String, target_page: usize) -> Self {
		Self {
			kind,
			label,
			target_page: Some(target_page),
			title: None,
		}
	}

	fn text(kind: NavKind, label: String) -> Self {
		Self {
			kind,
			label,
			target_page: None,
			title: None,
		}
	}

	/// Whether the entry is an active link
	pub fn is_link(&self) -> bool {
		self.target_page.is_some()
	}
}

/// The navigation shown under a paginated listing.
///
/// A listing that fits on one page has no navigation: [`Navigation::items`]
/// is empty. Otherwise the items are, in order, First, Previous, the
/// "Page X of Y" status, Next and Last. First and Previous are inert on the
/// first page; Next and Last are inert on the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
	page_key: String,
	current_page: usize,
	total_pages: usize,
	items: Vec<NavItem>,
}

impl Navigation {
	/// Builds the navigation for `calculator`'s current page.
	///
	/// Link targets are meant to be encoded under `page_key`; labels go
	/// through `translator`.
	///
	/// # Examples
	///
	/// ```
	/// use pagewise_i18n::NullTranslator;
	/// use pagewise_nav::{NavKind, Navigation};
	/// use pagewise_pagination::PageCalculator;
	///
	/// let calculator = PageCalculator::new(50, 15, None).unwrap();
	/// let navigation = Navigation::build(&calculator, "page", &NullTranslator);
	///
	/// let first = navigation.get(NavKind::First).unwrap();
	/// assert!(!first.is_link());
	/// let next = navigation.get(NavKind::Next).unwrap();
	/// assert_eq!(next.target_page, Some(2));
	///
	/// let single = PageCalculator::new(10, 15, None).unwrap();
	/// assert!(Navigation::build(&single, "page", &NullTranslator).is_empty());
	/// ```
	pub fn build<T>(calculator: &PageCalculator, page_key: &str, translator: &T) -> Self
	where
		T: Translator + ?Sized,
	{
		let current = calculator.current_page();
		let total = calculator.total_pages();

		let items = if total <= 1 {
			Vec::new()
		} else {
			let label = |id: &str| translator.gettext(id).into_owned();
			let on_first = calculator.is_first_page();
			let on_last = calculator.is_last_page();

			let first = if on_first {
				NavItem::text(NavKind::First, label(labels::FIRST))
			} else {
				NavItem::link(NavKind::First, label(labels::FIRST), 1)
			};
			let previous = match calculator.previous_page_number() {
				Some(page) => NavItem::link(NavKind::Previous, label(labels::PREVIOUS), page),
				None => NavItem::text(NavKind::Previous, label(labels::PREVIOUS)),
			};
			let next = match calculator.next_page_number() {
				Some(page) => NavItem::link(NavKind::Next, label(labels::NEXT), page),
				None => NavItem::text(NavKind::Next, label(labels::NEXT)),
			};
			let last = if on_last {
				NavItem::text(NavKind::Last, label(labels::LAST))
			} else {
				NavItem::link(NavKind::Last, label(labels::LAST), total)
			};

			let current_str = current.to_string();
			let total_str = total.to_string();
			let status_label = interpolate(
				&translator.gettext(labels::STATUS),
				&[("current", current_str.as_str()), ("total", total_str.as_str())],
			);

			let start_str = (calculator.start() + 1).to_string();
			let end_str = calculator.last_record().to_string();
			let records_str = calculator.total_records().to_string();
			let tooltip = interpolate(
				&translator.gettext(labels::RECORD_RANGE),
				&[
					("start", start_str.as_str()),
					("end", end_str.as_str()),
					("total", records_str.as_str()),
				],
			);

			let status = NavItem {
				kind: NavKind::Status,
				label: status_label,
				target_page: None,
				title: Some(tooltip),
			};

			vec![first, previous, status, next, last]
		};

		Self {
			page_key: page_key.to_string(),
			current_page: current,
			total_pages: total,
			items,
		}
	}

	/// Query parameter the link targets are encoded under
	pub fn page_key(&self) -> &str {
		&self.page_key
	}

	/// Page being shown
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Number of pages in the listing
	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	/// Navigation entries, in display order
	pub fn items(&self) -> &[NavItem] {
		&self.items
	}

	/// Whether the navigation is omitted
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Entry of the given kind, if the navigation is shown
	pub fn get(&self, kind: NavKind) -> Option<&NavItem> {
		self.items.iter().find(|item| item.kind == kind)
	}
}
