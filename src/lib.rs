//! # Pagewise
//!
//! Page number pagination for content-management listings.
//!
//! Pagewise answers the two questions every paginated listing asks: which
//! rows does the data query fetch for the requested page, and what does the
//! page navigation under the listing look like.
//!
//! ## Core Principles
//!
//! - **Lenient requests**: any requested page, including garbage, lands on a valid page
//! - **Explicit inputs**: the requested page comes from a [`PageSource`], not global state
//! - **Pluggable output**: navigation is a plain description handed to a renderer
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `i18n` - Translation hooks for navigation labels
//! - `nav` - Navigation description plus HTML and JSON renderers
//!
//! ## Quick Example
//!
//! ```rust
//! use pagewise::prelude::*;
//!
//! let settings = PaginationSettings::new().with_per_page(15);
//! let params = QueryParams::parse("?page=99").unwrap();
//! let calculator = PageCalculator::from_settings(50, &settings, &params).unwrap();
//!
//! // Out-of-range requests are clamped onto the last page
//! assert_eq!(calculator.current_page(), 4);
//! assert_eq!(calculator.limit_clause(), "LIMIT 45, 15");
//!
//! # #[cfg(feature = "nav")]
//! # {
//! let navigation = Navigation::build(&calculator, &settings.page_key, &NullTranslator);
//! let html = HtmlRenderer::new("/articles").render(&navigation).unwrap();
//! assert!(html.contains(r#"<a href="/articles?page=3">Previous</a>"#));
//! # }
//! ```
//!
//! [`PageSource`]: pagewise_pagination::PageSource

pub mod i18n;
pub mod nav;
pub mod pagination;

pub use pagewise_exception::{Error, Result};

/// Re-exports of the types most listings need.
pub mod prelude {
	pub use crate::{Error, Result};

	pub use pagewise_pagination::{
		Limit, LimitSyntax, NoParams, PageCalculator, PageSource, PaginationSettings, QueryParams,
		RequestedPage,
	};

	#[cfg(feature = "i18n")]
	pub use pagewise_i18n::{MessageCatalog, NullTranslator, Translator};

	#[cfg(feature = "nav")]
	pub use pagewise_nav::{
		HtmlRenderer, JsonRenderer, NavItem, NavKind, Navigation, NavigationRenderer,
	};
}
