//! # Pagewise Pagination
//!
//! Page number pagination for content listings: given the number of records,
//! the page size and the page a visitor asked for, work out which page is
//! actually shown and which rows the data query has to fetch.
//!
//! ## Components
//!
//! - **PageCalculator**: total pages, clamped current page, row offset and limit
//! - **Limit**: offset/limit pair, also available as a `LIMIT` query fragment
//! - **PageSource**: where the requested page number is read from
//! - **PaginationSettings**: page key, default page size and related knobs
//!
//! ## Example
//!
//! ```
//! use pagewise_pagination::{PageCalculator, QueryParams};
//!
//! let params = QueryParams::parse("?page=3&sort=title").unwrap();
//! let calculator = PageCalculator::from_source(50, 15, &params, "page").unwrap();
//!
//! assert_eq!(calculator.total_pages(), 4);
//! assert_eq!(calculator.current_page(), 3);
//! assert_eq!(calculator.limit_clause(), "LIMIT 30, 15");
//! ```

pub mod calculator;
pub mod limit;
pub mod settings;
pub mod source;

pub use calculator::{PageCalculator, PageSummary};
pub use limit::{Limit, LimitSyntax};
pub use pagewise_exception::{Error, Result};
pub use settings::PaginationSettings;
pub use source::{
	NoParams, PageSource, QueryParams, RequestedPage, coerce_page_number, resolve_requested_page,
};
