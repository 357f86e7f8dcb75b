//! Page calculation module.
//!
//! This module provides the page calculator, offset/limit pairs,
//! page sources and pagination settings.
//!
//! # Examples
//!
//! ```rust
//! use pagewise::pagination::{PageCalculator, QueryParams};
//!
//! let params = QueryParams::parse("page=3").unwrap();
//! let calculator = PageCalculator::from_source(50, 15, &params, "page").unwrap();
//! assert_eq!(calculator.limit().as_tuple(), (30, 15));
//! ```

pub use pagewise_pagination::*;
